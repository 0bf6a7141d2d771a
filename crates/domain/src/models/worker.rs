//! Worker domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use super::location::GeoPoint;

/// Duty state of a field worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerStatus {
    #[default]
    Available,
    #[serde(rename = "On Duty")]
    OnDuty,
}

impl WorkerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerStatus::Available => "Available",
            WorkerStatus::OnDuty => "On Duty",
        }
    }

    pub fn can_transition_to(&self, target: WorkerStatus) -> bool {
        *self != target
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(WorkerStatus::Available),
            "On Duty" => Ok(WorkerStatus::OnDuty),
            _ => Err(format!(
                "Invalid worker status: {}. Must be one of: Available, On Duty",
                s
            )),
        }
    }
}

/// A person who carries a machine around its route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Machine last scanned by this worker. Weak reference, not kept in sync
    /// with the machine's own status.
    pub assigned_machine: Option<Uuid>,
    pub status: WorkerStatus,
    pub location: Option<GeoPoint>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for registering a worker.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerRequest {
    #[validate(
        length(min = 1, max = 100, message = "name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 50, message = "phone must be at most 50 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub status: Option<WorkerStatus>,

    #[validate(nested)]
    pub location: Option<GeoPoint>,
}

/// Request payload for a worker scanning a machine's code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanMachineRequest {
    pub worker_id: Uuid,
    pub machine_id: Uuid,
}
