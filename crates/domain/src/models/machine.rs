//! Machine domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use super::location::GeoPoint;

/// Availability of a physical advertising unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineStatus {
    #[default]
    Available,
    #[serde(rename = "In Use")]
    InUse,
}

impl MachineStatus {
    /// Returns the string representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineStatus::Available => "Available",
            MachineStatus::InUse => "In Use",
        }
    }

    /// Machines toggle between the two states.
    pub fn can_transition_to(&self, target: MachineStatus) -> bool {
        *self != target
    }
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MachineStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(MachineStatus::Available),
            "In Use" => Ok(MachineStatus::InUse),
            _ => Err(format!(
                "Invalid machine status: {}. Must be one of: Available, In Use",
                s
            )),
        }
    }
}

/// A physical advertising unit carried by a worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: Uuid,
    pub name: String,
    pub status: MachineStatus,
    pub location: Option<GeoPoint>,
    /// Plan label such as `1-week` or `1-month`.
    pub assigned_plan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for registering a machine.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMachineRequest {
    #[validate(
        length(min = 1, max = 100, message = "name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    pub status: Option<MachineStatus>,

    #[validate(nested)]
    pub location: Option<GeoPoint>,

    #[validate(length(max = 50, message = "assignedPlan must be at most 50 characters"))]
    pub assigned_plan: Option<String>,
}
