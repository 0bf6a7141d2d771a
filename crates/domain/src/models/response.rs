//! Acknowledgement payloads shared by the write endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Plain acknowledgement, optionally carrying the id of a created record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn created(message: impl Into<String>, id: Uuid) -> Self {
        Self {
            message: message.into(),
            id: Some(id),
        }
    }
}
