//! Machine endpoint handlers (admin).

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::MachineInput;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ApiJson, IdPath};
use domain::models::machine::CreateMachineRequest;
use domain::models::{Machine, MessageResponse};

/// Register a machine.
///
/// POST /api/admin/machines
pub async fn create_machine(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateMachineRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    request.validate()?;

    let input = MachineInput {
        name: request.name.trim().to_string(),
        status: request.status.unwrap_or_default(),
        location: request.location,
        assigned_plan: request.assigned_plan,
    };

    let machine = state.store.insert_machine(input).await?;

    info!(machine_id = %machine.id, name = %machine.name, status = %machine.status, "Machine created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created(
            "Machine added successfully",
            machine.id,
        )),
    ))
}

/// GET /api/admin/machines
pub async fn list_machines(State(state): State<AppState>) -> Result<Json<Vec<Machine>>, ApiError> {
    Ok(Json(state.store.list_machines().await?))
}

/// GET /api/admin/machines/:id
pub async fn get_machine(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Machine>, ApiError> {
    state
        .store
        .find_machine(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Machine not found".to_string()))
}
