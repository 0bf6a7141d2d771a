//! Worker endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::WorkerInput;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ApiJson, IdPath};
use domain::models::worker::{CreateWorkerRequest, ScanMachineRequest};
use domain::models::{MessageResponse, Worker};

/// Register a worker.
///
/// POST /api/admin/workers
pub async fn create_worker(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateWorkerRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    request.validate()?;

    let input = WorkerInput {
        name: request.name.trim().to_string(),
        phone: request.phone,
        email: request.email,
        status: request.status.unwrap_or_default(),
        location: request.location,
    };

    let worker = state.store.insert_worker(input).await?;

    info!(worker_id = %worker.id, name = %worker.name, "Worker created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Worker added successfully", worker.id)),
    ))
}

/// GET /api/admin/workers
pub async fn list_workers(State(state): State<AppState>) -> Result<Json<Vec<Worker>>, ApiError> {
    Ok(Json(state.store.list_workers().await?))
}

/// GET /api/admin/workers/:id
pub async fn get_worker(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Worker>, ApiError> {
    state
        .store
        .find_worker(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Worker not found".to_string()))
}

/// Assign a machine to the worker who scanned it.
///
/// POST /api/worker/scan-machine
///
/// Returns 404 if either the worker or the machine does not exist.
/// The machine's own status is left as it was.
pub async fn scan_machine(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ScanMachineRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .store
        .find_worker(request.worker_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Worker not found".to_string()))?;

    state
        .store
        .find_machine(request.machine_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Machine not found".to_string()))?;

    state
        .store
        .assign_worker_machine(request.worker_id, request.machine_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Worker not found".to_string()))?;

    info!(
        worker_id = %request.worker_id,
        machine_id = %request.machine_id,
        "Machine assigned to worker"
    );

    Ok(Json(MessageResponse::new("Machine assigned to worker")))
}
