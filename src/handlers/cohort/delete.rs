// handlers/cohort/delete.rs - DELETE /cohort/:id handler

use axum::{extract::Path, http::StatusCode, response::IntoResponse};

use crate::error::ApiError;
use crate::services::CohortService;

/// DELETE /cohort/:id - delete a cohort, 204 on success, 404 if absent
pub async fn cohort_delete(Path(id): Path<i32>) -> Result<impl IntoResponse, ApiError> {
    let service = CohortService::new().await?;
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
