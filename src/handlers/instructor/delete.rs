// handlers/instructor/delete.rs - DELETE /instructor/:id handler

use axum::{extract::Path, http::StatusCode, response::IntoResponse};

use crate::error::ApiError;
use crate::services::InstructorService;

/// DELETE /instructor/:id - delete an instructor, 204 on success, 404 if absent
pub async fn instructor_delete(Path(id): Path<i32>) -> Result<impl IntoResponse, ApiError> {
    let service = InstructorService::new().await?;
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
