// handlers/instructor/update.rs - PUT /instructor/:id handler

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::database::models::InstructorInput;
use crate::error::ApiError;
use crate::services::InstructorService;

/// PUT /instructor/:id - update an instructor, 204 on success, 404 if absent
pub async fn instructor_update(
    Path(id): Path<i32>,
    Json(input): Json<InstructorInput>,
) -> Result<impl IntoResponse, ApiError> {
    let service = InstructorService::new().await?;
    service.update(id, &input).await?;

    Ok(StatusCode::NO_CONTENT)
}
