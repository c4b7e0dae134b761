// handlers/instructor/show.rs - GET /instructor/:id handler

use axum::{extract::Path, response::IntoResponse, Json};

use crate::error::ApiError;
use crate::services::InstructorService;

/// GET /instructor/:id - show one instructor with embedded cohort, 404 if absent
pub async fn instructor_show(Path(id): Path<i32>) -> Result<impl IntoResponse, ApiError> {
    let service = InstructorService::new().await?;
    let instructor = service.get(id).await?;

    Ok(Json(instructor))
}
