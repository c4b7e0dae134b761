// handlers/instructor/create.rs - POST /instructor handler

use axum::{http::header, http::StatusCode, response::IntoResponse, Json};

use crate::database::models::InstructorInput;
use crate::error::ApiError;
use crate::services::InstructorService;

/// POST /instructor - create an instructor, 201 with Location header
pub async fn instructor_create(
    Json(input): Json<InstructorInput>,
) -> Result<impl IntoResponse, ApiError> {
    let service = InstructorService::new().await?;
    let instructor = service.create(&input).await?;

    let location = format!("/instructor/{}", instructor.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(instructor),
    ))
}
