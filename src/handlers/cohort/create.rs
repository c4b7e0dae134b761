// handlers/cohort/create.rs - POST /cohort handler

use axum::{http::header, http::StatusCode, response::IntoResponse, Json};

use crate::database::models::CohortInput;
use crate::error::ApiError;
use crate::services::CohortService;

/// POST /cohort - create a cohort, 201 with Location pointing at the new row
pub async fn cohort_create(
    Json(input): Json<CohortInput>,
) -> Result<impl IntoResponse, ApiError> {
    let service = CohortService::new().await?;
    let cohort = service.create(&input.name).await?;

    let location = format!("/cohort/{}", cohort.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(cohort),
    ))
}
