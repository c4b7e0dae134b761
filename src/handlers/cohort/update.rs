// handlers/cohort/update.rs - PUT /cohort/:id handler

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::database::models::CohortInput;
use crate::error::ApiError;
use crate::services::CohortService;

/// PUT /cohort/:id - update a cohort, 204 on success, 404 if absent
pub async fn cohort_update(
    Path(id): Path<i32>,
    Json(input): Json<CohortInput>,
) -> Result<impl IntoResponse, ApiError> {
    let service = CohortService::new().await?;
    service.update(id, &input.name).await?;

    Ok(StatusCode::NO_CONTENT)
}
