// handlers/cohort/show.rs - GET /cohort/:id handler

use axum::{extract::Path, response::IntoResponse, Json};

use crate::error::ApiError;
use crate::services::CohortService;

/// GET /cohort/:id - show a single cohort, 404 if absent
pub async fn cohort_show(Path(id): Path<i32>) -> Result<impl IntoResponse, ApiError> {
    let service = CohortService::new().await?;
    let cohort = service.get(id).await?;

    Ok(Json(cohort))
}
