// handlers/cohort/list.rs - GET /cohort handler

use axum::{response::IntoResponse, Json};

use crate::error::ApiError;
use crate::services::CohortService;

/// GET /cohort - list all cohorts
pub async fn cohort_list() -> Result<impl IntoResponse, ApiError> {
    let service = CohortService::new().await?;
    let cohorts = service.list().await?;

    Ok(Json(cohorts))
}
