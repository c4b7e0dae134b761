// handlers/instructor/list.rs - GET /instructor handler

use axum::{extract::Query, response::IntoResponse, Json};
use serde::Deserialize;

use crate::error::ApiError;
use crate::filter::{InstructorFilter, OrderBy};
use crate::services::InstructorService;

#[derive(Debug, Deserialize)]
pub struct InstructorListQuery {
    /// Restrict to instructors of this cohort
    pub cohort: Option<i32>,
    /// Substring match over last name, first name and slack handle
    pub q: Option<String>,
    /// Allow-listed sort key with optional direction, e.g. "lastName desc"
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
}

/// GET /instructor - list instructors joined with their cohort. The three
/// refinements are independent and compose with AND.
pub async fn instructor_list(
    Query(query): Query<InstructorListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let order = match query.order_by.as_deref() {
        Some(raw) => Some(
            raw.parse::<OrderBy>()
                .map_err(|e| ApiError::bad_request(e.to_string()))?,
        ),
        None => None,
    };

    let filter = InstructorFilter::new(query.cohort, query.q, order);

    let service = InstructorService::new().await?;
    let instructors = service.list(&filter).await?;

    Ok(Json(instructors))
}
