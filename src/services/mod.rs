pub mod cohort_service;
pub mod instructor_service;

pub use cohort_service::CohortService;
pub use instructor_service::InstructorService;

use thiserror::Error;

use crate::database::DatabaseError;

/// Errors from the resource services. `NotFound` and `WriteConflict` are the
/// two outcomes of a mutation that matched zero rows: the id is absent, or
/// the id exists and the statement still wrote nothing (a defect signal that
/// must not be masked as not-found).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("{entity} {id} exists but the write affected no rows")]
    WriteConflict { entity: &'static str, id: i32 },

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
