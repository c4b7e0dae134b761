use sqlx::{FromRow, PgPool};

use crate::database::models::{Cohort, Instructor, InstructorInput};
use crate::database::DatabaseManager;
use crate::filter::InstructorFilter;

use super::ServiceError;

/// Base SELECT for joined reads; the filter appends WHERE/ORDER BY to it
const SELECT_JOINED: &str = "SELECT i.id, i.first_name, i.last_name, i.slack_handle, \
     i.specialty, i.cohort_id, c.name AS cohort_name \
     FROM instructor i \
     JOIN cohort c ON c.id = i.cohort_id";

/// Flat row shape of the instructor-cohort join
#[derive(Debug, FromRow)]
struct InstructorRow {
    id: i32,
    first_name: String,
    last_name: String,
    slack_handle: String,
    specialty: String,
    cohort_id: i32,
    cohort_name: String,
}

impl InstructorRow {
    fn into_instructor(self) -> Instructor {
        Instructor {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            slack_handle: self.slack_handle,
            specialty: self.specialty,
            cohort_id: self.cohort_id,
            cohort: Some(Cohort {
                id: self.cohort_id,
                name: self.cohort_name,
            }),
        }
    }
}

/// Data access for the instructor resource. Reads join against cohort so the
/// response can embed the referenced cohort.
pub struct InstructorService {
    pool: PgPool,
}

impl InstructorService {
    pub async fn new() -> Result<Self, ServiceError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// Construct against a specific pool (tests)
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All instructors matching the filter, joined with their cohort
    pub async fn list(&self, filter: &InstructorFilter) -> Result<Vec<Instructor>, ServiceError> {
        let sql = filter.to_sql(SELECT_JOINED);

        let mut query = sqlx::query_as::<_, InstructorRow>(&sql);
        if let Some(cohort_id) = filter.cohort_id {
            query = query.bind(cohort_id);
        }
        if let Some(pattern) = filter.search_pattern() {
            query = query.bind(pattern);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(InstructorRow::into_instructor).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Instructor, ServiceError> {
        let sql = format!("{} WHERE i.id = $1", SELECT_JOINED);

        let row = sqlx::query_as::<_, InstructorRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(InstructorRow::into_instructor)
            .ok_or(ServiceError::NotFound {
                entity: "instructor",
                id,
            })
    }

    pub async fn create(&self, input: &InstructorInput) -> Result<Instructor, ServiceError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO instructor (first_name, last_name, slack_handle, specialty, cohort_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.slack_handle)
        .bind(&input.specialty)
        .bind(input.cohort_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Instructor {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            slack_handle: input.slack_handle.clone(),
            specialty: input.specialty.clone(),
            cohort_id: input.cohort_id,
            cohort: None,
        })
    }

    pub async fn update(&self, id: i32, input: &InstructorInput) -> Result<(), ServiceError> {
        let result = sqlx::query(
            "UPDATE instructor \
             SET first_name = $1, last_name = $2, slack_handle = $3, specialty = $4, cohort_id = $5 \
             WHERE id = $6",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.slack_handle)
        .bind(&input.specialty)
        .bind(input.cohort_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(self.zero_rows_outcome(id).await?);
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM instructor WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(self.zero_rows_outcome(id).await?);
        }

        Ok(())
    }

    /// Explain a mutation that matched nothing: absent id means not-found,
    /// a still-present id means the write itself failed.
    async fn zero_rows_outcome(&self, id: i32) -> Result<ServiceError, ServiceError> {
        if self.exists(id).await? {
            Ok(ServiceError::WriteConflict {
                entity: "instructor",
                id,
            })
        } else {
            Ok(ServiceError::NotFound {
                entity: "instructor",
                id,
            })
        }
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM instructor WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0 > 0)
    }
}
