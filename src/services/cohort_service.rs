use sqlx::PgPool;

use crate::database::models::Cohort;
use crate::database::DatabaseManager;

use super::ServiceError;

/// Data access for the cohort resource. One parameterized statement per
/// operation; connections come and go through the shared pool.
pub struct CohortService {
    pool: PgPool,
}

impl CohortService {
    pub async fn new() -> Result<Self, ServiceError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// Construct against a specific pool (tests)
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All cohorts, storage order
    pub async fn list(&self) -> Result<Vec<Cohort>, ServiceError> {
        let cohorts = sqlx::query_as::<_, Cohort>("SELECT id, name FROM cohort")
            .fetch_all(&self.pool)
            .await?;

        Ok(cohorts)
    }

    pub async fn get(&self, id: i32) -> Result<Cohort, ServiceError> {
        let cohort = sqlx::query_as::<_, Cohort>("SELECT id, name FROM cohort WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        cohort.ok_or(ServiceError::NotFound {
            entity: "cohort",
            id,
        })
    }

    pub async fn create(&self, name: &str) -> Result<Cohort, ServiceError> {
        let cohort =
            sqlx::query_as::<_, Cohort>("INSERT INTO cohort (name) VALUES ($1) RETURNING id, name")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(cohort)
    }

    pub async fn update(&self, id: i32, name: &str) -> Result<(), ServiceError> {
        let result = sqlx::query("UPDATE cohort SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(self.zero_rows_outcome(id).await?);
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM cohort WHERE id = $1")
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
                entity: "cohort",
                id,
            })
        } else {
            Ok(ServiceError::NotFound {
                entity: "cohort",
                id,
            })
        }
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cohort WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0 > 0)
    }
}
