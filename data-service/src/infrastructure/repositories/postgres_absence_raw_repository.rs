use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::requests::UpsertAbsenceRawRequest;
use crate::domain::entities::AbsenceRaw;
use crate::domain::repositories::AbsenceRawRepository;

pub struct PostgresAbsenceRawRepository {
    pool: PgPool,
}

impl PostgresAbsenceRawRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AbsenceRawRepository for PostgresAbsenceRawRepository {
    async fn find_by_employee_id(&self, employee_id: Uuid) -> DomainResult<Option<AbsenceRaw>> {
        let raw = sqlx::query_as::<_, AbsenceRaw>(
            r#"
            SELECT id, employee_id, sl, fe, uw, w, created_at, updated_at
            FROM absence_raw
            WHERE employee_id = $1
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(raw)
    }

    async fn upsert(
        &self,
        employee_id: Uuid,
        request: UpsertAbsenceRawRequest,
    ) -> DomainResult<AbsenceRaw> {
        let raw = sqlx::query_as::<_, AbsenceRaw>(
            r#"
            INSERT INTO absence_raw (employee_id, sl, fe, uw, w)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (employee_id) DO UPDATE
            SET sl = EXCLUDED.sl, fe = EXCLUDED.fe, uw = EXCLUDED.uw, w = EXCLUDED.w,
                updated_at = NOW()
            RETURNING id, employee_id, sl, fe, uw, w, created_at, updated_at
            "#,
        )
        .bind(employee_id)
        .bind(&request.sl)
        .bind(&request.fe)
        .bind(&request.uw)
        .bind(&request.w)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(raw)
    }

    async fn delete(&self, employee_id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM absence_raw WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Absence record for employee {} not found",
                employee_id
            )));
        }

        Ok(())
    }
}
