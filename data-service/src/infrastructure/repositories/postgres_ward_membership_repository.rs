use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::WardMembership;
use crate::domain::repositories::WardMembershipRepository;

pub struct PostgresWardMembershipRepository {
    pool: PgPool,
}

impl PostgresWardMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WardMembershipRepository for PostgresWardMembershipRepository {
    async fn add_member(&self, employee_id: Uuid, ward_id: Uuid) -> DomainResult<WardMembership> {
        let membership = sqlx::query_as::<_, WardMembership>(
            r#"
            INSERT INTO ward_memberships (employee_id, ward_id)
            VALUES ($1, $2)
            ON CONFLICT (employee_id, ward_id) DO NOTHING
            RETURNING id, employee_id, ward_id, created_at
            "#,
        )
        .bind(employee_id)
        .bind(ward_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(membership)
    }

    async fn remove_member(&self, employee_id: Uuid, ward_id: Uuid) -> DomainResult<()> {
        let result = sqlx::query(
            "DELETE FROM ward_memberships WHERE employee_id = $1 AND ward_id = $2",
        )
        .bind(employee_id)
        .bind(ward_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Membership not found".to_string()));
        }

        Ok(())
    }
}
