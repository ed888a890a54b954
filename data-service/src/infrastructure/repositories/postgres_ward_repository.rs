use async_trait::async_trait;
use shared::{DomainError, DomainResult, PaginationParams, Qualification};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::requests::{CreateWardRequest, UpdateWardRequest};
use crate::domain::entities::{Employee, Ward, WardWithMembers};
use crate::domain::repositories::WardRepository;

#[derive(sqlx::FromRow)]
struct ResolvedMemberRow {
    ward_id: Uuid,
    ward_name: String,
    ward_parent_id: Option<Uuid>,
    ward_created_at: chrono::DateTime<chrono::Utc>,
    ward_updated_at: chrono::DateTime<chrono::Utc>,
    employee_id: Uuid,
    employee_name: String,
    employee_qualification: Qualification,
    employee_target_workdays: i32,
    employee_pensum: i16,
    employee_created_at: chrono::DateTime<chrono::Utc>,
    employee_updated_at: chrono::DateTime<chrono::Utc>,
}

pub struct PostgresWardRepository {
    pool: PgPool,
}

impl PostgresWardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WardRepository for PostgresWardRepository {
    async fn create(&self, request: CreateWardRequest) -> DomainResult<Ward> {
        let ward = sqlx::query_as::<_, Ward>(
            r#"
            INSERT INTO wards (name, parent_id)
            VALUES ($1, $2)
            RETURNING id, name, parent_id, created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(request.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(ward)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Ward>> {
        let ward = sqlx::query_as::<_, Ward>(
            r#"
            SELECT id, name, parent_id, created_at, updated_at
            FROM wards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(ward)
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Ward>> {
        let ward = sqlx::query_as::<_, Ward>(
            r#"
            SELECT id, name, parent_id, created_at, updated_at
            FROM wards
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(ward)
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Ward>, u64)> {
        let offset = (params.page - 1) * params.page_size;

        let wards = sqlx::query_as::<_, Ward>(
            r#"
            SELECT id, name, parent_id, created_at, updated_at
            FROM wards
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.page_size as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM wards")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok((wards, total.0 as u64))
    }

    async fn list_by_parent_id(&self, parent_id: Uuid) -> DomainResult<Vec<Ward>> {
        let wards = sqlx::query_as::<_, Ward>(
            r#"
            SELECT id, name, parent_id, created_at, updated_at
            FROM wards
            WHERE parent_id = $1
            ORDER BY name
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(wards)
    }

    async fn update(&self, id: Uuid, request: UpdateWardRequest) -> DomainResult<Ward> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Ward with id {} not found", id)))?;

        let ward = sqlx::query_as::<_, Ward>(
            r#"
            UPDATE wards
            SET name = $1, parent_id = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id, name, parent_id, created_at, updated_at
            "#,
        )
        .bind(request.name.unwrap_or(current.name))
        .bind(request.parent_id.or(current.parent_id))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(ward)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM wards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("Ward with id {} not found", id)));
        }

        Ok(())
    }

    async fn get_descendant_ids(&self, ward_id: Uuid) -> DomainResult<Vec<Uuid>> {
        let rows: Vec<(Uuid,)> = sqlx::query_as(
            r#"
            WITH RECURSIVE descendants AS (
                SELECT id FROM wards WHERE parent_id = $1
                UNION
                SELECT w.id FROM wards w
                INNER JOIN descendants d ON w.parent_id = d.id
            )
            SELECT id FROM descendants
            "#,
        )
        .bind(ward_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    async fn get_resolved_members(
        &self,
        ward_id: Uuid,
    ) -> DomainResult<(Vec<WardWithMembers>, u64)> {
        let rows = sqlx::query_as::<_, ResolvedMemberRow>(
            r#"
            WITH RECURSIVE descendants AS (
                SELECT id FROM wards WHERE id = $1
                UNION
                SELECT w.id FROM wards w
                INNER JOIN descendants d ON w.parent_id = d.id
            )
            SELECT
                w.id            AS ward_id,
                w.name          AS ward_name,
                w.parent_id     AS ward_parent_id,
                w.created_at    AS ward_created_at,
                w.updated_at    AS ward_updated_at,
                e.id            AS employee_id,
                e.name          AS employee_name,
                e.qualification AS employee_qualification,
                e.target_workdays AS employee_target_workdays,
                e.pensum        AS employee_pensum,
                e.created_at    AS employee_created_at,
                e.updated_at    AS employee_updated_at
            FROM descendants d
            JOIN wards w              ON w.id = d.id
            JOIN ward_memberships wm  ON wm.ward_id = w.id
            JOIN employees e         ON e.id = wm.employee_id
            ORDER BY w.name, e.name
            "#,
        )
        .bind(ward_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let unique_count = {
            let mut ids: Vec<Uuid> = rows.iter().map(|r| r.employee_id).collect();
            ids.sort();
            ids.dedup();
            ids.len() as u64
        };

        let mut result: Vec<WardWithMembers> = Vec::new();
        let mut current_ward_id: Option<Uuid> = None;

        for row in rows {
            let employee = Employee {
                id: row.employee_id,
                name: row.employee_name,
                qualification: row.employee_qualification,
                target_workdays: row.employee_target_workdays,
                pensum: row.employee_pensum,
                created_at: row.employee_created_at,
                updated_at: row.employee_updated_at,
            };

            if current_ward_id == Some(row.ward_id) {
                result.last_mut().unwrap().members.push(employee);
            } else {
                current_ward_id = Some(row.ward_id);
                let ward = Ward {
                    id: row.ward_id,
                    name: row.ward_name,
                    parent_id: row.ward_parent_id,
                    created_at: row.ward_created_at,
                    updated_at: row.ward_updated_at,
                };
                result.push(WardWithMembers {
                    ward,
                    members: vec![employee],
                });
            }
        }

        Ok((result, unique_count))
    }
}
