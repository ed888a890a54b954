use async_trait::async_trait;
use shared::{DomainError, DomainResult, PaginationParams, Qualification};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::requests::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::domain::entities::Employee;
use crate::domain::repositories::EmployeeRepository;

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, request: CreateEmployeeRequest) -> DomainResult<Employee> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, qualification, target_workdays, pensum)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, qualification, target_workdays, pensum, created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(request.qualification)
        .bind(request.target_workdays)
        .bind(request.pensum)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(employee)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, qualification, target_workdays, pensum, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(employee)
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> DomainResult<Vec<Employee>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, qualification, target_workdays, pensum, created_at, updated_at
            FROM employees
            WHERE id = ANY($1)
            ORDER BY name
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(employees)
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Employee>, u64)> {
        let offset = (params.page - 1) * params.page_size;

        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, qualification, target_workdays, pensum, created_at, updated_at
            FROM employees
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.page_size as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok((employees, total.0 as u64))
    }

    async fn list_by_qualification(
        &self,
        qualification: Qualification,
        params: PaginationParams,
    ) -> DomainResult<(Vec<Employee>, u64)> {
        let offset = (params.page - 1) * params.page_size;

        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, qualification, target_workdays, pensum, created_at, updated_at
            FROM employees
            WHERE qualification = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(qualification)
        .bind(params.page_size as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let total: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM employees WHERE qualification = $1")
                .bind(qualification)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok((employees, total.0 as u64))
    }

    async fn update(&self, id: Uuid, request: UpdateEmployeeRequest) -> DomainResult<Employee> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Employee with id {} not found", id)))?;

        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = $1, qualification = $2, target_workdays = $3, pensum = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING id, name, qualification, target_workdays, pensum, created_at, updated_at
            "#,
        )
        .bind(request.name.unwrap_or(current.name))
        .bind(request.qualification.unwrap_or(current.qualification))
        .bind(request.target_workdays.unwrap_or(current.target_workdays))
        .bind(request.pensum.unwrap_or(current.pensum))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(employee)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Employee with id {} not found",
                id
            )));
        }

        Ok(())
    }

    async fn find_by_ward_id(&self, ward_id: Uuid) -> DomainResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT e.id, e.name, e.qualification, e.target_workdays, e.pensum, e.created_at, e.updated_at
            FROM employees e
            INNER JOIN ward_memberships wm ON e.id = wm.employee_id
            WHERE wm.ward_id = $1
            ORDER BY e.name
            "#,
        )
        .bind(ward_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(employees)
    }
}
