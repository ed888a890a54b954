use async_trait::async_trait;
use chrono::Utc;
use data_service::api::requests::{
    CreateEmployeeRequest, CreateWardRequest, UpdateEmployeeRequest, UpdateWardRequest,
    UpsertAbsenceRawRequest,
};
use data_service::api::AppState;
use data_service::domain::entities::{AbsenceRaw, Employee, Ward, WardMembership, WardWithMembers};
use data_service::domain::repositories::{
    AbsenceRawRepository, EmployeeRepository, WardMembershipRepository, WardRepository,
};
use data_service::infrastructure::redis::RedisPool;
use shared::{DomainError, DomainResult, PaginationParams, Qualification};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Manual mock implementation for `EmployeeRepository`.
#[derive(Default)]
pub struct MockEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
    ward_members: RwLock<HashMap<Uuid, Vec<Uuid>>>,
}

impl MockEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employee_list: Vec<Employee>) -> Self {
        Self {
            employees: RwLock::new(employee_list),
            ward_members: RwLock::new(HashMap::new()),
        }
    }

    /// Records that `employee_id` is a direct member of `ward_id`, for
    /// `find_by_ward_id` to pick up.
    pub fn assign_to_ward(&self, employee_id: Uuid, ward_id: Uuid) {
        self.ward_members
            .write()
            .unwrap()
            .entry(ward_id)
            .or_default()
            .push(employee_id);
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn create(&self, request: CreateEmployeeRequest) -> DomainResult<Employee> {
        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4(),
            name: request.name,
            qualification: request.qualification,
            target_workdays: request.target_workdays,
            pensum: request.pensum,
            created_at: now,
            updated_at: now,
        };
        self.employees.write().unwrap().push(employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>> {
        Ok(self
            .employees
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> DomainResult<Vec<Employee>> {
        Ok(self
            .employees
            .read()
            .unwrap()
            .iter()
            .filter(|e| ids.contains(&e.id))
            .cloned()
            .collect())
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Employee>, u64)> {
        let employees = self.employees.read().unwrap();
        let total = employees.len() as u64;
        let start = ((params.page.max(1) - 1) * params.page_size) as usize;
        let page = employees
            .iter()
            .skip(start)
            .take(params.page_size as usize)
            .cloned()
            .collect();
        Ok((page, total))
    }

    async fn list_by_qualification(
        &self,
        qualification: Qualification,
        params: PaginationParams,
    ) -> DomainResult<(Vec<Employee>, u64)> {
        let filtered: Vec<Employee> = self
            .employees
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.qualification == qualification)
            .cloned()
            .collect();
        let total = filtered.len() as u64;
        let start = ((params.page.max(1) - 1) * params.page_size) as usize;
        let page = filtered
            .into_iter()
            .skip(start)
            .take(params.page_size as usize)
            .collect();
        Ok((page, total))
    }

    async fn update(&self, id: Uuid, request: UpdateEmployeeRequest) -> DomainResult<Employee> {
        let mut employees = self.employees.write().unwrap();
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("employee {id} not found")))?;

        if let Some(name) = request.name {
            employee.name = name;
        }
        if let Some(qualification) = request.qualification {
            employee.qualification = qualification;
        }
        if let Some(target_workdays) = request.target_workdays {
            employee.target_workdays = target_workdays;
        }
        if let Some(pensum) = request.pensum {
            employee.pensum = pensum;
        }
        employee.updated_at = Utc::now();

        Ok(employee.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut employees = self.employees.write().unwrap();
        let len_before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == len_before {
            return Err(DomainError::NotFound(format!("employee {id} not found")));
        }
        Ok(())
    }

    async fn find_by_ward_id(&self, ward_id: Uuid) -> DomainResult<Vec<Employee>> {
        let member_ids = self
            .ward_members
            .read()
            .unwrap()
            .get(&ward_id)
            .cloned()
            .unwrap_or_default();
        Ok(self
            .employees
            .read()
            .unwrap()
            .iter()
            .filter(|e| member_ids.contains(&e.id))
            .cloned()
            .collect())
    }
}

/// Manual mock implementation for `WardRepository`. `resolved_members`
/// stubs the response of `get_resolved_members` directly per ward id,
/// since composing it from a membership graph isn't needed to exercise
/// the handler layer.
#[derive(Default)]
pub struct MockWardRepository {
    wards: RwLock<Vec<Ward>>,
    resolved_members: RwLock<HashMap<Uuid, (Vec<WardWithMembers>, u64)>>,
}

impl MockWardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wards(ward_list: Vec<Ward>) -> Self {
        Self {
            wards: RwLock::new(ward_list),
            resolved_members: RwLock::new(HashMap::new()),
        }
    }

    pub fn stub_resolved_members(&self, ward_id: Uuid, members: Vec<WardWithMembers>, total: u64) {
        self.resolved_members
            .write()
            .unwrap()
            .insert(ward_id, (members, total));
    }
}

#[async_trait]
impl WardRepository for MockWardRepository {
    async fn create(&self, request: CreateWardRequest) -> DomainResult<Ward> {
        let now = Utc::now();
        let ward = Ward {
            id: Uuid::new_v4(),
            name: request.name,
            parent_id: request.parent_id,
            created_at: now,
            updated_at: now,
        };
        self.wards.write().unwrap().push(ward.clone());
        Ok(ward)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Ward>> {
        Ok(self.wards.read().unwrap().iter().find(|w| w.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Ward>> {
        Ok(self
            .wards
            .read()
            .unwrap()
            .iter()
            .find(|w| w.name == name)
            .cloned())
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Ward>, u64)> {
        let wards = self.wards.read().unwrap();
        let total = wards.len() as u64;
        let start = ((params.page.max(1) - 1) * params.page_size) as usize;
        let page = wards
            .iter()
            .skip(start)
            .take(params.page_size as usize)
            .cloned()
            .collect();
        Ok((page, total))
    }

    async fn list_by_parent_id(&self, parent_id: Uuid) -> DomainResult<Vec<Ward>> {
        Ok(self
            .wards
            .read()
            .unwrap()
            .iter()
            .filter(|w| w.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, request: UpdateWardRequest) -> DomainResult<Ward> {
        let mut wards = self.wards.write().unwrap();
        let ward = wards
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("ward {id} not found")))?;

        if let Some(name) = request.name {
            ward.name = name;
        }
        if request.parent_id.is_some() {
            ward.parent_id = request.parent_id;
        }
        ward.updated_at = Utc::now();

        Ok(ward.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut wards = self.wards.write().unwrap();
        let len_before = wards.len();
        wards.retain(|w| w.id != id);
        if wards.len() == len_before {
            return Err(DomainError::NotFound(format!("ward {id} not found")));
        }
        Ok(())
    }

    async fn get_descendant_ids(&self, ward_id: Uuid) -> DomainResult<Vec<Uuid>> {
        let wards = self.wards.read().unwrap();
        let mut frontier = vec![ward_id];
        let mut descendants = Vec::new();
        while let Some(current) = frontier.pop() {
            for child in wards.iter().filter(|w| w.parent_id == Some(current)) {
                descendants.push(child.id);
                frontier.push(child.id);
            }
        }
        Ok(descendants)
    }

    async fn get_resolved_members(
        &self,
        ward_id: Uuid,
    ) -> DomainResult<(Vec<WardWithMembers>, u64)> {
        Ok(self
            .resolved_members
            .read()
            .unwrap()
            .get(&ward_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Manual mock implementation for `WardMembershipRepository`.
#[derive(Default)]
pub struct MockMembershipRepository {
    memberships: RwLock<HashMap<(Uuid, Uuid), WardMembership>>,
}

impl MockMembershipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WardMembershipRepository for MockMembershipRepository {
    async fn add_member(&self, employee_id: Uuid, ward_id: Uuid) -> DomainResult<WardMembership> {
        let membership = WardMembership {
            id: Uuid::new_v4(),
            employee_id,
            ward_id,
            created_at: Utc::now(),
        };
        self.memberships
            .write()
            .unwrap()
            .insert((employee_id, ward_id), membership.clone());
        Ok(membership)
    }

    async fn remove_member(&self, employee_id: Uuid, ward_id: Uuid) -> DomainResult<()> {
        let mut memberships = self.memberships.write().unwrap();
        memberships
            .remove(&(employee_id, ward_id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("membership not found".to_string()))
    }
}

/// Manual mock implementation for `AbsenceRawRepository`.
#[derive(Default)]
pub struct MockAbsenceRepository {
    absences: RwLock<HashMap<Uuid, AbsenceRaw>>,
}

impl MockAbsenceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AbsenceRawRepository for MockAbsenceRepository {
    async fn find_by_employee_id(&self, employee_id: Uuid) -> DomainResult<Option<AbsenceRaw>> {
        Ok(self.absences.read().unwrap().get(&employee_id).cloned())
    }

    async fn upsert(
        &self,
        employee_id: Uuid,
        request: UpsertAbsenceRawRequest,
    ) -> DomainResult<AbsenceRaw> {
        let mut absences = self.absences.write().unwrap();
        let now = Utc::now();
        let entry = absences.entry(employee_id).or_insert_with(|| AbsenceRaw {
            id: Uuid::new_v4(),
            employee_id,
            sl: String::new(),
            fe: String::new(),
            uw: String::new(),
            w: String::new(),
            created_at: now,
            updated_at: now,
        });
        entry.sl = request.sl;
        entry.fe = request.fe;
        entry.uw = request.uw;
        entry.w = request.w;
        entry.updated_at = now;
        Ok(entry.clone())
    }

    async fn delete(&self, employee_id: Uuid) -> DomainResult<()> {
        self.absences.write().unwrap().remove(&employee_id);
        Ok(())
    }
}

/// Mock Redis pool for testing (no-op implementation)
pub async fn create_mock_redis_pool() -> RedisPool {
    let client = redis::Client::open("redis://localhost:6379").unwrap();
    redis::aio::ConnectionManager::new(client).await.unwrap()
}

/// Create test app state with mock repositories
pub fn create_test_app_state(
    employee_repo: Arc<dyn EmployeeRepository>,
    ward_repo: Arc<dyn WardRepository>,
    membership_repo: Arc<dyn WardMembershipRepository>,
    absence_repo: Arc<dyn AbsenceRawRepository>,
    redis_pool: RedisPool,
) -> AppState {
    AppState::new(employee_repo, ward_repo, membership_repo, absence_repo, redis_pool)
}

pub fn create_sample_employee(id: Uuid, name: &str, qualification: Qualification) -> Employee {
    let now = Utc::now();
    Employee {
        id,
        name: name.to_string(),
        qualification,
        target_workdays: 20,
        pensum: 100,
        created_at: now,
        updated_at: now,
    }
}

pub fn create_sample_ward(id: Uuid, name: &str, parent_id: Option<Uuid>) -> Ward {
    let now = Utc::now();
    Ward {
        id,
        name: name.to_string(),
        parent_id,
        created_at: now,
        updated_at: now,
    }
}
