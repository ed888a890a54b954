use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{ApiResponse, DomainError, DomainResult, Qualification, ShiftCode};
use uuid::Uuid;

use crate::domain::repositories::{AbsenceRepo, EmployeeInfo, HolidayProvider, RawAbsences, ShiftCatalog};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EmployeeResponse {
    id: Uuid,
    name: String,
    qualification: Qualification,
    target_workdays: i32,
    pensum: i16,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

impl From<EmployeeResponse> for EmployeeInfo {
    fn from(r: EmployeeResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            qualification: r.qualification,
            target_workdays: r.target_workdays,
            pensum: r.pensum,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ResolvedWardResponse {
    #[allow(dead_code)]
    ward_id: Uuid,
    #[allow(dead_code)]
    ward_name: String,
    members: Vec<EmployeeResponse>,
}

#[derive(Debug, Clone, Deserialize)]
struct AbsenceRawResponse {
    #[allow(dead_code)]
    employee_id: Uuid,
    sl: String,
    fe: String,
    uw: String,
    w: String,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
struct ShiftCatalogEntryResponse {
    code: ShiftCode,
    #[allow(dead_code)]
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct HolidayCheckResponse {
    #[allow(dead_code)]
    date: String,
    is_holiday: bool,
}

/// Single HTTP client for every collaborator interface the scheduling
/// service needs from the data service — one `reqwest::Client`, one
/// base URL, cloned cheaply per request the way `DataServiceClient`
/// always has.
#[derive(Clone)]
pub struct DataServiceClient {
    base_url: String,
    client: reqwest::Client,
}

impl DataServiceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> DomainResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalServiceError(format!(
                "data service returned {status}: {body}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))
    }
}

#[async_trait]
impl crate::domain::repositories::EmployeeRepo for DataServiceClient {
    async fn list(&self, ward_id: Uuid) -> DomainResult<Vec<EmployeeInfo>> {
        let path = format!("/api/v1/wards/{ward_id}/resolved-members");
        let envelope: ApiResponse<Vec<ResolvedWardResponse>> = self.get_json(&path).await?;

        Ok(envelope
            .data
            .into_iter()
            .flat_map(|ward| ward.members)
            .map(EmployeeInfo::from)
            .collect())
    }
}

#[async_trait]
impl AbsenceRepo for DataServiceClient {
    async fn raw_strings(&self, employee_id: Uuid) -> DomainResult<RawAbsences> {
        let path = format!("/api/v1/employees/{employee_id}/absences");
        let envelope: ApiResponse<AbsenceRawResponse> = self.get_json(&path).await?;
        let raw = envelope.data;

        Ok(RawAbsences {
            sl: raw.sl,
            fe: raw.fe,
            uw: raw.uw,
            w: raw.w,
        })
    }
}

#[async_trait]
impl ShiftCatalog for DataServiceClient {
    async fn codes(&self) -> DomainResult<Vec<ShiftCode>> {
        let envelope: ApiResponse<Vec<ShiftCatalogEntryResponse>> =
            self.get_json("/api/v1/shift-catalog").await?;

        Ok(envelope.data.into_iter().map(|e| e.code).collect())
    }
}

#[async_trait]
impl HolidayProvider for DataServiceClient {
    async fn is_holiday(&self, date: NaiveDate) -> DomainResult<bool> {
        let path = format!("/api/v1/holidays/check?date={}", date.format("%Y-%m-%d"));
        let envelope: ApiResponse<HolidayCheckResponse> = self.get_json(&path).await?;

        Ok(envelope.data.is_holiday)
    }
}
