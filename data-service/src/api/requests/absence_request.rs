use serde::Deserialize;
use utoipa::ToSchema;

/// Overwrite all four raw absence-token strings for one employee. Fields
/// default to empty — a caller recording only `Fe` need not repeat the
/// other three.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertAbsenceRawRequest {
    #[serde(default)]
    pub sl: String,
    #[serde(default)]
    pub fe: String,
    #[serde(default)]
    pub uw: String,
    #[serde(default)]
    pub w: String,
}
