//! Shared types for the HTTP API layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::core_state::CoreState;
use crate::models::AdvocateFields;

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

// ═══════════════════════════════════════════════════════════
// Response envelopes
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// ═══════════════════════════════════════════════════════════
// Request bodies and queries
// ═══════════════════════════════════════════════════════════

/// Body of `POST` and `PUT /api/advocates`.
///
/// Unknown keys (such as `createdAt` echoed back by a client) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocatePayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub years_of_experience: u32,
    pub phone_number: i64,
    #[serde(default)]
    pub specialties: Option<Vec<String>>,
}

impl AdvocatePayload {
    /// Split into id, row fields and requested specialty names, rejecting
    /// blank text fields and negative phone numbers.
    pub fn into_parts(self) -> Result<(Option<i64>, AdvocateFields, Vec<String>), ApiError> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("city", &self.city),
            ("degree", &self.degree),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ApiError::BadRequest(format!("{name} is required")));
        }
        if self.phone_number < 0 {
            return Err(ApiError::BadRequest(
                "phoneNumber must not be negative".into(),
            ));
        }

        let fields = AdvocateFields {
            first_name: self.first_name,
            last_name: self.last_name,
            city: self.city,
            degree: self.degree,
            years_of_experience: self.years_of_experience,
            phone_number: self.phone_number,
        };
        Ok((self.id, fields, self.specialties.unwrap_or_default()))
    }
}

/// Query of `GET /api/advocates`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

/// Query of `DELETE /api/advocates`. The id stays a string so a malformed
/// value can be reported as a 400 with a JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}

impl DeleteQuery {
    pub fn advocate_id(&self) -> Result<i64, ApiError> {
        let raw = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Advocate ID is required".into()))?;
        raw.parse()
            .map_err(|_| ApiError::BadRequest(format!("Invalid advocate ID: {raw}")))
    }
}
