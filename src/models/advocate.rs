use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An advocate as exposed to clients, with the names of every linked specialty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    pub phone_number: i64,
    pub created_at: Option<NaiveDateTime>,
}

/// The writable columns of an advocate row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateFields {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub years_of_experience: u32,
    pub phone_number: i64,
}

impl Advocate {
    pub fn from_fields(
        id: i64,
        fields: AdvocateFields,
        specialties: Vec<String>,
        created_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            city: fields.city,
            degree: fields.degree,
            specialties,
            years_of_experience: fields.years_of_experience,
            phone_number: fields.phone_number,
            created_at,
        }
    }
}

/// One row of the advocate ⟕ link ⟕ specialty join.
#[derive(Debug, Clone)]
pub struct AdvocateSpecialtyRow {
    pub id: i64,
    pub fields: AdvocateFields,
    pub created_at: Option<NaiveDateTime>,
    pub specialty_name: Option<String>,
}
