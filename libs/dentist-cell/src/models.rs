use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use shared_screens::Entity;

pub const SPECIALIZATIONS: &[&str] = &[
    "General Dentistry",
    "Orthodontics",
    "Endodontics",
    "Periodontics",
    "Oral Surgery",
    "Prosthodontics",
    "Pediatric Dentistry",
    "Cosmetic Dentistry",
    "Oral Pathology",
    "Dental Implants",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dentist {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub license_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub specializations: Option<Vec<String>>,
    #[serde(default = "default_true")]
    pub active: bool,
    /// Conceptually a singleton role; the backend is the only place the
    /// one-chief invariant is enforced.
    #[serde(default)]
    pub chief_dentist: bool,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub experience_years: Option<i32>,
    #[serde(default)]
    pub consultation_fee: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_true() -> bool {
    true
}

impl Dentist {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Dentist {
    const RESOURCE: &'static str = "/dentists";
    const NOUN: &'static str = "dentist";
    const NOUN_PLURAL: &'static str = "dentists";

    fn id(&self) -> &str {
        &self.id
    }
}
