use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use shared_screens::Entity;

pub const TREATMENT_CATEGORIES: &[&str] = &[
    "General Dentistry",
    "Cosmetic Dentistry",
    "Orthodontics",
    "Oral Surgery",
    "Periodontics",
    "Endodontics",
    "Prosthodontics",
    "Pediatric Dentistry",
    "Emergency Treatment",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub treatment_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub available_for_booking: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_true() -> bool {
    true
}

impl Entity for Treatment {
    const RESOURCE: &'static str = "/treatments";
    const NOUN: &'static str = "treatment";
    const NOUN_PLURAL: &'static str = "treatments";

    fn id(&self) -> &str {
        &self.id
    }
}
