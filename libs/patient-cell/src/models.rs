use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use shared_screens::Entity;

pub const GENDERS: &[&str] = &["M", "F", "Other"];
pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
pub const COMMON_ALLERGIES: &[&str] = &[
    "Penicillin",
    "Aspirin",
    "Latex",
    "Nuts",
    "Shellfish",
    "Dairy",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Patient {
    const RESOURCE: &'static str = "/patients";
    const NOUN: &'static str = "patient";
    const NOUN_PLURAL: &'static str = "patients";

    fn id(&self) -> &str {
        &self.id
    }
}
