use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use shared_screens::Entity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrescriptionStatus {
    #[default]
    Active,
    Completed,
    Expired,
}

impl PrescriptionStatus {
    pub const ALL: [PrescriptionStatus; 3] = [
        PrescriptionStatus::Active,
        PrescriptionStatus::Completed,
        PrescriptionStatus::Expired,
    ];
}

impl fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrescriptionStatus::Active => write!(f, "ACTIVE"),
            PrescriptionStatus::Completed => write!(f, "COMPLETED"),
            PrescriptionStatus::Expired => write!(f, "EXPIRED"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub dentist_id: String,
    #[serde(default)]
    pub dentist_name: String,
    #[serde(default)]
    pub prescription_date: Option<NaiveDate>,
    #[serde(default)]
    pub diagnosis: String,
    /// Free text; one line per medication as the dentist writes it.
    #[serde(default)]
    pub medications: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub requires_follow_up: bool,
    #[serde(default)]
    pub status: PrescriptionStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Entity for Prescription {
    const RESOURCE: &'static str = "/prescriptions";
    const NOUN: &'static str = "prescription";
    const NOUN_PLURAL: &'static str = "prescriptions";

    fn id(&self) -> &str {
        &self.id
    }
}
