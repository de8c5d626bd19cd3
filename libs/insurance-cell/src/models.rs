use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use shared_screens::Entity;

pub const INSURANCE_AGENCIES: &[&str] = &[
    "LIC of India",
    "HDFC ERGO",
    "ICICI Lombard",
    "Bajaj Allianz",
    "New India Assurance",
    "Oriental Insurance",
    "United India Insurance",
    "National Insurance",
    "Star Health Insurance",
    "Max Bupa",
    "Apollo Munich",
    "Religare",
    "Other",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsuranceStatus {
    #[default]
    Active,
    Expired,
    Claimed,
    Approved,
}

impl InsuranceStatus {
    pub const ALL: [InsuranceStatus; 4] = [
        InsuranceStatus::Active,
        InsuranceStatus::Expired,
        InsuranceStatus::Claimed,
        InsuranceStatus::Approved,
    ];
}

impl fmt::Display for InsuranceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsuranceStatus::Active => write!(f, "ACTIVE"),
            InsuranceStatus::Expired => write!(f, "EXPIRED"),
            InsuranceStatus::Claimed => write!(f, "CLAIMED"),
            InsuranceStatus::Approved => write!(f, "APPROVED"),
        }
    }
}

/// Insurance references the patient by id only; there is no denormalized
/// name on this record. The approval fields are meaningful only once a
/// claim has been submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub agency_name: String,
    #[serde(default)]
    pub policy_number: String,
    #[serde(default)]
    pub policy_end_date: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub claim_submitted: bool,
    #[serde(default)]
    pub claim_approved: bool,
    #[serde(default)]
    pub claim_amount: Option<f64>,
    #[serde(default)]
    pub approved_claim_amount: Option<f64>,
    #[serde(default)]
    pub status: InsuranceStatus,
    #[serde(default)]
    pub treatment_description: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_true() -> bool {
    true
}

impl Entity for InsuranceRecord {
    const RESOURCE: &'static str = "/insurance";
    const NOUN: &'static str = "insurance record";
    const NOUN_PLURAL: &'static str = "insurance records";

    fn id(&self) -> &str {
        &self.id
    }
}
