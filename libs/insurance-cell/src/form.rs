use serde::Serialize;

use shared_screens::validate::{non_blank, parse_amount};
use shared_screens::{FormModel, RefOption, Rule};

use crate::models::{InsuranceRecord, InsuranceStatus};

#[derive(Debug, Clone)]
pub struct InsuranceDraft {
    pub patient_id: String,
    pub agency_name: String,
    pub policy_number: String,
    pub policy_end_date: String,
    pub active: bool,
    pub claim_submitted: bool,
    pub claim_approved: bool,
    pub claim_amount: String,
    pub approved_claim_amount: String,
    pub status: InsuranceStatus,
    pub treatment_description: String,
}

impl InsuranceDraft {
    pub fn select_patient(&mut self, option: &RefOption) {
        self.patient_id = option.id.clone();
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePayload {
    pub patient_id: String,
    pub agency_name: String,
    pub policy_number: String,
    pub policy_end_date: String,
    pub active: bool,
    pub claim_submitted: bool,
    pub claim_approved: bool,
    pub claim_amount: Option<f64>,
    pub approved_claim_amount: Option<f64>,
    pub status: InsuranceStatus,
    pub treatment_description: String,
}

impl FormModel for InsuranceDraft {
    type Entity = InsuranceRecord;
    type Payload = InsurancePayload;

    fn from_entity(entity: Option<&InsuranceRecord>) -> Self {
        match entity {
            Some(record) => Self {
                patient_id: record.patient_id.clone(),
                agency_name: record.agency_name.clone(),
                policy_number: record.policy_number.clone(),
                policy_end_date: record
                    .policy_end_date
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                active: record.active,
                claim_submitted: record.claim_submitted,
                claim_approved: record.claim_approved,
                claim_amount: record
                    .claim_amount
                    .map(|a| a.to_string())
                    .unwrap_or_default(),
                approved_claim_amount: record
                    .approved_claim_amount
                    .map(|a| a.to_string())
                    .unwrap_or_default(),
                status: record.status,
                treatment_description: record.treatment_description.clone().unwrap_or_default(),
            },
            None => Self {
                patient_id: String::new(),
                agency_name: String::new(),
                policy_number: String::new(),
                policy_end_date: String::new(),
                active: true,
                claim_submitted: false,
                claim_approved: false,
                claim_amount: String::new(),
                approved_claim_amount: String::new(),
                status: InsuranceStatus::Active,
                treatment_description: String::new(),
            },
        }
    }

    fn rules() -> Vec<Rule<Self>> {
        vec![
            Rule::new("patientId", "Patient is required", |d| {
                non_blank(&d.patient_id)
            }),
            Rule::new("agencyName", "Agency name is required", |d| {
                non_blank(&d.agency_name)
            }),
            Rule::new("policyNumber", "Policy number is required", |d| {
                non_blank(&d.policy_number)
            }),
            Rule::new("policyEndDate", "Policy end date is required", |d| {
                non_blank(&d.policy_end_date)
            }),
            Rule::new(
                "claimAmount",
                "Claim amount is required when claim is submitted",
                |d| !d.claim_submitted || non_blank(&d.claim_amount),
            ),
        ]
    }

    fn normalize(&self) -> InsurancePayload {
        InsurancePayload {
            patient_id: self.patient_id.clone(),
            agency_name: self.agency_name.clone(),
            policy_number: self.policy_number.clone(),
            policy_end_date: self.policy_end_date.clone(),
            active: self.active,
            claim_submitted: self.claim_submitted,
            claim_approved: self.claim_approved,
            claim_amount: parse_amount(&self.claim_amount),
            approved_claim_amount: parse_amount(&self.approved_claim_amount),
            status: self.status,
            treatment_description: self.treatment_description.clone(),
        }
    }
}
