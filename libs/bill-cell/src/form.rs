use chrono::Utc;
use serde::Serialize;

use shared_screens::validate::{is_positive_amount, non_blank, parse_amount};
use shared_screens::{FormModel, RefOption, Rule};

use crate::models::{Bill, PaymentStatus};

#[derive(Debug, Clone)]
pub struct BillDraft {
    pub bill_id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub dentist_id: String,
    pub dentist_name: String,
    pub bill_date: String,
    pub amount_due: String,
    pub amount_paid: String,
    pub due_date: String,
    pub payment_status: PaymentStatus,
}

impl BillDraft {
    pub fn select_patient(&mut self, option: &RefOption) {
        self.patient_id = option.id.clone();
        self.patient_name = option.label.clone();
    }

    pub fn select_dentist(&mut self, option: &RefOption) {
        self.dentist_id = option.id.clone();
        self.dentist_name = option.label.clone();
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub bill_id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub dentist_id: String,
    pub dentist_name: String,
    pub bill_date: String,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub due_date: String,
    pub payment_status: PaymentStatus,
}

impl FormModel for BillDraft {
    type Entity = Bill;
    type Payload = BillPayload;

    fn from_entity(entity: Option<&Bill>) -> Self {
        match entity {
            Some(bill) => Self {
                bill_id: bill.bill_id.clone(),
                patient_id: bill.patient_id.clone(),
                patient_name: bill.patient_name.clone(),
                dentist_id: bill.dentist_id.clone(),
                dentist_name: bill.dentist_name.clone(),
                bill_date: bill.bill_date.map(|d| d.to_string()).unwrap_or_default(),
                amount_due: bill.amount_due.to_string(),
                amount_paid: bill.amount_paid.to_string(),
                due_date: bill.due_date.map(|d| d.to_string()).unwrap_or_default(),
                payment_status: bill.payment_status,
            },
            None => Self {
                // Human-facing bill number minted client-side for new bills.
                bill_id: format!("BILL-{}", Utc::now().timestamp_millis()),
                patient_id: String::new(),
                patient_name: String::new(),
                dentist_id: String::new(),
                dentist_name: String::new(),
                bill_date: String::new(),
                amount_due: String::new(),
                amount_paid: "0".to_string(),
                due_date: String::new(),
                payment_status: PaymentStatus::Pending,
            },
        }
    }

    fn rules() -> Vec<Rule<Self>> {
        vec![
            Rule::new("billId", "Bill ID is required", |d| non_blank(&d.bill_id)),
            Rule::new("patientId", "Patient is required", |d| {
                non_blank(&d.patient_id)
            }),
            Rule::new("dentistId", "Dentist is required", |d| {
                non_blank(&d.dentist_id)
            }),
            Rule::new("amountDue", "Valid amount due is required", |d| {
                is_positive_amount(&d.amount_due)
            }),
        ]
    }

    fn normalize(&self) -> BillPayload {
        BillPayload {
            bill_id: self.bill_id.clone(),
            patient_id: self.patient_id.clone(),
            patient_name: self.patient_name.clone(),
            dentist_id: self.dentist_id.clone(),
            dentist_name: self.dentist_name.clone(),
            bill_date: self.bill_date.clone(),
            amount_due: parse_amount(&self.amount_due).unwrap_or(0.0),
            amount_paid: parse_amount(&self.amount_paid).unwrap_or(0.0),
            due_date: self.due_date.clone(),
            payment_status: self.payment_status,
        }
    }
}
