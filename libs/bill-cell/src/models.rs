use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use shared_screens::Entity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Cancelled,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Paid,
        PaymentStatus::Pending,
        PaymentStatus::Cancelled,
    ];
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "PAID"),
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// `id` is the storage id; `bill_id` is the human-facing number the client
/// generates as `BILL-<timestamp>` for new bills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub bill_id: String,
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub dentist_id: String,
    #[serde(default)]
    pub dentist_name: String,
    #[serde(default)]
    pub bill_date: Option<NaiveDate>,
    #[serde(default)]
    pub amount_due: f64,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Bill {
    pub fn outstanding(&self) -> f64 {
        (self.amount_due - self.amount_paid).max(0.0)
    }
}

impl Entity for Bill {
    const RESOURCE: &'static str = "/bills";
    const NOUN: &'static str = "bill";
    const NOUN_PLURAL: &'static str = "bills";

    fn id(&self) -> &str {
        &self.id
    }
}
