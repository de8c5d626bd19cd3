use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use shared_screens::Entity;

pub const REVENUE_TYPES: &[&str] = &[
    "Consultation Fee",
    "Treatment Fee",
    "Surgery Fee",
    "Emergency Treatment",
    "Follow-up Fee",
    "Other Income",
];

pub const EXPENSE_TYPES: &[&str] = &[
    "Medical Supplies",
    "Equipment Purchase",
    "Equipment Maintenance",
    "Rent",
    "Utilities",
    "Staff Salary",
    "Marketing",
    "Insurance",
    "Laboratory Costs",
    "Other Expenses",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinanceCategory {
    Revenue,
    #[default]
    Expense,
}

impl FinanceCategory {
    pub const ALL: [FinanceCategory; 2] = [FinanceCategory::Revenue, FinanceCategory::Expense];

    /// The transaction types a category admits; picking a category scopes
    /// the type drop-down to exactly this list.
    pub fn types(&self) -> &'static [&'static str] {
        match self {
            FinanceCategory::Revenue => REVENUE_TYPES,
            FinanceCategory::Expense => EXPENSE_TYPES,
        }
    }
}

impl fmt::Display for FinanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinanceCategory::Revenue => write!(f, "REVENUE"),
            FinanceCategory::Expense => write!(f, "EXPENSE"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinanceStatus {
    Pending,
    #[default]
    Completed,
    Cancelled,
}

impl FinanceStatus {
    pub const ALL: [FinanceStatus; 3] = [
        FinanceStatus::Pending,
        FinanceStatus::Completed,
        FinanceStatus::Cancelled,
    ];
}

impl fmt::Display for FinanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinanceStatus::Pending => write!(f, "PENDING"),
            FinanceStatus::Completed => write!(f, "COMPLETED"),
            FinanceStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub transaction_date: Option<NaiveDate>,
    #[serde(default)]
    pub category: FinanceCategory,
    #[serde(default, rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: FinanceStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Entity for FinanceRecord {
    const RESOURCE: &'static str = "/finance";
    const NOUN: &'static str = "finance record";
    const NOUN_PLURAL: &'static str = "finance records";

    fn id(&self) -> &str {
        &self.id
    }
}
