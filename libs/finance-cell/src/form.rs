use chrono::Utc;
use serde::Serialize;

use shared_screens::validate::{is_positive_amount, non_blank, parse_amount};
use shared_screens::{FormModel, Rule};

use crate::models::{FinanceCategory, FinanceRecord, FinanceStatus};

#[derive(Debug, Clone)]
pub struct FinanceDraft {
    pub transaction_date: String,
    pub category: FinanceCategory,
    pub entry_type: String,
    pub amount: String,
    pub vendor_name: String,
    pub description: String,
    pub status: FinanceStatus,
}

impl FinanceDraft {
    /// Switching category invalidates the old type choice; the drop-down is
    /// re-scoped to the new category's list.
    pub fn set_category(&mut self, category: FinanceCategory) {
        if self.category != category {
            self.entry_type.clear();
        }
        self.category = category;
    }

    pub fn type_options(&self) -> &'static [&'static str] {
        self.category.types()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancePayload {
    pub transaction_date: String,
    pub category: FinanceCategory,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub amount: f64,
    pub vendor_name: String,
    pub description: String,
    pub status: FinanceStatus,
}

impl FormModel for FinanceDraft {
    type Entity = FinanceRecord;
    type Payload = FinancePayload;

    fn from_entity(entity: Option<&FinanceRecord>) -> Self {
        match entity {
            Some(record) => Self {
                transaction_date: record
                    .transaction_date
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                category: record.category,
                entry_type: record.entry_type.clone(),
                amount: record.amount.to_string(),
                vendor_name: record.vendor_name.clone().unwrap_or_default(),
                description: record.description.clone(),
                status: record.status,
            },
            None => Self {
                transaction_date: Utc::now().date_naive().to_string(),
                category: FinanceCategory::Expense,
                entry_type: String::new(),
                amount: String::new(),
                vendor_name: String::new(),
                description: String::new(),
                status: FinanceStatus::Completed,
            },
        }
    }

    fn rules() -> Vec<Rule<Self>> {
        vec![
            Rule::new("type", "Type is required", |d| non_blank(&d.entry_type)),
            Rule::new("amount", "Valid amount is required", |d| {
                is_positive_amount(&d.amount)
            }),
            Rule::new("description", "Description is required", |d| {
                non_blank(&d.description)
            }),
        ]
    }

    fn normalize(&self) -> FinancePayload {
        FinancePayload {
            transaction_date: self.transaction_date.clone(),
            category: self.category,
            entry_type: self.entry_type.clone(),
            amount: parse_amount(&self.amount).unwrap_or(0.0),
            vendor_name: self.vendor_name.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EXPENSE_TYPES, REVENUE_TYPES};
    use shared_screens::FormScreen;

    #[test]
    fn switching_category_clears_the_type_and_rescopes_options() {
        let mut form = FormScreen::<FinanceDraft>::open(None);
        form.edit("type", |d| d.entry_type = "Rent".to_string());
        assert_eq!(form.draft().type_options(), EXPENSE_TYPES);

        form.edit("category", |d| d.set_category(FinanceCategory::Revenue));

        assert!(form.draft().entry_type.is_empty());
        assert_eq!(form.draft().type_options(), REVENUE_TYPES);
        assert!(!form
            .draft()
            .type_options()
            .contains(&"Rent"));
    }

    #[test]
    fn reselecting_the_same_category_keeps_the_type() {
        let mut form = FormScreen::<FinanceDraft>::open(None);
        form.edit("type", |d| d.entry_type = "Rent".to_string());

        form.edit("category", |d| d.set_category(FinanceCategory::Expense));

        assert_eq!(form.draft().entry_type, "Rent");
    }

    #[test]
    fn amount_must_be_positive_and_is_coerced() {
        let mut form = FormScreen::<FinanceDraft>::open(None);
        form.edit("type", |d| d.entry_type = "Medical Supplies".to_string());
        form.edit("description", |d| {
            d.description = "Monthly composite order".to_string()
        });
        form.edit("amount", |d| d.amount = "0".to_string());

        assert!(form.submit().is_none());
        assert_eq!(form.errors().get("amount"), Some("Valid amount is required"));

        form.edit("amount", |d| d.amount = "1299.99".to_string());
        let payload = form.submit().expect("valid finance entry");
        assert_eq!(payload.amount, 1299.99);
        assert_eq!(payload.category, FinanceCategory::Expense);
    }

    #[test]
    fn payload_serializes_type_under_the_wire_name() {
        let mut form = FormScreen::<FinanceDraft>::open(None);
        form.edit("type", |d| d.entry_type = "Utilities".to_string());
        form.edit("description", |d| d.description = "Electricity".to_string());
        form.edit("amount", |d| d.amount = "40".to_string());

        let payload = form.submit().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "Utilities");
        assert_eq!(json["category"], "EXPENSE");
        assert_eq!(json["status"], "COMPLETED");
    }

    #[test]
    fn draft_round_trips_an_existing_record() {
        let record = FinanceRecord {
            id: "f-1".to_string(),
            transaction_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 1),
            category: FinanceCategory::Revenue,
            entry_type: "Consultation Fee".to_string(),
            amount: 500.0,
            vendor_name: Some("Walk-in".to_string()),
            description: "New patient consult".to_string(),
            status: FinanceStatus::Pending,
            created_at: None,
            updated_at: None,
        };

        let draft = FinanceDraft::from_entity(Some(&record));
        assert_eq!(draft.transaction_date, "2026-08-01");
        assert_eq!(draft.category, FinanceCategory::Revenue);
        assert_eq!(draft.entry_type, "Consultation Fee");
        assert_eq!(draft.amount, "500");
        assert_eq!(draft.status, FinanceStatus::Pending);
    }
}
