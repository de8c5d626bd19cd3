use serde::Serialize;

use shared_screens::validate::non_blank;
use shared_screens::{FormModel, Rule};

use crate::models::Treatment;

#[derive(Debug, Clone)]
pub struct TreatmentDraft {
    pub treatment_name: String,
    pub category: String,
    pub description: String,
    pub available_for_booking: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentPayload {
    pub treatment_name: String,
    pub category: String,
    pub description: String,
    pub available_for_booking: bool,
}

impl FormModel for TreatmentDraft {
    type Entity = Treatment;
    type Payload = TreatmentPayload;

    fn from_entity(entity: Option<&Treatment>) -> Self {
        match entity {
            Some(treatment) => Self {
                treatment_name: treatment.treatment_name.clone(),
                category: treatment.category.clone(),
                description: treatment.description.clone(),
                available_for_booking: treatment.available_for_booking,
            },
            None => Self {
                treatment_name: String::new(),
                category: String::new(),
                description: String::new(),
                available_for_booking: true,
            },
        }
    }

    fn rules() -> Vec<Rule<Self>> {
        vec![
            Rule::new("treatmentName", "Treatment name is required", |d| {
                non_blank(&d.treatment_name)
            }),
            Rule::new("category", "Category is required", |d| {
                non_blank(&d.category)
            }),
            Rule::new("description", "Description is required", |d| {
                non_blank(&d.description)
            }),
        ]
    }

    fn normalize(&self) -> TreatmentPayload {
        TreatmentPayload {
            treatment_name: self.treatment_name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            available_for_booking: self.available_for_booking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_screens::FormScreen;

    #[test]
    fn name_category_and_description_are_required() {
        let mut form = FormScreen::<TreatmentDraft>::open(None);
        assert!(form.submit().is_none());

        assert_eq!(form.errors().len(), 3);
        assert_eq!(
            form.errors().get("treatmentName"),
            Some("Treatment name is required")
        );
        assert_eq!(form.errors().get("category"), Some("Category is required"));
        assert_eq!(
            form.errors().get("description"),
            Some("Description is required")
        );
    }

    #[test]
    fn complete_draft_submits_with_booking_flag() {
        let mut form = FormScreen::<TreatmentDraft>::open(None);
        form.edit("treatmentName", |d| {
            d.treatment_name = "Root Canal".to_string()
        });
        form.edit("category", |d| d.category = "Endodontics".to_string());
        form.edit("description", |d| {
            d.description = "Single-sitting root canal treatment".to_string()
        });
        form.edit("availableForBooking", |d| d.available_for_booking = false);

        let payload = form.submit().expect("complete treatment");
        assert_eq!(payload.treatment_name, "Root Canal");
        assert!(!payload.available_for_booking);
    }

    #[test]
    fn draft_round_trips_an_existing_treatment() {
        let treatment = Treatment {
            id: "t-1".to_string(),
            treatment_name: "Scaling".to_string(),
            category: "General Dentistry".to_string(),
            description: "Full-mouth scaling and polishing".to_string(),
            available_for_booking: true,
            created_at: None,
            updated_at: None,
        };

        let draft = TreatmentDraft::from_entity(Some(&treatment));
        assert_eq!(draft.treatment_name, "Scaling");
        assert_eq!(draft.category, "General Dentistry");
        assert!(draft.available_for_booking);
    }
}
