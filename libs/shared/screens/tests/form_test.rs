use serde::{Deserialize, Serialize};

use shared_screens::validate::{is_positive_amount, non_blank, parse_amount};
use shared_screens::{Entity, FormMode, FormModel, FormScreen, Rule};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Supply {
    id: String,
    name: String,
    unit_cost: f64,
}

impl Entity for Supply {
    const RESOURCE: &'static str = "/supplies";
    const NOUN: &'static str = "supply";
    const NOUN_PLURAL: &'static str = "supplies";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
struct SupplyDraft {
    name: String,
    unit_cost: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SupplyPayload {
    name: String,
    unit_cost: f64,
}

impl FormModel for SupplyDraft {
    type Entity = Supply;
    type Payload = SupplyPayload;

    fn from_entity(entity: Option<&Supply>) -> Self {
        match entity {
            Some(supply) => Self {
                name: supply.name.clone(),
                unit_cost: supply.unit_cost.to_string(),
            },
            None => Self {
                name: String::new(),
                unit_cost: String::new(),
            },
        }
    }

    fn rules() -> Vec<Rule<Self>> {
        vec![
            Rule::new("name", "Name is required", |d| non_blank(&d.name)),
            Rule::new("unitCost", "Valid unit cost is required", |d| {
                is_positive_amount(&d.unit_cost)
            }),
        ]
    }

    fn normalize(&self) -> SupplyPayload {
        SupplyPayload {
            name: self.name.trim().to_string(),
            unit_cost: parse_amount(&self.unit_cost).unwrap_or(0.0),
        }
    }
}

#[test]
fn create_mode_starts_from_an_empty_draft() {
    let form = FormScreen::<SupplyDraft>::open(None);
    assert_eq!(form.mode(), FormMode::Create);
    assert!(form.draft().name.is_empty());
    assert!(form.errors().is_empty());
}

#[test]
fn edit_mode_round_trips_every_field_from_the_entity() {
    let supply = Supply {
        id: "s-1".to_string(),
        name: "Gauze".to_string(),
        unit_cost: 2.5,
    };
    let form = FormScreen::<SupplyDraft>::open(Some(&supply));
    assert_eq!(form.mode(), FormMode::Edit);
    assert_eq!(form.draft().name, "Gauze");
    assert_eq!(form.draft().unit_cost, "2.5");
}

#[test]
fn submit_with_missing_fields_blocks_and_scopes_errors() {
    let mut form = FormScreen::<SupplyDraft>::open(None);

    let payload = form.submit();

    assert!(payload.is_none(), "save callback must not be reached");
    assert_eq!(form.errors().len(), 2);
    assert_eq!(form.errors().get("name"), Some("Name is required"));
    assert_eq!(
        form.errors().get("unitCost"),
        Some("Valid unit cost is required")
    );
}

#[test]
fn editing_a_field_clears_only_its_own_error() {
    let mut form = FormScreen::<SupplyDraft>::open(None);
    assert!(form.submit().is_none());

    form.edit("name", |d| d.name = "Gauze".to_string());

    assert_eq!(form.errors().get("name"), None);
    // The other field's error is untouched: no re-validation on edit.
    assert_eq!(
        form.errors().get("unitCost"),
        Some("Valid unit cost is required")
    );
}

#[test]
fn clean_submit_normalizes_the_draft() {
    let mut form = FormScreen::<SupplyDraft>::open(None);
    form.edit("name", |d| d.name = "  Gauze ".to_string());
    form.edit("unitCost", |d| d.unit_cost = "2.50".to_string());

    let payload = form.submit().expect("valid draft must submit");

    assert_eq!(payload.name, "Gauze");
    assert_eq!(payload.unit_cost, 2.5);
    assert!(form.errors().is_empty());
}
