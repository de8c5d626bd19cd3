use chrono::Utc;
use serde::Serialize;

use shared_screens::validate::non_blank;
use shared_screens::{FormModel, RefOption, Rule};

use crate::models::{Prescription, PrescriptionStatus};

#[derive(Debug, Clone)]
pub struct PrescriptionDraft {
    pub patient_id: String,
    pub patient_name: String,
    pub dentist_id: String,
    pub dentist_name: String,
    pub prescription_date: String,
    pub diagnosis: String,
    pub medications: String,
    pub notes: String,
    pub requires_follow_up: bool,
    pub status: PrescriptionStatus,
}

impl PrescriptionDraft {
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
pub struct PrescriptionPayload {
    pub patient_id: String,
    pub patient_name: String,
    pub dentist_id: String,
    pub dentist_name: String,
    pub prescription_date: String,
    pub diagnosis: String,
    pub medications: String,
    pub notes: String,
    pub requires_follow_up: bool,
    pub status: PrescriptionStatus,
}

fn today() -> String {
    Utc::now().date_naive().to_string()
}

impl FormModel for PrescriptionDraft {
    type Entity = Prescription;
    type Payload = PrescriptionPayload;

    fn from_entity(entity: Option<&Prescription>) -> Self {
        match entity {
            Some(prescription) => Self {
                patient_id: prescription.patient_id.clone(),
                patient_name: prescription.patient_name.clone(),
                dentist_id: prescription.dentist_id.clone(),
                dentist_name: prescription.dentist_name.clone(),
                prescription_date: prescription
                    .prescription_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(today),
                diagnosis: prescription.diagnosis.clone(),
                medications: prescription.medications.clone(),
                notes: prescription.notes.clone().unwrap_or_default(),
                requires_follow_up: prescription.requires_follow_up,
                status: prescription.status,
            },
            None => Self {
                patient_id: String::new(),
                patient_name: String::new(),
                dentist_id: String::new(),
                dentist_name: String::new(),
                prescription_date: today(),
                diagnosis: String::new(),
                medications: String::new(),
                notes: String::new(),
                requires_follow_up: false,
                status: PrescriptionStatus::Active,
            },
        }
    }

    fn rules() -> Vec<Rule<Self>> {
        vec![
            Rule::new("patientId", "Patient is required", |d| {
                non_blank(&d.patient_id)
            }),
            Rule::new("dentistId", "Dentist is required", |d| {
                non_blank(&d.dentist_id)
            }),
            Rule::new("diagnosis", "Diagnosis is required", |d| {
                non_blank(&d.diagnosis)
            }),
            Rule::new("medications", "Medications are required", |d| {
                non_blank(&d.medications)
            }),
        ]
    }

    fn normalize(&self) -> PrescriptionPayload {
        PrescriptionPayload {
            patient_id: self.patient_id.clone(),
            patient_name: self.patient_name.clone(),
            dentist_id: self.dentist_id.clone(),
            dentist_name: self.dentist_name.clone(),
            prescription_date: self.prescription_date.clone(),
            diagnosis: self.diagnosis.clone(),
            medications: self.medications.clone(),
            notes: self.notes.clone(),
            requires_follow_up: self.requires_follow_up,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_screens::FormScreen;

    #[test]
    fn new_prescriptions_default_to_today_and_active() {
        let draft = PrescriptionDraft::from_entity(None);
        assert_eq!(draft.prescription_date, today());
        assert_eq!(draft.status, PrescriptionStatus::Active);
        assert!(!draft.requires_follow_up);
    }

    #[test]
    fn diagnosis_and_medications_are_required() {
        let mut form = FormScreen::<PrescriptionDraft>::open(None);
        form.edit("patientId", |d| {
            d.select_patient(&RefOption {
                id: "p-1".to_string(),
                label: "Asha Rao".to_string(),
            })
        });
        form.edit("dentistId", |d| {
            d.select_dentist(&RefOption {
                id: "d-1".to_string(),
                label: "Meera Shah".to_string(),
            })
        });

        assert!(form.submit().is_none());
        assert_eq!(form.errors().get("diagnosis"), Some("Diagnosis is required"));
        assert_eq!(
            form.errors().get("medications"),
            Some("Medications are required")
        );
        assert_eq!(form.errors().len(), 2);

        form.edit("diagnosis", |d| d.diagnosis = "Pulpitis, tooth 36".to_string());
        form.edit("medications", |d| {
            d.medications = "Amoxicillin 500mg x5d\nIbuprofen 400mg PRN".to_string()
        });

        let payload = form.submit().expect("complete prescription");
        assert_eq!(payload.patient_name, "Asha Rao");
        assert!(payload.medications.contains("Amoxicillin"));
    }

    #[test]
    fn draft_round_trips_an_existing_prescription() {
        let prescription = Prescription {
            id: "rx-1".to_string(),
            patient_id: "p-1".to_string(),
            patient_name: "Asha Rao".to_string(),
            dentist_id: "d-1".to_string(),
            dentist_name: "Meera Shah".to_string(),
            prescription_date: chrono::NaiveDate::from_ymd_opt(2026, 7, 30),
            diagnosis: "Gingivitis".to_string(),
            medications: "Chlorhexidine rinse".to_string(),
            notes: Some("Review in two weeks".to_string()),
            requires_follow_up: true,
            status: PrescriptionStatus::Completed,
            created_at: None,
            updated_at: None,
        };

        let draft = PrescriptionDraft::from_entity(Some(&prescription));
        assert_eq!(draft.prescription_date, "2026-07-30");
        assert!(draft.requires_follow_up);
        assert_eq!(draft.status, PrescriptionStatus::Completed);
        assert_eq!(draft.notes, "Review in two weeks");
    }
}
