use serde::Serialize;

use shared_screens::validate::non_blank;
use shared_screens::{FormModel, RefOption, Rule};

use crate::models::{Appointment, AppointmentStatus};

#[derive(Debug, Clone)]
pub struct AppointmentDraft {
    pub patient_id: String,
    pub patient_name: String,
    pub dentist_id: String,
    pub dentist_name: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub notes: String,
}

impl AppointmentDraft {
    /// Copy the picked patient's id and display name into the draft; the
    /// name snapshot is what the backend stores on the appointment.
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
pub struct AppointmentPayload {
    pub patient_id: String,
    pub patient_name: String,
    pub dentist_id: String,
    pub dentist_name: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub notes: String,
}

impl FormModel for AppointmentDraft {
    type Entity = Appointment;
    type Payload = AppointmentPayload;

    fn from_entity(entity: Option<&Appointment>) -> Self {
        match entity {
            Some(appointment) => Self {
                patient_id: appointment.patient_id.clone(),
                patient_name: appointment.patient_name.clone(),
                dentist_id: appointment.dentist_id.clone(),
                dentist_name: appointment.dentist_name.clone(),
                appointment_date: appointment
                    .appointment_date
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                appointment_time: appointment.appointment_time.clone(),
                status: appointment.status,
                notes: appointment.notes.clone().unwrap_or_default(),
            },
            None => Self {
                patient_id: String::new(),
                patient_name: String::new(),
                dentist_id: String::new(),
                dentist_name: String::new(),
                appointment_date: String::new(),
                appointment_time: String::new(),
                status: AppointmentStatus::Scheduled,
                notes: String::new(),
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
            Rule::new("appointmentDate", "Date is required", |d| {
                non_blank(&d.appointment_date)
            }),
            Rule::new("appointmentTime", "Time is required", |d| {
                non_blank(&d.appointment_time)
            }),
        ]
    }

    fn normalize(&self) -> AppointmentPayload {
        AppointmentPayload {
            patient_id: self.patient_id.clone(),
            patient_name: self.patient_name.clone(),
            dentist_id: self.dentist_id.clone(),
            dentist_name: self.dentist_name.clone(),
            appointment_date: self.appointment_date.clone(),
            appointment_time: self.appointment_time.clone(),
            status: self.status,
            notes: self.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_screens::FormScreen;

    #[test]
    fn all_four_bookings_fields_are_required() {
        let mut form = FormScreen::<AppointmentDraft>::open(None);
        assert!(form.submit().is_none());

        let errors = form.errors();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("patientId"), Some("Patient is required"));
        assert_eq!(errors.get("dentistId"), Some("Dentist is required"));
        assert_eq!(errors.get("appointmentDate"), Some("Date is required"));
        assert_eq!(errors.get("appointmentTime"), Some("Time is required"));
    }

    #[test]
    fn selecting_references_copies_id_and_display_name() {
        let mut form = FormScreen::<AppointmentDraft>::open(None);
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
        form.edit("appointmentDate", |d| {
            d.appointment_date = "2026-08-10".to_string()
        });
        form.edit("appointmentTime", |d| d.appointment_time = "09:30".to_string());

        let payload = form.submit().expect("complete booking");
        assert_eq!(payload.patient_id, "p-1");
        assert_eq!(payload.patient_name, "Asha Rao");
        assert_eq!(payload.dentist_id, "d-1");
        assert_eq!(payload.dentist_name, "Meera Shah");
        assert_eq!(payload.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn draft_round_trips_an_existing_appointment() {
        let appointment = Appointment {
            id: "a-1".to_string(),
            patient_id: "p-1".to_string(),
            patient_name: "Asha Rao".to_string(),
            dentist_id: "d-1".to_string(),
            dentist_name: "Meera Shah".to_string(),
            appointment_date: NaiveDate::from_ymd_opt(2026, 8, 10),
            appointment_time: "14:30".to_string(),
            status: AppointmentStatus::Confirmed,
            notes: Some("Follow-up on molar filling".to_string()),
            created_at: None,
            updated_at: None,
        };

        let draft = AppointmentDraft::from_entity(Some(&appointment));

        assert_eq!(draft.appointment_date, "2026-08-10");
        assert_eq!(draft.appointment_time, "14:30");
        assert_eq!(draft.status, AppointmentStatus::Confirmed);
        assert_eq!(draft.notes, "Follow-up on molar filling");
    }
}
