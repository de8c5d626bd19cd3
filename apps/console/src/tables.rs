use appointment_cell::Appointment;
use bill_cell::Bill;
use dentist_cell::Dentist;
use finance_cell::FinanceRecord;
use insurance_cell::InsuranceRecord;
use patient_cell::Patient;
use prescription_cell::Prescription;
use treatment_cell::Treatment;
use user_cell::UserAccount;

use crate::shell::TableRow;

fn date_or_dash(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

fn flag(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

impl TableRow for Patient {
    fn columns() -> &'static [&'static str] {
        &["Name", "Email", "Mobile", "Gender", "Blood Group"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.email.clone(),
            self.mobile_number.clone(),
            self.gender.clone(),
            self.blood_group.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }
}

impl TableRow for Dentist {
    fn columns() -> &'static [&'static str] {
        &["Name", "License", "Specializations", "Active", "Chief"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.license_number.clone(),
            self.specializations
                .clone()
                .unwrap_or_default()
                .join(", "),
            flag(self.active),
            flag(self.chief_dentist),
        ]
    }
}

impl TableRow for Appointment {
    fn columns() -> &'static [&'static str] {
        &["Patient", "Dentist", "Date", "Time", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.patient_name.clone(),
            self.dentist_name.clone(),
            date_or_dash(self.appointment_date),
            self.appointment_time.clone(),
            self.status.to_string(),
        ]
    }
}

impl TableRow for Bill {
    fn columns() -> &'static [&'static str] {
        &["Bill No", "Patient", "Bill Date", "Due", "Paid", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.bill_id.clone(),
            self.patient_name.clone(),
            date_or_dash(self.bill_date),
            format!("{:.2}", self.amount_due),
            format!("{:.2}", self.amount_paid),
            self.payment_status.to_string(),
        ]
    }
}

impl TableRow for Treatment {
    fn columns() -> &'static [&'static str] {
        &["Treatment", "Category", "Bookable"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.treatment_name.clone(),
            self.category.clone(),
            flag(self.available_for_booking),
        ]
    }
}

impl TableRow for Prescription {
    fn columns() -> &'static [&'static str] {
        &["Patient", "Dentist", "Date", "Diagnosis", "Status", "Follow-up"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.patient_name.clone(),
            self.dentist_name.clone(),
            date_or_dash(self.prescription_date),
            self.diagnosis.clone(),
            self.status.to_string(),
            flag(self.requires_follow_up),
        ]
    }
}

impl TableRow for FinanceRecord {
    fn columns() -> &'static [&'static str] {
        &["Date", "Category", "Type", "Amount", "Vendor/Source", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            date_or_dash(self.transaction_date),
            self.category.to_string(),
            self.entry_type.clone(),
            format!("{:.2}", self.amount),
            self.vendor_name.clone().unwrap_or_else(|| "-".to_string()),
            self.status.to_string(),
        ]
    }
}

impl TableRow for InsuranceRecord {
    fn columns() -> &'static [&'static str] {
        &["Patient Id", "Agency", "Policy", "End Date", "Claimed", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.patient_id.clone(),
            self.agency_name.clone(),
            self.policy_number.clone(),
            date_or_dash(self.policy_end_date),
            flag(self.claim_submitted),
            self.status.to_string(),
        ]
    }
}

impl TableRow for UserAccount {
    fn columns() -> &'static [&'static str] {
        &["Username", "Name", "Email", "Role", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.full_name(),
            self.email.clone(),
            self.role.to_string(),
            flag(self.active),
        ]
    }
}
