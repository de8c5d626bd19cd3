use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future;
use serde_json::Value;
use tracing::warn;

use shared_screens::{ConfirmPrompt, FormModel, FormScreen, RefOption, ReferenceSource};

use appointment_cell::{Appointment, AppointmentDraft, AppointmentStatus, TIME_SLOTS};
use bill_cell::{Bill, BillDraft, PaymentStatus};
use dentist_cell::{Dentist, DentistDraft, SPECIALIZATIONS};
use finance_cell::{FinanceCategory, FinanceDraft, FinanceRecord, FinanceStatus};
use insurance_cell::{InsuranceDraft, InsuranceRecord, InsuranceStatus, INSURANCE_AGENCIES};
use patient_cell::{Patient, PatientDraft, BLOOD_GROUPS, GENDERS};
use prescription_cell::{Prescription, PrescriptionDraft, PrescriptionStatus};
use shared_models::auth::Role;
use treatment_cell::{Treatment, TreatmentDraft, TREATMENT_CATEGORIES};
use user_cell::{UserAccount, UserDraft};

use crate::shell::Editor;
use crate::terminal::Terminal;

fn finish<D: FormModel>(form: &mut FormScreen<D>, terminal: &Terminal) -> Option<Value> {
    match form.submit() {
        Some(payload) => serde_json::to_value(payload).ok(),
        None => {
            for (field, message) in form.errors().iter() {
                terminal.say(&format!("  ! {}: {}", field, message));
            }
            None
        }
    }
}

/// Run one prompt pass, then submit; on validation failure offer another
/// pass so typed input is not lost.
macro_rules! compose_loop {
    ($form:expr, $terminal:expr, $prompt:expr) => {{
        loop {
            $prompt(&mut $form);
            if let Some(value) = finish(&mut $form, $terminal) {
                return Some(value);
            }
            if !$terminal.confirm("  Fix the highlighted fields?") {
                return None;
            }
        }
    }};
}

fn choose_variant<T: Copy + PartialEq + Display>(
    terminal: &Terminal,
    label: &str,
    all: &[T],
    current: T,
) -> T {
    let rendered: Vec<String> = all.iter().map(|v| v.to_string()).collect();
    let options: Vec<&str> = rendered.iter().map(String::as_str).collect();
    let picked = terminal.prompt_choice(label, &options, &current.to_string());
    all.iter()
        .copied()
        .find(|v| v.to_string() == picked)
        .unwrap_or(current)
}

fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Load picker options; on failure the picker is simply empty.
async fn load_or_empty(source: &dyn ReferenceSource, noun: &str) -> Vec<RefOption> {
    match source.options().await {
        Ok(options) => options,
        Err(e) => {
            warn!(error = %e, "failed to fetch {} options", noun);
            Vec::new()
        }
    }
}

fn pick_reference(
    terminal: &Terminal,
    label: &str,
    options: &[RefOption],
    current: &str,
) -> Option<RefOption> {
    if options.is_empty() {
        terminal.say(&format!("  (no {} available)", label));
        return None;
    }
    println!("  {}:", label);
    for (i, option) in options.iter().enumerate() {
        println!("    {}. {}", i + 1, option.label);
    }
    let entered = terminal.read_line(&format!("  choose 1-{} [{}]: ", options.len(), current));
    entered
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|n| options.get(n))
        .cloned()
}

// ---------------------------------------------------------------------------
// Per-entity editors
// ---------------------------------------------------------------------------

pub struct PatientEditor {
    pub terminal: Arc<Terminal>,
}

#[async_trait]
impl Editor<Patient> for PatientEditor {
    async fn compose(&self, existing: Option<&Patient>) -> Option<Value> {
        let t = &*self.terminal;
        let mut form = FormScreen::<PatientDraft>::open(existing);
        compose_loop!(form, t, |form: &mut FormScreen<PatientDraft>| {
            let v = t.prompt_default("First name", &form.draft().first_name);
            form.edit("firstName", |d| d.first_name = v);
            let v = t.prompt_default("Last name", &form.draft().last_name);
            form.edit("lastName", |d| d.last_name = v);
            let v = t.prompt_default("Email", &form.draft().email);
            form.edit("email", |d| d.email = v);
            let v = t.prompt_default("Mobile number", &form.draft().mobile_number);
            form.edit("mobileNumber", |d| d.mobile_number = v);
            let v = t.prompt_choice("Gender", GENDERS, &form.draft().gender);
            form.edit("gender", |d| d.gender = v);
            let v = t.prompt_choice("Blood group", BLOOD_GROUPS, &form.draft().blood_group);
            form.edit("bloodGroup", |d| d.blood_group = v);
            let v = t.prompt_default("Date of birth (YYYY-MM-DD)", &form.draft().date_of_birth);
            form.edit("dateOfBirth", |d| d.date_of_birth = v);
            let v = t.prompt_default(
                "Allergies (comma-separated)",
                &form.draft().allergies.join(", "),
            );
            form.edit("allergies", |d| d.allergies = split_csv(&v));
            let v = t.prompt_default("Street", &form.draft().address.street);
            form.edit("address.street", |d| d.address.street = v);
            let v = t.prompt_default("City", &form.draft().address.city);
            form.edit("address.city", |d| d.address.city = v);
            let v = t.prompt_default("State", &form.draft().address.state);
            form.edit("address.state", |d| d.address.state = v);
            let v = t.prompt_default("Postal code", &form.draft().address.postal_code);
            form.edit("address.postalCode", |d| d.address.postal_code = v);
            let v = t.prompt_default("Country", &form.draft().address.country);
            form.edit("address.country", |d| d.address.country = v);
        })
    }
}

pub struct DentistEditor {
    pub terminal: Arc<Terminal>,
}

#[async_trait]
impl Editor<Dentist> for DentistEditor {
    async fn compose(&self, existing: Option<&Dentist>) -> Option<Value> {
        let t = &*self.terminal;
        let mut form = FormScreen::<DentistDraft>::open(existing);
        compose_loop!(form, t, |form: &mut FormScreen<DentistDraft>| {
            let v = t.prompt_default("First name", &form.draft().first_name);
            form.edit("firstName", |d| d.first_name = v);
            let v = t.prompt_default("Last name", &form.draft().last_name);
            form.edit("lastName", |d| d.last_name = v);
            let v = t.prompt_default("License number", &form.draft().license_number);
            form.edit("licenseNumber", |d| d.license_number = v);
            let v = t.prompt_default("Email", &form.draft().email);
            form.edit("email", |d| d.email = v);
            let v = t.prompt_default("Mobile number", &form.draft().mobile_number);
            form.edit("mobileNumber", |d| d.mobile_number = v);
            t.say(&format!("  Known specializations: {}", SPECIALIZATIONS.join(", ")));
            let v = t.prompt_default(
                "Specializations (comma-separated)",
                &form.draft().specializations.join(", "),
            );
            form.edit("specializations", |d| d.specializations = split_csv(&v));
            let v = t.prompt_flag("Active", form.draft().active);
            form.edit("active", |d| d.active = v);
            let v = t.prompt_flag("Chief dentist", form.draft().chief_dentist);
            form.edit("chiefDentist", |d| d.chief_dentist = v);
            let v = t.prompt_default("Qualification", &form.draft().qualification);
            form.edit("qualification", |d| d.qualification = v);
            let v = t.prompt_default("Years of experience", &form.draft().experience_years);
            form.edit("experienceYears", |d| d.experience_years = v);
            let v = t.prompt_default("Consultation fee", &form.draft().consultation_fee);
            form.edit("consultationFee", |d| d.consultation_fee = v);
        })
    }
}

pub struct AppointmentEditor {
    pub terminal: Arc<Terminal>,
    pub patients: Arc<dyn ReferenceSource>,
    pub dentists: Arc<dyn ReferenceSource>,
}

#[async_trait]
impl Editor<Appointment> for AppointmentEditor {
    async fn compose(&self, existing: Option<&Appointment>) -> Option<Value> {
        let t = &*self.terminal;
        // Both pickers load once per form open.
        let (patients, dentists) = future::join(
            load_or_empty(&*self.patients, "patient"),
            load_or_empty(&*self.dentists, "dentist"),
        )
        .await;

        let mut form = FormScreen::<AppointmentDraft>::open(existing);
        compose_loop!(form, t, |form: &mut FormScreen<AppointmentDraft>| {
            if let Some(p) = pick_reference(t, "Patient", &patients, &form.draft().patient_name) {
                form.edit("patientId", |d| d.select_patient(&p));
            }
            if let Some(d_opt) = pick_reference(t, "Dentist", &dentists, &form.draft().dentist_name)
            {
                form.edit("dentistId", |d| d.select_dentist(&d_opt));
            }
            let v = t.prompt_default("Date (YYYY-MM-DD)", &form.draft().appointment_date);
            form.edit("appointmentDate", |d| d.appointment_date = v);
            let v = t.prompt_choice("Time slot", TIME_SLOTS, &form.draft().appointment_time);
            form.edit("appointmentTime", |d| d.appointment_time = v);
            let v = choose_variant(t, "Status", &AppointmentStatus::ALL, form.draft().status);
            form.edit("status", |d| d.status = v);
            let v = t.prompt_default("Notes", &form.draft().notes);
            form.edit("notes", |d| d.notes = v);
        })
    }
}

pub struct BillEditor {
    pub terminal: Arc<Terminal>,
    pub patients: Arc<dyn ReferenceSource>,
    pub dentists: Arc<dyn ReferenceSource>,
}

#[async_trait]
impl Editor<Bill> for BillEditor {
    async fn compose(&self, existing: Option<&Bill>) -> Option<Value> {
        let t = &*self.terminal;
        let (patients, dentists) = future::join(
            load_or_empty(&*self.patients, "patient"),
            load_or_empty(&*self.dentists, "dentist"),
        )
        .await;

        let mut form = FormScreen::<BillDraft>::open(existing);
        compose_loop!(form, t, |form: &mut FormScreen<BillDraft>| {
            let v = t.prompt_default("Bill ID", &form.draft().bill_id);
            form.edit("billId", |d| d.bill_id = v);
            if let Some(p) = pick_reference(t, "Patient", &patients, &form.draft().patient_name) {
                form.edit("patientId", |d| d.select_patient(&p));
            }
            if let Some(d_opt) = pick_reference(t, "Dentist", &dentists, &form.draft().dentist_name)
            {
                form.edit("dentistId", |d| d.select_dentist(&d_opt));
            }
            let v = t.prompt_default("Bill date (YYYY-MM-DD)", &form.draft().bill_date);
            form.edit("billDate", |d| d.bill_date = v);
            let v = t.prompt_default("Amount due", &form.draft().amount_due);
            form.edit("amountDue", |d| d.amount_due = v);
            let v = t.prompt_default("Amount paid", &form.draft().amount_paid);
            form.edit("amountPaid", |d| d.amount_paid = v);
            let v = t.prompt_default("Due date (YYYY-MM-DD)", &form.draft().due_date);
            form.edit("dueDate", |d| d.due_date = v);
            let v = choose_variant(t, "Payment status", &PaymentStatus::ALL, form.draft().payment_status);
            form.edit("paymentStatus", |d| d.payment_status = v);
        })
    }
}

pub struct TreatmentEditor {
    pub terminal: Arc<Terminal>,
}

#[async_trait]
impl Editor<Treatment> for TreatmentEditor {
    async fn compose(&self, existing: Option<&Treatment>) -> Option<Value> {
        let t = &*self.terminal;
        let mut form = FormScreen::<TreatmentDraft>::open(existing);
        compose_loop!(form, t, |form: &mut FormScreen<TreatmentDraft>| {
            let v = t.prompt_default("Treatment name", &form.draft().treatment_name);
            form.edit("treatmentName", |d| d.treatment_name = v);
            let v = t.prompt_choice("Category", TREATMENT_CATEGORIES, &form.draft().category);
            form.edit("category", |d| d.category = v);
            let v = t.prompt_default("Description", &form.draft().description);
            form.edit("description", |d| d.description = v);
            let v = t.prompt_flag("Available for booking", form.draft().available_for_booking);
            form.edit("availableForBooking", |d| d.available_for_booking = v);
        })
    }
}

pub struct PrescriptionEditor {
    pub terminal: Arc<Terminal>,
    pub patients: Arc<dyn ReferenceSource>,
    pub dentists: Arc<dyn ReferenceSource>,
}

#[async_trait]
impl Editor<Prescription> for PrescriptionEditor {
    async fn compose(&self, existing: Option<&Prescription>) -> Option<Value> {
        let t = &*self.terminal;
        let (patients, dentists) = future::join(
            load_or_empty(&*self.patients, "patient"),
            load_or_empty(&*self.dentists, "dentist"),
        )
        .await;

        let mut form = FormScreen::<PrescriptionDraft>::open(existing);
        compose_loop!(form, t, |form: &mut FormScreen<PrescriptionDraft>| {
            if let Some(p) = pick_reference(t, "Patient", &patients, &form.draft().patient_name) {
                form.edit("patientId", |d| d.select_patient(&p));
            }
            if let Some(d_opt) = pick_reference(t, "Dentist", &dentists, &form.draft().dentist_name)
            {
                form.edit("dentistId", |d| d.select_dentist(&d_opt));
            }
            let v = t.prompt_default("Date (YYYY-MM-DD)", &form.draft().prescription_date);
            form.edit("prescriptionDate", |d| d.prescription_date = v);
            let v = t.prompt_default("Diagnosis", &form.draft().diagnosis);
            form.edit("diagnosis", |d| d.diagnosis = v);
            let v = t.prompt_default("Medications", &form.draft().medications);
            form.edit("medications", |d| d.medications = v);
            let v = t.prompt_default("Notes", &form.draft().notes);
            form.edit("notes", |d| d.notes = v);
            let v = t.prompt_flag("Requires follow-up", form.draft().requires_follow_up);
            form.edit("requiresFollowUp", |d| d.requires_follow_up = v);
            let v = choose_variant(t, "Status", &PrescriptionStatus::ALL, form.draft().status);
            form.edit("status", |d| d.status = v);
        })
    }
}

pub struct FinanceEditor {
    pub terminal: Arc<Terminal>,
}

#[async_trait]
impl Editor<FinanceRecord> for FinanceEditor {
    async fn compose(&self, existing: Option<&FinanceRecord>) -> Option<Value> {
        let t = &*self.terminal;
        let mut form = FormScreen::<FinanceDraft>::open(existing);
        compose_loop!(form, t, |form: &mut FormScreen<FinanceDraft>| {
            let v = t.prompt_default("Transaction date (YYYY-MM-DD)", &form.draft().transaction_date);
            form.edit("transactionDate", |d| d.transaction_date = v);
            let v = choose_variant(t, "Category", &FinanceCategory::ALL, form.draft().category);
            form.edit("category", |d| d.set_category(v));
            // The type list follows the chosen category.
            let v = t.prompt_choice("Type", form.draft().type_options(), &form.draft().entry_type);
            form.edit("type", |d| d.entry_type = v);
            let v = t.prompt_default("Amount", &form.draft().amount);
            form.edit("amount", |d| d.amount = v);
            let v = t.prompt_default("Vendor/Source", &form.draft().vendor_name);
            form.edit("vendorName", |d| d.vendor_name = v);
            let v = t.prompt_default("Description", &form.draft().description);
            form.edit("description", |d| d.description = v);
            let v = choose_variant(t, "Status", &FinanceStatus::ALL, form.draft().status);
            form.edit("status", |d| d.status = v);
        })
    }
}

pub struct InsuranceEditor {
    pub terminal: Arc<Terminal>,
    pub patients: Arc<dyn ReferenceSource>,
}

#[async_trait]
impl Editor<InsuranceRecord> for InsuranceEditor {
    async fn compose(&self, existing: Option<&InsuranceRecord>) -> Option<Value> {
        let t = &*self.terminal;
        let patients = load_or_empty(&*self.patients, "patient").await;

        let mut form = FormScreen::<InsuranceDraft>::open(existing);
        compose_loop!(form, t, |form: &mut FormScreen<InsuranceDraft>| {
            if let Some(p) = pick_reference(t, "Patient", &patients, &form.draft().patient_id) {
                form.edit("patientId", |d| d.select_patient(&p));
            }
            let v = t.prompt_choice("Agency", INSURANCE_AGENCIES, &form.draft().agency_name);
            form.edit("agencyName", |d| d.agency_name = v);
            let v = t.prompt_default("Policy number", &form.draft().policy_number);
            form.edit("policyNumber", |d| d.policy_number = v);
            let v = t.prompt_default("Policy end date (YYYY-MM-DD)", &form.draft().policy_end_date);
            form.edit("policyEndDate", |d| d.policy_end_date = v);
            let v = t.prompt_flag("Active", form.draft().active);
            form.edit("active", |d| d.active = v);
            let v = t.prompt_flag("Claim submitted", form.draft().claim_submitted);
            form.edit("claimSubmitted", |d| d.claim_submitted = v);
            if form.draft().claim_submitted {
                let v = t.prompt_default("Claim amount", &form.draft().claim_amount);
                form.edit("claimAmount", |d| d.claim_amount = v);
                let v = t.prompt_flag("Claim approved", form.draft().claim_approved);
                form.edit("claimApproved", |d| d.claim_approved = v);
                if form.draft().claim_approved {
                    let v = t.prompt_default(
                        "Approved claim amount",
                        &form.draft().approved_claim_amount,
                    );
                    form.edit("approvedClaimAmount", |d| d.approved_claim_amount = v);
                }
            }
            let v = choose_variant(t, "Status", &InsuranceStatus::ALL, form.draft().status);
            form.edit("status", |d| d.status = v);
            let v = t.prompt_default("Treatment description", &form.draft().treatment_description);
            form.edit("treatmentDescription", |d| d.treatment_description = v);
        })
    }
}

pub struct UserEditor {
    pub terminal: Arc<Terminal>,
}

#[async_trait]
impl Editor<UserAccount> for UserEditor {
    async fn compose(&self, existing: Option<&UserAccount>) -> Option<Value> {
        let t = &*self.terminal;
        let mut form = FormScreen::<UserDraft>::open(existing);
        let editing = existing.is_some();
        compose_loop!(form, t, |form: &mut FormScreen<UserDraft>| {
            if editing {
                // Username is immutable after creation.
                t.say(&format!("  Username: {}", form.draft().username));
            } else {
                let v = t.prompt_default("Username", &form.draft().username);
                form.edit("username", |d| d.username = v);
            }
            let v = t.prompt_default("First name", &form.draft().first_name);
            form.edit("firstName", |d| d.first_name = v);
            let v = t.prompt_default("Last name", &form.draft().last_name);
            form.edit("lastName", |d| d.last_name = v);
            let v = t.prompt_default("Email", &form.draft().email);
            form.edit("email", |d| d.email = v);
            let v = choose_variant(t, "Role", &Role::ALL, form.draft().role);
            form.edit("role", |d| d.role = v);
            let v = t.prompt_flag("Active", form.draft().active);
            form.edit("active", |d| d.active = v);
            if form.draft().credentials.is_some() {
                let v = t.prompt_default("Password", "");
                form.edit("password", |d| {
                    if let Some(c) = d.credentials.as_mut() {
                        c.password = v;
                    }
                });
                let v = t.prompt_default("Confirm password", "");
                form.edit("confirmPassword", |d| {
                    if let Some(c) = d.credentials.as_mut() {
                        c.confirm_password = v;
                    }
                });
            }
        })
    }
}
