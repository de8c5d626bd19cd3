use serde::Serialize;

use shared_screens::validate::{is_email, is_mobile, non_blank};
use shared_screens::{FormModel, Rule};

use crate::models::{Address, Patient};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressDraft {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// The patient form's working copy. Everything is text until submit, exactly
/// as the fields are typed.
#[derive(Debug, Clone)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub gender: String,
    pub blood_group: String,
    pub date_of_birth: String,
    pub allergies: Vec<String>,
    pub address: AddressDraft,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub gender: String,
    pub blood_group: String,
    pub date_of_birth: String,
    pub allergies: Vec<String>,
    pub address: AddressPayload,
}

impl FormModel for PatientDraft {
    type Entity = Patient;
    type Payload = PatientPayload;

    fn from_entity(entity: Option<&Patient>) -> Self {
        match entity {
            Some(patient) => {
                let address = patient.address.clone().unwrap_or_default();
                Self {
                    first_name: patient.first_name.clone(),
                    last_name: patient.last_name.clone(),
                    email: patient.email.clone(),
                    mobile_number: patient.mobile_number.clone(),
                    gender: patient.gender.clone(),
                    blood_group: patient.blood_group.clone().unwrap_or_default(),
                    date_of_birth: patient.date_of_birth.clone().unwrap_or_default(),
                    allergies: patient.allergies.clone().unwrap_or_default(),
                    address: AddressDraft {
                        street: address.street,
                        city: address.city,
                        state: address.state,
                        postal_code: address.postal_code,
                        country: if address.country.is_empty() {
                            "India".to_string()
                        } else {
                            address.country
                        },
                    },
                }
            }
            None => Self {
                first_name: String::new(),
                last_name: String::new(),
                email: String::new(),
                mobile_number: String::new(),
                gender: String::new(),
                blood_group: String::new(),
                date_of_birth: String::new(),
                allergies: Vec::new(),
                address: AddressDraft {
                    country: "India".to_string(),
                    ..AddressDraft::default()
                },
            },
        }
    }

    fn rules() -> Vec<Rule<Self>> {
        vec![
            Rule::new("firstName", "First name is required", |d| {
                non_blank(&d.first_name)
            }),
            Rule::new("lastName", "Last name is required", |d| {
                non_blank(&d.last_name)
            }),
            Rule::new("email", "Email is required", |d| non_blank(&d.email)),
            Rule::new("email", "Invalid email format", |d| {
                !non_blank(&d.email) || is_email(&d.email)
            }),
            Rule::new("mobileNumber", "Mobile number is required", |d| {
                non_blank(&d.mobile_number)
            }),
            Rule::new("mobileNumber", "Mobile number must be 10 digits", |d| {
                !non_blank(&d.mobile_number) || is_mobile(&d.mobile_number)
            }),
            Rule::new("gender", "Gender is required", |d| non_blank(&d.gender)),
        ]
    }

    fn normalize(&self) -> PatientPayload {
        PatientPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            mobile_number: self.mobile_number.clone(),
            gender: self.gender.clone(),
            blood_group: self.blood_group.clone(),
            date_of_birth: self.date_of_birth.clone(),
            allergies: self.allergies.clone(),
            address: AddressPayload {
                street: self.address.street.clone(),
                city: self.address.city.clone(),
                state: self.address.state.clone(),
                postal_code: self.address.postal_code.clone(),
                country: self.address.country.clone(),
            },
        }
    }
}
