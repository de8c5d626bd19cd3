use serde::Serialize;

use shared_screens::validate::{is_email, is_mobile, non_blank};
use shared_screens::{FormModel, Rule};

use crate::models::Dentist;

#[derive(Debug, Clone)]
pub struct DentistDraft {
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub email: String,
    pub mobile_number: String,
    pub specializations: Vec<String>,
    pub active: bool,
    pub chief_dentist: bool,
    pub qualification: String,
    pub experience_years: String,
    pub consultation_fee: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DentistPayload {
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub email: String,
    pub mobile_number: String,
    pub specializations: Vec<String>,
    pub active: bool,
    pub chief_dentist: bool,
    pub qualification: String,
    pub experience_years: Option<i32>,
    pub consultation_fee: String,
}

impl FormModel for DentistDraft {
    type Entity = Dentist;
    type Payload = DentistPayload;

    fn from_entity(entity: Option<&Dentist>) -> Self {
        match entity {
            Some(dentist) => Self {
                first_name: dentist.first_name.clone(),
                last_name: dentist.last_name.clone(),
                license_number: dentist.license_number.clone(),
                email: dentist.email.clone(),
                mobile_number: dentist.mobile_number.clone(),
                specializations: dentist.specializations.clone().unwrap_or_default(),
                active: dentist.active,
                chief_dentist: dentist.chief_dentist,
                qualification: dentist.qualification.clone().unwrap_or_default(),
                experience_years: dentist
                    .experience_years
                    .map(|y| y.to_string())
                    .unwrap_or_default(),
                consultation_fee: dentist.consultation_fee.clone().unwrap_or_default(),
            },
            None => Self {
                first_name: String::new(),
                last_name: String::new(),
                license_number: String::new(),
                email: String::new(),
                mobile_number: String::new(),
                specializations: Vec::new(),
                active: true,
                chief_dentist: false,
                qualification: String::new(),
                experience_years: String::new(),
                consultation_fee: String::new(),
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
            Rule::new("licenseNumber", "License number is required", |d| {
                non_blank(&d.license_number)
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
            Rule::new(
                "specializations",
                "At least one specialization is required",
                |d| !d.specializations.is_empty(),
            ),
        ]
    }

    fn normalize(&self) -> DentistPayload {
        DentistPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            license_number: self.license_number.clone(),
            email: self.email.clone(),
            mobile_number: self.mobile_number.clone(),
            specializations: self.specializations.clone(),
            active: self.active,
            chief_dentist: self.chief_dentist,
            qualification: self.qualification.clone(),
            experience_years: self.experience_years.trim().parse().ok(),
            consultation_fee: self.consultation_fee.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_screens::FormScreen;

    fn filled_form() -> FormScreen<DentistDraft> {
        let mut form = FormScreen::<DentistDraft>::open(None);
        form.edit("firstName", |d| d.first_name = "Meera".to_string());
        form.edit("lastName", |d| d.last_name = "Shah".to_string());
        form.edit("licenseNumber", |d| d.license_number = "DL-2041".to_string());
        form.edit("email", |d| d.email = "meera.shah@navident.com".to_string());
        form.edit("mobileNumber", |d| d.mobile_number = "9000000001".to_string());
        form
    }

    #[test]
    fn empty_specializations_block_submission() {
        let mut form = filled_form();

        assert!(form.submit().is_none());
        assert_eq!(
            form.errors().get("specializations"),
            Some("At least one specialization is required")
        );
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn adding_one_specialization_unblocks_and_carries_it_through() {
        let mut form = filled_form();
        assert!(form.submit().is_none());

        form.edit("specializations", |d| {
            d.specializations = vec!["Orthodontics".to_string()]
        });
        let payload = form.submit().expect("one specialization suffices");

        assert_eq!(payload.specializations, vec!["Orthodontics".to_string()]);
        assert!(payload.active);
        assert!(!payload.chief_dentist);
    }

    #[test]
    fn experience_years_coerces_to_a_number_or_none() {
        let mut form = filled_form();
        form.edit("specializations", |d| {
            d.specializations = vec!["Endodontics".to_string()]
        });
        form.edit("experienceYears", |d| d.experience_years = "12".to_string());

        let payload = form.submit().unwrap();
        assert_eq!(payload.experience_years, Some(12));

        let mut form = filled_form();
        form.edit("specializations", |d| {
            d.specializations = vec!["Endodontics".to_string()]
        });
        let payload = form.submit().unwrap();
        assert_eq!(payload.experience_years, None);
    }

    #[test]
    fn draft_round_trips_an_existing_dentist() {
        let dentist = Dentist {
            id: "d-1".to_string(),
            first_name: "Meera".to_string(),
            last_name: "Shah".to_string(),
            license_number: "DL-2041".to_string(),
            email: "meera.shah@navident.com".to_string(),
            mobile_number: "9000000001".to_string(),
            specializations: Some(vec![
                "Orthodontics".to_string(),
                "Dental Implants".to_string(),
            ]),
            active: false,
            chief_dentist: true,
            qualification: Some("BDS, MDS".to_string()),
            experience_years: Some(15),
            consultation_fee: Some("750".to_string()),
            created_at: None,
            updated_at: None,
        };

        let draft = DentistDraft::from_entity(Some(&dentist));

        assert_eq!(draft.specializations.len(), 2);
        assert!(!draft.active);
        assert!(draft.chief_dentist);
        assert_eq!(draft.qualification, "BDS, MDS");
        assert_eq!(draft.experience_years, "15");
        assert_eq!(draft.consultation_fee, "750");
    }
}
