use serde::Serialize;

use shared_models::auth::Role;
use shared_screens::validate::{is_email, non_blank};
use shared_screens::{FormModel, Rule};

use crate::models::UserAccount;

/// Password fields exist only while creating an account; edit drafts carry
/// no credentials at all, so password changes must go through the separate
/// change-password flow.
#[derive(Debug, Clone, Default)]
pub struct CredentialsDraft {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone)]
pub struct UserDraft {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    pub credentials: Option<CredentialsDraft>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl FormModel for UserDraft {
    type Entity = UserAccount;
    type Payload = UserPayload;

    fn from_entity(entity: Option<&UserAccount>) -> Self {
        match entity {
            Some(user) => Self {
                username: user.username.clone(),
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                email: user.email.clone(),
                role: user.role,
                active: user.active,
                credentials: None,
            },
            None => Self {
                username: String::new(),
                first_name: String::new(),
                last_name: String::new(),
                email: String::new(),
                role: Role::ClinicAssistant,
                active: true,
                credentials: Some(CredentialsDraft::default()),
            },
        }
    }

    fn rules() -> Vec<Rule<Self>> {
        vec![
            Rule::new("username", "Username is required", |d| {
                non_blank(&d.username)
            }),
            Rule::new("username", "Username must be at least 3 characters", |d| {
                !non_blank(&d.username) || d.username.len() >= 3
            }),
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
            Rule::new("password", "Password is required", |d| {
                d.credentials
                    .as_ref()
                    .map_or(true, |c| !c.password.is_empty())
            }),
            Rule::new("password", "Password must be at least 6 characters", |d| {
                d.credentials
                    .as_ref()
                    .map_or(true, |c| c.password.is_empty() || c.password.len() >= 6)
            }),
            Rule::new("confirmPassword", "Confirm password is required", |d| {
                d.credentials
                    .as_ref()
                    .map_or(true, |c| !c.confirm_password.is_empty())
            }),
            Rule::new("confirmPassword", "Passwords do not match", |d| {
                d.credentials.as_ref().map_or(true, |c| {
                    c.confirm_password.is_empty() || c.password == c.confirm_password
                })
            }),
        ]
    }

    fn normalize(&self) -> UserPayload {
        UserPayload {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            role: self.role,
            active: self.active,
            // Updates never carry a password; changes go through the
            // dedicated flow instead.
            password: self.credentials.as_ref().map(|c| c.password.clone()),
        }
    }
}

/// The standalone change-password dialog for an existing account.
#[derive(Debug, Clone, Default)]
pub struct PasswordChangeDraft {
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChangePayload {
    pub password: String,
}

impl PasswordChangeDraft {
    pub fn rules() -> Vec<Rule<Self>> {
        vec![
            Rule::new("newPassword", "New password is required", |d| {
                !d.new_password.is_empty()
            }),
            Rule::new(
                "newPassword",
                "Password must be at least 6 characters",
                |d| d.new_password.is_empty() || d.new_password.len() >= 6,
            ),
            Rule::new("confirmPassword", "Confirm password is required", |d| {
                !d.confirm_password.is_empty()
            }),
            Rule::new("confirmPassword", "Passwords do not match", |d| {
                d.confirm_password.is_empty() || d.new_password == d.confirm_password
            }),
        ]
    }

    /// Validate the pair; on success only the password travels.
    pub fn submit(&self) -> Result<PasswordChangePayload, Vec<(&'static str, &'static str)>> {
        let failures: Vec<_> = Self::rules()
            .into_iter()
            .filter(|rule| !(rule.check)(self))
            .map(|rule| (rule.field, rule.message))
            .collect();

        if failures.is_empty() {
            Ok(PasswordChangePayload {
                password: self.new_password.clone(),
            })
        } else {
            Err(failures)
        }
    }
}
