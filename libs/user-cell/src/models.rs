use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use shared_models::auth::Role;
use shared_screens::Entity;

/// A console account. Passwords are write-only: they go out on create and
/// through the change-password flow, and never come back on this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_role() -> Role {
    Role::ClinicAssistant
}

fn default_true() -> bool {
    true
}

impl UserAccount {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for UserAccount {
    const RESOURCE: &'static str = "/users";
    const NOUN: &'static str = "user";
    const NOUN_PLURAL: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }
}
