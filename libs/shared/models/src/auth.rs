use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Administrator,
    ChiefDentist,
    ClinicAssistant,
    PrintingOnly,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Administrator,
        Role::ChiefDentist,
        Role::ClinicAssistant,
        Role::PrintingOnly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::ChiefDentist => "Chief Dentist",
            Role::ClinicAssistant => "Clinic Assistant",
            Role::PrintingOnly => "Printing Only",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Administrator => "Full system access including user management",
            Role::ChiefDentist => "Clinical management and reporting access",
            Role::ClinicAssistant => "Patient and appointment management",
            Role::PrintingOnly => "View and print reports only",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Administrator => write!(f, "ADMINISTRATOR"),
            Role::ChiefDentist => write!(f, "CHIEF_DENTIST"),
            Role::ClinicAssistant => write!(f, "CLINIC_ASSISTANT"),
            Role::PrintingOnly => write!(f, "PRINTING_ONLY"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_wire_format() {
        let json = serde_json::to_string(&Role::ChiefDentist).unwrap();
        assert_eq!(json, r#""CHIEF_DENTIST""#);
        let role: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, Role::ChiefDentist);
    }

    #[test]
    fn auth_response_parses_backend_payload() {
        let body = r#"{
            "token": "jwt-token",
            "userId": "u-1",
            "username": "admin",
            "email": "admin@navident.com",
            "role": "ADMINISTRATOR"
        }"#;
        let response: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.user_id, "u-1");
        assert_eq!(response.role, Role::Administrator);
    }
}
