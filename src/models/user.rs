use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hr,
    Applicant,
}

impl Role {
    /// Landing path for the role after login or a role-mismatch redirect.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Hr => "/hr",
            Role::Applicant => "/applicant",
        }
    }

    /// Wire value, as sent in the register form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hr => "hr",
            Role::Applicant => "applicant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
    pub name: String,
}

impl User {
    /// Builds the session user from an auth response. The API omits the
    /// display name, so it falls back to the email local-part.
    pub fn from_auth(id: i64, email: &str, role: Role, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| {
            email
                .split('@')
                .next()
                .unwrap_or(email)
                .to_string()
        });
        Self {
            id,
            email: email.to_string(),
            role,
            name,
        }
    }
}
