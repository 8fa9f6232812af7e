//! Wire types shared with the Sahay REST backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

/// Account role, fixed at signup.
///
/// The backend's wire value for a requester is `"user"` (historical
/// naming); the UI consistently presents it as "requester".
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(rename = "user")]
    Requester,
    Volunteer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requester => write!(f, "requester"),
            Self::Volunteer => write!(f, "volunteer"),
        }
    }
}

/// Authenticated account record returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// How urgent a help request is; drives badge styling and filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl UrgencyLevel {
    /// Wire value, also used as a CSS modifier suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a form/select value; unknown input falls back to medium,
    /// matching the backend's default.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A help request record as listed by the backend.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HelpRequest {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub urgency_level: UrgencyLevel,
    #[serde(default)]
    pub photo: Option<String>,
    pub created_at: String,
    pub user_id: i64,
}

impl HelpRequest {
    /// Case-insensitive match against title, description, or location.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
    }
}

/// Bearer token issued by `POST /login`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Signup payload for `POST /signup`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub username: String,
    pub phone_number: String,
    pub role: Role,
}

/// Created-account response from `POST /signup`; extra fields ignored.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SignupResponse {
    pub id: i64,
}

/// Fields of a new help request, minus the optional photo attachment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewHelpRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub urgency_level: UrgencyLevel,
}

impl NewHelpRequest {
    /// Client-side validation: all text fields must be non-blank.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("title")
        } else if self.description.trim().is_empty() {
            Some("description")
        } else if self.location.trim().is_empty() {
            Some("location")
        } else {
            None
        }
    }
}
