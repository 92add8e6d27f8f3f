use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::time;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred";
pub const SESSION_NOT_SAVED_MESSAGE: &str =
    "Signed in, but your browser blocked saving the session";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered; carries its message or the operation fallback.
    #[error("{0}")]
    Backend(String),
    /// No response was received at all.
    #[error("Network error occurred")]
    Network,
    /// Signed in, but the session could not be kept for later requests.
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn from_body(body: Option<ErrorBody>, fallback: &str) -> Self {
        let message = body
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::Backend(message)
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// List endpoints answer `{ "data": [...] }`; mutations may or may not wrap.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Employee,
    Hr,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        if value == "hr" {
            Role::Hr
        } else {
            Role::Employee
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Hr => "hr",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResignationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ResignationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResignationStatus::Pending => "pending",
            ResignationStatus::Approved => "approved",
            ResignationStatus::Rejected => "rejected",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ResignationStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResignationRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub employee_id: String,
    pub lwd: String,
    pub status: ResignationStatus,
}

impl ResignationRequest {
    pub fn last_working_day(&self) -> Option<NaiveDate> {
        time::leading_date(&self.lwd)
    }

    /// Date shown in tables; falls back to the raw backend value.
    pub fn display_lwd(&self) -> String {
        self.last_working_day()
            .map(time::date_input_value)
            .unwrap_or_else(|| self.lwd.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResignRequest {
    pub lwd: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcludeResignationRequest {
    pub resignation_id: String,
    pub approved: bool,
    pub lwd: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitResponse {
    pub question_text: String,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitQuestionnaire {
    pub employee_id: String,
    #[serde(default)]
    pub responses: Vec<ExitResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitResponsesRequest {
    pub responses: Vec<ExitResponse>,
}
