//! API models for request and response payloads

use serde::{Deserialize, Serialize};

/// Persisted user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub create_at: String,
}

/// Validated registration input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Public view of a freshly registered user. The password is never echoed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisteredUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Inner payload of a successful registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationData {
    pub user: RegisteredUser,
    #[serde(rename = "request-date")]
    pub request_date: String,
}

/// Response for user registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationResponse {
    pub data: RegistrationData,
}

/// Stored fields returned by a lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub create_at: String,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            password: user.password,
            create_at: user.create_at,
        }
    }
}

/// Response for user lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupResponse {
    pub user: UserRecord,
}

/// Query parameters for user lookup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupQuery {
    pub id: Option<String>,
}
