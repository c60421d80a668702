//! Account payloads for the auth and admin endpoints.

use super::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role an account is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    Farmer,
    Vendor,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Farmer => "Farmer",
            UserType::Vendor => "Vendor",
            UserType::Admin => "Admin",
        }
    }

    /// Parses a role name, ignoring case.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "farmer" => Some(UserType::Farmer),
            "vendor" => Some(UserType::Vendor),
            "admin" => Some(UserType::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an account may log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Blocked,
}

/// The public view of an account, as returned by signup, login and `/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

/// An account row as listed by the admin endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub status: UserStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl AdminUser {
    /// Account creation time, if the backend reported a parseable one.
    pub fn created_at_time(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Time of the last successful login. `None` for accounts that never
    /// logged in.
    pub fn last_login_time(&self) -> Option<NaiveDateTime> {
        self.last_login.as_deref().and_then(parse_timestamp)
    }
}

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

/// Successful signup or login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSuccess {
    pub success: bool,
    pub user: User,
}

/// Body of `PUT /admin/users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub status: UserStatus,
}
