//! Data models for API requests, responses, and backend payloads.
//!
//! `request` and `response` describe a single call on the wire. The remaining
//! modules mirror the JSON documents the backend reads and writes.

pub mod admin;
pub mod listing;
pub mod request;
pub mod response;
pub mod supply;
pub mod transaction;
pub mod user;

pub use admin::AdminStats;
pub use listing::{Listing, ListingFilter, ListingStatus, ListingUpdate, NewListing};
pub use request::{ApiRequest, HttpMethod};
pub use response::{ApiFailure, ApiOutcome, ApiResponse};
pub use supply::{NewSupply, Supply, SupplyCategory, SupplyFilter};
pub use transaction::{NewTransaction, Transaction, TransactionFilter, TransactionStatus};
pub use user::{
    AdminUser, AuthSuccess, LoginRequest, SignupRequest, User, UserStatus, UserType, UserUpdate,
};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Response of the create endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Created {
    pub success: bool,
    pub id: i64,
}

/// Response of endpoints that only acknowledge, such as logout and updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

/// Parses a backend timestamp such as `2024-03-01 09:15:00` or
/// `2024-03-01T09:15:00.123456`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
}
