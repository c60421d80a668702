//! Crop listings published by farmers.

use super::parse_timestamp;
use crate::executor::ClientError;
use crate::query::QueryParams;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Review state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A crop offered for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub farmer_id: i64,
    pub farmer_name: String,
    pub crop: String,
    pub quantity_kg: f64,
    pub price_per_kg: f64,
    pub status: ListingStatus,
    #[serde(default)]
    pub accepted_by: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub accepted_at: Option<String>,
}

impl Listing {
    /// Total asking price of the listing.
    pub fn total_price(&self) -> f64 {
        self.quantity_kg * self.price_per_kg
    }

    pub fn created_at_time(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// When a vendor accepted the listing; `None` while it is pending.
    pub fn accepted_at_time(&self) -> Option<NaiveDateTime> {
        self.accepted_at.as_deref().and_then(parse_timestamp)
    }
}

/// Body of `POST /listings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub crop: String,
    pub quantity_kg: f64,
    pub price_per_kg: f64,
}

/// Body of `PUT /listings/{id}`.
///
/// Accepting a listing records the caller as the buyer on the server side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
}

impl ListingUpdate {
    pub fn status(status: ListingStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}

/// Filters understood by `GET /listings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<i64>,
}

impl ListingFilter {
    pub fn to_query(&self) -> Result<QueryParams, ClientError> {
        QueryParams::from_serialize(self)
    }
}
