//! Purchases of listings by vendors.

use super::parse_timestamp;
use crate::executor::ClientError;
use crate::query::QueryParams;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Success,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub listing_id: i64,
    pub farmer_id: i64,
    pub vendor_id: i64,
    pub crop: String,
    pub quantity_kg: f64,
    pub price_per_kg: f64,
    pub amount: f64,
    pub status: TransactionStatus,
    pub method: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Transaction {
    /// When the payment was recorded. Backend timestamps carry microseconds.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }
}

/// Body of `POST /transactions`. The vendor is taken from the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub listing_id: i64,
    pub farmer_id: i64,
    pub crop: String,
    pub quantity_kg: f64,
    pub price_per_kg: f64,
    pub amount: f64,
}

impl NewTransaction {
    /// Builds a purchase of the whole listing at its asking price.
    pub fn for_listing(listing: &super::Listing) -> Self {
        Self {
            listing_id: listing.id,
            farmer_id: listing.farmer_id,
            crop: listing.crop.clone(),
            quantity_kg: listing.quantity_kg,
            price_per_kg: listing.price_per_kg,
            amount: listing.total_price(),
        }
    }
}

/// Filters understood by `GET /transactions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<i64>,
}

impl TransactionFilter {
    pub fn vendor(vendor_id: i64) -> Self {
        Self {
            vendor_id: Some(vendor_id),
        }
    }

    pub fn to_query(&self) -> Result<QueryParams, ClientError> {
        QueryParams::from_serialize(self)
    }
}
