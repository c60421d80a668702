//! Farm supplies sold by vendors.

use super::parse_timestamp;
use crate::executor::ClientError;
use crate::query::QueryParams;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplyCategory {
    Fertilizer,
    Pesticide,
    Seeds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    pub id: i64,
    pub vendor_id: i64,
    pub vendor_name: String,
    pub name: String,
    pub category: SupplyCategory,
    pub price: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Supply {
    pub fn created_at_time(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

/// Body of `POST /supplies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSupply {
    pub name: String,
    pub category: SupplyCategory,
    pub price: f64,
}

/// Filters understood by `GET /supplies`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplyFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<i64>,
}

impl SupplyFilter {
    pub fn vendor(vendor_id: i64) -> Self {
        Self {
            vendor_id: Some(vendor_id),
        }
    }

    pub fn to_query(&self) -> Result<QueryParams, ClientError> {
        QueryParams::from_serialize(self)
    }
}
