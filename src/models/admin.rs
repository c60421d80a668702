//! Dashboard figures for administrators.

use serde::{Deserialize, Serialize};

/// Response of `GET /admin/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    /// Active accounts, excluding administrators.
    pub active_users: u64,
    pub blocked_users: u64,
    pub farmers: u64,
    pub vendors: u64,
    pub total_transactions: u64,
    pub successful_transactions: u64,
    pub total_revenue: f64,
    pub pending_transactions: u64,
    pub failed_transactions: u64,
}
