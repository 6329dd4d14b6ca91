use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A charge object exactly as the provider returned it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCharge {
    pub data: HashMap<String, serde_json::Value>,
}

impl RawCharge {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key).filter(|v| !v.is_null())
    }
}

/// List envelope of `GET /v1/charges`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChargeList {
    #[serde(default)]
    pub data: Option<Vec<RawCharge>>,
    #[serde(default)]
    pub has_more: Option<bool>,
}

impl ChargeList {
    pub fn has_more(&self) -> bool {
        self.has_more.unwrap_or(false)
    }

    pub fn into_charges(self) -> Vec<RawCharge> {
        self.data.unwrap_or_default()
    }
}

pub const CSV_HEADERS: [&str; 9] = [
    "id",
    "amount",
    "currency",
    "status",
    "customer",
    "description",
    "created",
    "receipt_email",
    "payment_method",
];

/// One CSV row. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    pub id: String,
    pub amount: String,
    pub currency: String,
    pub status: String,
    pub customer: String,
    pub description: String,
    pub created: String,
    pub receipt_email: String,
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: String, rows: usize },
    Skipped,
}
