use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a surfaced record. Every record starts as `New`;
/// downstream consumers move it along from there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    New,
    Reviewed,
    Discarded,
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::New => write!(f, "new"),
            RecordStatus::Reviewed => write!(f, "reviewed"),
            RecordStatus::Discarded => write!(f, "discarded"),
        }
    }
}

/// One accepted property lot extracted from an auction notice.
///
/// `lot_id` is unique within its source document, not across a batch.
/// `provision` is always `auction_value_1 - auction_value_2` rounded to
/// 2 decimal places; a record only exists if it met the acceptance rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub lot_id: u32,
    /// Two-letter state code, or empty if no header preceded this lot.
    pub state: String,
    /// City name carried forward from the nearest preceding header.
    pub city: String,
    pub address_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_id: Option<String>,
    pub auction_value_1: Decimal,
    pub auction_value_2: Decimal,
    pub provision: Decimal,
    pub source_document: String,
    pub status: RecordStatus,
}
