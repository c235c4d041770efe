//! CSV ledger deserialization.
//!
//! Each row carries `type,timestamp,amount`. Serde deserializes the row into a
//! flat `CsvEntry`, which is then converted into a [`LedgerEntry`].
//!
//! Malformed rows are logged and skipped.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{domain::TransactionKind, ledger::LedgerEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CsvEntry {
    r#type: TransactionKind,
    timestamp: DateTime<Utc>,
    amount: Option<Decimal>,
}

#[derive(Debug, thiserror::Error)]
pub enum IntoEntryError {
    #[error("Missing amount for {0} at {1}")]
    MissingAmount(&'static str, DateTime<Utc>),
}

impl TryFrom<CsvEntry> for LedgerEntry {
    type Error = IntoEntryError;

    fn try_from(value: CsvEntry) -> Result<Self, Self::Error> {
        let amount = value
            .amount
            .ok_or(IntoEntryError::MissingAmount(value.r#type.label(), value.timestamp))?;
        Ok(LedgerEntry {
            kind: value.r#type,
            timestamp: value.timestamp,
            amount,
        })
    }
}

/// Returns an iterator that lazily deserializes CSV rows into ledger entries,
/// skipping any rows that fail to parse or convert.
pub fn deserialize_csv<D: std::io::Read>(
    reader: &mut csv::Reader<D>,
) -> impl Iterator<Item = LedgerEntry> {
    reader
        .deserialize::<CsvEntry>()
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Failed to parse ledger row: {e}");
                None
            }
        })
        .filter_map(|csv_entry| match LedgerEntry::try_from(csv_entry) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Failed to convert ledger row: {e}");
                None
            }
        })
}
