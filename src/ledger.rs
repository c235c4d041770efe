//! Replays dated ledger entries through an account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    account::Account,
    clock::{Clock, ManualClock},
    domain::{DomainError, TransactionKind},
};

/// A deposit or withdrawal request, dated with the instant it should be
/// replayed at. The amount is unsigned; validation is left to the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    pub kind: TransactionKind,
    pub timestamp: DateTime<Utc>,
    pub amount: Decimal,
}

impl LedgerEntry {
    pub fn deposit(timestamp: DateTime<Utc>, amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            timestamp,
            amount,
        }
    }
    pub fn withdrawal(timestamp: DateTime<Utc>, amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            timestamp,
            amount,
        }
    }
}

fn apply<C: Clock>(account: &mut Account<C>, entry: &LedgerEntry) -> Result<(), DomainError> {
    match entry.kind {
        TransactionKind::Deposit => account.deposit(entry.amount),
        TransactionKind::Withdrawal => account.withdraw(entry.amount),
    }
}

/// Moves `clock` to each entry's timestamp and applies the entry to `account`,
/// which must be reading time from that same clock. Rejected entries are logged
/// and skipped. Returns the number of entries recorded.
pub fn replay<C: Clock>(
    account: &mut Account<C>,
    clock: &ManualClock,
    entries: impl Iterator<Item = LedgerEntry>,
) -> usize {
    let mut recorded = 0;
    for entry in entries {
        clock.set(entry.timestamp);
        match apply(account, &entry) {
            Ok(()) => recorded += 1,
            Err(e) => warn!(
                "Skipping {} at {}: {e}",
                entry.kind.label(),
                entry.timestamp
            ),
        }
    }
    recorded
}
