use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::{DomainError, Transaction};

/// Append-only, chronologically ordered record of an account's transactions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionLog(Vec<Transaction>);

impl TransactionLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }
    pub fn as_slice(&self) -> &[Transaction] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.0.last().map(Transaction::timestamp)
    }
    /// Sum of all signed amounts.
    pub fn balance(&self) -> Decimal {
        self.0.iter().map(Transaction::amount).sum()
    }
    /// Rejects transactions that would break chronological order.
    pub fn append(&mut self, transaction: Transaction) -> Result<(), DomainError> {
        if let Some(last) = self.last_timestamp().filter(|last| transaction.timestamp() < *last) {
            return Err(DomainError::OutOfOrder {
                attempted: transaction.timestamp(),
                last,
            });
        }
        self.0.push(transaction);
        Ok(())
    }
}
