//! Core domain types: identifiers, transactions, and domain errors.

use chrono::{DateTime, Utc};
use derive_more::{Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Newtype wrapper for account identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, From, Into, Display)]
pub struct AccountId(u32);

/// Newtype wrapper for the identifier of the customer owning an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, From, Into, Display)]
pub struct CustomerId(u32);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Amount must be greater than zero")]
    InvalidAmount,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Balance would exceed the largest representable amount")]
    BalanceOverflow,
    #[error("Transaction at {attempted} precedes the last recorded one at {last}")]
    OutOfOrder {
        attempted: DateTime<Utc>,
        last: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

/// A recorded movement of money. Positive amounts are deposits, negative amounts
/// are withdrawals. Fields are private so a recorded transaction cannot change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn deposit(amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self { amount, timestamp }
    }
    pub fn withdrawal(amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            amount: -amount,
            timestamp,
        }
    }
    /// Signed amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
    pub fn kind(&self) -> TransactionKind {
        if self.amount.is_sign_negative() {
            TransactionKind::Withdrawal
        } else {
            TransactionKind::Deposit
        }
    }
}
