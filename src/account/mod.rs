//! A single bank account.
//!
//! The account keeps an append-only transaction log and reads the current time
//! only through its injected [`Clock`]. Balance is always derived from the log.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    clock::Clock,
    domain::{AccountId, CustomerId, DomainError, Transaction},
    interest::{self, AccountType},
    output,
};
pub use types::TransactionLog;

mod types;

#[derive(Debug)]
pub struct Account<C> {
    id: AccountId,
    customer_id: CustomerId,
    account_type: AccountType,
    transactions: TransactionLog,
    clock: C,
}

impl<C: Clock> Account<C> {
    pub fn new(
        account_type: AccountType,
        id: AccountId,
        customer_id: CustomerId,
        clock: C,
    ) -> Self {
        Self {
            id,
            customer_id,
            account_type,
            transactions: TransactionLog::new(),
            clock,
        }
    }

    pub fn maxi_savings(id: AccountId, customer_id: CustomerId, clock: C) -> Self {
        Self::new(AccountType::MaxiSavings, id, customer_id, clock)
    }

    pub fn id(&self) -> AccountId {
        self.id
    }
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
    pub fn account_type(&self) -> AccountType {
        self.account_type
    }
    pub fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn balance(&self) -> Decimal {
        self.transactions.balance()
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        check_amount(amount)?;
        self.balance()
            .checked_add(amount)
            .ok_or(DomainError::BalanceOverflow)?;
        self.transactions
            .append(Transaction::deposit(amount, self.clock.now()))?;
        debug!(account = %self.id, %amount, "deposit recorded");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), DomainError> {
        check_amount(amount)?;
        if amount > self.balance() {
            return Err(DomainError::InsufficientFunds);
        }
        self.transactions
            .append(Transaction::withdrawal(amount, self.clock.now()))?;
        debug!(account = %self.id, %amount, "withdrawal recorded");
        Ok(())
    }

    /// Interest accrued up to the clock's current time, at full precision.
    pub fn calculate_interest_earned(&self) -> Decimal {
        interest::interest_earned(
            self.account_type,
            self.transactions.as_slice(),
            self.clock.now(),
        )
    }

    pub fn statement(&self) -> String {
        output::statement(self)
    }
}

/// Guard: deposits and withdrawals must move a strictly positive amount.
fn check_amount(amount: Decimal) -> Result<(), DomainError> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::InvalidAmount);
    }
    Ok(())
}
