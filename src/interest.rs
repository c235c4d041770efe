//! Interest accrual.
//!
//! Interest is accrued one whole day at a time, starting on the day of the
//! account's first transaction and stopping before the current day. Each day the
//! day's transactions are applied first, then the day's interest is computed on
//! the balance plus everything accrued so far (daily compounding, actual/365).

use chrono::{DateTime, Utc};
use derive_more::Display;
use rust_decimal::{Decimal, dec};
use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, TransactionKind};

const DAYS_PER_YEAR: Decimal = dec!(365);

/// Number of accrual days, starting with the withdrawal's own day, during which a
/// withdrawal counts as recent.
pub const RECENT_WITHDRAWAL_DAYS: i64 = 10;

/// Savings accounts earn the lower rate on this much of the balance.
const SAVINGS_FIRST_TIER: Decimal = dec!(1000);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AccountType {
    #[display("Checking")]
    Checking,
    #[display("Savings")]
    Savings,
    #[display("Maxi-Savings")]
    MaxiSavings,
}

impl AccountType {
    /// Annual interest on `base`. Only Maxi-Savings looks at withdrawal history.
    fn annual_interest(&self, base: Decimal, recent_withdrawal: bool) -> Decimal {
        match self {
            AccountType::Checking => base * dec!(0.001),
            AccountType::Savings => {
                let first_tier = base.min(SAVINGS_FIRST_TIER);
                first_tier * dec!(0.001) + (base - first_tier) * dec!(0.002)
            }
            AccountType::MaxiSavings if recent_withdrawal => base * dec!(0.01),
            AccountType::MaxiSavings => base * dec!(0.05),
        }
    }

    fn daily_interest(&self, base: Decimal, recent_withdrawal: bool) -> Decimal {
        self.annual_interest(base, recent_withdrawal) / DAYS_PER_YEAR
    }
}

/// Whole days between `start` and `at`, rounded towards zero.
fn day_index(start: DateTime<Utc>, at: DateTime<Utc>) -> i64 {
    (at - start).num_days()
}

/// Interest earned by an account of `account_type` with the given transaction
/// history, evaluated at `now`.
///
/// `transactions` must be in chronological order. The result is never negative
/// and is zero when no full day has elapsed since the first transaction. Spans
/// long enough to exceed the `Decimal` range saturate at `Decimal::MAX`.
pub fn interest_earned(
    account_type: AccountType,
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> Decimal {
    let Some(first) = transactions.first() else {
        return Decimal::ZERO;
    };
    let start = first.timestamp();
    let accrual_days = day_index(start, now);

    let mut pending = transactions.iter().peekable();
    let mut balance = Decimal::ZERO;
    let mut interest = Decimal::ZERO;
    let mut last_withdrawal_day: Option<i64> = None;

    for day in 0..accrual_days {
        while let Some(tx) = pending.next_if(|tx| day_index(start, tx.timestamp()) <= day) {
            balance = balance.saturating_add(tx.amount());
            if tx.kind() == TransactionKind::Withdrawal {
                last_withdrawal_day = Some(day_index(start, tx.timestamp()));
            }
        }

        let recent_withdrawal =
            last_withdrawal_day.is_some_and(|withdrawn| day - withdrawn < RECENT_WITHDRAWAL_DAYS);

        let base = balance.saturating_add(interest);
        if base > Decimal::ZERO {
            let daily = account_type.daily_interest(base, recent_withdrawal);
            interest = interest.saturating_add(daily);
        }
        // saturated; further days cannot add anything
        if interest == Decimal::MAX {
            break;
        }
    }

    interest
}
