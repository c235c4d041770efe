use chrono::{DateTime, NaiveDateTime, Utc};
use maxi_savings::{account::Account, clock::ManualClock, interest::AccountType};
use rust_decimal::{Decimal, dec};

#[allow(dead_code)]
pub const AMOUNT: Decimal = dec!(100000.0);

/// Parses `dd-mm-yyyy hh:mm:ss` as a UTC instant.
pub fn at(date: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(date, "%d-%m-%Y %H:%M:%S")
        .unwrap()
        .and_utc()
}

pub fn clock() -> ManualClock {
    ManualClock::new(at("01-08-2017 12:20:57"))
}

#[allow(dead_code)]
pub fn maxi_savings(clock: &ManualClock) -> Account<&ManualClock> {
    Account::maxi_savings(1.into(), 2.into(), clock)
}

#[allow(dead_code)]
pub fn account(account_type: AccountType, clock: &ManualClock) -> Account<&ManualClock> {
    Account::new(account_type, 1.into(), 2.into(), clock)
}
