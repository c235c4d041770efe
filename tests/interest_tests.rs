mod common;

use common::{account, at, clock};
use maxi_savings::domain::Transaction;
use maxi_savings::interest::{AccountType, interest_earned};
use rust_decimal::{Decimal, dec};

#[test]
fn checking_earns_a_tenth_of_a_percent() {
    let clock = clock();
    let mut account = account(AccountType::Checking, &clock);

    account.deposit(dec!(1000)).unwrap();
    clock.set(at("01-08-2018 12:20:57"));

    assert_eq!(account.calculate_interest_earned().round_dp(2), dec!(1.00));
}

#[test]
fn savings_rate_is_higher_above_first_thousand() {
    let clock = clock();
    let mut account = account(AccountType::Savings, &clock);

    account.deposit(dec!(3000)).unwrap();
    clock.set(at("01-08-2018 12:20:57"));

    assert_eq!(account.calculate_interest_earned().round_dp(2), dec!(5.00));
}

#[test]
fn savings_below_first_thousand_uses_lower_rate_only() {
    let clock = clock();
    let mut account = account(AccountType::Savings, &clock);

    account.deposit(dec!(500)).unwrap();
    clock.set(at("01-08-2018 12:20:57"));

    assert_eq!(account.calculate_interest_earned().round_dp(2), dec!(0.50));
}

#[test]
fn checking_ignores_recent_withdrawals() {
    let with_withdrawal = [
        Transaction::deposit(dec!(1100), at("01-08-2017 12:20:57")),
        Transaction::withdrawal(dec!(100), at("01-08-2017 12:20:57")),
    ];
    let without_withdrawal = [Transaction::deposit(dec!(1000), at("01-08-2017 12:20:57"))];
    let now = at("01-08-2018 12:20:57");

    assert_eq!(
        interest_earned(AccountType::Checking, &with_withdrawal, now),
        interest_earned(AccountType::Checking, &without_withdrawal, now)
    );
}

#[test]
fn evaluating_before_first_transaction_earns_nothing() {
    let transactions = [Transaction::deposit(dec!(1000), at("01-08-2017 12:20:57"))];

    assert_eq!(
        interest_earned(AccountType::MaxiSavings, &transactions, at("01-07-2017 12:20:57")),
        Decimal::ZERO
    );
}

#[test]
fn account_type_labels() {
    assert_eq!(AccountType::Checking.to_string(), "Checking");
    assert_eq!(AccountType::Savings.to_string(), "Savings");
    assert_eq!(AccountType::MaxiSavings.to_string(), "Maxi-Savings");
}

#[test]
fn interest_over_centuries_saturates_instead_of_overflowing() {
    let transactions = [Transaction::deposit(dec!(1000000), at("01-01-0900 00:00:00"))];

    assert_eq!(
        interest_earned(AccountType::MaxiSavings, &transactions, at("01-01-2017 00:00:00")),
        Decimal::MAX
    );
}

#[test]
fn interest_over_a_millennium_stays_below_the_limit() {
    let transactions = [Transaction::deposit(dec!(1000000), at("01-01-1000 00:00:00"))];

    let interest =
        interest_earned(AccountType::MaxiSavings, &transactions, at("01-01-2017 00:00:00"));

    assert!(interest > Decimal::ZERO);
    assert!(interest < Decimal::MAX);
}
