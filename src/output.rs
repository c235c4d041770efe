//! Renders account statements.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{account::Account, clock::Clock};

/// Formats an amount as dollars: absolute value, two decimals, thousands
/// separators. `-1234.5` renders as `$1,234.50`.
pub fn to_dollars(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}.{cents}")
}

/// Header line, one line per transaction, then the derived total.
pub fn statement<C: Clock>(account: &Account<C>) -> String {
    let mut out = format!(
        "{} Account {} (customer {})\n",
        account.account_type(),
        account.id(),
        account.customer_id()
    );
    for tx in account.transactions().as_slice() {
        out.push_str(&format!(
            "  {} {} {}\n",
            tx.timestamp().format("%Y-%m-%d"),
            tx.kind().label(),
            to_dollars(tx.amount())
        ));
    }
    out.push_str(&format!("Total {}\n", to_dollars(account.balance())));
    out
}

/// Writes the statement followed by the interest accrued so far.
pub fn print_statement<C: Clock>(
    account: &Account<C>,
    mut writer: impl std::io::Write,
) -> anyhow::Result<()> {
    write!(writer, "{}", statement(account))?;
    writeln!(
        writer,
        "Interest earned {}",
        to_dollars(account.calculate_interest_earned())
    )?;
    writer.flush()?;
    Ok(())
}
