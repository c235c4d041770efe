use std::fs::File;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;

use maxi_savings::account::Account;
use maxi_savings::clock::{Clock, ManualClock, SystemClock};
use maxi_savings::interest::AccountType;
use maxi_savings::ledger;
use maxi_savings::output;
use maxi_savings::parsing;

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    if let Some(log_level) = args.log_level {
        tracing_subscriber::fmt().with_max_level(log_level).init();
    }

    let file = File::open(&args.input_file)
        .with_context(|| format!("opening ledger {}", args.input_file))?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let clock = ManualClock::new(SystemClock.now());
    let mut account = Account::new(
        args.account_type,
        args.account_id.into(),
        args.customer_id.into(),
        &clock,
    );

    let recorded = ledger::replay(&mut account, &clock, parsing::deserialize_csv(&mut rdr));
    info!(recorded, "ledger replayed");

    clock.set(args.as_of.unwrap_or_else(|| SystemClock.now()));
    output::print_statement(&account, std::io::stdout())
}

#[derive(Parser)]
struct Arguments {
    input_file: String,
    log_level: Option<tracing::Level>,
    #[arg(long, value_enum, default_value_t = AccountType::MaxiSavings)]
    account_type: AccountType,
    /// Instant to evaluate interest at (RFC 3339). Defaults to now.
    #[arg(long)]
    as_of: Option<DateTime<Utc>>,
    #[arg(long, default_value_t = 1)]
    account_id: u32,
    #[arg(long, default_value_t = 1)]
    customer_id: u32,
}
