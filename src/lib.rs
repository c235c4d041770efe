pub mod account;
pub mod clock;
pub mod domain;
pub mod interest;
pub mod ledger;
pub mod output;
pub mod parsing;
