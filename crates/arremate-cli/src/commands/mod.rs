pub mod ledger;
pub mod parse;
pub mod process;
