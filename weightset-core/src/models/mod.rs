//! Request and result types exchanged with callers.

pub mod balance;
pub mod redistribution;
pub mod request;

pub use balance::BalanceReport;
pub use redistribution::{Redistribution, RedistributionOutcome};
pub use request::WeightChangeRequest;
