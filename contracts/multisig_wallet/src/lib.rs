#![no_std]

mod confirmations;
mod errors;
mod events;
mod governance;
mod ledger;
mod multisig;
mod owners;
mod pause;
mod quorum;
mod storage;
mod types;

pub use errors::MultisigError;
pub use events::*;
pub use multisig::*;
pub use types::{Call, DataKey, ExecutionOutcome, Transaction};
