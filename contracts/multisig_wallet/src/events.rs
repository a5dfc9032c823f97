//! Audit events. None of these carry authorization meaning.

use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxProposed {
    #[topic]
    pub tx_id: u64,
    pub proposer: Address,
    pub target: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxConfirmed {
    #[topic]
    pub tx_id: u64,
    pub owner: Address,
    pub confirmations: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxRevoked {
    #[topic]
    pub tx_id: u64,
    pub owner: Address,
    pub confirmations: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxExecuted {
    #[topic]
    pub tx_id: u64,
    pub executor: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxExecutionFailed {
    #[topic]
    pub tx_id: u64,
    /// Always `MultisigError::TxFailed`.
    #[topic]
    pub error: u32,
    pub executor: Address,
    /// Code of the underlying failure. Equal to `error` for external targets,
    /// the rejecting `MultisigError` for self-administered calls.
    pub cause: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerAdded {
    #[topic]
    pub owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerRemoved {
    #[topic]
    pub owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinSignaturesChanged {
    pub min_signatures: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChanged {
    #[topic]
    pub paused: bool,
}
