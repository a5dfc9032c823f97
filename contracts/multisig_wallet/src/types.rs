use soroban_sdk::{contracttype, Address, String, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owners,
    OwnerIndex(Address),
    MinSignatures,
    Paused,
    TxCount,
    Transaction(u64),
    Confirmation(u64, Address),
    SelfExecution,
}

/// Invocation payload carried by a transaction: the function to call on the
/// target and its arguments.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    pub function: Symbol,
    pub args: Vec<Val>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub proposer: Address,
    pub target: Address,
    pub call: Call,
    pub description: String,
    pub confirmations: u32,
    pub executed: bool,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExecutionOutcome {
    Succeeded,
    /// The underlying call failed. The transaction is consumed anyway.
    Failed,
}
