use soroban_sdk::{Address, Env, String};

use crate::errors::MultisigError;
use crate::storage;
use crate::types::{Call, DataKey, Transaction};

/// Append-only transaction store. Indices are zero-based and never reused.
pub struct TransactionLedger;

impl TransactionLedger {
    pub fn count(env: &Env) -> u64 {
        env.storage().instance().get(&DataKey::TxCount).unwrap_or(0u64)
    }

    /// Appends a fresh record with no confirmations and returns its index.
    pub fn append(
        env: &Env,
        proposer: Address,
        target: Address,
        call: Call,
        description: String,
    ) -> u64 {
        let tx_id = Self::count(env);
        env.storage().instance().set(&DataKey::TxCount, &(tx_id + 1));

        let tx = Transaction {
            id: tx_id,
            proposer,
            target,
            call,
            description,
            confirmations: 0,
            executed: false,
        };
        Self::store(env, &tx);

        tx_id
    }

    pub fn get(env: &Env, tx_id: u64) -> Result<Transaction, MultisigError> {
        if tx_id >= Self::count(env) {
            return Err(MultisigError::TxDoesNotExist);
        }
        env.storage()
            .persistent()
            .get(&DataKey::Transaction(tx_id))
            .ok_or(MultisigError::TxDoesNotExist)
    }

    /// Loads a transaction that may still change state.
    pub fn get_pending(env: &Env, tx_id: u64) -> Result<Transaction, MultisigError> {
        let tx = Self::get(env, tx_id)?;
        if tx.executed {
            return Err(MultisigError::TxAlreadyExecuted);
        }
        Ok(tx)
    }

    pub fn store(env: &Env, tx: &Transaction) {
        let key = DataKey::Transaction(tx.id);
        env.storage().persistent().set(&key, tx);
        storage::bump_persistent(env, &key);
    }
}
