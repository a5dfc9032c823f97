use soroban_sdk::{log, Address, Env};

use crate::errors::MultisigError;
use crate::events::{TxConfirmed, TxRevoked};
use crate::ledger::TransactionLedger;
use crate::owners::OwnerRegistry;
use crate::storage;
use crate::types::DataKey;

/// Per-(transaction, owner) approval flags. The record's `confirmations`
/// counter always equals the number of flags set for that transaction.
pub struct ConfirmationTracker;

impl ConfirmationTracker {
    pub fn is_confirmed(env: &Env, tx_id: u64, owner: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Confirmation(tx_id, owner.clone()))
            .unwrap_or(false)
    }

    /// Returns the confirmation count after the change.
    pub fn confirm(env: &Env, tx_id: u64, owner: &Address) -> Result<u32, MultisigError> {
        OwnerRegistry::require_owner(env, owner)?;
        let mut tx = TransactionLedger::get_pending(env, tx_id)?;
        if Self::is_confirmed(env, tx_id, owner) {
            return Err(MultisigError::TxAlreadyConfirmed);
        }

        Self::set_flag(env, tx_id, owner, true);
        tx.confirmations += 1;
        TransactionLedger::store(env, &tx);

        log!(env, "tx confirmed", tx_id, owner.clone(), tx.confirmations);
        TxConfirmed {
            tx_id,
            owner: owner.clone(),
            confirmations: tx.confirmations,
        }
        .publish(env);

        Ok(tx.confirmations)
    }

    /// Returns the confirmation count after the change.
    pub fn revoke(env: &Env, tx_id: u64, owner: &Address) -> Result<u32, MultisigError> {
        OwnerRegistry::require_owner(env, owner)?;
        let mut tx = TransactionLedger::get_pending(env, tx_id)?;
        if !Self::is_confirmed(env, tx_id, owner) {
            return Err(MultisigError::TxNotConfirmed);
        }

        Self::set_flag(env, tx_id, owner, false);
        tx.confirmations -= 1;
        TransactionLedger::store(env, &tx);

        log!(env, "tx revoked", tx_id, owner.clone(), tx.confirmations);
        TxRevoked {
            tx_id,
            owner: owner.clone(),
            confirmations: tx.confirmations,
        }
        .publish(env);

        Ok(tx.confirmations)
    }

    fn set_flag(env: &Env, tx_id: u64, owner: &Address, confirmed: bool) {
        let key = DataKey::Confirmation(tx_id, owner.clone());
        if confirmed {
            env.storage().persistent().set(&key, &true);
            storage::bump_persistent(env, &key);
        } else {
            env.storage().persistent().remove(&key);
        }
    }
}
