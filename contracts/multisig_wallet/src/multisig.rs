use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Val, Vec};

use crate::confirmations::ConfirmationTracker;
use crate::errors::MultisigError;
use crate::events::{TxExecuted, TxExecutionFailed, TxProposed};
use crate::governance;
use crate::ledger::TransactionLedger;
use crate::owners::OwnerRegistry;
use crate::pause::PauseOverride;
use crate::quorum::QuorumPolicy;
use crate::storage;
use crate::types::{Call, DataKey, ExecutionOutcome, Transaction};

#[contract]
pub struct MultiSigWallet;

#[contractimpl]
impl MultiSigWallet {
    /// Sets up the owner set and quorum threshold. Callable once.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the wallet was already set up
    /// * `InvalidOwnersOrSignatures` - Empty owner list, zero or oversized
    ///   threshold, or duplicate owners
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        min_signatures: u32,
    ) -> Result<(), MultisigError> {
        if storage::is_initialized(&env) {
            return Err(MultisigError::AlreadyInitialized);
        }
        if !QuorumPolicy::valid_owner_count(owners.len(), min_signatures) {
            return Err(MultisigError::InvalidOwnersOrSignatures);
        }

        OwnerRegistry::init(&env, &owners)?;
        QuorumPolicy::store(&env, min_signatures);
        PauseOverride::set(&env, false);
        env.storage().instance().set(&DataKey::TxCount, &0u64);
        env.storage().instance().set(&DataKey::Initialized, &true);
        storage::bump_instance(&env);

        log!(&env, "wallet initialized", owners.len(), min_signatures);
        Ok(())
    }

    /// Records a new transaction and confirms it on behalf of the proposer.
    ///
    /// # Arguments
    /// * `proposer` - Owner submitting the transaction
    /// * `target` - Contract to invoke on execution. Use the wallet's own
    ///   address for owner, threshold and pause changes
    /// * `call` - Function and arguments of the invocation
    /// * `description` - Free text kept for audit
    ///
    /// # Returns
    /// The zero-based index of the new transaction
    pub fn propose(
        env: Env,
        proposer: Address,
        target: Address,
        call: Call,
        description: String,
    ) -> Result<u64, MultisigError> {
        storage::require_initialized(&env)?;
        proposer.require_auth();
        OwnerRegistry::require_owner(&env, &proposer)?;

        let tx_id =
            TransactionLedger::append(&env, proposer.clone(), target.clone(), call, description);

        log!(&env, "tx proposed", tx_id, proposer.clone());
        TxProposed {
            tx_id,
            proposer: proposer.clone(),
            target,
        }
        .publish(&env);

        ConfirmationTracker::confirm(&env, tx_id, &proposer)?;
        storage::bump_instance(&env);

        Ok(tx_id)
    }

    /// Returns the number of confirmations after this one.
    pub fn confirm(env: Env, tx_id: u64, owner: Address) -> Result<u32, MultisigError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        let confirmations = ConfirmationTracker::confirm(&env, tx_id, &owner)?;
        storage::bump_instance(&env);
        Ok(confirmations)
    }

    /// Withdraws an earlier confirmation. Allowed any time before execution.
    pub fn revoke(env: Env, tx_id: u64, owner: Address) -> Result<u32, MultisigError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        let confirmations = ConfirmationTracker::revoke(&env, tx_id, &owner)?;
        storage::bump_instance(&env);
        Ok(confirmations)
    }

    /// Performs the transaction's call exactly once.
    ///
    /// The transaction is marked executed before the call is made, so a
    /// callee reaching back into the wallet only sees it as consumed. A
    /// failed call still consumes the transaction; it is reported through
    /// `ExecutionOutcome::Failed` and a `TxExecutionFailed` event.
    ///
    /// # Errors
    /// * `NotOwner` - If `caller` is not an owner
    /// * `TxDoesNotExist` - If `tx_id` is out of range
    /// * `TxAlreadyExecuted` - If the transaction was already consumed
    /// * `NotEnoughConfirmations` - Below quorum while not paused
    pub fn execute(
        env: Env,
        tx_id: u64,
        caller: Address,
    ) -> Result<ExecutionOutcome, MultisigError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        OwnerRegistry::require_owner(&env, &caller)?;

        let mut tx = TransactionLedger::get_pending(&env, tx_id)?;
        if !PauseOverride::is_paused(&env) && !QuorumPolicy::is_quorum_met(&env, &tx)? {
            return Err(MultisigError::NotEnoughConfirmations);
        }

        tx.executed = true;
        TransactionLedger::store(&env, &tx);
        storage::bump_instance(&env);

        match Self::perform_call(&env, &tx) {
            Ok(()) => {
                log!(&env, "tx executed", tx_id, caller.clone());
                TxExecuted {
                    tx_id,
                    executor: caller,
                }
                .publish(&env);
                Ok(ExecutionOutcome::Succeeded)
            }
            Err(err) => {
                log!(&env, "tx execution failed", tx_id, err as u32);
                TxExecutionFailed {
                    tx_id,
                    error: MultisigError::TxFailed as u32,
                    executor: caller,
                    cause: err as u32,
                }
                .publish(&env);
                Ok(ExecutionOutcome::Failed)
            }
        }
    }

    pub fn add_owner(env: Env, owner: Address) -> Result<(), MultisigError> {
        storage::require_initialized(&env)?;
        governance::add_owner(&env, owner)
    }

    pub fn remove_owner(env: Env, owner: Address) -> Result<(), MultisigError> {
        storage::require_initialized(&env)?;
        governance::remove_owner(&env, owner)
    }

    pub fn set_min_signatures(env: Env, min_signatures: u32) -> Result<(), MultisigError> {
        storage::require_initialized(&env)?;
        governance::set_min_signatures(&env, min_signatures)
    }

    pub fn pause(env: Env) -> Result<(), MultisigError> {
        storage::require_initialized(&env)?;
        governance::pause(&env)
    }

    pub fn unpause(env: Env) -> Result<(), MultisigError> {
        storage::require_initialized(&env)?;
        governance::unpause(&env)
    }

    pub fn owners(env: Env) -> Result<Vec<Address>, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(OwnerRegistry::all(&env))
    }

    pub fn owner_count(env: Env) -> Result<u32, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(OwnerRegistry::count(&env))
    }

    pub fn is_owner(env: Env, owner: Address) -> Result<bool, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(OwnerRegistry::contains(&env, &owner))
    }

    pub fn min_signatures(env: Env) -> Result<u32, MultisigError> {
        storage::require_initialized(&env)?;
        QuorumPolicy::min_signatures(&env)
    }

    pub fn is_paused(env: Env) -> Result<bool, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(PauseOverride::is_paused(&env))
    }

    pub fn get_transaction(env: Env, tx_id: u64) -> Result<Transaction, MultisigError> {
        storage::require_initialized(&env)?;
        TransactionLedger::get(&env, tx_id)
    }

    pub fn transaction_count(env: Env) -> Result<u64, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(TransactionLedger::count(&env))
    }

    pub fn is_confirmed(env: Env, tx_id: u64, owner: Address) -> Result<bool, MultisigError> {
        storage::require_initialized(&env)?;
        TransactionLedger::get(&env, tx_id)?;
        Ok(ConfirmationTracker::is_confirmed(&env, tx_id, &owner))
    }

    fn perform_call(env: &Env, tx: &Transaction) -> Result<(), MultisigError> {
        if tx.target == env.current_contract_address() {
            return governance::dispatch(env, &tx.call);
        }

        // Only success matters; the callee's return value is dropped.
        match env.try_invoke_contract::<Val, soroban_sdk::Error>(
            &tx.target,
            &tx.call.function,
            tx.call.args.clone(),
        ) {
            Ok(Ok(_)) => Ok(()),
            _ => Err(MultisigError::TxFailed),
        }
    }
}
