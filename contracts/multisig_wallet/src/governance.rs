//! Self-administered operations.
//!
//! Owner, threshold and pause changes only run while the wallet is executing
//! one of its own transactions (target == the wallet address). `execute` sets
//! the `SelfExecution` tag around that dispatch; every operation here checks
//! it. Dispatch happens in-frame, not through a cross-contract call.

use soroban_sdk::{log, symbol_short, Address, Env, Symbol, TryFromVal, Val};

use crate::errors::MultisigError;
use crate::events::{MinSignaturesChanged, OwnerAdded, OwnerRemoved, PauseChanged};
use crate::owners::OwnerRegistry;
use crate::pause::PauseOverride;
use crate::quorum::QuorumPolicy;
use crate::types::{Call, DataKey};

pub fn in_self_execution(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::SelfExecution)
        .unwrap_or(false)
}

fn require_self_execution(env: &Env) -> Result<(), MultisigError> {
    if !in_self_execution(env) {
        return Err(MultisigError::NotMultiSigWallet);
    }
    Ok(())
}

/// Runs a self-targeted call with the execution-context tag set.
pub fn dispatch(env: &Env, call: &Call) -> Result<(), MultisigError> {
    env.storage().instance().set(&DataKey::SelfExecution, &true);
    let result = apply(env, call);
    env.storage().instance().remove(&DataKey::SelfExecution);
    result
}

fn apply(env: &Env, call: &Call) -> Result<(), MultisigError> {
    let function = &call.function;
    if *function == symbol_short!("add_owner") {
        add_owner(env, arg(env, call, 0)?)
    } else if *function == Symbol::new(env, "remove_owner") {
        remove_owner(env, arg(env, call, 0)?)
    } else if *function == Symbol::new(env, "set_min_signatures") {
        set_min_signatures(env, arg(env, call, 0)?)
    } else if *function == symbol_short!("pause") {
        pause(env)
    } else if *function == symbol_short!("unpause") {
        unpause(env)
    } else {
        log!(env, "unknown self call", function.clone());
        Err(MultisigError::TxFailed)
    }
}

fn arg<T>(env: &Env, call: &Call, position: u32) -> Result<T, MultisigError>
where
    T: TryFromVal<Env, Val>,
{
    let val = call.args.get(position).ok_or(MultisigError::TxFailed)?;
    T::try_from_val(env, &val).map_err(|_| MultisigError::TxFailed)
}

pub fn add_owner(env: &Env, owner: Address) -> Result<(), MultisigError> {
    require_self_execution(env)?;
    OwnerRegistry::add(env, &owner)?;

    log!(env, "owner added", owner.clone());
    OwnerAdded { owner }.publish(env);
    Ok(())
}

pub fn remove_owner(env: &Env, owner: Address) -> Result<(), MultisigError> {
    require_self_execution(env)?;
    let before = QuorumPolicy::min_signatures(env)?;
    let after = OwnerRegistry::remove(env, &owner)?;

    log!(env, "owner removed", owner.clone());
    OwnerRemoved { owner }.publish(env);
    if after != before {
        MinSignaturesChanged {
            min_signatures: after,
        }
        .publish(env);
    }
    Ok(())
}

pub fn set_min_signatures(env: &Env, min_signatures: u32) -> Result<(), MultisigError> {
    require_self_execution(env)?;
    QuorumPolicy::set(env, min_signatures)?;

    log!(env, "min signatures changed", min_signatures);
    MinSignaturesChanged { min_signatures }.publish(env);
    Ok(())
}

pub fn pause(env: &Env) -> Result<(), MultisigError> {
    require_self_execution(env)?;
    PauseOverride::set(env, true);

    log!(env, "wallet paused");
    PauseChanged { paused: true }.publish(env);
    Ok(())
}

pub fn unpause(env: &Env) -> Result<(), MultisigError> {
    require_self_execution(env)?;
    PauseOverride::set(env, false);

    log!(env, "wallet unpaused");
    PauseChanged { paused: false }.publish(env);
    Ok(())
}
