use soroban_sdk::Env;

use crate::errors::MultisigError;
use crate::types::DataKey;

// Ledger counts used for TTL bumps. Roughly 1 day threshold, 30 days target
// at 5s ledgers.
pub const INSTANCE_TTL_THRESHOLD: u32 = 17_280;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 518_400;
pub const PERSISTENT_TTL_THRESHOLD: u32 = 17_280;
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 2_000_000;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn require_initialized(env: &Env) -> Result<(), MultisigError> {
    if !is_initialized(env) {
        return Err(MultisigError::NotInitialized);
    }
    Ok(())
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}
