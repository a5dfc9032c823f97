use soroban_sdk::Env;

use crate::types::DataKey;

/// Emergency flag. While set, execution ignores the quorum threshold.
pub struct PauseOverride;

impl PauseOverride {
    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set(env: &Env, paused: bool) {
        env.storage().instance().set(&DataKey::Paused, &paused);
    }
}
