use soroban_sdk::Env;

use crate::errors::MultisigError;
use crate::owners::OwnerRegistry;
use crate::types::{DataKey, Transaction};

/// Minimum confirmation threshold (`min_signatures`).
pub struct QuorumPolicy;

impl QuorumPolicy {
    /// `1 <= min_signatures <= owner_count`
    pub fn valid_owner_count(owner_count: u32, min_signatures: u32) -> bool {
        min_signatures > 0 && min_signatures <= owner_count
    }

    pub fn min_signatures(env: &Env) -> Result<u32, MultisigError> {
        env.storage()
            .instance()
            .get(&DataKey::MinSignatures)
            .ok_or(MultisigError::NotInitialized)
    }

    pub(crate) fn store(env: &Env, min_signatures: u32) {
        env.storage()
            .instance()
            .set(&DataKey::MinSignatures, &min_signatures);
    }

    pub fn set(env: &Env, min_signatures: u32) -> Result<(), MultisigError> {
        if !Self::valid_owner_count(OwnerRegistry::count(env), min_signatures) {
            return Err(MultisigError::InvalidOwnerCount);
        }
        Self::store(env, min_signatures);
        Ok(())
    }

    pub fn is_quorum_met(env: &Env, tx: &Transaction) -> Result<bool, MultisigError> {
        Ok(tx.confirmations >= Self::min_signatures(env)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_owner_count() {
        assert!(QuorumPolicy::valid_owner_count(3, 1));
        assert!(QuorumPolicy::valid_owner_count(3, 3));
        assert!(!QuorumPolicy::valid_owner_count(3, 0));
        assert!(!QuorumPolicy::valid_owner_count(3, 4));
        assert!(!QuorumPolicy::valid_owner_count(0, 0));
    }
}
