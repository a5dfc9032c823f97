use soroban_sdk::{Address, Env, Vec};

use crate::errors::MultisigError;
use crate::quorum::QuorumPolicy;
use crate::types::DataKey;

/// Owner set kept as an arena: the `Owners` vector plus an
/// `OwnerIndex(address) -> position` map, giving O(1) membership and
/// swap-with-last removal. Insertion order is not preserved.
pub struct OwnerRegistry;

impl OwnerRegistry {
    pub fn all(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Owners)
            .unwrap_or(Vec::new(env))
    }

    pub fn count(env: &Env) -> u32 {
        Self::all(env).len()
    }

    pub fn contains(env: &Env, owner: &Address) -> bool {
        env.storage()
            .instance()
            .has(&DataKey::OwnerIndex(owner.clone()))
    }

    pub fn require_owner(env: &Env, owner: &Address) -> Result<(), MultisigError> {
        if !Self::contains(env, owner) {
            return Err(MultisigError::NotOwner);
        }
        Ok(())
    }

    /// Seeds the registry at initialization. Rejects duplicates.
    pub fn init(env: &Env, owners: &Vec<Address>) -> Result<(), MultisigError> {
        let mut arena = Vec::new(env);
        for owner in owners.iter() {
            let key = DataKey::OwnerIndex(owner.clone());
            if env.storage().instance().has(&key) {
                return Err(MultisigError::InvalidOwnersOrSignatures);
            }
            env.storage().instance().set(&key, &arena.len());
            arena.push_back(owner);
        }
        env.storage().instance().set(&DataKey::Owners, &arena);
        Ok(())
    }

    pub fn add(env: &Env, owner: &Address) -> Result<(), MultisigError> {
        if Self::contains(env, owner) {
            return Err(MultisigError::OwnerAlreadyExists);
        }

        let mut arena = Self::all(env);
        let new_count = arena.len() + 1;
        if !QuorumPolicy::valid_owner_count(new_count, QuorumPolicy::min_signatures(env)?) {
            return Err(MultisigError::InvalidOwnerCount);
        }

        env.storage()
            .instance()
            .set(&DataKey::OwnerIndex(owner.clone()), &arena.len());
        arena.push_back(owner.clone());
        env.storage().instance().set(&DataKey::Owners, &arena);
        Ok(())
    }

    /// Removes `owner`, lowering the threshold to the new owner count when it
    /// would otherwise be unreachable. Returns the threshold in force after
    /// the removal.
    pub fn remove(env: &Env, owner: &Address) -> Result<u32, MultisigError> {
        let index_key = DataKey::OwnerIndex(owner.clone());
        let index: u32 = env
            .storage()
            .instance()
            .get(&index_key)
            .ok_or(MultisigError::OwnerDoesNotExist)?;

        let mut arena = Self::all(env);
        let new_count = arena.len() - 1;
        // The set may never become empty, the threshold never zero.
        if new_count == 0 {
            return Err(MultisigError::InvalidOwnerCount);
        }

        let mut min_signatures = QuorumPolicy::min_signatures(env)?;
        if new_count < min_signatures {
            min_signatures = new_count;
            QuorumPolicy::store(env, min_signatures);
        }

        let last = arena
            .pop_back()
            .ok_or(MultisigError::OwnerDoesNotExist)?;
        if last != *owner {
            arena.set(index, last.clone());
            env.storage()
                .instance()
                .set(&DataKey::OwnerIndex(last), &index);
        }
        env.storage().instance().remove(&index_key);
        env.storage().instance().set(&DataKey::Owners, &arena);

        Ok(min_signatures)
    }
}
