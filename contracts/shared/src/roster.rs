use soroban_sdk::{Address, Env, Vec};

use crate::errors::ElectionError;
use crate::storage;
use crate::validation::validate_managers;

/// The fixed set of addresses allowed to vote.
pub struct ManagerRoster;

impl ManagerRoster {
    /// Record the manager set once, at creation. Repeated addresses collapse
    /// to a single membership. Returns the number of distinct managers.
    pub fn establish(env: &Env, managers: &Vec<Address>) -> Result<u32, ElectionError> {
        validate_managers(managers)?;

        let mut distinct: Vec<Address> = Vec::new(env);
        for manager in managers.iter() {
            if storage::is_manager(env, &manager) {
                continue;
            }
            storage::set_manager(env, &manager);
            distinct.push_back(manager);
        }
        storage::set_managers(env, &distinct);

        Ok(distinct.len())
    }

    pub fn is_manager(env: &Env, address: &Address) -> bool {
        storage::is_manager(env, address)
    }

    /// Distinct managers in first-seen order
    pub fn members(env: &Env) -> Vec<Address> {
        storage::get_managers(env)
    }
}
