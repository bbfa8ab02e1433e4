use anchor_lang::prelude::*;

use crate::errors::MarketplaceError;

/// Factory-side bookkeeping. One registry exists per authority and every
/// user listing records the registry that created it.
#[account]
#[derive(InitSpace)]
pub struct Registry {
    /// Signer that created the registry
    pub authority: Pubkey,

    /// Number of successful registrations, never decremented
    pub registered_users_count: u64,

    pub created_at: i64,

    /// PDA bump for registry address derivation
    pub bump: u8,
}

impl Registry {
    /// Counts one more registered user and returns the new total.
    pub fn record_registration(&mut self) -> Result<u64> {
        self.registered_users_count = self
            .registered_users_count
            .checked_add(1)
            .ok_or(MarketplaceError::CountOverflow)?;
        Ok(self.registered_users_count)
    }
}
