use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct UserRegistered {
    pub registry: Pubkey,
    pub user: Pubkey,
    pub user_listing: Pubkey,
    pub registered_users_count: u64,
}

#[event]
pub struct ItemListed {
    pub user_listing: Pubkey,
    pub owner: Pubkey,
    pub index: u64,
    pub name: String,
    pub price: u64,
}
