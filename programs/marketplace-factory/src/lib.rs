use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::ItemView;

declare_id!("GmUkdJTzrZxWUVLhg9Beufmh3FV8kEafcGtPFMdWpisW");

#[program]
pub mod marketplace_factory {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry(ctx)
    }

    pub fn register_user(ctx: Context<RegisterUser>) -> Result<()> {
        instructions::register_user(ctx)
    }

    pub fn is_user_registered(ctx: Context<UserQuery>, user: Pubkey) -> Result<bool> {
        instructions::is_user_registered(ctx, user)
    }

    pub fn get_user_listing(ctx: Context<UserQuery>, user: Pubkey) -> Result<Pubkey> {
        instructions::get_user_listing(ctx, user)
    }

    pub fn get_registered_users_count(ctx: Context<RegistryQuery>) -> Result<u64> {
        instructions::get_registered_users_count(ctx)
    }

    pub fn list_item(ctx: Context<ListItem>, name: String, price: u64) -> Result<u64> {
        instructions::list_item(ctx, name, price)
    }

    pub fn get_item(ctx: Context<ListingQuery>, index: u64) -> Result<ItemView> {
        instructions::get_item(ctx, index)
    }

    pub fn get_item_count(ctx: Context<ListingQuery>) -> Result<u64> {
        instructions::get_item_count(ctx)
    }

    pub fn get_listing_owner(ctx: Context<ListingQuery>) -> Result<Pubkey> {
        instructions::get_listing_owner(ctx)
    }
}
