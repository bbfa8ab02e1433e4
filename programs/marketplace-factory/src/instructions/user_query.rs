use anchor_lang::prelude::*;

use crate::constants::{LISTING_SEED, REGISTRY_SEED};
use crate::errors::MarketplaceError;
use crate::instructions::account_alloc::is_listing_account;
use crate::state::Registry;

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct UserQuery<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Listing PDA of `user`. It may not exist yet; address is
    /// validated by seeds and existence by program ownership.
    #[account(
        seeds = [LISTING_SEED, registry.key().as_ref(), user.as_ref()],
        bump,
    )]
    pub user_listing: UncheckedAccount<'info>,
}

impl UserQuery<'_> {
    fn is_registered(&self) -> bool {
        is_listing_account(&self.user_listing)
    }
}

#[derive(Accounts)]
pub struct RegistryQuery<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn is_user_registered(ctx: Context<UserQuery>, _user: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.is_registered())
}

pub fn get_user_listing(ctx: Context<UserQuery>, user: Pubkey) -> Result<Pubkey> {
    if !ctx.accounts.is_registered() {
        msg!("No listing for {:?}", user);
        return err!(MarketplaceError::NotRegistered);
    }
    Ok(ctx.accounts.user_listing.key())
}

pub fn get_registered_users_count(ctx: Context<RegistryQuery>) -> Result<u64> {
    Ok(ctx.accounts.registry.registered_users_count)
}
