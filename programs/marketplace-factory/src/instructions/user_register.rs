use anchor_lang::prelude::*;

use crate::constants::{LISTING_SEED, REGISTRY_SEED};
use crate::errors::MarketplaceError;
use crate::events::UserRegistered;
use crate::instructions::account_alloc::{create_pda_account, is_listing_account};
use crate::state::{Registry, UserListing};

#[derive(Accounts)]
pub struct RegisterUser<'info> {
    /// User being registered, pays for the listing account
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Listing PDA for this user, created in the handler. A listing
    /// grows after registration, so `init_if_needed` would trip its space
    /// check instead of reporting AlreadyRegistered.
    #[account(
        mut,
        seeds = [LISTING_SEED, registry.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_listing: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Register the signer and create their listing.
///
/// # Operations
/// 1. Reject users that already own a listing
/// 2. Create the listing PDA with the signer as its immutable owner
/// 3. Bump the registry's user count
pub fn register_user(ctx: Context<RegisterUser>) -> Result<()> {
    let listing_info = ctx.accounts.user_listing.to_account_info();

    require!(
        !is_listing_account(&listing_info),
        MarketplaceError::AlreadyRegistered
    );

    let user_key = ctx.accounts.user.key();
    let registry_key = ctx.accounts.registry.key();
    let bump = ctx.bumps.user_listing;
    let bump_seed = [bump];
    let signer_seeds: &[&[u8]] = &[
        LISTING_SEED,
        registry_key.as_ref(),
        user_key.as_ref(),
        &bump_seed,
    ];

    create_pda_account(
        &listing_info,
        &ctx.accounts.user,
        &ctx.accounts.system_program,
        UserListing::space_for(0),
        signer_seeds,
    )?;

    let user_listing = UserListing {
        registry: registry_key,
        owner: user_key,
        created_at: Clock::get()?.unix_timestamp,
        bump,
        items: Vec::new(),
    };
    user_listing.try_serialize(&mut &mut listing_info.try_borrow_mut_data()?[..])?;

    let registered_users_count = ctx.accounts.registry.record_registration()?;

    emit!(UserRegistered {
        registry: registry_key,
        user: user_key,
        user_listing: listing_info.key(),
        registered_users_count,
    });

    msg!(
        "User {:?} registered, listing {:?} ({} users)",
        user_key,
        listing_info.key(),
        registered_users_count
    );

    Ok(())
}
