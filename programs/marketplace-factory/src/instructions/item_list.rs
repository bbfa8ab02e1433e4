use anchor_lang::prelude::*;

use crate::constants::LISTING_SEED;
use crate::errors::MarketplaceError;
use crate::events::ItemListed;
use crate::instructions::account_alloc::grow_account;
use crate::state::UserListing;

#[derive(Accounts)]
pub struct ListItem<'info> {
    /// Listing owner, pays rent for the new item slot
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LISTING_SEED, user_listing.registry.as_ref(), user_listing.owner.as_ref()],
        bump = user_listing.bump,
        has_one = owner @ MarketplaceError::Unauthorized
    )]
    pub user_listing: Account<'info, UserListing>,

    pub system_program: Program<'info, System>,
}

/// Append an item to the owner's listing and return its index.
///
/// # Operations
/// 1. Owner check (account constraint)
/// 2. Validate name, then price, then capacity
/// 3. Grow the listing account by one item slot
/// 4. Append the item with `sold = false`
pub fn list_item(ctx: Context<ListItem>, name: String, price: u64) -> Result<u64> {
    ctx.accounts.user_listing.ensure_can_list(&name, price)?;

    let new_space = UserListing::space_for(ctx.accounts.user_listing.items.len() + 1);
    grow_account(
        &ctx.accounts.user_listing.to_account_info(),
        &ctx.accounts.owner,
        &ctx.accounts.system_program,
        new_space,
    )?;

    let listed_at = Clock::get()?.unix_timestamp;
    let user_listing = &mut ctx.accounts.user_listing;
    let index = user_listing.push_item(name.clone(), price, listed_at);

    emit!(ItemListed {
        user_listing: user_listing.key(),
        owner: user_listing.owner,
        index,
        name,
        price,
    });

    msg!("Item {} listed for {} lamports", index, price);

    Ok(index)
}
