use anchor_lang::prelude::*;

use crate::constants::LISTING_SEED;
use crate::state::{ItemView, UserListing};

#[derive(Accounts)]
pub struct ListingQuery<'info> {
    #[account(
        seeds = [LISTING_SEED, user_listing.registry.as_ref(), user_listing.owner.as_ref()],
        bump = user_listing.bump,
    )]
    pub user_listing: Account<'info, UserListing>,
}

pub fn get_item(ctx: Context<ListingQuery>, index: u64) -> Result<ItemView> {
    ctx.accounts.user_listing.item(index).map(ItemView::from)
}

pub fn get_item_count(ctx: Context<ListingQuery>) -> Result<u64> {
    Ok(ctx.accounts.user_listing.item_count())
}

pub fn get_listing_owner(ctx: Context<ListingQuery>) -> Result<Pubkey> {
    Ok(ctx.accounts.user_listing.owner)
}
