use anchor_lang::prelude::*;

use crate::constants::{MAX_ITEMS_PER_LISTING, MAX_ITEM_NAME_LEN};
use crate::errors::MarketplaceError;

/// Per-user listing storage, created once at registration.
///
/// The owner is fixed at creation and only the owner may append items.
/// Items are never removed, so an item's position in `items` is its
/// permanent index.
#[account]
#[derive(InitSpace)]
pub struct UserListing {
    /// Registry that created this listing
    pub registry: Pubkey,

    /// Registered user who owns this listing
    pub owner: Pubkey,

    pub created_at: i64,

    /// PDA bump for listing address derivation
    pub bump: u8,

    /// Grows by one slot per listed item (account is reallocated)
    #[max_len(0)]
    pub items: Vec<ListedItem>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct ListedItem {
    #[max_len(MAX_ITEM_NAME_LEN)]
    pub name: String,

    /// Price in lamports
    pub price: u64,

    pub sold: bool,

    pub listed_at: i64,
}

/// Read-only view returned by `get_item`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub name: String,
    pub price: u64,
    pub sold: bool,
}

impl From<&ListedItem> for ItemView {
    fn from(item: &ListedItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            sold: item.sold,
        }
    }
}

impl UserListing {
    /// Account size (discriminator included) needed to hold `item_count` items.
    pub fn space_for(item_count: usize) -> usize {
        8 + Self::INIT_SPACE + item_count * ListedItem::INIT_SPACE
    }

    pub fn item_count(&self) -> u64 {
        self.items.len() as u64
    }

    pub fn item(&self, index: u64) -> Result<&ListedItem> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get(i))
            .ok_or_else(|| error!(MarketplaceError::ItemNotFound))
    }

    /// Validates a new item. Name is checked before price.
    pub fn ensure_can_list(&self, name: &str, price: u64) -> Result<()> {
        require!(!name.is_empty(), MarketplaceError::InvalidName);
        require!(name.len() <= MAX_ITEM_NAME_LEN, MarketplaceError::NameTooLong);
        require!(price > 0, MarketplaceError::InvalidPrice);
        require!(
            self.items.len() < MAX_ITEMS_PER_LISTING,
            MarketplaceError::ListingFull
        );
        Ok(())
    }

    /// Appends an already validated item and returns its index.
    pub fn push_item(&mut self, name: String, price: u64, listed_at: i64) -> u64 {
        let index = self.item_count();
        self.items.push(ListedItem {
            name,
            price,
            sold: false,
            listed_at,
        });
        index
    }
}
