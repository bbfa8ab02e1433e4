pub const REGISTRY_SEED: &[u8] = b"registry";
pub const LISTING_SEED: &[u8] = b"listing";

pub const MAX_ITEM_NAME_LEN: usize = 64;
pub const MAX_ITEMS_PER_LISTING: usize = 100;
