use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    #[msg("User already registered")]
    AlreadyRegistered,

    #[msg("User not registered")]
    NotRegistered,

    #[msg("Only owner can call this function")]
    Unauthorized,

    #[msg("Name cannot be empty")]
    InvalidName,

    #[msg("Name exceeds maximum length")]
    NameTooLong,

    #[msg("Price must be greater than 0")]
    InvalidPrice,

    #[msg("Item does not exist")]
    ItemNotFound,

    #[msg("Listing is full")]
    ListingFull,

    #[msg("Registered users count overflow")]
    CountOverflow,
}
