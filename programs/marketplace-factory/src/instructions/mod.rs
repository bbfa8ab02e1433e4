mod account_alloc;
pub mod item_list;
pub mod listing_query;
pub mod registry_initialize;
pub mod user_query;
pub mod user_register;

pub use item_list::*;
pub use listing_query::*;
pub use registry_initialize::*;
pub use user_query::*;
pub use user_register::*;
