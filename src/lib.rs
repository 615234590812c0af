//! Checkout
//!
//! Checkout is an in-memory shopping cart: it tracks items and quantities, applies a
//! two-for-one promotion and renders plain text receipts.

pub mod cart;
pub mod fixtures;
pub mod items;
pub mod logging;
pub mod prelude;
pub mod prices;
pub mod promotions;
pub mod receipt;
pub mod utils;
