//! Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartItems, DEFAULT_QUANTITY, ShoppingCart},
    fixtures::{Fixture, FixtureError},
    items::{Item, ItemId},
    prices::{Price, PriceError},
    promotions::{Promotion, TwoForOne},
    receipt::{Receipt, ReceiptError, ReceiptLine},
};
