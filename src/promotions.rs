//! Promotions
//!
//! A promotion rewrites the quantity of each cart entry into the quantity the customer is
//! billed for. Promotions never touch prices.

use std::fmt::Debug;

/// A billing rule applied to every entry in a cart.
pub trait Promotion: Debug {
    /// Human readable name of the promotion.
    fn name(&self) -> &str;

    /// Returns the number of units billed for `quantity` units in the cart.
    ///
    /// Returning zero removes the entry from the cart.
    fn billed_quantity(&self, quantity: u32) -> u32;
}

/// Buy two, pay for one.
///
/// Every pair of units is billed as a single unit; an odd unit left over is billed in full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoForOne;

impl Promotion for TwoForOne {
    fn name(&self) -> &str {
        "2 for 1"
    }

    fn billed_quantity(&self, quantity: u32) -> u32 {
        quantity / 2 + quantity % 2
    }
}
