//! Cart

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use thiserror::Error;
use tracing::debug;

use crate::{
    items::{Item, ItemId},
    prices::Price,
    promotions::{Promotion, TwoForOne},
    receipt::Receipt,
};

/// Quantity used by [`ShoppingCart::add_one`] and [`ShoppingCart::remove_one`].
pub const DEFAULT_QUANTITY: u32 = 1;

/// Items held by a cart and their quantities, in insertion order.
pub type CartItems = IndexMap<Item, u32, FxBuildHasher>;

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// More units were asked to be removed than the cart holds.
    #[error("Cannot remove more items than are present in the cart")]
    InvalidArgument {
        /// Units the caller asked to remove
        requested: u32,

        /// Units present in the cart
        present: u32,
    },
}

/// Operations every shopping cart supports.
pub trait ShoppingCart {
    /// Add `quantity` units of `item`, creating its entry when absent.
    ///
    /// The stored quantity saturates at `u32::MAX`: units added beyond that are dropped and
    /// are neither counted nor billed.
    fn add_item(&mut self, item: &Item, quantity: u32);

    /// Add a single unit of `item`.
    fn add_one(&mut self, item: &Item) {
        self.add_item(item, DEFAULT_QUANTITY);
    }

    /// Remove `quantity` units of `item`.
    ///
    /// Removing an item that is not in the cart does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidArgument`] if `quantity` exceeds the units present.
    fn remove_item(&mut self, item: &Item, quantity: u32) -> Result<(), CartError>;

    /// Remove a single unit of `item`.
    ///
    /// # Errors
    ///
    /// See [`ShoppingCart::remove_item`].
    fn remove_one(&mut self, item: &Item) -> Result<(), CartError> {
        self.remove_item(item, DEFAULT_QUANTITY)
    }

    /// Bill every two units of each item as one.
    fn apply_two_for_one_discount(&mut self);

    /// Render a plain text receipt of the cart.
    fn generate_receipt(&self) -> String;
}

/// In-memory cart mapping items to the quantity being bought.
///
/// Entries never hold a zero quantity: an entry is dropped as soon as its quantity reaches
/// zero. Entries iterate in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: CartItems,
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the items in the cart and their quantities.
    pub fn items(&self) -> &CartItems {
        &self.items
    }

    /// Quantity of `item` in the cart, if present.
    pub fn quantity(&self, item: &Item) -> Option<u32> {
        self.items.get(item).copied()
    }

    /// Quantity of the item with the given id, if present.
    pub fn quantity_by_id(&self, id: &ItemId) -> Option<u32> {
        self.items.get(id).copied()
    }

    /// Number of distinct items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit price times quantity over every entry.
    pub fn total(&self) -> Price {
        self.items
            .iter()
            .map(|(item, quantity)| item.price().times(*quantity))
            .sum()
    }

    /// Remove every entry from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Rewrite every entry's quantity with the quantity billed by `promotion`.
    ///
    /// Entries billed at zero units are removed.
    pub fn apply_promotion(&mut self, promotion: &impl Promotion) {
        self.items.retain(|_item, quantity| {
            *quantity = promotion.billed_quantity(*quantity);

            *quantity > 0
        });

        debug!(
            promotion = promotion.name(),
            entries = self.items.len(),
            "applied promotion"
        );
    }

    /// Build a structured receipt for the cart.
    pub fn receipt(&self) -> Receipt {
        Receipt::from(self)
    }
}

impl ShoppingCart for Cart {
    /// The cart keeps the first instance added for an id; later additions only bump the
    /// quantity. Adding zero units is a no-op.
    fn add_item(&mut self, item: &Item, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let stored = if let Some(stored) = self.items.get_mut(item) {
            *stored = stored.saturating_add(quantity);
            *stored
        } else {
            self.items.insert(item.clone(), quantity);
            quantity
        };

        debug!(item = %item.id(), added = quantity, quantity = stored, "added item");
    }

    fn remove_item(&mut self, item: &Item, quantity: u32) -> Result<(), CartError> {
        let Some(present) = self.items.get(item).copied() else {
            return Ok(());
        };

        if quantity > present {
            return Err(CartError::InvalidArgument {
                requested: quantity,
                present,
            });
        }

        if quantity == present {
            self.items.shift_remove(item);
        } else if let Some(stored) = self.items.get_mut(item) {
            *stored = present - quantity;
        }

        debug!(
            item = %item.id(),
            removed = quantity,
            quantity = present - quantity,
            "removed item"
        );

        Ok(())
    }

    fn apply_two_for_one_discount(&mut self) {
        self.apply_promotion(&TwoForOne);
    }

    fn generate_receipt(&self) -> String {
        self.receipt().to_string()
    }
}
