//! Items

use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
};

use crate::prices::Price;

/// Stable identity of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new item id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchasable product with a unit price.
///
/// Two items with the same [`ItemId`] are the same item as far as equality and hashing
/// are concerned, whatever their name or price.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    name: String,
    price: Price,
}

impl Item {
    /// Creates a new item with the given id, display name and unit price.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Returns the id of the item
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the display name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> Price {
        self.price
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

// Must hash exactly what `ItemId` hashes, see `Borrow<ItemId>` below.
impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Borrow<ItemId> for Item {
    fn borrow(&self) -> &ItemId {
        &self.id
    }
}
