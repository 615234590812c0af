//! Cart Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{cart::DEFAULT_QUANTITY, fixtures::FixtureError, items::Item, prices::Price};

/// Wrapper for a cart in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Map of item key -> item fixture
    pub items: FxHashMap<String, ItemFixture>,

    /// Lines added to the cart, in order
    #[serde(default)]
    pub lines: Vec<LineFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item id, defaults to the fixture key
    pub id: Option<String>,

    /// Item name
    pub name: String,

    /// Unit price in major units (e.g., "2.50")
    pub price: String,
}

impl ItemFixture {
    /// Convert into an [`Item`], using `key` as the id when none is given.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidPrice`] if the price cannot be parsed.
    pub fn into_item(self, key: &str) -> Result<Item, FixtureError> {
        let price = self
            .price
            .parse::<Price>()
            .map_err(|source| FixtureError::InvalidPrice {
                item: key.to_string(),
                source,
            })?;

        let id = self.id.unwrap_or_else(|| key.to_string());

        Ok(Item::new(id, self.name, price))
    }
}

/// A single `add_item` call
#[derive(Debug, Deserialize)]
pub struct LineFixture {
    /// Key of the item in the `items` map
    pub item: String,

    /// Quantity to add
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}
