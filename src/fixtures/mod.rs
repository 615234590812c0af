//! Fixtures
//!
//! Carts described in YAML, loaded from `<base path>/carts/<name>.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, ShoppingCart},
    fixtures::carts::CartFixture,
    items::Item,
    prices::PriceError,
};

pub mod carts;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price for an item
    #[error("Invalid price for item {item}: {source}")]
    InvalidPrice {
        /// Key of the item with the bad price
        item: String,

        /// Underlying price error
        source: PriceError,
    },

    /// Item not found
    #[error("Item not found: {0}")]
    ItemNotFound(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// String key -> item
    items: FxHashMap<String, Item>,

    /// Lines to replay into a cart, in order
    lines: Vec<(Item, u32)>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            items: FxHashMap::default(),
            lines: Vec::new(),
        }
    }

    /// Load a cart from a YAML fixture file
    ///
    /// Items and lines are appended to anything already loaded. Nothing is kept from a file
    /// that fails to load.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a price is invalid, or if a
    /// line references an item that isn't defined.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        let mut items = self.items.clone();

        for (key, item_fixture) in fixture.items {
            let item = item_fixture.into_item(&key)?;

            items.insert(key, item);
        }

        let lines = fixture
            .lines
            .into_iter()
            .map(|line| {
                items
                    .get(&line.item)
                    .map(|item| (item.clone(), line.quantity))
                    .ok_or(FixtureError::ItemNotFound(line.item))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.items = items;
        self.lines.extend(lines);

        debug!(
            path = %file_path.display(),
            items = self.items.len(),
            lines = self.lines.len(),
            "loaded cart fixture"
        );

        Ok(self)
    }

    /// Load a named fixture set from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_cart(name)?;

        Ok(fixture)
    }

    /// Get an item by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not found.
    pub fn item(&self, key: &str) -> Result<&Item, FixtureError> {
        self.items
            .get(key)
            .ok_or_else(|| FixtureError::ItemNotFound(key.to_string()))
    }

    /// Number of lines loaded
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Create a cart by adding every loaded line in order
    pub fn cart(&self) -> Cart {
        let mut cart = Cart::new();

        for (item, quantity) in &self.lines {
            cart.add_item(item, *quantity);
        }

        cart
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
