//! Receipt

use std::{fmt, io};

use smallvec::SmallVec;
use thiserror::Error;
use tracing::trace;

use crate::{cart::Cart, prices::Price};

/// Width the item name is padded to.
const NAME_WIDTH: usize = 20;

/// Width the quantity is padded to.
const QUANTITY_WIDTH: usize = 4;

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The receipt could not be written to the output.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// A single item line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    name: String,
    quantity: u32,
    total: Price,
}

impl ReceiptLine {
    /// Create a new receipt line.
    pub fn new(name: impl Into<String>, quantity: u32, total: Price) -> Self {
        Self {
            name: name.into(),
            quantity,
            total,
        }
    }

    /// Display name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Billed quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times billed quantity, unrounded
    pub fn total(&self) -> Price {
        self.total
    }
}

/// Final receipt for a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// One line per cart entry, in cart order
    lines: SmallVec<[ReceiptLine; 8]>,

    /// Sum of all unrounded line totals
    total: Price,
}

impl Receipt {
    /// Create a receipt from its lines; the total is the sum of the line totals.
    pub fn new(lines: impl IntoIterator<Item = ReceiptLine>) -> Self {
        let lines: SmallVec<[ReceiptLine; 8]> = lines.into_iter().collect();
        let total = lines.iter().map(ReceiptLine::total).sum();

        Self { lines, total }
    }

    /// Item lines, in cart order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total amount payable.
    pub fn total(&self) -> Price {
        self.total
    }

    /// Writes the text receipt to `out`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the output cannot be written to.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        write!(out, "{self}")?;

        Ok(())
    }
}

impl From<&Cart> for Receipt {
    fn from(cart: &Cart) -> Self {
        let receipt = Receipt::new(cart.items().iter().map(|(item, quantity)| {
            ReceiptLine::new(item.name(), *quantity, item.price().times(*quantity))
        }));

        trace!(lines = receipt.lines.len(), total = %receipt.total, "built receipt");

        receipt
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Receipt:")?;

        for line in &self.lines {
            write!(
                f,
                "\n{:<NAME_WIDTH$} x{:<QUANTITY_WIDTH$} ${}",
                line.name, line.quantity, line.total
            )?;
        }

        write!(f, "\nTotal: ${}", self.total)
    }
}
