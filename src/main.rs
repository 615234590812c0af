//! Cart Receipt
//!
//! Loads a cart from a fixture set and prints its receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `--two-for-one` to apply the two-for-one discount before printing

use anyhow::Result;
use clap::Parser;
use tracing::info;

use checkout::{
    cart::ShoppingCart, fixtures::Fixture, logging::init_subscriber, utils::ReceiptArgs,
};

/// Cart Receipt
#[expect(clippy::print_stdout, reason = "the receipt is the program output")]
fn main() -> Result<()> {
    let args = ReceiptArgs::parse();

    init_subscriber(&args.logging)?;

    let mut fixture = Fixture::with_base_path(&args.fixtures_dir);
    fixture.load_cart(&args.fixture)?;

    let mut cart = fixture.cart();

    info!(fixture = %args.fixture, items = cart.len(), "loaded cart");

    if args.two_for_one {
        cart.apply_two_for_one_discount();

        info!(total = %cart.total(), "applied two-for-one discount");
    }

    println!("{}", cart.generate_receipt());

    Ok(())
}
