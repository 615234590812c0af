//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::logging::LoggingConfig;

/// Arguments for the receipt command
#[derive(Debug, Parser)]
#[command(name = "cart-receipt", version, about = "Print the receipt for a cart fixture")]
pub struct ReceiptArgs {
    /// Fixture set to load the cart from
    #[arg(short, long, default_value = "breakfast")]
    pub fixture: String,

    /// Directory containing the fixture sets
    #[arg(long, env = "CART_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Apply the two-for-one discount before printing
    #[arg(long)]
    pub two_for_one: bool,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}
