//! # Furnkit Pricing
//!
//! Pure pricing engine: `price(config, catalogs) -> PriceBreakdown`.
//!
//! Each product family has its own algorithm, dispatched on the
//! configuration's variant. Every monetary value is rounded to 2 decimals at
//! the point of computation — quote totals only reproduce the reference
//! figures when each aggregation step re-rounds. Unknown catalog keys price
//! at zero; the engine never fails.

mod breakdown;
mod cuisine;
mod meuble;
mod planche;
mod quick;

pub use breakdown::{LineItem, PriceBreakdown};
pub use quick::price_quick;

use furnkit_configurator::model::ProductConfig;
use furnkit_core::catalog::CatalogSet;

/// Prices a configuration against the given catalogs.
pub fn price(config: &ProductConfig, catalogs: &CatalogSet) -> PriceBreakdown {
    match config {
        ProductConfig::Meuble(c) => meuble::price_meuble(c, catalogs),
        ProductConfig::Planche(c) => planche::price_planche(c, catalogs),
        ProductConfig::Cuisine(c) => cuisine::price_cuisine(c, catalogs),
    }
}
