//! Pricing for the quick single-piece variant.

use furnkit_configurator::model::QuickDesign;
use furnkit_core::catalog::CatalogSet;
use furnkit_core::money::round2;

use crate::breakdown::{BreakdownBuilder, LineItem, PriceBreakdown};

/// Prices a quick design: category-specific surface times material rate,
/// plus finish over the same surface.
pub fn price_quick(design: &QuickDesign, catalogs: &CatalogSet) -> PriceBreakdown {
    let mut builder = BreakdownBuilder::new();

    let surface = design.surface_m2();
    let material_price = catalogs.materials.price_or_zero(&design.material);
    let material_name = catalogs.materials.name_or_key(&design.material);

    builder.material(LineItem::new(
        format!("{} — {material_name}", design.category),
        format!("{surface:.2} m² × {material_price} €/m²"),
        round2(surface * material_price),
    ));

    let finish_price = catalogs.finishes.price_or_zero(&design.finish);
    if finish_price > 0.0 {
        builder.finish(LineItem::new(
            "Finition",
            format!("{surface:.2} m² × {finish_price} €/m²"),
            round2(surface * finish_price),
        ));
    }

    builder.finish_breakdown()
}
