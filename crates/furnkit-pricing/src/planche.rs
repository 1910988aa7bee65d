//! Pricing for cut-to-size boards.

use furnkit_configurator::model::PlancheConfig;
use furnkit_core::catalog::CatalogSet;
use furnkit_core::money::round2;
use furnkit_core::units::mm_to_m;

use crate::breakdown::{BreakdownBuilder, LineItem, PriceBreakdown};

/// Thickness the material price is quoted for; other thicknesses scale
/// linearly against it.
const REFERENCE_THICKNESS_MM: f64 = 18.0;

pub(crate) fn price_planche(config: &PlancheConfig, catalogs: &CatalogSet) -> PriceBreakdown {
    let mut builder = BreakdownBuilder::new();

    let material_price = catalogs.materials.price_or_zero(&config.material);
    let material_name = catalogs.materials.name_or_key(&config.material);
    let finish_price = catalogs.finishes.price_or_zero(&config.finish);

    for (index, board) in config.boards.iter().enumerate() {
        let quantity = board.quantity as f64;
        let surface = board.surface_m2();
        let thickness_ratio = board.thickness_mm / REFERENCE_THICKNESS_MM;

        builder.material(LineItem::new(
            format!("Panneau {} — {material_name}", index + 1),
            format!(
                "{surface:.2} m² × {thickness_ratio:.2} × {material_price} €/m² × {}",
                board.quantity
            ),
            round2(surface * thickness_ratio * material_price * quantity),
        ));

        // Banded edges, priced per metre of edge, per piece.
        for (side, banding) in board.edge_banding.banded_sides() {
            let length_m = mm_to_m(board.side_length_mm(side));
            let banding_price = catalogs.banding.price_or_zero(banding);
            builder.edge_banding(LineItem::new(
                format!("Chant {side:?} panneau {}", index + 1),
                format!("{length_m:.2} m × {banding_price} €/m × {}", board.quantity),
                round2(length_m * banding_price * quantity),
            ));
        }

        // Both faces receive the finish.
        if finish_price > 0.0 {
            builder.finish(LineItem::new(
                format!("Finition panneau {}", index + 1),
                format!(
                    "{:.2} m² (2 faces) × {finish_price} €/m² × {}",
                    surface * 2.0,
                    board.quantity
                ),
                round2(surface * 2.0 * finish_price * quantity),
            ));
        }
    }

    builder.finish_breakdown()
}
