//! Pricing for free-form furniture.

use furnkit_configurator::model::MeubleConfig;
use furnkit_core::catalog::CatalogSet;
use furnkit_core::money::round2;

use crate::breakdown::{BreakdownBuilder, LineItem, PriceBreakdown};

pub(crate) fn price_meuble(config: &MeubleConfig, catalogs: &CatalogSet) -> PriceBreakdown {
    let mut builder = BreakdownBuilder::new();

    let material_price = catalogs.materials.price_or_zero(&config.material);
    let material_name = catalogs.materials.name_or_key(&config.material);
    let finish_price = catalogs.finishes.price_or_zero(&config.finish);
    let banding_price = catalogs
        .banding
        .price_or_zero(&furnkit_core::catalog::BandingKey::new("assorti"));

    // Carcass material, per cabinet: 2 sides, top+bottom, front face.
    for (index, cabinet) in config.cabinets.iter().enumerate() {
        let surface = cabinet.surface_m2();
        builder.material(LineItem::new(
            format!("Caisson {} — {material_name}", index + 1),
            format!("{surface:.2} m² × {material_price} €/m²"),
            round2(surface * material_price),
        ));
    }

    // Modules at catalog base price per instance.
    for cabinet in &config.cabinets {
        for module in &cabinet.modules {
            let base = catalogs.modules.price_or_zero(module.kind);
            builder.modules(LineItem::new(
                module.kind.to_string(),
                format!("{base} € l'unité"),
                round2(base),
            ));
        }
    }

    // Hardware counted from fitting totals: 3 hinges per door, one slide
    // pair per drawer, one support set per shelf, one handle per front.
    let (shelves, drawers, doors) = config.fitting_counts();
    let hardware = &catalogs.hardware;
    if doors > 0 {
        builder.hardware(LineItem::new(
            "Charnières",
            format!("{doors} porte(s) × 3"),
            round2(hardware.hinge_price * doors as f64 * 3.0),
        ));
    }
    if drawers > 0 {
        builder.hardware(LineItem::new(
            "Coulisses",
            format!("{drawers} tiroir(s)"),
            round2(hardware.slide_price * drawers as f64),
        ));
    }
    if shelves > 0 {
        builder.hardware(LineItem::new(
            "Taquets d'étagère",
            format!("{shelves} étagère(s)"),
            round2(hardware.shelf_support_price * shelves as f64),
        ));
    }
    let fronts = doors + drawers;
    if fronts > 0 {
        let handle_price = hardware.handle_price(config.global_handle);
        builder.hardware(LineItem::new(
            "Poignées",
            format!("{} — {fronts} façade(s)", config.global_handle),
            round2(handle_price * fronts as f64),
        ));
    }

    // Edge banding along each cabinet's front-face perimeter.
    for (index, cabinet) in config.cabinets.iter().enumerate() {
        let perimeter = cabinet.front_perimeter_m();
        builder.edge_banding(LineItem::new(
            format!("Chants caisson {}", index + 1),
            format!("{perimeter:.2} m × {banding_price} €/m"),
            round2(perimeter * banding_price),
        ));
    }

    // Finish over the full carcass surface.
    if finish_price > 0.0 {
        for (index, cabinet) in config.cabinets.iter().enumerate() {
            let surface = cabinet.surface_m2();
            builder.finish(LineItem::new(
                format!("Finition caisson {}", index + 1),
                format!("{surface:.2} m² × {finish_price} €/m²"),
                round2(surface * finish_price),
            ));
        }
    }

    builder.finish_breakdown()
}
