//! Pricing for modular kitchens.
//!
//! Cabinet prices scale with width against the catalog default. Edge and
//! finish costs use coarse per-cabinet approximations (2 m of edge, 1.5 m²
//! of face) rather than exact geometry; that is a deliberate simplification
//! kept for price parity with published quotes.

use furnkit_configurator::model::CuisineConfig;
use furnkit_core::catalog::{BandingKey, CatalogSet};
use furnkit_core::money::round2;
use furnkit_core::units::mm_to_m;

use crate::breakdown::{BreakdownBuilder, LineItem, PriceBreakdown};

/// Facade €/m² included in catalog base prices; dearer facades pay the
/// difference as a surcharge.
const FACADE_INCLUDED_PRICE: f64 = 30.0;
/// Approximate banded edge per cabinet, in metres.
const EDGE_PER_CABINET_M: f64 = 2.0;
/// Approximate finished face per cabinet, in m².
const FACE_PER_CABINET_M2: f64 = 1.5;
/// Backsplashes are priced at 60% of the countertop material rate.
const BACKSPLASH_FACTOR: f64 = 0.6;

pub(crate) fn price_cuisine(config: &CuisineConfig, catalogs: &CatalogSet) -> PriceBreakdown {
    let mut builder = BreakdownBuilder::new();

    let mut cabinet_count = 0usize;
    let mut door_cabinets = 0usize;
    let mut drawer_cabinets = 0usize;

    // Cabinets at catalog base price, scaled up (never down) by width.
    for placement in config.all_placements() {
        let Some(entry) = catalogs.kitchen.get(&placement.catalog_key) else {
            tracing::warn!(
                "Unknown kitchen cabinet '{}', pricing at 0",
                placement.catalog_key
            );
            continue;
        };
        cabinet_count += 1;
        if entry.has_door {
            door_cabinets += 1;
        }
        if entry.has_drawer {
            drawer_cabinets += 1;
        }

        let width_factor = (placement.width_mm / entry.default_width_mm).max(1.0);
        builder.modules(LineItem::new(
            entry.label.clone(),
            format!("{:.0} mm", placement.width_mm),
            round2(entry.base_price * width_factor),
        ));
    }

    // Facade surcharge above the included material rate.
    let facade_price = catalogs.materials.price_or_zero(&config.facade_material);
    if facade_price > FACADE_INCLUDED_PRICE && cabinet_count > 0 {
        builder.material(LineItem::new(
            "Supplément façades",
            catalogs.materials.name_or_key(&config.facade_material),
            round2((facade_price - FACADE_INCLUDED_PRICE) * cabinet_count as f64 * 0.5),
        ));
    }

    // Hardware from the catalog door/drawer flags.
    let hardware = &catalogs.hardware;
    if door_cabinets > 0 {
        builder.hardware(LineItem::new(
            "Charnières",
            format!("{door_cabinets} meuble(s) × 3"),
            round2(hardware.hinge_price * door_cabinets as f64 * 3.0),
        ));
    }
    if drawer_cabinets > 0 {
        builder.hardware(LineItem::new(
            "Coulisses",
            format!("{drawer_cabinets} meuble(s)"),
            round2(hardware.slide_price * drawer_cabinets as f64),
        ));
    }
    let fronts = door_cabinets + drawer_cabinets;
    if fronts > 0 {
        let handle_price = hardware.handle_price(config.global_handle);
        builder.hardware(LineItem::new(
            "Poignées",
            format!("{} — {fronts} façade(s)", config.global_handle),
            round2(handle_price * fronts as f64),
        ));
    }

    // Countertop: one run per wall carrying base cabinets.
    let countertop_price = catalogs.materials.price_or_zero(&config.countertop.material);
    let depth_m = config.countertop.depth_m();
    let total_base_run_m: f64 = config
        .walls
        .iter()
        .map(|wall| mm_to_m(config.base_run_on_wall(wall.id)))
        .sum();
    if total_base_run_m > 0.0 && countertop_price > 0.0 {
        builder.countertop(LineItem::new(
            "Plan de travail",
            format!("{total_base_run_m:.2} m × {depth_m:.2} m × {countertop_price} €/m²"),
            round2(total_base_run_m * depth_m * countertop_price),
        ));

        let backsplash_height_m = mm_to_m(config.countertop.backsplash_height_mm);
        if backsplash_height_m > 0.0 {
            builder.countertop(LineItem::new(
                "Crédence",
                format!("{total_base_run_m:.2} m × {backsplash_height_m:.2} m"),
                round2(
                    total_base_run_m * backsplash_height_m * countertop_price * BACKSPLASH_FACTOR,
                ),
            ));
        }
    }

    // Coarse per-cabinet edge and finish approximations.
    if cabinet_count > 0 {
        let banding_price = catalogs.banding.price_or_zero(&BandingKey::new("assorti"));
        builder.edge_banding(LineItem::new(
            "Chants",
            format!("{cabinet_count} meuble(s) × {EDGE_PER_CABINET_M} m"),
            round2(cabinet_count as f64 * EDGE_PER_CABINET_M * banding_price),
        ));

        let finish_price = catalogs.finishes.price_or_zero(&config.finish);
        if finish_price > 0.0 {
            builder.finish(LineItem::new(
                "Finition",
                format!("{cabinet_count} meuble(s) × {FACE_PER_CABINET_M2} m²"),
                round2(cabinet_count as f64 * FACE_PER_CABINET_M2 * finish_price),
            ));
        }
    }

    builder.finish_breakdown()
}
