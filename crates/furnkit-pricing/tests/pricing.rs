use furnkit_configurator::model::{
    Board, EdgeBanding, MeubleConfig, PlancheConfig, ProductConfig, QuickDesign,
};
use furnkit_configurator::{reduce, ProductFamily, WizardAction, WizardState};
use furnkit_core::catalog::{BandingKey, CatalogSet, MaterialKey, ModuleKind};
use furnkit_core::money::round2;
use furnkit_pricing::{price, price_quick};

fn catalogs() -> CatalogSet {
    CatalogSet::standard()
}

#[test]
fn test_default_meuble_breakdown() {
    let catalogs = catalogs();
    let config = ProductConfig::Meuble(MeubleConfig::default());
    let breakdown = price(&config, &catalogs);

    // 800×2200×600, oak at 45 €/m²: (2hd + 2wd + wh) = 5.36 m².
    assert_eq!(breakdown.material_cost, 241.2);
    // 3 shelves at 15 € each.
    assert_eq!(breakdown.modules_cost, 45.0);
    // Shelf supports only: 3 × 0.80 €.
    assert_eq!(breakdown.hardware_cost, 2.4);
    // Front-face perimeter 6 m × 2 €/m.
    assert_eq!(breakdown.edge_banding_cost, 12.0);
    // Raw finish costs nothing.
    assert_eq!(breakdown.finish_cost, 0.0);

    assert_eq!(breakdown.subtotal_ht, 300.6);
    assert_eq!(breakdown.tva, 60.12);
    assert_eq!(breakdown.total_ttc, 360.72);
}

#[test]
fn test_line_items_follow_computation_order() {
    let catalogs = catalogs();
    let config = ProductConfig::Meuble(MeubleConfig::default());
    let breakdown = price(&config, &catalogs);

    let labels: Vec<&str> = breakdown
        .line_items
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    // Material first, then modules, hardware, edges.
    assert!(labels[0].starts_with("Caisson"));
    assert!(labels[1..4].iter().all(|l| *l == "Étagère"));
    assert_eq!(labels[4], "Taquets d'étagère");
    assert!(labels[5].starts_with("Chants"));
}

#[test]
fn test_adding_shelf_increases_subtotal_by_unit_prices() {
    let catalogs = catalogs();
    let state = WizardState::new();
    let before = price(&state.config, &catalogs).subtotal_ht;

    let cabinet = match &state.config {
        ProductConfig::Meuble(c) => c.cabinets[0].id,
        _ => unreachable!(),
    };
    let state = reduce(
        &state,
        &WizardAction::AddModule {
            cabinet,
            kind: ModuleKind::Etagere,
        },
        &catalogs,
    );
    let after = price(&state.config, &catalogs).subtotal_ht;

    // One shelf adds its base price plus one support set.
    let expected = catalogs.modules.price_or_zero(ModuleKind::Etagere)
        + catalogs.hardware.shelf_support_price;
    assert_eq!(round2(after - before), round2(expected));
    assert!(after > before);
}

#[test]
fn test_adding_drawer_increases_subtotal_by_unit_prices() {
    let catalogs = catalogs();
    let state = WizardState::new();
    let before = price(&state.config, &catalogs).subtotal_ht;

    let cabinet = match &state.config {
        ProductConfig::Meuble(c) => c.cabinets[0].id,
        _ => unreachable!(),
    };
    let state = reduce(
        &state,
        &WizardAction::AddModule {
            cabinet,
            kind: ModuleKind::Tiroir,
        },
        &catalogs,
    );
    let after = price(&state.config, &catalogs).subtotal_ht;

    // Default handle style is None, so only the module and the slide pair.
    let expected =
        catalogs.modules.price_or_zero(ModuleKind::Tiroir) + catalogs.hardware.slide_price;
    assert_eq!(round2(after - before), round2(expected));
}

#[test]
fn test_planche_banded_edges() {
    let catalogs = catalogs();
    let mut board = Board::new(800.0, 400.0, 18.0);
    board.quantity = 2;
    board.edge_banding = EdgeBanding::all(BandingKey::new("assorti"));
    let config = ProductConfig::Planche(PlancheConfig {
        boards: vec![board],
        ..PlancheConfig::default()
    });

    let breakdown = price(&config, &catalogs);
    // 4 sides × side length × 2 €/m × quantity 2 = 9.60 €.
    assert_eq!(breakdown.edge_banding_cost, 9.6);
    // 0.32 m² × (18/18) × 45 €/m² × 2 pieces.
    assert_eq!(breakdown.material_cost, 28.8);
}

#[test]
fn test_planche_thickness_ratio_scales_material() {
    let catalogs = catalogs();
    let thin = ProductConfig::Planche(PlancheConfig {
        boards: vec![Board::new(1000.0, 500.0, 18.0)],
        ..PlancheConfig::default()
    });
    let thick = ProductConfig::Planche(PlancheConfig {
        boards: vec![Board::new(1000.0, 500.0, 38.0)],
        ..PlancheConfig::default()
    });

    let thin_cost = price(&thin, &catalogs).material_cost;
    let thick_cost = price(&thick, &catalogs).material_cost;
    assert_eq!(thick_cost, round2(thin_cost * 38.0 / 18.0));
}

fn kitchen_with_two_base_cabinets() -> (CatalogSet, WizardState) {
    let catalogs = CatalogSet::standard();
    let mut state = reduce(
        &WizardState::new(),
        &WizardAction::SetProductFamily(ProductFamily::Cuisine),
        &catalogs,
    );
    let wall = match &state.config {
        ProductConfig::Cuisine(c) => c.walls[0].id,
        _ => unreachable!(),
    };
    for _ in 0..2 {
        state = reduce(
            &state,
            &WizardAction::AddKitchenCabinet {
                catalog_key: "bas-porte".to_string(),
                wall,
                width_mm: Some(600.0),
            },
            &catalogs,
        );
    }
    (catalogs, state)
}

#[test]
fn test_cuisine_countertop_with_overhang() {
    let (catalogs, state) = kitchen_with_two_base_cabinets();
    let state = reduce(
        &state,
        &WizardAction::SetCountertopMaterial(MaterialKey::new("plan-bois")),
        &catalogs,
    );
    let state = reduce(
        &state,
        &WizardAction::SetCountertopOverhang { overhang_mm: 30.0 },
        &catalogs,
    );

    let breakdown = price(&state.config, &catalogs);
    // 1.2 m run × (0.58 + 0.03) m × 80 €/m² = 58.56 €.
    assert_eq!(breakdown.countertop_cost, 58.56);
}

#[test]
fn test_cuisine_backsplash_only_when_height_positive() {
    let (catalogs, state) = kitchen_with_two_base_cabinets();
    let state = reduce(
        &state,
        &WizardAction::SetCountertopMaterial(MaterialKey::new("plan-bois")),
        &catalogs,
    );
    let without = price(&state.config, &catalogs).countertop_cost;

    let state = reduce(
        &state,
        &WizardAction::SetBacksplashHeight { height_mm: 500.0 },
        &catalogs,
    );
    let with = price(&state.config, &catalogs).countertop_cost;

    // 1.2 m × 0.5 m × 80 €/m² × 0.6 = 28.80 € on top.
    assert_eq!(round2(with - without), 28.8);
}

#[test]
fn test_cuisine_facade_surcharge_threshold() {
    let (catalogs, state) = kitchen_with_two_base_cabinets();
    // Melamine (18 €/m²) sits under the included rate: no surcharge.
    let breakdown = price(&state.config, &catalogs);
    assert_eq!(breakdown.material_cost, 0.0);

    let state = reduce(
        &state,
        &WizardAction::SetFacadeMaterial(MaterialKey::new("chene")),
        &catalogs,
    );
    let breakdown = price(&state.config, &catalogs);
    // (45 − 30) × 2 cabinets × 0.5 = 15 €.
    assert_eq!(breakdown.material_cost, 15.0);
}

#[test]
fn test_cuisine_width_factor_never_discounts() {
    let catalogs = CatalogSet::standard();
    let state = reduce(
        &WizardState::new(),
        &WizardAction::SetProductFamily(ProductFamily::Cuisine),
        &catalogs,
    );
    let wall = match &state.config {
        ProductConfig::Cuisine(c) => c.walls[0].id,
        _ => unreachable!(),
    };
    let narrow = reduce(
        &state,
        &WizardAction::AddKitchenCabinet {
            catalog_key: "bas-porte".to_string(),
            wall,
            width_mm: Some(400.0),
        },
        &catalogs,
    );
    let wide = reduce(
        &state,
        &WizardAction::AddKitchenCabinet {
            catalog_key: "bas-porte".to_string(),
            wall,
            width_mm: Some(800.0),
        },
        &catalogs,
    );

    let base = catalogs.kitchen.get("bas-porte").unwrap().base_price;
    // Narrower than default still pays the base price.
    assert_eq!(price(&narrow.config, &catalogs).modules_cost, base);
    // Wider scales by width over the default 600.
    assert_eq!(
        price(&wide.config, &catalogs).modules_cost,
        round2(base * 800.0 / 600.0)
    );
}

#[test]
fn test_tax_invariant() {
    let catalogs = catalogs();
    let configs = [
        ProductConfig::Meuble(MeubleConfig::default()),
        ProductConfig::Planche(PlancheConfig::default()),
        ProductConfig::default_for(ProductFamily::Cuisine),
    ];
    for config in &configs {
        let breakdown = price(config, &catalogs);
        assert_eq!(
            breakdown.total_ttc,
            round2(breakdown.subtotal_ht + round2(breakdown.subtotal_ht * 0.20))
        );
        assert_eq!(breakdown.tva, round2(breakdown.subtotal_ht * 0.20));
    }
}

#[test]
fn test_unknown_material_degrades_to_zero() {
    let catalogs = catalogs();
    let config = ProductConfig::Meuble(MeubleConfig {
        material: MaterialKey::new("bois-imaginaire"),
        ..MeubleConfig::default()
    });
    let breakdown = price(&config, &catalogs);
    assert_eq!(breakdown.material_cost, 0.0);
    // Everything else still prices normally.
    assert_eq!(breakdown.modules_cost, 45.0);
}

#[test]
fn test_quick_worktop_pricing() {
    let catalogs = catalogs();
    let mut design = QuickDesign::new(furnkit_configurator::QuickCategory::Worktop);
    design.material = MaterialKey::new("plan-bois");
    design.shape = furnkit_configurator::QuickShape::L;

    let breakdown = price_quick(&design, &catalogs);
    // 2.0 × 0.65 m² × 1.5 (L shape) × 80 €/m².
    assert_eq!(breakdown.material_cost, 156.0);
    assert_eq!(breakdown.subtotal_ht, 156.0);
}
