use furnkit_configurator::{reduce, ProductConfig, ProductFamily, WizardAction, WizardState};
use furnkit_core::catalog::CatalogSet;

#[test]
fn test_cabinet_dims_clamp_to_envelope() {
    let catalogs = CatalogSet::standard();
    let state = WizardState::new();
    let cabinet = match &state.config {
        ProductConfig::Meuble(c) => c.cabinets[0].id,
        _ => unreachable!(),
    };

    let state = reduce(
        &state,
        &WizardAction::UpdateCabinetDims {
            cabinet,
            width_mm: Some(99999.0),
            height_mm: Some(1.0),
            depth_mm: Some(-20.0),
            thickness_mm: None,
        },
        &catalogs,
    );

    let envelope = catalogs.envelopes.meuble;
    let cab = match &state.config {
        ProductConfig::Meuble(c) => &c.cabinets[0],
        _ => unreachable!(),
    };
    assert_eq!(cab.width_mm, envelope.width.max_mm);
    assert_eq!(cab.height_mm, envelope.height.min_mm);
    assert_eq!(cab.depth_mm, envelope.depth.min_mm);
}

#[test]
fn test_thickness_bounded_by_half_smallest_dimension() {
    let catalogs = CatalogSet::standard();
    let state = WizardState::new();
    let cabinet = match &state.config {
        ProductConfig::Meuble(c) => c.cabinets[0].id,
        _ => unreachable!(),
    };

    let state = reduce(
        &state,
        &WizardAction::UpdateCabinetDims {
            cabinet,
            width_mm: None,
            height_mm: None,
            depth_mm: None,
            thickness_mm: Some(5000.0),
        },
        &catalogs,
    );

    let cab = match &state.config {
        ProductConfig::Meuble(c) => &c.cabinets[0],
        _ => unreachable!(),
    };
    assert!(cab.thickness_mm <= cab.width_mm.min(cab.height_mm).min(cab.depth_mm) / 2.0);
}

#[test]
fn test_shrinking_cabinet_reclamps_module_positions() {
    let catalogs = CatalogSet::standard();
    let state = WizardState::new();
    let cabinet = match &state.config {
        ProductConfig::Meuble(c) => c.cabinets[0].id,
        _ => unreachable!(),
    };

    // Shrink the cabinet well below the topmost shelf position.
    let state = reduce(
        &state,
        &WizardAction::UpdateCabinetDims {
            cabinet,
            width_mm: None,
            height_mm: Some(600.0),
            depth_mm: None,
            thickness_mm: None,
        },
        &catalogs,
    );

    let cab = match &state.config {
        ProductConfig::Meuble(c) => &c.cabinets[0],
        _ => unreachable!(),
    };
    let (min, max) = cab.usable_range();
    for module in &cab.modules {
        assert!(module.position_mm >= min && module.position_mm <= max);
    }
}

#[test]
fn test_board_dims_clamp_and_thickness_snaps() {
    let catalogs = CatalogSet::standard();
    let state = reduce(
        &WizardState::new(),
        &WizardAction::SetProductFamily(ProductFamily::Planche),
        &catalogs,
    );
    let board = match &state.config {
        ProductConfig::Planche(c) => c.boards[0].id,
        _ => unreachable!(),
    };

    let state = reduce(
        &state,
        &WizardAction::UpdateBoard {
            board,
            length_mm: Some(50000.0),
            width_mm: Some(1.0),
            thickness_mm: Some(20.0),
            quantity: Some(0),
        },
        &catalogs,
    );

    let item = match &state.config {
        ProductConfig::Planche(c) => &c.boards[0],
        _ => unreachable!(),
    };
    assert_eq!(item.length_mm, catalogs.envelopes.planche_length.max_mm);
    assert_eq!(item.width_mm, catalogs.envelopes.planche_width.min_mm);
    // 20 mm is not offered; snaps to the nearest catalog thickness.
    assert_eq!(item.thickness_mm, 22.0);
    assert_eq!(item.quantity, 1);
}

#[test]
fn test_countertop_overhang_clamped() {
    let catalogs = CatalogSet::standard();
    let state = reduce(
        &WizardState::new(),
        &WizardAction::SetProductFamily(ProductFamily::Cuisine),
        &catalogs,
    );
    let state = reduce(
        &state,
        &WizardAction::SetCountertopOverhang { overhang_mm: 900.0 },
        &catalogs,
    );
    let state = reduce(
        &state,
        &WizardAction::SetBacksplashHeight { height_mm: -50.0 },
        &catalogs,
    );

    let cuisine = match &state.config {
        ProductConfig::Cuisine(c) => c,
        _ => unreachable!(),
    };
    assert_eq!(cuisine.countertop.overhang_mm, 150.0);
    assert_eq!(cuisine.countertop.backsplash_height_mm, 0.0);
}
