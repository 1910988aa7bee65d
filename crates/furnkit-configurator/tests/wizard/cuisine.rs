use furnkit_configurator::{
    reduce, KitchenLayout, ProductConfig, ProductFamily, WizardAction, WizardState,
};
use furnkit_core::catalog::CatalogSet;

fn cuisine_state() -> (CatalogSet, WizardState) {
    let catalogs = CatalogSet::standard();
    let state = reduce(
        &WizardState::new(),
        &WizardAction::SetProductFamily(ProductFamily::Cuisine),
        &catalogs,
    );
    (catalogs, state)
}

fn cuisine(state: &WizardState) -> &furnkit_configurator::CuisineConfig {
    match &state.config {
        ProductConfig::Cuisine(c) => c,
        other => panic!("expected cuisine config, got {:?}", other.family()),
    }
}

#[test]
fn test_layout_presets_determine_wall_count() {
    let (catalogs, state) = cuisine_state();
    for (layout, walls) in [
        (KitchenLayout::I, 1),
        (KitchenLayout::L, 2),
        (KitchenLayout::U, 3),
        (KitchenLayout::Island, 2),
    ] {
        let next = reduce(&state, &WizardAction::SetKitchenLayout(layout), &catalogs);
        assert_eq!(cuisine(&next).walls.len(), walls, "layout {layout}");
    }
}

#[test]
fn test_layout_change_clears_placements() {
    let (catalogs, state) = cuisine_state();
    let wall = cuisine(&state).walls[0].id;
    let state = reduce(
        &state,
        &WizardAction::AddKitchenCabinet {
            catalog_key: "bas-porte".to_string(),
            wall,
            width_mm: None,
        },
        &catalogs,
    );
    assert_eq!(cuisine(&state).base_cabinets.len(), 1);

    let state = reduce(
        &state,
        &WizardAction::SetKitchenLayout(KitchenLayout::U),
        &catalogs,
    );
    assert!(cuisine(&state).base_cabinets.is_empty());
}

#[test]
fn test_placements_append_with_running_position() {
    let (catalogs, state) = cuisine_state();
    let wall = cuisine(&state).walls[0].id;

    let mut state = state;
    for _ in 0..3 {
        state = reduce(
            &state,
            &WizardAction::AddKitchenCabinet {
                catalog_key: "bas-porte".to_string(),
                wall,
                width_mm: None,
            },
            &catalogs,
        );
    }

    let config = cuisine(&state);
    assert_eq!(config.base_cabinets.len(), 3);
    assert_eq!(config.base_cabinets[0].position_on_wall_mm, 0.0);
    assert_eq!(config.base_cabinets[1].position_on_wall_mm, 600.0);
    assert_eq!(config.base_cabinets[2].position_on_wall_mm, 1200.0);
}

#[test]
fn test_placement_width_snaps_to_allowed_set() {
    let (catalogs, state) = cuisine_state();
    let wall = cuisine(&state).walls[0].id;
    let state = reduce(
        &state,
        &WizardAction::AddKitchenCabinet {
            catalog_key: "bas-porte".to_string(),
            wall,
            width_mm: Some(550.0),
        },
        &catalogs,
    );
    // 550 is not offered; 500 and 600 tie-break to the nearest found first.
    let width = cuisine(&state).base_cabinets[0].width_mm;
    assert!(width == 500.0 || width == 600.0);
}

#[test]
fn test_unknown_catalog_key_is_noop() {
    let (catalogs, state) = cuisine_state();
    let wall = cuisine(&state).walls[0].id;
    let next = reduce(
        &state,
        &WizardAction::AddKitchenCabinet {
            catalog_key: "meuble-fantome".to_string(),
            wall,
            width_mm: None,
        },
        &catalogs,
    );
    assert_eq!(next, state);
}

#[test]
fn test_remove_placement_recomputes_positions() {
    let (catalogs, state) = cuisine_state();
    let wall = cuisine(&state).walls[0].id;

    let mut state = state;
    for key in ["bas-porte", "bas-tiroirs", "bas-porte"] {
        state = reduce(
            &state,
            &WizardAction::AddKitchenCabinet {
                catalog_key: key.to_string(),
                wall,
                width_mm: None,
            },
            &catalogs,
        );
    }
    let middle = cuisine(&state).base_cabinets[1].id;
    let state = reduce(
        &state,
        &WizardAction::RemoveKitchenCabinet { placement: middle },
        &catalogs,
    );

    let config = cuisine(&state);
    assert_eq!(config.base_cabinets.len(), 2);
    assert_eq!(config.base_cabinets[0].position_on_wall_mm, 0.0);
    assert_eq!(
        config.base_cabinets[1].position_on_wall_mm,
        config.base_cabinets[0].width_mm
    );
}

#[test]
fn test_tall_and_wall_runs_are_independent() {
    let (catalogs, state) = cuisine_state();
    let wall = cuisine(&state).walls[0].id;

    let state = reduce(
        &state,
        &WizardAction::AddKitchenCabinet {
            catalog_key: "bas-porte".to_string(),
            wall,
            width_mm: None,
        },
        &catalogs,
    );
    let state = reduce(
        &state,
        &WizardAction::AddKitchenCabinet {
            catalog_key: "haut-porte".to_string(),
            wall,
            width_mm: None,
        },
        &catalogs,
    );

    let config = cuisine(&state);
    // The wall cabinet starts its own run at 0, not after the base cabinet.
    assert_eq!(config.wall_cabinets[0].position_on_wall_mm, 0.0);
}
