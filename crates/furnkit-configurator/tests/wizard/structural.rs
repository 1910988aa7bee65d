use furnkit_configurator::{
    reduce, ProductConfig, ProductFamily, WizardAction, WizardState,
};
use furnkit_core::catalog::{CatalogSet, ModuleKind, TemplateKey};

fn meuble_state() -> WizardState {
    WizardState::new()
}

fn meuble(state: &WizardState) -> &furnkit_configurator::MeubleConfig {
    match &state.config {
        ProductConfig::Meuble(c) => c,
        other => panic!("expected meuble config, got {:?}", other.family()),
    }
}

#[test]
fn test_default_meuble_is_scenario_fixture() {
    let state = meuble_state();
    let config = meuble(&state);
    assert_eq!(config.cabinets.len(), 1);
    let cabinet = &config.cabinets[0];
    assert_eq!(cabinet.width_mm, 800.0);
    assert_eq!(cabinet.height_mm, 2200.0);
    assert_eq!(cabinet.depth_mm, 600.0);
    assert_eq!(cabinet.shelf_count(), 3);
    assert_eq!(cabinet.drawer_count(), 0);
    assert_eq!(cabinet.door_count(), 0);
    assert!(cabinet.has_back);
}

#[test]
fn test_add_cabinet_relayouts_running_sum() {
    let catalogs = CatalogSet::standard();
    let state = meuble_state();
    let state = reduce(
        &state,
        &WizardAction::AddCabinet {
            width_mm: 600.0,
            height_mm: 2200.0,
            depth_mm: 600.0,
        },
        &catalogs,
    );
    let state = reduce(
        &state,
        &WizardAction::AddCabinet {
            width_mm: 450.0,
            height_mm: 2000.0,
            depth_mm: 500.0,
        },
        &catalogs,
    );

    let config = meuble(&state);
    assert_eq!(config.cabinets.len(), 3);
    // i-th position.x equals the sum of preceding widths.
    let mut expected = 0.0;
    for cabinet in &config.cabinets {
        assert_eq!(cabinet.position.x, expected);
        expected += cabinet.width_mm;
    }
    assert!(state.is_dirty);
}

#[test]
fn test_remove_last_cabinet_rejected() {
    let catalogs = CatalogSet::standard();
    let state = meuble_state();
    let id = meuble(&state).cabinets[0].id;
    let next = reduce(&state, &WizardAction::RemoveCabinet { cabinet: id }, &catalogs);
    assert_eq!(meuble(&next).cabinets.len(), 1);
    assert!(!next.is_dirty);
}

#[test]
fn test_remove_cabinet_relayouts() {
    let catalogs = CatalogSet::standard();
    let state = meuble_state();
    let state = reduce(
        &state,
        &WizardAction::AddCabinet {
            width_mm: 600.0,
            height_mm: 2200.0,
            depth_mm: 600.0,
        },
        &catalogs,
    );
    let first = meuble(&state).cabinets[0].id;
    let state = reduce(
        &state,
        &WizardAction::RemoveCabinet { cabinet: first },
        &catalogs,
    );
    let config = meuble(&state);
    assert_eq!(config.cabinets.len(), 1);
    assert_eq!(config.cabinets[0].position.x, 0.0);
}

#[test]
fn test_add_shelf_respaces_evenly() {
    let catalogs = CatalogSet::standard();
    let state = meuble_state();
    let cabinet = meuble(&state).cabinets[0].id;
    let state = reduce(
        &state,
        &WizardAction::AddModule {
            cabinet,
            kind: ModuleKind::Etagere,
        },
        &catalogs,
    );
    let cab = &meuble(&state).cabinets[0];
    assert_eq!(cab.shelf_count(), 4);
    let height = cab.height_mm;
    let positions: Vec<f64> = cab
        .modules
        .iter()
        .filter(|m| m.kind == ModuleKind::Etagere)
        .map(|m| m.position_mm)
        .collect();
    for (i, position) in positions.iter().enumerate() {
        let expected = height * (i as f64 + 1.0) / 5.0;
        assert!((position - expected).abs() < 1e-9);
    }
}

#[test]
fn test_move_module_clamps_to_usable_range() {
    let catalogs = CatalogSet::standard();
    let state = meuble_state();
    let cab = &meuble(&state).cabinets[0];
    let (cabinet, module) = (cab.id, cab.modules[0].id);
    let (min, max) = cab.usable_range();

    let state = reduce(
        &state,
        &WizardAction::MoveModule {
            cabinet,
            module,
            position_mm: -500.0,
        },
        &catalogs,
    );
    assert_eq!(meuble(&state).cabinets[0].modules[0].position_mm, min);

    let state = reduce(
        &state,
        &WizardAction::MoveModule {
            cabinet,
            module,
            position_mm: 99999.0,
        },
        &catalogs,
    );
    assert_eq!(meuble(&state).cabinets[0].modules[0].position_mm, max);
}

#[test]
fn test_family_mismatch_is_total_noop() {
    let catalogs = CatalogSet::standard();
    let state = reduce(
        &WizardState::new(),
        &WizardAction::SetProductFamily(ProductFamily::Planche),
        &catalogs,
    );
    // Meuble-only action against a planche config: state unchanged, no panic.
    let next = reduce(
        &state,
        &WizardAction::AddCabinet {
            width_mm: 800.0,
            height_mm: 2000.0,
            depth_mm: 600.0,
        },
        &catalogs,
    );
    assert_eq!(next, state);

    // And the other way around.
    let next = reduce(&state, &WizardAction::AddBoard, &catalogs);
    assert_ne!(next, state);
}

#[test]
fn test_remove_last_board_rejected() {
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
    let next = reduce(&state, &WizardAction::RemoveBoard { board }, &catalogs);
    match &next.config {
        ProductConfig::Planche(c) => assert_eq!(c.boards.len(), 1),
        _ => unreachable!(),
    }
}

#[test]
fn test_apply_template_replaces_cabinets() {
    let catalogs = CatalogSet::standard();
    let state = reduce(
        &meuble_state(),
        &WizardAction::ApplyTemplate(TemplateKey::new("dressing")),
        &catalogs,
    );
    let config = meuble(&state);
    assert_eq!(config.cabinets.len(), 2);
    assert_eq!(config.template, Some(TemplateKey::new("dressing")));
    // Running-sum layout holds for template cabinets too.
    assert_eq!(config.cabinets[1].position.x, config.cabinets[0].width_mm);
}

#[test]
fn test_apply_unknown_template_is_noop() {
    let catalogs = CatalogSet::standard();
    let state = meuble_state();
    let next = reduce(
        &state,
        &WizardAction::ApplyTemplate(TemplateKey::new("inexistant")),
        &catalogs,
    );
    assert_eq!(next, state);
}
