//! Property tests: the reducer is total and keeps its invariants under
//! arbitrary action sequences.

use furnkit_configurator::{reduce, ProductConfig, ProductFamily, WizardAction, WizardState};
use furnkit_core::catalog::{CatalogSet, ModuleKind};
use proptest::prelude::*;

fn arb_family() -> impl Strategy<Value = ProductFamily> {
    prop_oneof![
        Just(ProductFamily::Meuble),
        Just(ProductFamily::Planche),
        Just(ProductFamily::Cuisine),
    ]
}

fn arb_action() -> impl Strategy<Value = WizardAction> {
    prop_oneof![
        (0usize..12).prop_map(WizardAction::GotoStep),
        Just(WizardAction::NextStep),
        Just(WizardAction::PrevStep),
        arb_family().prop_map(WizardAction::SetProductFamily),
        (100.0f64..9000.0, 100.0f64..4000.0, 50.0f64..1500.0).prop_map(
            |(width_mm, height_mm, depth_mm)| WizardAction::AddCabinet {
                width_mm,
                height_mm,
                depth_mm,
            }
        ),
        Just(WizardAction::AddBoard),
        Just(WizardAction::SetExploded(true)),
        (0.0f64..500.0).prop_map(|overhang_mm| WizardAction::SetCountertopOverhang { overhang_mm }),
    ]
}

proptest! {
    #[test]
    fn reducer_never_panics_and_gates_steps(actions in prop::collection::vec(arb_action(), 1..40)) {
        let catalogs = CatalogSet::standard();
        let mut state = WizardState::new();
        for action in &actions {
            state = reduce(&state, action, &catalogs);
            prop_assert!(state.current_step < state.step_count());
            prop_assert!(state.current_step <= state.max_reached_step || state.max_reached_step == 0);
        }
    }

    #[test]
    fn cabinet_layout_invariant_holds(widths in prop::collection::vec(100.0f64..2000.0, 1..6)) {
        let catalogs = CatalogSet::standard();
        let mut state = WizardState::new();
        for width_mm in &widths {
            state = reduce(&state, &WizardAction::AddCabinet {
                width_mm: *width_mm,
                height_mm: 2000.0,
                depth_mm: 600.0,
            }, &catalogs);
        }
        if let ProductConfig::Meuble(config) = &state.config {
            let mut expected = 0.0;
            for cabinet in &config.cabinets {
                prop_assert!((cabinet.position.x - expected).abs() < 1e-9);
                expected += cabinet.width_mm;
            }
        }
    }

    #[test]
    fn moved_modules_stay_in_usable_range(position in -5000.0f64..10000.0) {
        let catalogs = CatalogSet::standard();
        let state = WizardState::new();
        let (cabinet, module) = match &state.config {
            ProductConfig::Meuble(c) => (c.cabinets[0].id, c.cabinets[0].modules[0].id),
            _ => unreachable!(),
        };
        let next = reduce(&state, &WizardAction::MoveModule {
            cabinet,
            module,
            position_mm: position,
        }, &catalogs);
        if let ProductConfig::Meuble(config) = &next.config {
            let cab = &config.cabinets[0];
            let (min, max) = cab.usable_range();
            let moved = cab.modules.iter().find(|m| m.id == module).unwrap();
            prop_assert!(moved.kind == ModuleKind::Etagere);
            prop_assert!(moved.position_mm >= min && moved.position_mm <= max);
        }
    }
}
