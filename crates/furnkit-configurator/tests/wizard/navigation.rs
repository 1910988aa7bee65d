use furnkit_configurator::{reduce, ProductFamily, WizardAction, WizardState};
use furnkit_core::catalog::CatalogSet;

#[test]
fn test_new_wizard_starts_on_default_meuble() {
    let state = WizardState::new();
    assert_eq!(state.current_step, 0);
    assert_eq!(state.max_reached_step, 0);
    assert_eq!(state.config.family(), ProductFamily::Meuble);
    assert!(!state.is_dirty);
    assert!(state.project_id.is_none());
}

#[test]
fn test_next_step_raises_max_reached() {
    let catalogs = CatalogSet::standard();
    let state = WizardState::new();

    let state = reduce(&state, &WizardAction::NextStep, &catalogs);
    assert_eq!(state.current_step, 1);
    assert_eq!(state.max_reached_step, 1);

    let state = reduce(&state, &WizardAction::PrevStep, &catalogs);
    assert_eq!(state.current_step, 0);
    // Going back never lowers the watermark.
    assert_eq!(state.max_reached_step, 1);
}

#[test]
fn test_next_step_clamps_at_last_step() {
    let catalogs = CatalogSet::standard();
    let mut state = WizardState::new();
    let last = state.step_count() - 1;

    for _ in 0..state.step_count() + 3 {
        state = reduce(&state, &WizardAction::NextStep, &catalogs);
    }
    assert_eq!(state.current_step, last);
    assert_eq!(state.max_reached_step, last);
}

#[test]
fn test_goto_cannot_jump_ahead_of_progress() {
    let catalogs = CatalogSet::standard();
    let state = WizardState::new();

    let jumped = reduce(&state, &WizardAction::GotoStep(3), &catalogs);
    assert_eq!(jumped.current_step, 0);

    // After advancing, backtracking within progress is allowed.
    let state = reduce(&state, &WizardAction::NextStep, &catalogs);
    let state = reduce(&state, &WizardAction::NextStep, &catalogs);
    let state = reduce(&state, &WizardAction::GotoStep(1), &catalogs);
    assert_eq!(state.current_step, 1);
    assert_eq!(state.max_reached_step, 2);
}

#[test]
fn test_goto_rejects_out_of_range_index() {
    let catalogs = CatalogSet::standard();
    let state = WizardState::new();
    let state = reduce(&state, &WizardAction::GotoStep(999), &catalogs);
    assert_eq!(state.current_step, 0);
}

#[test]
fn test_prev_step_clamps_at_zero() {
    let catalogs = CatalogSet::standard();
    let state = WizardState::new();
    let state = reduce(&state, &WizardAction::PrevStep, &catalogs);
    assert_eq!(state.current_step, 0);
}

#[test]
fn test_family_switch_resets_progress_and_config() {
    let catalogs = CatalogSet::standard();
    let mut state = WizardState::new();
    for _ in 0..4 {
        state = reduce(&state, &WizardAction::NextStep, &catalogs);
    }
    state = reduce(
        &state,
        &WizardAction::SetName("Mon projet".to_string()),
        &catalogs,
    );
    assert!(state.is_dirty);

    let state = reduce(
        &state,
        &WizardAction::SetProductFamily(ProductFamily::Cuisine),
        &catalogs,
    );
    assert_eq!(state.current_step, 1);
    assert_eq!(state.max_reached_step, 1);
    assert!(!state.is_dirty);
    assert_eq!(state.config.family(), ProductFamily::Cuisine);

    // Default kitchen: L-shaped, two walls, nothing placed.
    if let furnkit_configurator::ProductConfig::Cuisine(cuisine) = &state.config {
        assert_eq!(cuisine.walls.len(), 2);
        assert!(cuisine.base_cabinets.is_empty());
        assert!(cuisine.wall_cabinets.is_empty());
        assert!(cuisine.tall_cabinets.is_empty());
    } else {
        panic!("expected cuisine config");
    }
}

#[test]
fn test_family_switch_to_same_family_is_noop() {
    let catalogs = CatalogSet::standard();
    let state = reduce(
        &WizardState::new(),
        &WizardAction::SetName("Mon meuble".to_string()),
        &catalogs,
    );
    let next = reduce(
        &state,
        &WizardAction::SetProductFamily(ProductFamily::Meuble),
        &catalogs,
    );
    assert_eq!(next, state);
}

#[test]
fn test_navigation_does_not_dirty() {
    let catalogs = CatalogSet::standard();
    let state = WizardState::new();
    let state = reduce(&state, &WizardAction::NextStep, &catalogs);
    let state = reduce(&state, &WizardAction::PrevStep, &catalogs);
    assert!(!state.is_dirty);
}

#[test]
fn test_step_sequences_differ_per_family() {
    use furnkit_configurator::step_sequence;
    assert_eq!(step_sequence(ProductFamily::Meuble).len(), 8);
    assert_eq!(step_sequence(ProductFamily::Planche).len(), 5);
    assert_eq!(step_sequence(ProductFamily::Cuisine).len(), 8);
}
