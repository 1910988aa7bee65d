//! The pure wizard transition function.
//!
//! `reduce` never mutates its input and never panics: navigation is gated,
//! family-mismatched actions are no-ops, and every dimension is clamped to
//! the product envelope before acceptance. The event layer calls it
//! synchronously and swaps in the returned state.

use furnkit_core::catalog::{CatalogSet, ModuleKind};
use tracing::warn;
use uuid::Uuid;

use crate::model::{
    relayout_cabinets, Board, Cabinet, CuisineConfig, MeubleConfig, Module, PlancheConfig,
    ProductConfig,
};
use crate::wizard::{WizardAction, WizardState};

/// Applies an action to the wizard state, returning the next state.
pub fn reduce(state: &WizardState, action: &WizardAction, catalogs: &CatalogSet) -> WizardState {
    let mut next = state.clone();

    match action {
        WizardAction::GotoStep(step) => {
            // Users cannot jump ahead of their recorded progress.
            if *step < next.step_count() && *step <= next.max_reached_step {
                next.current_step = *step;
            } else {
                warn!(
                    step,
                    max_reached = next.max_reached_step,
                    "Rejected out-of-range step jump"
                );
            }
            return next;
        }
        WizardAction::NextStep => {
            next.current_step = (next.current_step + 1).min(next.step_count() - 1);
            next.max_reached_step = next.max_reached_step.max(next.current_step);
            return next;
        }
        WizardAction::PrevStep => {
            next.current_step = next.current_step.saturating_sub(1);
            return next;
        }
        WizardAction::SetProductFamily(family) => {
            // Switching family discards the configuration wholesale and
            // restarts progress just past the product step.
            if next.config.family() != *family {
                next.config = ProductConfig::default_for(*family);
                next.current_step = 1;
                next.max_reached_step = 1;
                next.is_dirty = false;
            }
            return next;
        }
        _ => {}
    }

    if apply_content(&mut next.config, action, catalogs) {
        next.is_dirty = true;
    }
    next
}

/// Applies a content action to the configuration. Returns whether anything
/// changed; family mismatches and rejected edits return false.
fn apply_content(config: &mut ProductConfig, action: &WizardAction, catalogs: &CatalogSet) -> bool {
    match action {
        WizardAction::SetName(name) => {
            if config.name() == name {
                return false;
            }
            config.set_name(name.clone());
            true
        }

        WizardAction::SetMaterial(material) => match config {
            ProductConfig::Meuble(c) => {
                c.material = material.clone();
                true
            }
            ProductConfig::Planche(c) => {
                c.material = material.clone();
                true
            }
            ProductConfig::Cuisine(_) => {
                // Kitchens split materials into facade/carcass setters.
                mismatch(action, config)
            }
        },

        WizardAction::SetFinish(finish) => {
            match config {
                ProductConfig::Meuble(c) => c.finish = finish.clone(),
                ProductConfig::Planche(c) => c.finish = finish.clone(),
                ProductConfig::Cuisine(c) => c.finish = finish.clone(),
            }
            true
        }

        WizardAction::SetGlobalHandle(style) => match config {
            ProductConfig::Meuble(c) => {
                c.global_handle = *style;
                true
            }
            ProductConfig::Cuisine(c) => {
                c.global_handle = *style;
                true
            }
            ProductConfig::Planche(_) => mismatch(action, config),
        },

        WizardAction::SetHardware(tier) => match config {
            ProductConfig::Meuble(c) => {
                c.hardware = *tier;
                true
            }
            ProductConfig::Cuisine(c) => {
                c.hardware = *tier;
                true
            }
            ProductConfig::Planche(_) => mismatch(action, config),
        },

        // Meuble
        WizardAction::ApplyTemplate(key) => {
            let Some(meuble) = meuble_mut(config, action) else {
                return false;
            };
            match catalogs.templates.get(key) {
                Some(entry) => {
                    *meuble = MeubleConfig::from_template(key.clone(), entry);
                    true
                }
                None => {
                    warn!("Unknown template '{key}', keeping current configuration");
                    false
                }
            }
        }

        WizardAction::AddCabinet {
            width_mm,
            height_mm,
            depth_mm,
        } => {
            let envelope = catalogs.envelopes.meuble;
            let Some(meuble) = meuble_mut(config, action) else {
                return false;
            };
            meuble.cabinets.push(Cabinet::new(
                envelope.width.clamp(*width_mm),
                envelope.height.clamp(*height_mm),
                envelope.depth.clamp(*depth_mm),
            ));
            relayout_cabinets(&mut meuble.cabinets);
            true
        }

        WizardAction::RemoveCabinet { cabinet } => {
            let Some(meuble) = meuble_mut(config, action) else {
                return false;
            };
            if meuble.cabinets.len() <= 1 {
                warn!("Rejected removal of the last cabinet");
                return false;
            }
            let before = meuble.cabinets.len();
            meuble.cabinets.retain(|c| c.id != *cabinet);
            if meuble.cabinets.len() == before {
                return false;
            }
            relayout_cabinets(&mut meuble.cabinets);
            true
        }

        WizardAction::UpdateCabinetDims {
            cabinet,
            width_mm,
            height_mm,
            depth_mm,
            thickness_mm,
        } => {
            let envelope = catalogs.envelopes.meuble;
            let Some(meuble) = meuble_mut(config, action) else {
                return false;
            };
            let Some(cab) = meuble.cabinets.iter_mut().find(|c| c.id == *cabinet) else {
                return false;
            };
            if let Some(width) = width_mm {
                cab.width_mm = envelope.width.clamp(*width);
            }
            if let Some(height) = height_mm {
                cab.height_mm = envelope.height.clamp(*height);
            }
            if let Some(depth) = depth_mm {
                cab.depth_mm = envelope.depth.clamp(*depth);
            }
            if let Some(thickness) = thickness_mm {
                cab.thickness_mm = thickness.clamp(6.0, cab.max_thickness());
            }
            // A dimension change can strand existing state.
            cab.thickness_mm = cab.thickness_mm.min(cab.max_thickness());
            cab.clamp_module_positions();
            relayout_cabinets(&mut meuble.cabinets);
            true
        }

        WizardAction::AddModule { cabinet, kind } => {
            let default_height = catalogs.modules.default_height_or(*kind, 100.0);
            let Some(meuble) = meuble_mut(config, action) else {
                return false;
            };
            let Some(cab) = meuble.cabinets.iter_mut().find(|c| c.id == *cabinet) else {
                return false;
            };
            let (min, max) = cab.usable_range();
            let interior = cab.interior_width();
            let position = match kind {
                ModuleKind::Etagere | ModuleKind::Porte => 0.0,
                ModuleKind::Tiroir => min,
                ModuleKind::Penderie => (max - 50.0).max(min),
                ModuleKind::Niche => (min + max) / 2.0,
            };
            cab.modules
                .push(Module::new(*kind, position, interior, default_height));
            if *kind == ModuleKind::Etagere {
                cab.respace_shelves();
            }
            true
        }

        WizardAction::RemoveModule { cabinet, module } => {
            let Some(meuble) = meuble_mut(config, action) else {
                return false;
            };
            let Some(cab) = meuble.cabinets.iter_mut().find(|c| c.id == *cabinet) else {
                return false;
            };
            let removed_kind = cab
                .modules
                .iter()
                .find(|m| m.id == *module)
                .map(|m| m.kind);
            let Some(kind) = removed_kind else {
                return false;
            };
            cab.modules.retain(|m| m.id != *module);
            if kind == ModuleKind::Etagere {
                cab.respace_shelves();
            }
            true
        }

        WizardAction::MoveModule {
            cabinet,
            module,
            position_mm,
        } => {
            let Some(meuble) = meuble_mut(config, action) else {
                return false;
            };
            let Some(cab) = meuble.cabinets.iter_mut().find(|c| c.id == *cabinet) else {
                return false;
            };
            let (min, max) = cab.usable_range();
            let Some(item) = cab.modules.iter_mut().find(|m| m.id == *module) else {
                return false;
            };
            item.position_mm = position_mm.clamp(min, max.max(min));
            true
        }

        WizardAction::SetDoorSliding { cabinet, sliding } => {
            with_cabinet(config, action, *cabinet, |cab| {
                cab.door_style.sliding = *sliding;
            })
        }

        WizardAction::SetFeet { cabinet, feet } => with_cabinet(config, action, *cabinet, |cab| {
            cab.feet = *feet;
        }),

        WizardAction::SetBackPanel { cabinet, has_back } => {
            with_cabinet(config, action, *cabinet, |cab| {
                cab.has_back = *has_back;
            })
        }

        WizardAction::SetShowDimensions(show) => {
            let Some(meuble) = meuble_mut(config, action) else {
                return false;
            };
            meuble.show_dimensions = *show;
            true
        }

        WizardAction::SetExploded(exploded) => {
            let Some(meuble) = meuble_mut(config, action) else {
                return false;
            };
            meuble.exploded = *exploded;
            true
        }

        // Planche
        WizardAction::AddBoard => {
            let Some(planche) = planche_mut(config, action) else {
                return false;
            };
            planche.boards.push(Board::new(800.0, 400.0, 18.0));
            true
        }

        WizardAction::RemoveBoard { board } => {
            let Some(planche) = planche_mut(config, action) else {
                return false;
            };
            if planche.boards.len() <= 1 {
                warn!("Rejected removal of the last board");
                return false;
            }
            let before = planche.boards.len();
            planche.boards.retain(|b| b.id != *board);
            planche.boards.len() != before
        }

        WizardAction::UpdateBoard {
            board,
            length_mm,
            width_mm,
            thickness_mm,
            quantity,
        } => {
            let envelopes = &catalogs.envelopes;
            let Some(planche) = planche_mut(config, action) else {
                return false;
            };
            let Some(item) = planche.boards.iter_mut().find(|b| b.id == *board) else {
                return false;
            };
            if let Some(length) = length_mm {
                item.length_mm = envelopes.planche_length.clamp(*length);
            }
            if let Some(width) = width_mm {
                item.width_mm = envelopes.planche_width.clamp(*width);
            }
            if let Some(thickness) = thickness_mm {
                item.thickness_mm = envelopes.snap_board_thickness(*thickness);
            }
            if let Some(quantity) = quantity {
                item.quantity = (*quantity).max(1);
            }
            true
        }

        WizardAction::SetBoardBanding {
            board,
            side,
            banding,
        } => {
            let Some(planche) = planche_mut(config, action) else {
                return false;
            };
            let Some(item) = planche.boards.iter_mut().find(|b| b.id == *board) else {
                return false;
            };
            item.edge_banding.set(*side, banding.clone());
            true
        }

        // Cuisine
        WizardAction::SetKitchenLayout(layout) => {
            let Some(cuisine) = cuisine_mut(config, action) else {
                return false;
            };
            // Re-applying the current layout also resets placements.
            cuisine.apply_layout(*layout);
            true
        }

        WizardAction::AddKitchenCabinet {
            catalog_key,
            wall,
            width_mm,
        } => {
            let Some(entry) = catalogs.kitchen.get(catalog_key) else {
                warn!("Unknown kitchen cabinet '{catalog_key}', ignoring placement");
                return false;
            };
            let entry = entry.clone();
            let Some(cuisine) = cuisine_mut(config, action) else {
                return false;
            };
            if !cuisine.walls.iter().any(|w| w.id == *wall) {
                warn!("Placement references unknown wall, ignoring");
                return false;
            }
            let width = match width_mm {
                Some(requested) => nearest_allowed_width(*requested, &entry.allowed_widths_mm)
                    .unwrap_or(entry.default_width_mm),
                None => entry.default_width_mm,
            };
            let list = cuisine.placements_mut(entry.kind);
            let position: f64 = list
                .iter()
                .filter(|p| p.wall_id == *wall)
                .map(|p| p.width_mm)
                .sum();
            list.push(crate::model::KitchenPlacement {
                id: Uuid::new_v4(),
                catalog_key: catalog_key.clone(),
                width_mm: width,
                wall_id: *wall,
                position_on_wall_mm: position,
            });
            true
        }

        WizardAction::RemoveKitchenCabinet { placement } => {
            let Some(cuisine) = cuisine_mut(config, action) else {
                return false;
            };
            let before = cuisine.base_cabinets.len()
                + cuisine.wall_cabinets.len()
                + cuisine.tall_cabinets.len();
            cuisine.base_cabinets.retain(|p| p.id != *placement);
            cuisine.wall_cabinets.retain(|p| p.id != *placement);
            cuisine.tall_cabinets.retain(|p| p.id != *placement);
            let after = cuisine.base_cabinets.len()
                + cuisine.wall_cabinets.len()
                + cuisine.tall_cabinets.len();
            if after == before {
                return false;
            }
            cuisine.relayout_placements();
            true
        }

        WizardAction::SetCountertopMaterial(material) => {
            let Some(cuisine) = cuisine_mut(config, action) else {
                return false;
            };
            cuisine.countertop.material = material.clone();
            true
        }

        WizardAction::SetCountertopOverhang { overhang_mm } => {
            let Some(cuisine) = cuisine_mut(config, action) else {
                return false;
            };
            cuisine.countertop.overhang_mm = overhang_mm.clamp(0.0, 150.0);
            true
        }

        WizardAction::SetBacksplashHeight { height_mm } => {
            let Some(cuisine) = cuisine_mut(config, action) else {
                return false;
            };
            cuisine.countertop.backsplash_height_mm = height_mm.clamp(0.0, 800.0);
            true
        }

        WizardAction::SetFacadeMaterial(material) => {
            let Some(cuisine) = cuisine_mut(config, action) else {
                return false;
            };
            cuisine.facade_material = material.clone();
            true
        }

        WizardAction::SetCarcassMaterial(material) => {
            let Some(cuisine) = cuisine_mut(config, action) else {
                return false;
            };
            cuisine.carcass_material = material.clone();
            true
        }

        // Navigation and family switches were handled in `reduce`.
        WizardAction::GotoStep(_)
        | WizardAction::NextStep
        | WizardAction::PrevStep
        | WizardAction::SetProductFamily(_) => false,
    }
}

fn mismatch(action: &WizardAction, config: &ProductConfig) -> bool {
    warn!(
        "Ignoring {:?} on a {} configuration",
        action,
        config.family()
    );
    false
}

fn meuble_mut<'a>(
    config: &'a mut ProductConfig,
    action: &WizardAction,
) -> Option<&'a mut MeubleConfig> {
    match config {
        ProductConfig::Meuble(c) => Some(c),
        other => {
            mismatch(action, other);
            None
        }
    }
}

fn planche_mut<'a>(
    config: &'a mut ProductConfig,
    action: &WizardAction,
) -> Option<&'a mut PlancheConfig> {
    match config {
        ProductConfig::Planche(c) => Some(c),
        other => {
            mismatch(action, other);
            None
        }
    }
}

fn cuisine_mut<'a>(
    config: &'a mut ProductConfig,
    action: &WizardAction,
) -> Option<&'a mut CuisineConfig> {
    match config {
        ProductConfig::Cuisine(c) => Some(c),
        other => {
            mismatch(action, other);
            None
        }
    }
}

fn with_cabinet(
    config: &mut ProductConfig,
    action: &WizardAction,
    cabinet: Uuid,
    mutate: impl FnOnce(&mut Cabinet),
) -> bool {
    let Some(meuble) = meuble_mut(config, action) else {
        return false;
    };
    match meuble.cabinets.iter_mut().find(|c| c.id == cabinet) {
        Some(cab) => {
            mutate(cab);
            true
        }
        None => false,
    }
}

fn nearest_allowed_width(requested: f64, allowed: &[f64]) -> Option<f64> {
    allowed
        .iter()
        .copied()
        .min_by(|a, b| {
            (requested - a)
                .abs()
                .partial_cmp(&(requested - b).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
