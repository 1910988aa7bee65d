//! Wizard state machine.
//!
//! This module is split into submodules:
//! - `action`: the closed action vocabulary
//! - `steps`: per-family step sequences
//! - `reducer`: the pure transition function

mod action;
mod reducer;
mod steps;

pub use action::WizardAction;
pub use reducer::reduce;
pub use steps::{step_sequence, WizardStep};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ProductConfig;

/// The wizard's full state: current configuration plus navigation progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    /// Index into the active family's step sequence
    pub current_step: usize,
    /// Highest step the user has reached; forward jumps are gated on it
    pub max_reached_step: usize,
    pub config: ProductConfig,
    /// Set by every accepted content mutation, cleared on save
    pub is_dirty: bool,
    /// `None` until the external save collaborator persists the project
    pub project_id: Option<Uuid>,
}

impl WizardState {
    /// Creates a fresh wizard on the default furniture configuration.
    pub fn new() -> Self {
        Self {
            current_step: 0,
            max_reached_step: 0,
            config: ProductConfig::default(),
            is_dirty: false,
            project_id: None,
        }
    }

    /// Number of steps for the active family.
    pub fn step_count(&self) -> usize {
        step_sequence(self.config.family()).len()
    }

    /// The step the wizard currently shows.
    pub fn current_step_kind(&self) -> WizardStep {
        step_sequence(self.config.family())[self.current_step]
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
