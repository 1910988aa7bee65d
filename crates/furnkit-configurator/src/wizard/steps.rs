//! Wizard step sequences, derived from the active product family.

use crate::model::ProductFamily;
use serde::{Deserialize, Serialize};

/// Every step any family's wizard can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum WizardStep {
    /// Product family choice
    Produit,
    /// Template selection (meuble)
    Gabarit,
    /// Dimension entry
    Dimensions,
    /// Interior fittings (meuble)
    Amenagement,
    /// Material choice
    Materiau,
    /// Doors and fronts (meuble)
    Facades,
    /// Edge banding (planche)
    Chants,
    /// Wall layout (cuisine)
    Implantation,
    /// Cabinet placement (cuisine)
    Meubles,
    /// Countertop and backsplash (cuisine)
    PlanDeTravail,
    /// Handles and hardware (cuisine)
    Quincaillerie,
    /// Finish choice
    Finitions,
    /// Summary and quote
    Recapitulatif,
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Produit => write!(f, "Produit"),
            Self::Gabarit => write!(f, "Gabarit"),
            Self::Dimensions => write!(f, "Dimensions"),
            Self::Amenagement => write!(f, "Aménagement"),
            Self::Materiau => write!(f, "Matériau"),
            Self::Facades => write!(f, "Façades"),
            Self::Chants => write!(f, "Chants"),
            Self::Implantation => write!(f, "Implantation"),
            Self::Meubles => write!(f, "Meubles"),
            Self::PlanDeTravail => write!(f, "Plan de travail"),
            Self::Quincaillerie => write!(f, "Quincaillerie"),
            Self::Finitions => write!(f, "Finitions"),
            Self::Recapitulatif => write!(f, "Récapitulatif"),
        }
    }
}

const MEUBLE_STEPS: [WizardStep; 8] = [
    WizardStep::Produit,
    WizardStep::Gabarit,
    WizardStep::Dimensions,
    WizardStep::Amenagement,
    WizardStep::Materiau,
    WizardStep::Facades,
    WizardStep::Finitions,
    WizardStep::Recapitulatif,
];

const PLANCHE_STEPS: [WizardStep; 5] = [
    WizardStep::Produit,
    WizardStep::Dimensions,
    WizardStep::Chants,
    WizardStep::Finitions,
    WizardStep::Recapitulatif,
];

const CUISINE_STEPS: [WizardStep; 8] = [
    WizardStep::Produit,
    WizardStep::Implantation,
    WizardStep::Meubles,
    WizardStep::PlanDeTravail,
    WizardStep::Materiau,
    WizardStep::Quincaillerie,
    WizardStep::Finitions,
    WizardStep::Recapitulatif,
];

/// The ordered step list for a product family.
pub fn step_sequence(family: ProductFamily) -> &'static [WizardStep] {
    match family {
        ProductFamily::Meuble => &MEUBLE_STEPS,
        ProductFamily::Planche => &PLANCHE_STEPS,
        ProductFamily::Cuisine => &CUISINE_STEPS,
    }
}
