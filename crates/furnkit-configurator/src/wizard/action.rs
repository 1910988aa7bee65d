//! The closed action vocabulary the wizard reducer accepts.

use furnkit_core::catalog::{
    BandingKey, FinishKey, HandleStyle, MaterialKey, ModuleKind, TemplateKey,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{BoardSide, FeetStyle, HardwareTier, KitchenLayout, ProductFamily};

/// Every mutation the wizard can apply to its state.
///
/// Family-specific actions are documented no-ops when the active
/// configuration belongs to another family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WizardAction {
    // Navigation
    GotoStep(usize),
    NextStep,
    PrevStep,

    // Product
    SetProductFamily(ProductFamily),
    SetName(String),

    // Shared content
    SetMaterial(MaterialKey),
    SetFinish(FinishKey),
    SetGlobalHandle(HandleStyle),
    SetHardware(HardwareTier),

    // Meuble
    ApplyTemplate(TemplateKey),
    AddCabinet {
        width_mm: f64,
        height_mm: f64,
        depth_mm: f64,
    },
    RemoveCabinet {
        cabinet: Uuid,
    },
    UpdateCabinetDims {
        cabinet: Uuid,
        width_mm: Option<f64>,
        height_mm: Option<f64>,
        depth_mm: Option<f64>,
        thickness_mm: Option<f64>,
    },
    AddModule {
        cabinet: Uuid,
        kind: ModuleKind,
    },
    RemoveModule {
        cabinet: Uuid,
        module: Uuid,
    },
    MoveModule {
        cabinet: Uuid,
        module: Uuid,
        position_mm: f64,
    },
    SetDoorSliding {
        cabinet: Uuid,
        sliding: bool,
    },
    SetFeet {
        cabinet: Uuid,
        feet: FeetStyle,
    },
    SetBackPanel {
        cabinet: Uuid,
        has_back: bool,
    },
    SetShowDimensions(bool),
    SetExploded(bool),

    // Planche
    AddBoard,
    RemoveBoard {
        board: Uuid,
    },
    UpdateBoard {
        board: Uuid,
        length_mm: Option<f64>,
        width_mm: Option<f64>,
        thickness_mm: Option<f64>,
        quantity: Option<u32>,
    },
    SetBoardBanding {
        board: Uuid,
        side: BoardSide,
        banding: Option<BandingKey>,
    },

    // Cuisine
    SetKitchenLayout(KitchenLayout),
    AddKitchenCabinet {
        catalog_key: String,
        wall: Uuid,
        width_mm: Option<f64>,
    },
    RemoveKitchenCabinet {
        placement: Uuid,
    },
    SetCountertopMaterial(MaterialKey),
    SetCountertopOverhang {
        overhang_mm: f64,
    },
    SetBacksplashHeight {
        height_mm: f64,
    },
    SetFacadeMaterial(MaterialKey),
    SetCarcassMaterial(MaterialKey),
}
