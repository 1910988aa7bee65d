//! # Furnkit
//!
//! A parametric furniture configurator engine: strongly-typed product
//! configurations, a wizard state machine, a pure pricing engine, and a
//! live procedural 3D/2D preview with interactive module repositioning.
//!
//! ## Architecture
//!
//! Furnkit is organized as a workspace with multiple crates:
//!
//! 1. **furnkit-core** - Catalogs, envelopes, money rules, shared errors
//! 2. **furnkit-configurator** - Configuration model and wizard reducer
//! 3. **furnkit-pricing** - Pure price breakdown per product family
//! 4. **furnkit-scene** - Procedural scene builders and the flat 2D variant
//! 5. **furnkit-viewport** - Orbit camera, render loop, drag protocol
//! 6. **furnkit-quote** - Quote submission and project persistence seams
//! 7. **furnkit-settings** - Admin-editable catalog overrides
//! 8. **furnkit** - This crate: re-exports plus the reactive [`Session`]
//!
//! The data flow is strictly one-directional and synchronous: a
//! [`WizardAction`] goes through the reducer, the new configuration is
//! re-priced (memoized) and the scene rebuilt, and the render loop keeps
//! redrawing whatever was built last.

mod session;

pub use session::Session;

pub use furnkit_configurator::{
    model, reduce, step_sequence, ProductConfig, ProductFamily, WizardAction, WizardState,
    WizardStep,
};
pub use furnkit_core::catalog::CatalogSet;
pub use furnkit_core::{error, money, units, Error, Result};
pub use furnkit_pricing::{price, price_quick, LineItem, PriceBreakdown};
pub use furnkit_quote::{
    export_configuration, ContactInfo, HttpQuoteClient, MemoryProjectStore, ProjectStore,
    QuoteError, QuotePayload, QuoteReceipt, QuoteTransport, StoreError,
};
pub use furnkit_scene::{frame_scene, rebuild, SceneArena, ScenePart};
pub use furnkit_settings::{load_or_default, CatalogSettings, SettingsPersistence};
pub use furnkit_viewport::{DragController, DragTarget, OrbitCamera, RenderLoop};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Host applications call this once at startup; the library crates only
/// emit `tracing` events and never install a subscriber themselves.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
