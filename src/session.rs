//! The reactive configurator session.
//!
//! One synchronous loop, one execution turn per user input: dispatch an
//! action through the pure reducer, re-price the configuration (memoized on
//! its serialized form), rebuild the scene from scratch. The render loop
//! draws whatever the last rebuild produced; it is never driven from here.

use furnkit_configurator::{reduce, WizardAction, WizardState};
use furnkit_core::catalog::CatalogSet;
use furnkit_pricing::{price, PriceBreakdown};
use furnkit_quote::{
    ContactInfo, ProjectStore, QuoteError, QuotePayload, QuoteReceipt, QuoteTransport, StoreError,
};
use furnkit_scene::SceneArena;
use tracing::debug;
use uuid::Uuid;

/// Owns the wizard state, the catalogs, the current price breakdown, and
/// the scene arena, and keeps the three derived views consistent with the
/// configuration after every dispatch.
pub struct Session {
    wizard: WizardState,
    catalogs: CatalogSet,
    arena: SceneArena,
    breakdown: PriceBreakdown,
    /// Serialized configuration the current breakdown was computed for
    price_memo: String,
}

impl Session {
    /// Starts a session on the default configuration.
    pub fn new(catalogs: CatalogSet) -> Self {
        let wizard = WizardState::new();
        let mut session = Self {
            price_memo: String::new(),
            breakdown: PriceBreakdown::default(),
            arena: SceneArena::new(),
            wizard,
            catalogs,
        };
        session.refresh(true);
        session
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    pub fn breakdown(&self) -> &PriceBreakdown {
        &self.breakdown
    }

    pub fn scene(&self) -> &SceneArena {
        &self.arena
    }

    /// Dispatches an action: reducer, then pricing and scene refresh when
    /// the configuration actually changed. Returns whether any state moved.
    pub fn dispatch(&mut self, action: &WizardAction) -> bool {
        let next = reduce(&self.wizard, action, &self.catalogs);
        if next == self.wizard {
            return false;
        }
        let config_changed = next.config != self.wizard.config;
        self.wizard = next;
        if config_changed {
            self.refresh(false);
        }
        true
    }

    /// Recomputes the breakdown (memoized) and rebuilds the scene.
    fn refresh(&mut self, force: bool) {
        let key = serde_json::to_string(&self.wizard.config).unwrap_or_default();
        if force || key != self.price_memo {
            self.breakdown = price(&self.wizard.config, &self.catalogs);
            self.price_memo = key;
        } else {
            debug!("Price memo hit, skipping recomputation");
        }
        furnkit_scene::rebuild(&mut self.arena, &self.wizard.config, &self.catalogs);
    }

    /// Submits a quote through the given transport. The configuration is
    /// read-only here: a refused or failed submission leaves everything in
    /// place for a retry.
    pub fn submit_quote(
        &self,
        contact: &ContactInfo,
        transport: &dyn QuoteTransport,
    ) -> Result<QuoteReceipt, QuoteError> {
        let payload = QuotePayload::build(
            &self.wizard.config,
            &self.breakdown,
            contact,
            &self.catalogs,
        );
        transport.submit(&payload)
    }

    /// Persists the project through the external store and records the
    /// assigned id; a clean save clears the dirty flag.
    pub fn save_project(&mut self, store: &dyn ProjectStore) -> Result<Uuid, StoreError> {
        let id = store.save(self.wizard.project_id, &self.wizard.config)?;
        self.wizard.project_id = Some(id);
        self.wizard.is_dirty = false;
        Ok(id)
    }

    /// Serializes the configuration for download.
    pub fn export_configuration(&self) -> Result<String, StoreError> {
        furnkit_quote::export_configuration(&self.wizard.config)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CatalogSet::standard())
    }
}
