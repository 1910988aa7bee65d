//! Project persistence boundary.
//!
//! Projects are saved as opaque JSON blobs; the storage schema beyond
//! "JSON-serializable configuration" belongs to the backend, not the engine.

use std::collections::HashMap;
use std::sync::Mutex;

use furnkit_configurator::model::ProductConfig;
use thiserror::Error;
use uuid::Uuid;

/// Persistence failure modes.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The configuration could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store refused the write
    #[error("Store write failed: {message}")]
    WriteFailed {
        /// The store-provided reason.
        message: String,
    },
}

/// The external save/export collaborator.
pub trait ProjectStore {
    /// Persists the configuration, returning the project id (newly assigned
    /// on first save).
    fn save(&self, project_id: Option<Uuid>, config: &ProductConfig) -> Result<Uuid, StoreError>;

    /// Loads a previously saved configuration.
    fn load(&self, project_id: Uuid) -> Option<ProductConfig>;
}

/// Serializes a configuration for download/export as pretty JSON.
pub fn export_configuration(config: &ProductConfig) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// In-memory store used by tests and the demo host.
#[derive(Default)]
pub struct MemoryProjectStore {
    projects: Mutex<HashMap<Uuid, String>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.projects.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProjectStore for MemoryProjectStore {
    fn save(&self, project_id: Option<Uuid>, config: &ProductConfig) -> Result<Uuid, StoreError> {
        let id = project_id.unwrap_or_else(Uuid::new_v4);
        let blob = serde_json::to_string(config)?;
        let mut projects = self.projects.lock().map_err(|_| StoreError::WriteFailed {
            message: "store poisoned".to_string(),
        })?;
        projects.insert(id, blob);
        Ok(id)
    }

    fn load(&self, project_id: Uuid) -> Option<ProductConfig> {
        let projects = self.projects.lock().ok()?;
        let blob = projects.get(&project_id)?;
        serde_json::from_str(blob).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furnkit_configurator::model::MeubleConfig;

    #[test]
    fn test_save_load_roundtrip() {
        let store = MemoryProjectStore::new();
        let config = ProductConfig::Meuble(MeubleConfig::default());

        let id = store.save(None, &config).unwrap();
        let loaded = store.load(id).expect("saved project loads back");
        assert_eq!(loaded, config);

        // Re-saving under the same id overwrites, not duplicates.
        let id2 = store.save(Some(id), &config).unwrap();
        assert_eq!(id, id2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_export_is_tagged_json() {
        let config = ProductConfig::Meuble(MeubleConfig::default());
        let exported = export_configuration(&config).unwrap();
        assert!(exported.contains("\"product\": \"meuble\""));
        let parsed: ProductConfig = serde_json::from_str(&exported).unwrap();
        assert_eq!(parsed, config);
    }
}
