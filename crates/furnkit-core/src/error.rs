//! Error handling for Furnkit
//!
//! Provides error types for the configurator layers:
//! - Catalog errors (malformed admin-supplied reference data)
//! - Configuration errors (structurally invalid product configurations)
//!
//! All error types use `thiserror` for ergonomic error handling. Note that
//! *lookups* against a catalog never error: a missing key degrades to a
//! zero-cost/neutral default at the call site. These types cover data that is
//! invalid on load, not data that is merely absent.

use thiserror::Error;

/// Catalog error type
///
/// Represents errors raised while loading or validating reference catalogs.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// A price entry is negative or non-finite
    #[error("Invalid price for '{key}': {value}")]
    InvalidPrice {
        /// The catalog key carrying the bad price.
        key: String,
        /// The offending value.
        value: f64,
    },

    /// A dimensional envelope has min > max
    #[error("Invalid envelope for {axis}: min {min_mm} > max {max_mm}")]
    InvalidEnvelope {
        /// The axis name ("width", "height", "depth", "length").
        axis: String,
        /// Lower bound in millimetres.
        min_mm: f64,
        /// Upper bound in millimetres.
        max_mm: f64,
    },

    /// A catalog entry references a width outside its allowed set
    #[error("Width {width_mm}mm not allowed for kitchen cabinet '{key}'")]
    DisallowedWidth {
        /// The kitchen catalog key.
        key: String,
        /// The rejected width in millimetres.
        width_mm: f64,
    },

    /// Generic catalog error
    #[error("Catalog error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Configuration error type
///
/// Represents structural violations in a product configuration. The wizard
/// reducer prevents these from ever being reachable through the action set;
/// they exist for deserialized configurations arriving from storage.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// A cabinet's panel thickness exceeds half its smallest dimension
    #[error("Thickness {thickness_mm}mm too large for cabinet {cabinet} (limit {limit_mm}mm)")]
    ThicknessTooLarge {
        /// The cabinet identifier.
        cabinet: String,
        /// The offending thickness.
        thickness_mm: f64,
        /// The maximum admissible thickness.
        limit_mm: f64,
    },

    /// A collection that must hold at least one element is empty
    #[error("A {family} configuration requires at least one {entity}")]
    EmptyCollection {
        /// The product family name.
        family: String,
        /// The entity kind ("cabinet", "board").
        entity: String,
    },

    /// A module sits outside its cabinet's usable vertical range
    #[error("Module position {position_mm}mm outside usable range [{min_mm}, {max_mm}]")]
    ModuleOutOfRange {
        /// The stored vertical offset.
        position_mm: f64,
        /// Lower bound of the usable range.
        min_mm: f64,
        /// Upper bound of the usable range.
        max_mm: f64,
    },

    /// A placement references a wall that does not exist in the layout
    #[error("Placement references unknown wall {wall}")]
    UnknownWall {
        /// The missing wall identifier.
        wall: String,
    },

    /// Generic configuration error
    #[error("Configuration error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Main error type for Furnkit
///
/// A unified error type that can represent any error from the core layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a catalog error
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
