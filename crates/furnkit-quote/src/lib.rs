//! # Furnkit Quote
//!
//! The engine's outward-facing boundaries: quote submission to the
//! commercial backend and opaque-JSON project persistence. Both are
//! collaborator seams — the engine builds payloads and interprets outcomes,
//! it does not own numbering, storage schemas, or email delivery.

mod client;
mod payload;
mod store;

pub use client::{HttpQuoteClient, QuoteError, QuoteReceipt, QuoteTransport};
pub use payload::{ContactInfo, QuoteLineItem, QuotePayload};
pub use store::{export_configuration, MemoryProjectStore, ProjectStore, StoreError};
