//! Quote submission transport.
//!
//! `QuoteTransport` is the seam the engine talks through; the HTTP
//! implementation posts JSON to the configured endpoint. Failures are
//! recoverable by design: the caller keeps the in-progress configuration
//! and may retry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::payload::QuotePayload;

/// Submission failure modes, both retryable.
#[derive(Error, Debug, Clone)]
pub enum QuoteError {
    /// The server processed the request and refused it; `message` is the
    /// server-provided reason, surfaced to the user verbatim.
    #[error("Devis refusé: {message}")]
    Rejected {
        /// The server-provided error message.
        message: String,
    },

    /// The request never completed (DNS, connect, timeout).
    #[error("Connexion au serveur impossible, veuillez réessayer")]
    Connectivity,
}

/// Acknowledgement returned by the backend on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteReceipt {
    /// Backend-assigned quote number
    pub reference: String,
}

/// The submission boundary. Implementations must map refusals to
/// [`QuoteError::Rejected`] and transport failures to
/// [`QuoteError::Connectivity`]; they never mutate configurator state.
pub trait QuoteTransport {
    fn submit(&self, payload: &QuotePayload) -> Result<QuoteReceipt, QuoteError>;
}

/// Body shape the backend uses for error responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Blocking HTTP client for the quote endpoint.
pub struct HttpQuoteClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpQuoteClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl QuoteTransport for HttpQuoteClient {
    fn submit(&self, payload: &QuotePayload) -> Result<QuoteReceipt, QuoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .map_err(|error| {
                tracing::warn!("Quote submission failed to reach the server: {error}");
                QuoteError::Connectivity
            })?;

        if !response.status().is_success() {
            let status = response.status();
            // Prefer the server's message; fall back to the status line.
            let message = response
                .json::<ErrorBody>()
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            tracing::warn!(%status, "Quote submission rejected: {message}");
            return Err(QuoteError::Rejected { message });
        }

        response.json::<QuoteReceipt>().map_err(|error| {
            tracing::warn!("Malformed quote receipt: {error}");
            QuoteError::Connectivity
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RefusingTransport;

    impl QuoteTransport for RefusingTransport {
        fn submit(&self, _payload: &QuotePayload) -> Result<QuoteReceipt, QuoteError> {
            Err(QuoteError::Rejected {
                message: "email invalide".to_string(),
            })
        }
    }

    #[test]
    fn test_rejection_carries_server_message() {
        let payload = QuotePayload {
            first_name: String::new(),
            last_name: String::new(),
            email: "pas-un-email".to_string(),
            phone: String::new(),
            message: String::new(),
            product_label: String::new(),
            dimensions: String::new(),
            material_label: String::new(),
            line_items: Vec::new(),
            subtotal_ht: 0.0,
            tva: 0.0,
            total_ttc: 0.0,
            submitted_at: String::new(),
        };

        let error = RefusingTransport.submit(&payload).unwrap_err();
        match error {
            QuoteError::Rejected { message } => assert_eq!(message, "email invalide"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
