//! Quote request payload assembly.

use furnkit_configurator::model::ProductConfig;
use furnkit_core::catalog::CatalogSet;
use furnkit_pricing::PriceBreakdown;
use serde::{Deserialize, Serialize};

/// Client contact fields entered on the summary step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// One priced line of the quote, flattened for the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    pub label: String,
    pub detail: String,
    pub amount: f64,
}

/// The request body posted to the quote endpoint. The backend owns
/// persistence, quote numbering, and the notification email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub product_label: String,
    pub dimensions: String,
    pub material_label: String,
    pub line_items: Vec<QuoteLineItem>,
    pub subtotal_ht: f64,
    pub tva: f64,
    pub total_ttc: f64,
    /// Client-side submission timestamp (RFC 3339)
    pub submitted_at: String,
}

impl QuotePayload {
    /// Assembles the payload from the current configuration and its
    /// breakdown. The configuration itself is not consumed or altered.
    pub fn build(
        config: &ProductConfig,
        breakdown: &PriceBreakdown,
        contact: &ContactInfo,
        catalogs: &CatalogSet,
    ) -> Self {
        let material_label = match config {
            ProductConfig::Meuble(c) => catalogs.materials.name_or_key(&c.material),
            ProductConfig::Planche(c) => catalogs.materials.name_or_key(&c.material),
            ProductConfig::Cuisine(c) => catalogs.materials.name_or_key(&c.facade_material),
        };

        Self {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            message: contact.message.clone(),
            product_label: config.family().to_string(),
            dimensions: config.display_dimensions(),
            material_label,
            line_items: breakdown
                .line_items
                .iter()
                .map(|item| QuoteLineItem {
                    label: item.label.clone(),
                    detail: item.detail.clone(),
                    amount: item.amount,
                })
                .collect(),
            subtotal_ht: breakdown.subtotal_ht,
            tva: breakdown.tva,
            total_ttc: breakdown.total_ttc,
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
