//! The priced line-item breakdown.

use furnkit_core::money::{apply_tva, round2};
use serde::{Deserialize, Serialize};

/// One priced contributor in the final quote, in computation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Short label ("Matériau", "Étagère fixe", "Plan de travail")
    pub label: String,
    /// Free-form detail for display ("2.64 m² × 45 €/m²")
    pub detail: String,
    /// Rounded amount in €
    pub amount: f64,
}

impl LineItem {
    pub fn new(label: impl Into<String>, detail: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
            amount: round2(amount),
        }
    }
}

/// Aggregated price breakdown for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceBreakdown {
    pub material_cost: f64,
    pub modules_cost: f64,
    pub hardware_cost: f64,
    pub edge_banding_cost: f64,
    pub finish_cost: f64,
    pub countertop_cost: f64,
    pub subtotal_ht: f64,
    pub tva: f64,
    pub total_ttc: f64,
    pub line_items: Vec<LineItem>,
}

/// Accumulates rounded component costs and line items while a family
/// algorithm runs, then seals the totals.
#[derive(Debug, Default)]
pub(crate) struct BreakdownBuilder {
    material: f64,
    modules: f64,
    hardware: f64,
    edge_banding: f64,
    finish: f64,
    countertop: f64,
    items: Vec<LineItem>,
}

impl BreakdownBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn material(&mut self, item: LineItem) {
        self.material = round2(self.material + item.amount);
        self.items.push(item);
    }

    pub fn modules(&mut self, item: LineItem) {
        self.modules = round2(self.modules + item.amount);
        self.items.push(item);
    }

    pub fn hardware(&mut self, item: LineItem) {
        self.hardware = round2(self.hardware + item.amount);
        self.items.push(item);
    }

    pub fn edge_banding(&mut self, item: LineItem) {
        self.edge_banding = round2(self.edge_banding + item.amount);
        self.items.push(item);
    }

    pub fn finish(&mut self, item: LineItem) {
        self.finish = round2(self.finish + item.amount);
        self.items.push(item);
    }

    pub fn countertop(&mut self, item: LineItem) {
        self.countertop = round2(self.countertop + item.amount);
        self.items.push(item);
    }

    /// Seals the breakdown: subtotal, VAT, and TTC total, each re-rounded.
    pub fn finish_breakdown(self) -> PriceBreakdown {
        let subtotal_ht = round2(
            self.material
                + self.modules
                + self.hardware
                + self.edge_banding
                + self.finish
                + self.countertop,
        );
        let (tva, total_ttc) = apply_tva(subtotal_ht);
        PriceBreakdown {
            material_cost: self.material,
            modules_cost: self.modules,
            hardware_cost: self.hardware,
            edge_banding_cost: self.edge_banding,
            finish_cost: self.finish,
            countertop_cost: self.countertop,
            subtotal_ht,
            tva,
            total_ttc,
            line_items: self.items,
        }
    }
}
