//! Money rounding rules shared by the pricing engine and quote payloads.
//!
//! Every monetary value in a breakdown is rounded to 2 decimal places at the
//! point of computation, not deferred to the final total. Quote totals only
//! reproduce the reference figures when each aggregation step re-rounds.

/// French VAT rate applied to every quote.
pub const TVA_RATE: f64 = 0.20;

/// Rounds a monetary amount to 2 decimal places (half away from zero).
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Applies VAT to a rounded subtotal, returning `(tva, total_ttc)`.
///
/// Both values are rounded independently: `tva = round2(subtotal * 0.20)`
/// and `total = round2(subtotal + tva)`.
pub fn apply_tva(subtotal_ht: f64) -> (f64, f64) {
    let tva = round2(subtotal_ht * TVA_RATE);
    let total = round2(subtotal_ht + tva);
    (tva, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(118.804), 118.8);
        assert_eq!(round2(118.805), 118.81);
        assert_eq!(round2(-2.345), -2.35);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_apply_tva() {
        let (tva, total) = apply_tva(163.8);
        assert_eq!(tva, 32.76);
        assert_eq!(total, 196.56);
    }

    #[test]
    fn test_tva_invariant_holds_after_rounding() {
        for subtotal in [0.01, 9.99, 163.8, 1234.56, 99999.99] {
            let (tva, total) = apply_tva(subtotal);
            assert_eq!(total, round2(subtotal + tva));
        }
    }
}
