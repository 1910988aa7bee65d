//! Unit conversions.
//!
//! Configuration dimensions are stored in millimetres; catalog prices are
//! quoted per metre or square metre. These helpers keep the conversions in
//! one place.

/// Millimetres to metres.
pub fn mm_to_m(mm: f64) -> f64 {
    mm / 1000.0
}

/// A rectangle given in millimetres, as square metres.
pub fn mm2_to_m2(width_mm: f64, height_mm: f64) -> f64 {
    (width_mm * height_mm) / 1_000_000.0
}
