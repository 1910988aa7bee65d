//! Flat 2D silhouette for the quick configurator variant.
//!
//! Instead of a 3D scene, the quick variant previews a front (or plan)
//! silhouette built from 2D path primitives. Dimensions are in millimetres;
//! the viewport scales the path to fit.

use furnkit_configurator::model::{QuickCategory, QuickDesign, QuickShape};
use lyon::math::point;
use lyon::path::Path;

/// Builds the silhouette path for a quick design.
pub fn build_quick_silhouette(design: &QuickDesign) -> Path {
    match design.category {
        QuickCategory::Furniture => front_rectangle(design),
        QuickCategory::Worktop => plan_outline(design),
        QuickCategory::Shelving => shelving_front(design),
    }
}

/// Simple front silhouette: the outer rectangle.
fn front_rectangle(design: &QuickDesign) -> Path {
    let w = design.width_mm as f32;
    let h = design.height_mm as f32;
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(w, 0.0));
    builder.line_to(point(w, h));
    builder.line_to(point(0.0, h));
    builder.end(true);
    builder.build()
}

/// Plan-view outline of a worktop; L and U shapes extend legs of the same
/// depth as the main run.
fn plan_outline(design: &QuickDesign) -> Path {
    let w = design.width_mm as f32;
    let d = design.depth_mm as f32;
    // Leg length: half the main run, capped so the outline stays sane for
    // narrow worktops.
    let leg = (w * 0.5).max(d * 2.0);

    let mut builder = Path::builder();
    match design.shape {
        QuickShape::Straight => {
            builder.begin(point(0.0, 0.0));
            builder.line_to(point(w, 0.0));
            builder.line_to(point(w, d));
            builder.line_to(point(0.0, d));
            builder.end(true);
        }
        QuickShape::L => {
            builder.begin(point(0.0, 0.0));
            builder.line_to(point(w, 0.0));
            builder.line_to(point(w, leg));
            builder.line_to(point(w - d, leg));
            builder.line_to(point(w - d, d));
            builder.line_to(point(0.0, d));
            builder.end(true);
        }
        QuickShape::U => {
            builder.begin(point(0.0, 0.0));
            builder.line_to(point(w, 0.0));
            builder.line_to(point(w, leg));
            builder.line_to(point(w - d, leg));
            builder.line_to(point(w - d, d));
            builder.line_to(point(d, d));
            builder.line_to(point(d, leg));
            builder.line_to(point(0.0, leg));
            builder.end(true);
        }
    }
    builder.build()
}

/// Front silhouette of a shelving unit: outer rectangle plus one segment
/// per shelf.
fn shelving_front(design: &QuickDesign) -> Path {
    let w = design.width_mm as f32;
    let h = design.height_mm as f32;
    let mut builder = Path::builder();

    builder.begin(point(0.0, 0.0));
    builder.line_to(point(w, 0.0));
    builder.line_to(point(w, h));
    builder.line_to(point(0.0, h));
    builder.end(true);

    let count = design.shelf_count;
    for index in 1..=count {
        let y = h * index as f32 / (count as f32 + 1.0);
        builder.begin(point(0.0, y));
        builder.line_to(point(w, y));
        builder.end(false);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::path::PathEvent;

    fn segment_count(path: &Path) -> usize {
        path.iter()
            .filter(|event| matches!(event, PathEvent::Line { .. }))
            .count()
    }

    #[test]
    fn test_straight_worktop_is_a_rectangle() {
        let mut design = QuickDesign::new(QuickCategory::Worktop);
        design.shape = QuickShape::Straight;
        let path = build_quick_silhouette(&design);
        // 3 explicit lines; the closing edge comes from the End event.
        assert_eq!(segment_count(&path), 3);
    }

    #[test]
    fn test_l_shape_has_more_corners() {
        let mut design = QuickDesign::new(QuickCategory::Worktop);
        design.shape = QuickShape::L;
        let l_corners = segment_count(&build_quick_silhouette(&design));
        design.shape = QuickShape::U;
        let u_corners = segment_count(&build_quick_silhouette(&design));
        assert!(l_corners > 3);
        assert!(u_corners > l_corners);
    }

    #[test]
    fn test_shelving_draws_one_segment_per_shelf() {
        let design = QuickDesign::new(QuickCategory::Shelving);
        let path = build_quick_silhouette(&design);
        // Outer rectangle (3 lines) plus one line per shelf.
        assert_eq!(segment_count(&path), 3 + design.shelf_count as usize);
    }
}
