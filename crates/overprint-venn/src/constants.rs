//! Shared constants for diagram generation
//!
//! This module centralizes the magic numbers used by the layout planner,
//! the circle approximator and the content stream assembler.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Points per inch (PDF user space unit)
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm / MM_PER_INCH * POINTS_PER_INCH
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_INCH * MM_PER_INCH
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// A4 portrait width in millimeters
pub const A4_WIDTH_MM: f64 = 210.0;

/// A4 portrait height in millimeters
pub const A4_HEIGHT_MM: f64 = 297.0;

// =============================================================================
// Layout
// =============================================================================

/// Disk radius as a fraction of the shorter page side
pub const DEFAULT_RADIUS_FRACTION: f64 = 0.2;

/// Horizontal offset of each disk center from the page center, as a fraction of the radius
pub const DEFAULT_OVERLAP_FRACTION: f64 = 0.4;

/// Largest radius fraction that still keeps a disk centered on the page inside it
pub const MAX_RADIUS_FRACTION: f64 = 0.5;

// =============================================================================
// Bezier Curve Constants
// =============================================================================

/// Control point factor for approximating a quarter circle with one cubic Bezier.
/// Equal to 4 * (sqrt(2) - 1) / 3.
pub const BEZIER_CIRCLE_KAPPA: f64 = 0.5522847498307936;

// =============================================================================
// Resources
// =============================================================================

/// Resource name of the ExtGState invoked between the two disks
pub const DEFAULT_GRAPHICS_STATE_NAME: &str = "graphicStateForCircleDrawing";

/// File name of the variant with overprint disabled
pub const OVERPRINT_OFF_FILE_NAME: &str = "overprint_off.pdf";

/// File name of the variant with overprint enabled
pub const OVERPRINT_ON_FILE_NAME: &str = "overprint_on.pdf";

/// PDF version written by the document container
pub const PDF_VERSION: &str = "1.7";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kappa_matches_closed_form() {
        let closed_form = 4.0 * (std::f64::consts::SQRT_2 - 1.0) / 3.0;
        assert!((BEZIER_CIRCLE_KAPPA - closed_form).abs() < 1e-15);
    }

    #[test]
    fn test_one_inch() {
        assert_eq!(mm_to_pt(25.4), 72.0);
        assert_eq!(pt_to_mm(72.0), 25.4);
    }
}
