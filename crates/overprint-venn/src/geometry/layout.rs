//! Page layout calculation
//!
//! Places two disks of equal radius side by side around the page center so
//! that they overlap horizontally.

use crate::constants::{DEFAULT_OVERLAP_FRACTION, DEFAULT_RADIUS_FRACTION};
use crate::types::{Point, Result, VennError, require_positive};

use super::PageLayout;

/// Plan the layout with the default radius and overlap fractions.
pub fn plan_default_layout(page_width: f64, page_height: f64) -> Result<PageLayout> {
    plan_layout(
        page_width,
        page_height,
        DEFAULT_OVERLAP_FRACTION,
        DEFAULT_RADIUS_FRACTION,
    )
}

/// Plan the positions of both disks on the page.
///
/// # Arguments
/// * `page_width` - Page width in points
/// * `page_height` - Page height in points
/// * `overlap_fraction` - Offset of each center from the page center, as a fraction of the radius.
///   A negative value mirrors the layout.
/// * `radius_fraction` - Radius as a fraction of the shorter page side
pub fn plan_layout(
    page_width: f64,
    page_height: f64,
    overlap_fraction: f64,
    radius_fraction: f64,
) -> Result<PageLayout> {
    require_positive("page width", page_width)?;
    require_positive("page height", page_height)?;
    if !overlap_fraction.is_finite() {
        return Err(VennError::InvalidDimension(format!(
            "overlap fraction must be finite, got {}",
            overlap_fraction
        )));
    }

    let radius = page_width.min(page_height) * radius_fraction;
    require_positive("disk radius", radius)?;

    let offset = radius * overlap_fraction;

    let center_x = page_width / 2.0;
    let center_y = page_height / 2.0;

    Ok(PageLayout {
        page_width,
        page_height,
        disk_a_center: Point::new(center_x - offset, center_y),
        disk_b_center: Point::new(center_x + offset, center_y),
        radius,
        offset,
    })
}
