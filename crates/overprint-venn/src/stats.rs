use crate::constants::pt_to_mm;
use crate::diagram::Diagram;
use crate::types::*;
use std::f64::consts::PI;

/// Calculate statistics for a built diagram
pub fn calculate_statistics(diagram: &Diagram) -> DiagramStatistics {
    let layout = &diagram.layout;
    let radius = layout.radius;
    let distance = layout.center_distance();

    let overlap_area_pt2 = lens_area(radius, distance);
    let overlap_ratio = overlap_area_pt2 / (PI * radius * radius);

    DiagramStatistics {
        page_width_pt: diagram.page_size.width_pt,
        page_height_pt: diagram.page_size.height_pt,
        page_width_mm: pt_to_mm(diagram.page_size.width_pt),
        page_height_mm: pt_to_mm(diagram.page_size.height_pt),
        radius_pt: radius,
        center_distance_pt: distance,
        overlap_width_pt: (2.0 * radius - distance).clamp(0.0, 2.0 * radius),
        overlap_area_pt2,
        overlap_ratio,
        overprint: diagram.graphics_state.config.overprint,
        content_bytes: diagram.content.len(),
        operator_count: diagram.content.operators().count(),
    }
}

/// Area shared by two circles of equal `radius` whose centers are `distance` apart
fn lens_area(radius: f64, distance: f64) -> f64 {
    if distance >= 2.0 * radius {
        return 0.0;
    }
    if distance <= 0.0 {
        return PI * radius * radius;
    }

    let half = distance / 2.0;
    2.0 * radius * radius * (half / radius).acos()
        - half * (4.0 * radius * radius - distance * distance).sqrt()
}
