use overprint_venn::*;

#[test]
fn test_default_statistics() {
    let diagram = build_diagram(true).unwrap();
    let stats = calculate_statistics(&diagram);

    assert!((stats.page_width_mm - 210.0).abs() < 1e-4);
    assert!((stats.page_height_mm - 297.0).abs() < 1e-4);
    assert!((stats.radius_pt - 119.0551).abs() < 1e-4);
    // centers are 2 * 0.4 * r apart
    assert!((stats.center_distance_pt - 0.8 * stats.radius_pt).abs() < 1e-9);
    assert!((stats.overlap_width_pt - 1.2 * stats.radius_pt).abs() < 1e-9);
    assert!(stats.overprint);
    assert_eq!(stats.content_bytes, diagram.content.len());
    assert_eq!(stats.operator_count, 19);
}

#[test]
fn test_overlap_ratio() {
    let diagram = build_diagram(false).unwrap();
    let stats = calculate_statistics(&diagram);

    // d / 2r = 0.4: ratio = (2 acos(0.4) - 0.8 sqrt(1 - 0.16)) / pi
    let expected = (2.0 * 0.4_f64.acos() - 0.8 * (1.0 - 0.16_f64).sqrt()) / std::f64::consts::PI;
    assert!((stats.overlap_ratio - expected).abs() < 1e-9);
    assert!(stats.overlap_ratio > 0.0 && stats.overlap_ratio < 1.0);
    assert!(!stats.overprint);
}

#[test]
fn test_disjoint_disks() {
    let options = DiagramOptions {
        overlap_fraction: 1.5,
        ..Default::default()
    };
    let stats = calculate_statistics(&build_diagram_with(&options, false).unwrap());

    assert_eq!(stats.overlap_area_pt2, 0.0);
    assert_eq!(stats.overlap_width_pt, 0.0);
    assert_eq!(stats.overlap_ratio, 0.0);
}
