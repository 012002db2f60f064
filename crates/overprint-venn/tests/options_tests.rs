use overprint_venn::*;

#[test]
fn test_default_options_valid() {
    let options = DiagramOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.radius_fraction, 0.2);
    assert_eq!(options.overlap_fraction, 0.4);
    assert_eq!(options.first_ink, InkColor::CYAN);
    assert_eq!(options.second_ink, InkColor::MAGENTA);
}

#[test]
fn test_validation_radius_fraction() {
    let mut options = DiagramOptions::default();

    options.radius_fraction = 0.5;
    assert!(options.validate().is_ok());

    for bad in [0.0, -0.1, 0.51, f64::NAN] {
        options.radius_fraction = bad;
        match options.validate() {
            Err(VennError::Config(msg)) => assert!(msg.contains("Radius fraction")),
            other => panic!("Expected Config error for {}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_validation_overlap_fraction() {
    let mut options = DiagramOptions::default();

    options.overlap_fraction = -0.4;
    assert!(options.validate().is_ok());

    options.overlap_fraction = f64::INFINITY;
    assert!(matches!(options.validate(), Err(VennError::Config(_))));
}

#[test]
fn test_validation_inks() {
    let mut options = DiagramOptions::default();
    options.second_ink = InkColor::new(0.0, -0.1, 0.0, 0.0);
    assert!(matches!(options.validate(), Err(VennError::Config(_))));
}

#[test]
fn test_validation_state_name() {
    let mut options = DiagramOptions::default();
    options.graphics_state_name = "has space".to_string();
    assert!(matches!(options.validate(), Err(VennError::Config(_))));
}

#[test]
fn test_page_size_from_paper() {
    let options = DiagramOptions::default();
    let size = options.page_size();
    assert_eq!(size.width_pt, mm_to_pt(210.0));
    assert_eq!(size.height_pt, mm_to_pt(297.0));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = DiagramOptions {
        paper_size: PaperSize::A3,
        orientation: Orientation::Landscape,
        radius_fraction: 0.25,
        overlap_fraction: 0.5,
        first_ink: InkColor::YELLOW,
        second_ink: InkColor::BLACK,
        graphics_state_name: "GS2".to_string(),
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    options.save(path).await.unwrap();

    // Load
    let loaded = DiagramOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{ "radius_fraction": 0.3 }"#)
        .await
        .unwrap();

    let loaded = DiagramOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.radius_fraction, 0.3);
    assert_eq!(loaded.paper_size, PaperSize::A4);
    assert_eq!(loaded.graphics_state_name, "graphicStateForCircleDrawing");
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), "not json").await.unwrap();

    match DiagramOptions::load(temp_file.path()).await {
        Err(VennError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
