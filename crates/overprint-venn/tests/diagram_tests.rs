use overprint_venn::constants::DEFAULT_GRAPHICS_STATE_NAME;
use overprint_venn::*;

#[test]
fn test_overprint_config_mapping() {
    assert_eq!(
        build_overprint_config(true),
        OverprintConfig {
            overprint: true,
            overprint_mode: 1
        }
    );
    assert_eq!(
        build_overprint_config(false),
        OverprintConfig {
            overprint: false,
            overprint_mode: 0
        }
    );
}

#[test]
fn test_default_diagram_is_a4() {
    let diagram = build_diagram(false).unwrap();

    assert!((diagram.page_size.width_pt - 595.2756).abs() < 1e-4);
    assert!((diagram.page_size.height_pt - 841.8898).abs() < 1e-4);
    assert!((diagram.layout.radius - 119.0551).abs() < 1e-4);
    assert!(diagram.layout.disks_within_page());
    assert_eq!(diagram.graphics_state.name, DEFAULT_GRAPHICS_STATE_NAME);
}

#[test]
fn test_stream_references_registered_state() {
    let diagram = build_diagram(true).unwrap();
    let gs_line = format!("/{} gs", diagram.graphics_state.name);

    assert_eq!(
        diagram
            .content
            .as_str()
            .lines()
            .filter(|l| *l == gs_line)
            .count(),
        1
    );
}

#[test]
fn test_variants_differ_only_in_graphics_state() {
    let off = build_diagram(false).unwrap();
    let on = build_diagram(true).unwrap();

    assert_eq!(off.page_size, on.page_size);
    assert_eq!(off.layout, on.layout);
    assert_eq!(off.content.as_bytes(), on.content.as_bytes());
    assert_eq!(off.graphics_state.name, on.graphics_state.name);
    assert_ne!(off.graphics_state.config, on.graphics_state.config);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_variants() {
    let off = tokio::task::spawn_blocking(|| build_diagram(false));
    let on = tokio::task::spawn_blocking(|| build_diagram(true));

    let off = off.await.unwrap().unwrap();
    let on = on.await.unwrap().unwrap();

    assert_eq!(off.content, on.content);
    assert!(!off.graphics_state.config.overprint);
    assert_eq!(off.graphics_state.config.overprint_mode, 0);
    assert!(on.graphics_state.config.overprint);
    assert_eq!(on.graphics_state.config.overprint_mode, 1);
}

#[test]
fn test_build_is_idempotent() {
    let first = build_diagram(true).unwrap();
    let second = build_diagram(true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_landscape_letter() {
    let options = DiagramOptions {
        paper_size: PaperSize::Letter,
        orientation: Orientation::Landscape,
        ..Default::default()
    };
    let diagram = build_diagram_with(&options, false).unwrap();

    assert!((diagram.page_size.width_pt - 792.0).abs() < 1e-9);
    assert!((diagram.page_size.height_pt - 612.0).abs() < 1e-9);
    assert!((diagram.layout.radius - 122.4).abs() < 1e-9);
}

#[test]
fn test_invalid_options_rejected() {
    let options = DiagramOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 100.0,
        },
        ..Default::default()
    };

    assert!(matches!(
        build_diagram_with(&options, true),
        Err(VennError::InvalidDimension(_))
    ));
}

#[test]
fn test_custom_state_name() {
    let options = DiagramOptions {
        graphics_state_name: "GS7".to_string(),
        ..Default::default()
    };
    let diagram = build_diagram_with(&options, true).unwrap();

    assert_eq!(diagram.graphics_state.name, "GS7");
    assert!(diagram.content.as_str().contains("\n/GS7 gs\n"));
}

#[test]
fn test_page_size_uses_container_precision() {
    let diagram = build_diagram(true).unwrap();
    let width = diagram.page_size.width_pt;
    let height = diagram.page_size.height_pt;

    assert_eq!(width as f32 as f64, width);
    assert_eq!(height as f32 as f64, height);
    assert_eq!(diagram.layout.page_width, width);
    assert_eq!(diagram.layout.page_height, height);
}
