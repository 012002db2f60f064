pub mod constants;
pub mod container;
pub mod content;
mod diagram;
pub mod geometry;
mod ink_state;
mod options;
mod stats;
mod types;

pub use constants::{mm_to_pt, pt_to_mm};
pub use container::{
    ContainerSession, DocumentContainer, PageHandle, PdfContainer, load_pdf, render_diagram,
    save_pdf, write_diagram, write_variants,
};
pub use content::{InstructionStream, assemble_stream, assemble_stream_with_inks};
pub use diagram::{Diagram, build_diagram, build_diagram_with};
pub use geometry::{
    CircleApproximation, CubicSegment, PageLayout, approximate_circle, plan_default_layout,
    plan_layout,
};
pub use ink_state::{NamedGraphicsState, OverprintConfig, build_overprint_config};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
