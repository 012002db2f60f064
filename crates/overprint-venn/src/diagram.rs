//! Diagram building - from an overprint switch to everything a page needs
//!
//! This module orchestrates the pure part of the pipeline:
//! 1. Resolve the page size in points
//! 2. Plan the disk layout
//! 3. Build the overprint graphics state
//! 4. Assemble the content stream that invokes it

use crate::content::{InstructionStream, assemble_stream_with_inks};
use crate::geometry::{PageLayout, plan_layout};
use crate::ink_state::{NamedGraphicsState, build_overprint_config};
use crate::options::DiagramOptions;
use crate::types::*;

/// One diagram variant, ready to hand to a document container
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    /// Size of the page to create
    pub page_size: PageSizeRequest,
    /// Layout the content stream was drawn from
    pub layout: PageLayout,
    /// Page content
    pub content: InstructionStream,
    /// Graphics state to register in the page resources before the content is used
    pub graphics_state: NamedGraphicsState,
}

/// Build a diagram variant on A4 portrait with the default layout.
pub fn build_diagram(overprint: bool) -> Result<Diagram> {
    build_diagram_with(&DiagramOptions::default(), overprint)
}

/// Build a diagram variant from `options`.
pub fn build_diagram_with(options: &DiagramOptions, overprint: bool) -> Result<Diagram> {
    options.validate()?;

    let page_size = options.page_size().at_container_precision();
    page_size.validate()?;

    let layout = plan_layout(
        page_size.width_pt,
        page_size.height_pt,
        options.overlap_fraction,
        options.radius_fraction,
    )?;

    let graphics_state = NamedGraphicsState::new(
        options.graphics_state_name.as_str(),
        build_overprint_config(overprint),
    );

    let content = assemble_stream_with_inks(
        &layout,
        &graphics_state.name,
        options.first_ink,
        options.second_ink,
    )?;

    log::debug!(
        "Built diagram (overprint {}): page {} x {} pt, radius {}",
        if overprint { "on" } else { "off" },
        page_size.width_pt,
        page_size.height_pt,
        layout.radius
    );

    Ok(Diagram {
        page_size,
        layout,
        content,
        graphics_state,
    })
}
