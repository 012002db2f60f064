//! Content stream assembly
//!
//! This module writes the PDF content stream for the diagram: a white
//! background, the first disk, the overprint graphics state switch and the
//! second disk. Every operator goes on its own line.

use crate::geometry::{CircleApproximation, PageLayout, Rect, approximate_circle};
use crate::ink_state::is_valid_resource_name;
use crate::types::{InkColor, Point, Result, VennError};
use std::fmt;

// =============================================================================
// Instruction Stream
// =============================================================================

/// A finished, immutable content stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionStream(String);

impl InstructionStream {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The operator (last token) of every line, in order
    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.0
            .lines()
            .filter_map(|line| line.split_whitespace().next_back())
    }
}

impl fmt::Display for InstructionStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Append-only writer for content stream operators
#[derive(Debug, Default)]
pub struct ContentBuilder {
    ops: String,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn line(&mut self, operands: &[f64], operator: &str) -> &mut Self {
        for value in operands {
            self.ops.push_str(&format_real(*value));
            self.ops.push(' ');
        }
        self.ops.push_str(operator);
        self.ops.push('\n');
        self
    }

    /// `rg`: non-stroking RGB color
    pub fn fill_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.line(&[r, g, b], "rg")
    }

    /// `RG`: stroking RGB color
    pub fn stroke_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.line(&[r, g, b], "RG")
    }

    /// `k`: non-stroking CMYK color
    pub fn fill_cmyk(&mut self, ink: InkColor) -> &mut Self {
        self.line(&ink.channels(), "k")
    }

    /// `re`: rectangle path
    pub fn rectangle(&mut self, rect: Rect) -> &mut Self {
        self.line(&[rect.x, rect.y, rect.width, rect.height], "re")
    }

    /// `m`: begin a subpath
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.line(&[p.x, p.y], "m")
    }

    /// `c`: cubic Bezier curve from the current point
    pub fn curve_to(&mut self, c1: Point, c2: Point, end: Point) -> &mut Self {
        self.line(&[c1.x, c1.y, c2.x, c2.y, end.x, end.y], "c")
    }

    /// `f`: fill the current path (nonzero winding)
    pub fn fill(&mut self) -> &mut Self {
        self.line(&[], "f")
    }

    /// `gs`: apply a named ExtGState from the page resources
    pub fn graphics_state(&mut self, name: &str) -> &mut Self {
        self.ops.push('/');
        self.ops.push_str(name);
        self.ops.push_str(" gs\n");
        self
    }

    /// Move-to plus the four curves of an approximated circle
    pub fn circle_path(&mut self, circle: &CircleApproximation) -> &mut Self {
        self.move_to(circle.start());
        for segment in circle.segments() {
            self.curve_to(segment.control1, segment.control2, segment.end);
        }
        self
    }

    /// Set `ink`, trace `circle` and fill it
    pub fn filled_circle(&mut self, circle: &CircleApproximation, ink: InkColor) -> &mut Self {
        self.fill_cmyk(ink).circle_path(circle).fill()
    }

    pub fn finish(self) -> InstructionStream {
        InstructionStream(self.ops)
    }
}

/// Print a real number the way content streams expect it: shortest
/// round-trip decimal, never in exponent form, no trailing zeros.
pub fn format_real(value: f64) -> String {
    if value == 0.0 {
        // also folds -0.0
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

// =============================================================================
// Assembly
// =============================================================================

/// Assemble the diagram with the default cyan and magenta inks.
pub fn assemble_stream(layout: &PageLayout, ink_state_name: &str) -> Result<InstructionStream> {
    assemble_stream_with_inks(layout, ink_state_name, InkColor::CYAN, InkColor::MAGENTA)
}

/// Assemble the full content stream for one diagram variant.
///
/// The `gs` switch is placed after the first disk is filled so that only the
/// second ink is painted under the overprint settings.
pub fn assemble_stream_with_inks(
    layout: &PageLayout,
    ink_state_name: &str,
    first_ink: InkColor,
    second_ink: InkColor,
) -> Result<InstructionStream> {
    if !is_valid_resource_name(ink_state_name) {
        return Err(VennError::Config(format!(
            "Invalid graphics state name: {:?}",
            ink_state_name
        )));
    }
    for ink in [first_ink, second_ink] {
        if !ink.is_valid() {
            return Err(VennError::Config(format!(
                "Ink channels must lie in 0..=1: {:?}",
                ink
            )));
        }
    }

    let disk_a = approximate_circle(layout.disk_a_center, layout.radius)?;
    let disk_b = approximate_circle(layout.disk_b_center, layout.radius)?;

    let mut builder = ContentBuilder::new();

    // Opaque white base so the knockout is visible
    builder
        .fill_rgb(1.0, 1.0, 1.0)
        .stroke_rgb(1.0, 1.0, 1.0)
        .rectangle(layout.background())
        .fill();

    builder.filled_circle(&disk_a, first_ink);
    builder.graphics_state(ink_state_name);
    builder.filled_circle(&disk_b, second_ink);

    let stream = builder.finish();
    log::debug!(
        "Assembled content stream: {} bytes, {} operators",
        stream.len(),
        stream.operators().count()
    );
    Ok(stream)
}
