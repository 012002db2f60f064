use crate::constants::mm_to_pt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VennError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("Document container not initialized: {0}")]
    ContainerInit(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, VennError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f64, height_mm: f64 },
}

impl PaperSize {
    /// Get base dimensions (portrait for the standard sizes)
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// A position in PDF user space (points, origin at the bottom-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A process color ink: cyan, magenta, yellow and key, each in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InkColor {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

impl InkColor {
    pub const CYAN: InkColor = InkColor::new(1.0, 0.0, 0.0, 0.0);
    pub const MAGENTA: InkColor = InkColor::new(0.0, 1.0, 0.0, 0.0);
    pub const YELLOW: InkColor = InkColor::new(0.0, 0.0, 1.0, 0.0);
    pub const BLACK: InkColor = InkColor::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    pub fn channels(&self) -> [f64; 4] {
        [self.cyan, self.magenta, self.yellow, self.key]
    }

    /// True when every channel lies in the unit interval
    pub fn is_valid(&self) -> bool {
        self.channels()
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

/// Physical size of the page to create, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSizeRequest {
    pub width_pt: f64,
    pub height_pt: f64,
}

impl PageSizeRequest {
    pub fn from_mm(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_pt: mm_to_pt(width_mm),
            height_pt: mm_to_pt(height_mm),
        }
    }

    /// Round to the precision the PDF container stores the MediaBox at, so
    /// anything drawn from this size lines up with the page edges.
    pub fn at_container_precision(self) -> Self {
        Self {
            width_pt: self.width_pt as f32 as f64,
            height_pt: self.height_pt as f32 as f64,
        }
    }

    /// Reject sizes the container cannot represent
    pub fn validate(&self) -> Result<()> {
        require_positive("page width", self.width_pt)?;
        require_positive("page height", self.height_pt)?;
        Ok(())
    }
}

/// Fail with `InvalidDimension` unless `value` is finite and strictly positive.
pub(crate) fn require_positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(VennError::InvalidDimension(format!(
            "{} must be positive and finite, got {}",
            what, value
        )))
    }
}

/// Statistics about a generated diagram
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramStatistics {
    /// Page width in points
    pub page_width_pt: f64,
    /// Page height in points
    pub page_height_pt: f64,
    /// Page width in millimeters
    pub page_width_mm: f64,
    /// Page height in millimeters
    pub page_height_mm: f64,
    /// Shared disk radius in points
    pub radius_pt: f64,
    /// Distance between the two disk centers in points
    pub center_distance_pt: f64,
    /// Width of the lens where the disks overlap, in points
    pub overlap_width_pt: f64,
    /// Area of the overlapping lens in square points
    pub overlap_area_pt2: f64,
    /// Share of one disk covered by the other (0.0 to 1.0)
    pub overlap_ratio: f64,
    /// Whether the graphics state enables overprint
    pub overprint: bool,
    /// Length of the content stream in bytes
    pub content_bytes: usize,
    /// Number of operators in the content stream
    pub operator_count: usize,
}
