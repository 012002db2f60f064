use crate::constants::{
    DEFAULT_GRAPHICS_STATE_NAME, DEFAULT_OVERLAP_FRACTION, DEFAULT_RADIUS_FRACTION,
    MAX_RADIUS_FRACTION,
};
use crate::ink_state::is_valid_resource_name;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Diagram configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiagramOptions {
    // Page
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    // Layout
    pub radius_fraction: f64,
    pub overlap_fraction: f64,

    // Inks, in painting order
    pub first_ink: InkColor,
    pub second_ink: InkColor,

    // Resource name of the overprint graphics state
    pub graphics_state_name: String,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            radius_fraction: DEFAULT_RADIUS_FRACTION,
            overlap_fraction: DEFAULT_OVERLAP_FRACTION,
            first_ink: InkColor::CYAN,
            second_ink: InkColor::MAGENTA,
            graphics_state_name: DEFAULT_GRAPHICS_STATE_NAME.to_string(),
        }
    }
}

impl DiagramOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| VennError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| VennError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page size in points, orientation applied
    pub fn page_size(&self) -> PageSizeRequest {
        let (w, h) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        PageSizeRequest::from_mm(w, h)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if let PaperSize::Custom {
            width_mm,
            height_mm,
        } = self.paper_size
        {
            require_positive("custom paper width", width_mm)?;
            require_positive("custom paper height", height_mm)?;
        }

        if !(self.radius_fraction > 0.0 && self.radius_fraction <= MAX_RADIUS_FRACTION) {
            return Err(VennError::Config(format!(
                "Radius fraction must be in (0, {}], got {}",
                MAX_RADIUS_FRACTION, self.radius_fraction
            )));
        }

        if !self.overlap_fraction.is_finite() {
            return Err(VennError::Config(format!(
                "Overlap fraction must be finite, got {}",
                self.overlap_fraction
            )));
        }

        if !self.first_ink.is_valid() || !self.second_ink.is_valid() {
            return Err(VennError::Config(
                "Ink channels must lie between 0 and 1".to_string(),
            ));
        }

        if !is_valid_resource_name(&self.graphics_state_name) {
            return Err(VennError::Config(format!(
                "Invalid graphics state name: {:?}",
                self.graphics_state_name
            )));
        }

        Ok(())
    }
}
