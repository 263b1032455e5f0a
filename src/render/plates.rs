//! Plate boundary overlay construction

use crate::data::geojson::GeoJson;
use crate::layers::geojson::{GeoJsonOverlay, PathStyle};
use crate::style::color::Color;

/// Identifier the plate overlay mounts under
pub const PLATE_LAYER_ID: &str = "plates";
const PLATE_LAYER_NAME: &str = "Tectonic Plates";

/// Sand-colored outlines with no fill, so plate interiors stay readable
pub const DEFAULT_PLATE_STYLE: PathStyle = PathStyle {
    stroke_color: Color::new(0xdf, 0xd9, 0x8b),
    fill_color: None,
};

/// Mounts a plate-boundary collection as a styled outline overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateRenderer {
    style: PathStyle,
}

impl Default for PlateRenderer {
    fn default() -> Self {
        Self {
            style: DEFAULT_PLATE_STYLE,
        }
    }
}

impl PlateRenderer {
    pub fn new(style: PathStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Wraps the boundary document into a mountable overlay
    ///
    /// Every feature shares the renderer style; plate data carries no
    /// per-feature styling of its own.
    pub fn render(&self, boundaries: GeoJson) -> GeoJsonOverlay {
        GeoJsonOverlay::new(PLATE_LAYER_ID, PLATE_LAYER_NAME, boundaries).with_style(self.style)
    }
}
