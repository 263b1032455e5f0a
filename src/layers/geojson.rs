use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::core::geo::LatLngBounds;
use crate::data::geojson::GeoJson;
use crate::layers::base::{Layer, LayerKind};
use crate::style::color::Color;

/// Stroke and fill applied to every path in an overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke_color: Color,
    /// `None` leaves path interiors unfilled
    pub fill_color: Option<Color>,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::new(0x33, 0x88, 0xff),
            fill_color: None,
        }
    }
}

/// A GeoJSON document mounted as a single styled overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonOverlay {
    id: String,
    name: String,
    style: PathStyle,
    data: GeoJson,
}

impl GeoJsonOverlay {
    pub fn new(id: impl Into<String>, name: impl Into<String>, data: GeoJson) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            style: PathStyle::default(),
            data,
        }
    }

    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    pub fn data(&self) -> &GeoJson {
        &self.data
    }

    pub fn feature_count(&self) -> usize {
        self.data.feature_count()
    }
}

impl Layer for GeoJsonOverlay {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> LayerKind {
        LayerKind::GeoJson
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        self.data.bounds()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
