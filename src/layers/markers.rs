use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::core::geo::{LatLng, LatLngBounds};
use crate::layers::base::{Layer, LayerKind};
use crate::style::color::Color;

/// Styling shared by every marker in a layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub fill_opacity: f64,
    pub stroke_color: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill_opacity: 0.75,
            stroke_color: Color::WHITE,
        }
    }
}

/// A filled circle anchored at a geographic point
///
/// The radius is in meters, so marker footprints scale with the map
/// instead of staying a fixed pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub position: LatLng,
    pub radius: f64,
    pub fill_color: Color,
    pub style: MarkerStyle,
    pub popup_html: Option<String>,
}

impl CircleMarker {
    pub fn new(position: LatLng, radius: f64, fill_color: Color) -> Self {
        Self {
            position,
            radius,
            fill_color,
            style: MarkerStyle::default(),
            popup_html: None,
        }
    }

    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    /// Attaches an HTML popup body shown when the marker is clicked
    pub fn with_popup(mut self, html: impl Into<String>) -> Self {
        self.popup_html = Some(html.into());
        self
    }
}

/// A named group of circle markers mounted as one overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLayer {
    id: String,
    name: String,
    markers: Vec<CircleMarker>,
}

impl MarkerLayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            markers: Vec::new(),
        }
    }

    pub fn with_markers(mut self, markers: Vec<CircleMarker>) -> Self {
        self.markers = markers;
        self
    }

    pub fn push(&mut self, marker: CircleMarker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Layer for MarkerLayer {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Markers
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for marker in &self.markers {
            match &mut bounds {
                Some(b) => b.extend(marker.position),
                None => bounds = Some(LatLngBounds::from_point(marker.position)),
            }
        }
        bounds
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
