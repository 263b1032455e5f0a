//! Turns earthquake records into styled circle markers

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::data::earthquake::EarthquakeRecord;
use crate::layers::markers::{CircleMarker, MarkerLayer, MarkerStyle};
use crate::style::depth::DepthScale;

/// Identifier the earthquake layer mounts under
pub const EARTHQUAKE_LAYER_ID: &str = "earthquakes";
const EARTHQUAKE_LAYER_NAME: &str = "Earthquakes";

/// Maps event magnitude to marker radius in meters
///
/// The mapping is `magnitude ^ exponent * multiplier`, strictly increasing
/// over valid magnitudes so relative event size survives it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeScaling {
    pub exponent: i32,
    pub multiplier: f64,
    /// Radius used when the magnitude is missing, NaN, or negative
    pub fallback_radius: f64,
}

impl Default for MagnitudeScaling {
    fn default() -> Self {
        Self {
            exponent: 3,
            multiplier: 2000.0,
            fallback_radius: 2000.0,
        }
    }
}

impl MagnitudeScaling {
    pub fn radius(&self, magnitude: Option<f64>) -> f64 {
        match magnitude {
            Some(m) if m.is_finite() && m >= 0.0 => m.powi(self.exponent) * self.multiplier,
            _ => self.fallback_radius,
        }
    }
}

/// Renders earthquake records against a depth scale and shared style
#[derive(Debug, Clone, Default)]
pub struct EarthquakeRenderer {
    depth_scale: DepthScale,
    scaling: MagnitudeScaling,
    style: MarkerStyle,
}

impl EarthquakeRenderer {
    pub fn new(depth_scale: DepthScale, scaling: MagnitudeScaling, style: MarkerStyle) -> Self {
        Self {
            depth_scale,
            scaling,
            style,
        }
    }

    pub fn depth_scale(&self) -> &DepthScale {
        &self.depth_scale
    }

    /// Builds one marker: anchor in `(lat, lng)` order, fill from the
    /// depth scale, radius from the magnitude scaling
    pub fn render(&self, record: &EarthquakeRecord) -> CircleMarker {
        let fill = match record.depth_km {
            Some(depth) => self.depth_scale.classify(depth),
            None => self.depth_scale.fallback_color(),
        };
        CircleMarker::new(record.position(), self.scaling.radius(record.magnitude), fill)
            .with_style(self.style)
            .with_popup(popup_html(record))
    }

    /// Renders every record into a mountable marker layer
    pub fn layer(&self, records: &[EarthquakeRecord]) -> MarkerLayer {
        let markers = records.iter().map(|record| self.render(record)).collect();
        MarkerLayer::new(EARTHQUAKE_LAYER_ID, EARTHQUAKE_LAYER_NAME).with_markers(markers)
    }
}

fn popup_html(record: &EarthquakeRecord) -> String {
    let place = record.place.as_deref().unwrap_or("Unknown location");
    let magnitude = match record.magnitude {
        Some(m) => m.to_string(),
        None => "n/a".to_owned(),
    };
    let depth = match record.depth_km {
        Some(d) => format!("{} km", d),
        None => "n/a".to_owned(),
    };
    format!(
        "<h2>{}</h2><hr><p><b>Magnitude:</b> {}</p><p><b>Depth:</b> {}</p><p><b>Time:</b> {}</p>",
        place,
        magnitude,
        depth,
        format_time(record.time_ms)
    )
}

fn format_time(time_ms: Option<i64>) -> String {
    time_ms
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_owned())
}
