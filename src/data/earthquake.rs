//! Earthquake records extracted from USGS summary feeds
//!
//! Extraction is tolerant: a malformed feature is logged and skipped, it
//! never discards the rest of the feed. Null magnitudes and missing places
//! are normal in live data and stay `None` on the record.

use log::warn;
use serde_json::Value;

use crate::core::geo::LatLng;
use crate::data::geojson::{Feature, GeoJson, Geometry};
use crate::{MapError, Result};

/// One earthquake event from a summary feed
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRecord {
    pub longitude: f64,
    pub latitude: f64,
    /// Event depth in kilometers; negative values are above the surface
    pub depth_km: Option<f64>,
    pub magnitude: Option<f64>,
    pub place: Option<String>,
    /// Origin time in epoch milliseconds
    pub time_ms: Option<i64>,
    pub id: Option<String>,
}

impl EarthquakeRecord {
    /// Reads one record out of a feed feature
    ///
    /// Requires a Point geometry with at least longitude and latitude in
    /// range. Everything else is optional.
    pub fn from_feature(feature: &Feature) -> Result<Self> {
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or_else(|| MapError::InvalidCoordinates("feature has no geometry".into()))?;
        let coordinates = match geometry {
            Geometry::Point { coordinates } => coordinates,
            other => {
                return Err(MapError::InvalidCoordinates(format!(
                    "expected Point geometry, got {}",
                    other.type_name()
                )))
            }
        };
        let (longitude, latitude) = match (coordinates.longitude(), coordinates.latitude()) {
            (Some(lng), Some(lat)) => (lng, lat),
            _ => {
                return Err(MapError::InvalidCoordinates(format!(
                    "position has only {} coordinates",
                    coordinates.0.len()
                )))
            }
        };
        let position = LatLng::new(latitude, longitude);
        if !position.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "position out of range: {}",
                position
            )));
        }
        Ok(Self {
            longitude,
            latitude,
            depth_km: coordinates.vertical().filter(|depth| depth.is_finite()),
            magnitude: feature.property_f64("mag"),
            place: feature.property_str("place").map(str::to_owned),
            time_ms: feature.property_i64("time"),
            id: feature.id.as_ref().and_then(Value::as_str).map(str::to_owned),
        })
    }

    /// Marker anchor for this event, in `(lat, lng)` order
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Totals from one extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub total: usize,
    pub extracted: usize,
    pub skipped: usize,
}

/// Pulls every readable earthquake record out of a feed document
pub fn extract_records(feed: &GeoJson) -> (Vec<EarthquakeRecord>, ExtractionSummary) {
    let features = feed.features();
    let mut records = Vec::with_capacity(features.len());
    let mut summary = ExtractionSummary {
        total: features.len(),
        ..Default::default()
    };
    for (index, feature) in features.iter().enumerate() {
        match EarthquakeRecord::from_feature(feature) {
            Ok(record) => {
                records.push(record);
                summary.extracted += 1;
            }
            Err(err) => {
                summary.skipped += 1;
                warn!("skipping feature {}: {}", index, err);
            }
        }
    }
    (records, summary)
}
