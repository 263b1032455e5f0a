//! # quakemap
//!
//! Map composition for recent-earthquake dashboards, inspired by the
//! classic Leaflet setup of depth-colored circle markers over tectonic
//! plate outlines.
//!
//! The library fetches the USGS earthquake summary feed and the PB2002
//! plate boundaries, classifies events by depth, sizes markers by
//! magnitude, and composes an owned [`Map`] value that a rendering widget
//! can walk: tile base layers, the marker layer, the plate overlay, and
//! the matching legend and layer controls.

pub mod assembly;
pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod render;
pub mod style;
pub mod ui;

// Re-export public API
pub use crate::assembly::{AssemblyState, MapAssembly};

pub use crate::core::{
    config::MapConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{Map, MapOptions},
};

pub use crate::data::{
    earthquake::{extract_records, EarthquakeRecord, ExtractionSummary},
    fetch::{FeedFetch, FetchError, HttpFeedClient},
    geojson::GeoJson,
};

pub use crate::layers::{
    base::{Layer, LayerKind},
    geojson::{GeoJsonOverlay, PathStyle},
    markers::{CircleMarker, MarkerLayer, MarkerStyle},
    tile::TileLayer,
};

pub use crate::render::{
    earthquakes::{EarthquakeRenderer, MagnitudeScaling},
    plates::PlateRenderer,
};

pub use crate::style::{
    color::Color,
    depth::{DepthBand, DepthScale},
};

pub use crate::ui::{
    controls::{Control, ControlKind, ControlPosition, LayersControl},
    legend::{Legend, LegendEntry},
};

/// Result type used throughout the library
pub type Result<T, E = MapError> = std::result::Result<T, E>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] crate::data::fetch::FetchError),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Legend error: {0}")]
    Legend(String),

    #[error("Style error: {0}")]
    Style(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
