//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::assembly::{AssemblyState, MapAssembly};

pub use crate::core::{
    config::MapConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{Map, MapOptions},
};

pub use crate::data::{
    earthquake::{extract_records, EarthquakeRecord},
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
    legend::Legend,
};

pub use crate::{MapError, Result};
