//! Feed endpoints and composition defaults
//!
//! `MapConfig::default()` reproduces the standard recent-earthquakes view:
//! USGS weekly feed, PB2002 plate outlines, and a viewport centered on the
//! seismically active Banda Sea region.

use serde::{Deserialize, Serialize};

use crate::core::geo::LatLng;
use crate::core::map::MapOptions;
use crate::layers::geojson::PathStyle;
use crate::layers::markers::MarkerStyle;
use crate::render::earthquakes::MagnitudeScaling;
use crate::render::plates::DEFAULT_PLATE_STYLE;
use crate::style::depth::DepthScale;

/// USGS "all earthquakes, past week" summary feed
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 tectonic plate outlines
pub const PLATE_BOUNDARY_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_plates.json";

/// Everything the assembly pipeline needs to build a map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub earthquake_url: String,
    pub plates_url: String,
    pub view: MapOptions,
    pub depth_scale: DepthScale,
    pub scaling: MagnitudeScaling,
    pub marker_style: MarkerStyle,
    pub plate_style: PathStyle,
    pub legend_title: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            earthquake_url: EARTHQUAKE_FEED_URL.to_owned(),
            plates_url: PLATE_BOUNDARY_URL.to_owned(),
            view: MapOptions::new(LatLng::new(-6.1444, 134.5238), 4.0),
            depth_scale: DepthScale::default(),
            scaling: MagnitudeScaling::default(),
            marker_style: MarkerStyle::default(),
            plate_style: DEFAULT_PLATE_STYLE,
            legend_title: "Earthquake Depth (km)".to_owned(),
        }
    }
}

impl MapConfig {
    pub fn with_earthquake_url(mut self, url: impl Into<String>) -> Self {
        self.earthquake_url = url.into();
        self
    }

    pub fn with_plates_url(mut self, url: impl Into<String>) -> Self {
        self.plates_url = url.into();
        self
    }

    pub fn with_view(mut self, view: MapOptions) -> Self {
        self.view = view;
        self
    }

    pub fn with_depth_scale(mut self, depth_scale: DepthScale) -> Self {
        self.depth_scale = depth_scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapConfig::default();
        assert_eq!(config.earthquake_url, EARTHQUAKE_FEED_URL);
        assert_eq!(config.plates_url, PLATE_BOUNDARY_URL);
        assert_eq!(config.view.center, LatLng::new(-6.1444, 134.5238));
        assert_eq!(config.view.zoom, 4.0);
        assert_eq!(config.depth_scale.len(), 7);
        assert_eq!(config.plate_style.stroke_color.to_hex(), "#dfd98b");
        assert!(config.plate_style.fill_color.is_none());
        assert_eq!(config.legend_title, "Earthquake Depth (km)");
    }

    #[test]
    fn test_builder_overrides() {
        let config = MapConfig::default()
            .with_earthquake_url("https://example.com/quakes.geojson")
            .with_plates_url("https://example.com/plates.json")
            .with_view(MapOptions::new(LatLng::new(35.0, 139.0), 6.0));

        assert_eq!(config.earthquake_url, "https://example.com/quakes.geojson");
        assert_eq!(config.plates_url, "https://example.com/plates.json");
        assert_eq!(config.view.zoom, 6.0);
    }
}
