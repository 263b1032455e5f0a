use async_trait::async_trait;
use serde_json::json;

use quakemap::core::config::{EARTHQUAKE_FEED_URL, PLATE_BOUNDARY_URL};
use quakemap::prelude::*;

/// Scripted feed source: each endpoint either returns its document or
/// fails with an HTTP status error
struct ScriptedFeeds {
    earthquakes: Option<GeoJson>,
    plates: Option<GeoJson>,
}

impl ScriptedFeeds {
    fn new(earthquakes: Option<GeoJson>, plates: Option<GeoJson>) -> Self {
        Self {
            earthquakes,
            plates,
        }
    }
}

#[async_trait]
impl FeedFetch for ScriptedFeeds {
    async fn fetch_feed(&self, url: &str) -> Result<GeoJson, FetchError> {
        let scripted = if url == EARTHQUAKE_FEED_URL {
            &self.earthquakes
        } else if url == PLATE_BOUNDARY_URL {
            &self.plates
        } else {
            &None
        };
        scripted.clone().ok_or_else(|| FetchError::Status {
            status: 503,
            url: url.to_owned(),
        })
    }
}

fn earthquake_feed() -> GeoJson {
    serde_json::from_value(json!({
        "type": "FeatureCollection",
        "metadata": { "title": "USGS All Earthquakes, Past Week", "count": 3 },
        "features": [
            {
                "type": "Feature",
                "id": "us7000test",
                "properties": { "mag": 5.0, "place": "Test Region", "time": 1700000000000i64 },
                "geometry": { "type": "Point", "coordinates": [120.5, -5.2, 45.0] }
            },
            {
                "type": "Feature",
                "id": "us7000deep",
                "properties": { "mag": 6.1, "place": "Banda Sea", "time": 1700000100000i64 },
                "geometry": { "type": "Point", "coordinates": [129.9, -6.8, 520.0] }
            },
            {
                "type": "Feature",
                "id": "us7000null",
                "properties": { "mag": null, "place": null, "time": null },
                "geometry": { "type": "Point", "coordinates": [-120.1, 36.2, 4.1] }
            }
        ]
    }))
    .unwrap()
}

fn plate_feed() -> GeoJson {
    serde_json::from_value(json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "PlateName": "Sunda" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[95.0, -10.0], [120.0, -10.0], [120.0, 5.0], [95.0, 5.0], [95.0, -10.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "PlateName": "Banda Sea" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[122.0, -8.0], [132.0, -8.0], [132.0, -2.0], [122.0, -2.0], [122.0, -8.0]]]
                }
            }
        ]
    }))
    .unwrap()
}

fn find_marker_layer(map: &Map) -> &MarkerLayer {
    map.overlay("earthquakes")
        .and_then(|layer| layer.as_any().downcast_ref::<MarkerLayer>())
        .expect("earthquake layer should be mounted")
}

fn find_legend(map: &Map) -> &Legend {
    map.controls()
        .iter()
        .find_map(|control| match control.kind() {
            ControlKind::Legend(legend) => Some(legend),
            _ => None,
        })
        .expect("legend should be mounted")
}

/// Both feeds succeed: the pipeline ends Ready with every layer and
/// control mounted
#[tokio::test]
async fn test_full_assembly() {
    let feeds = ScriptedFeeds::new(Some(earthquake_feed()), Some(plate_feed()));
    let mut assembly = MapAssembly::new(MapConfig::default(), feeds);

    let map = assembly.assemble().await.unwrap();

    assert_eq!(assembly.state(), AssemblyState::Ready);
    assert!(assembly.state().is_terminal());
    assert_eq!(map.base_layers().len(), 2);
    assert!(map.has_overlay("earthquakes"));
    assert!(map.has_overlay("plates"));
    assert_eq!(map.controls().len(), 2);
    assert!(map.controls().iter().any(|control| control.is_layers()));
    assert!(map.controls().iter().any(|control| control.is_legend()));
}

/// Marker fields follow the record: position flipped to (lat, lng), fill
/// from depth, radius from magnitude
#[tokio::test]
async fn test_rendered_marker_fields() {
    let feeds = ScriptedFeeds::new(Some(earthquake_feed()), Some(plate_feed()));
    let mut assembly = MapAssembly::new(MapConfig::default(), feeds);
    let map = assembly.assemble().await.unwrap();

    let markers = find_marker_layer(&map).markers();
    assert_eq!(markers.len(), 3);

    let first = &markers[0];
    assert_eq!(first.position, LatLng::new(-5.2, 120.5));
    assert_eq!(first.radius, 250_000.0);
    assert_eq!(first.fill_color.to_hex(), "#ee9a3a");
    assert_eq!(first.style.fill_opacity, 0.75);
    assert_eq!(first.style.stroke_color.to_hex(), "#ffffff");
    let popup = first.popup_html.as_deref().unwrap();
    assert!(popup.contains("Test Region"));
    assert!(popup.contains("45 km"));

    // deepest band for the 520 km event
    let deep = &markers[1];
    assert_eq!(deep.fill_color.to_hex(), "#820401");

    // null magnitude falls back to the minimum radius
    let null_mag = &markers[2];
    assert_eq!(null_mag.radius, 2_000.0);
    assert!(null_mag.popup_html.as_deref().unwrap().contains("Unknown location"));
}

/// The plate overlay keeps its fixed outline style and all features
#[tokio::test]
async fn test_plate_overlay_style() {
    let feeds = ScriptedFeeds::new(Some(earthquake_feed()), Some(plate_feed()));
    let mut assembly = MapAssembly::new(MapConfig::default(), feeds);
    let map = assembly.assemble().await.unwrap();

    let overlay = map
        .overlay("plates")
        .and_then(|layer| layer.as_any().downcast_ref::<GeoJsonOverlay>())
        .expect("plate overlay should be mounted");

    assert_eq!(overlay.feature_count(), 2);
    assert_eq!(overlay.style().stroke_color.to_hex(), "#dfd98b");
    assert!(overlay.style().fill_color.is_none());
}

/// The legend mounts only after the plate stage and aligns with the scale
#[tokio::test]
async fn test_legend_matches_depth_scale() {
    let feeds = ScriptedFeeds::new(Some(earthquake_feed()), Some(plate_feed()));
    let config = MapConfig::default();
    let scale = config.depth_scale.clone();
    let mut assembly = MapAssembly::new(config, feeds);
    let map = assembly.assemble().await.unwrap();

    let legend = find_legend(&map);

    assert_eq!(legend.title(), "Earthquake Depth (km)");
    assert_eq!(legend.len(), scale.len());
    for (entry, band) in legend.entries().iter().zip(scale.bands()) {
        assert_eq!(entry.color, band.color);
    }
    assert_eq!(legend.entries()[0].color.to_hex(), "#e7e34e");
    assert_eq!(legend.entries()[6].color.to_hex(), "#820401");
}

/// A custom depth scale flows through the config into marker fills and
/// the mounted legend
#[tokio::test]
async fn test_custom_depth_scale_flows_through() {
    let scale = DepthScale::new(vec![
        DepthBand::new(100.0, Color::new(0x31, 0xa3, 0x54)),
        DepthBand::new(f64::INFINITY, Color::new(0x08, 0x30, 0x6b)),
    ])
    .unwrap();
    let config = MapConfig::default().with_depth_scale(scale);
    let feeds = ScriptedFeeds::new(Some(earthquake_feed()), Some(plate_feed()));
    let mut assembly = MapAssembly::new(config, feeds);
    let map = assembly.assemble().await.unwrap();

    // 45 km and 4.1 km events sit in the shallow band, 520 km in the deep one
    let markers = find_marker_layer(&map).markers();
    assert_eq!(markers[0].fill_color.to_hex(), "#31a354");
    assert_eq!(markers[1].fill_color.to_hex(), "#08306b");
    assert_eq!(markers[2].fill_color.to_hex(), "#31a354");

    let legend = find_legend(&map);
    assert_eq!(legend.len(), 2);
    assert_eq!(legend.entries()[0].label, "≤100");
    assert_eq!(legend.entries()[1].label, ">100");
    assert_eq!(legend.entries()[0].color.to_hex(), "#31a354");
    assert_eq!(legend.entries()[1].color.to_hex(), "#08306b");
}

/// A failed earthquake fetch stops the pipeline before anything mounts
#[tokio::test]
async fn test_earthquake_fetch_failure() {
    let feeds = ScriptedFeeds::new(None, Some(plate_feed()));
    let mut assembly = MapAssembly::new(MapConfig::default(), feeds);
    let map = assembly.assemble().await.unwrap();

    assert_eq!(assembly.state(), AssemblyState::EarthquakeFetchFailed);
    assert_eq!(map.overlay_count(), 0);
    assert!(!map.has_overlay("earthquakes"));
    assert!(!map.has_overlay("plates"));

    // the shell persists: base layers and the layers control
    assert_eq!(map.base_layers().len(), 2);
    assert_eq!(map.controls().len(), 1);
    assert!(map.controls()[0].is_layers());
}

/// A failed plate fetch leaves the earthquake layer mounted and skips
/// the plate overlay and legend
#[tokio::test]
async fn test_plate_fetch_failure_keeps_earthquakes() {
    let feeds = ScriptedFeeds::new(Some(earthquake_feed()), None);
    let mut assembly = MapAssembly::new(MapConfig::default(), feeds);
    let map = assembly.assemble().await.unwrap();

    assert_eq!(assembly.state(), AssemblyState::PlateFetchFailed);
    assert!(map.has_overlay("earthquakes"));
    assert!(!map.has_overlay("plates"));
    assert_eq!(find_marker_layer(&map).len(), 3);
    assert!(!map.controls().iter().any(|control| control.is_legend()));
}

/// Custom feed URLs flow through the config to the fetcher
#[tokio::test]
async fn test_unknown_urls_fail_cleanly() {
    let feeds = ScriptedFeeds::new(Some(earthquake_feed()), Some(plate_feed()));
    let config = MapConfig::default().with_earthquake_url("https://example.com/other.geojson");
    let mut assembly = MapAssembly::new(config, feeds);
    let map = assembly.assemble().await.unwrap();

    // the scripted source only answers the standard URLs
    assert_eq!(assembly.state(), AssemblyState::EarthquakeFetchFailed);
    assert_eq!(map.overlay_count(), 0);
}

/// Overlay bounds cover both mounted layers
#[tokio::test]
async fn test_overlay_bounds_cover_data() {
    let feeds = ScriptedFeeds::new(Some(earthquake_feed()), Some(plate_feed()));
    let mut assembly = MapAssembly::new(MapConfig::default(), feeds);
    let map = assembly.assemble().await.unwrap();

    let bounds = map.overlay_bounds().unwrap();
    assert!(bounds.contains(LatLng::new(-5.2, 120.5)));
    assert!(bounds.contains(LatLng::new(36.2, -120.1)));
    assert!(bounds.contains(LatLng::new(-10.0, 95.0)));
}
