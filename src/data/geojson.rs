//! GeoJSON document model for feed payloads
//!
//! Coordinates keep the GeoJSON `[longitude, latitude]` order, with an
//! optional third vertical element carried through untouched. USGS summary
//! feeds use that third element for event depth in kilometers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::core::geo::{LatLng, LatLngBounds};

/// A single coordinate position as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub Vec<f64>);

impl Position {
    pub fn longitude(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.0.get(1).copied()
    }

    /// Third coordinate element, when present
    pub fn vertical(&self) -> Option<f64> {
        self.0.get(2).copied()
    }

    /// Reorders the position into screen convention, `(lat, lng)`
    pub fn to_lat_lng(&self) -> Option<LatLng> {
        match (self.latitude(), self.longitude()) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        }
    }
}

/// Geometry of a GeoJSON feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

impl Geometry {
    /// Name of the GeoJSON `type` tag
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    /// Bounds covering every well-formed position in the geometry
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        self.each_position(&mut |position| {
            if let Some(point) = position.to_lat_lng() {
                match &mut bounds {
                    Some(b) => b.extend(point),
                    None => bounds = Some(LatLngBounds::from_point(point)),
                }
            }
        });
        bounds
    }

    fn each_position(&self, f: &mut dyn FnMut(&Position)) {
        match self {
            Geometry::Point { coordinates } => f(coordinates),
            Geometry::MultiPoint { coordinates } | Geometry::LineString { coordinates } => {
                for position in coordinates {
                    f(position);
                }
            }
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                for line in coordinates {
                    for position in line {
                        f(position);
                    }
                }
            }
            Geometry::MultiPolygon { coordinates } => {
                for polygon in coordinates {
                    for ring in polygon {
                        for position in ring {
                            f(position);
                        }
                    }
                }
            }
            Geometry::GeometryCollection { geometries } => {
                for geometry in geometries {
                    geometry.each_position(f);
                }
            }
        }
    }
}

/// A GeoJSON feature with free-form properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, Value>>,
}

impl Feature {
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Numeric property, tolerating `null` and missing keys
    pub fn property_f64(&self, key: &str) -> Option<f64> {
        self.property(key)?.as_f64()
    }

    pub fn property_i64(&self, key: &str) -> Option<i64> {
        self.property(key)?.as_i64()
    }

    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.property(key)?.as_str()
    }
}

/// Foreign metadata member that summary feeds attach to collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub generated: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A GeoJSON document, either a lone feature or a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(Feature),
    FeatureCollection {
        features: Vec<Feature>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<FeedMetadata>,
    },
}

impl GeoJson {
    /// Features of the document; a lone feature reads as a slice of one
    pub fn features(&self) -> &[Feature] {
        match self {
            GeoJson::Feature(feature) => std::slice::from_ref(feature),
            GeoJson::FeatureCollection { features, .. } => features,
        }
    }

    pub fn feature_count(&self) -> usize {
        self.features().len()
    }

    pub fn metadata(&self) -> Option<&FeedMetadata> {
        match self {
            GeoJson::Feature(_) => None,
            GeoJson::FeatureCollection { metadata, .. } => metadata.as_ref(),
        }
    }

    /// Bounds covering every feature geometry in the document
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for feature in self.features() {
            if let Some(feature_bounds) = feature.geometry.as_ref().and_then(Geometry::bounds) {
                match &mut bounds {
                    Some(b) => {
                        b.extend(feature_bounds.south_west);
                        b.extend(feature_bounds.north_east);
                    }
                    None => bounds = Some(feature_bounds),
                }
            }
        }
        bounds
    }
}
