use std::any::Any;

use crate::core::geo::LatLngBounds;

/// Broad category a layer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Tile,
    Markers,
    GeoJson,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Tile => write!(f, "tile"),
            LayerKind::Markers => write!(f, "markers"),
            LayerKind::GeoJson => write!(f, "geojson"),
        }
    }
}

/// Object-safe interface every map layer implements
pub trait Layer: Send + Sync {
    /// Stable identifier, unique within one map
    fn id(&self) -> &str;

    /// Human-facing name used by controls and logs
    fn name(&self) -> &str;

    fn kind(&self) -> LayerKind;

    /// Geographic extent of the layer contents, when it has one
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    /// Downcast support for callers that need the concrete layer type
    fn as_any(&self) -> &dyn Any;
}
