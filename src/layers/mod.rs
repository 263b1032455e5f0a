pub mod base;
pub mod geojson;
pub mod markers;
pub mod tile;

pub use base::{Layer, LayerKind};
pub use geojson::{GeoJsonOverlay, PathStyle};
pub use markers::{CircleMarker, MarkerLayer, MarkerStyle};
pub use tile::TileLayer;
