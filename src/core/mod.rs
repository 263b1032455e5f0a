pub mod config;
pub mod geo;
pub mod map;

pub use config::MapConfig;
pub use geo::{LatLng, LatLngBounds, TileCoord};
pub use map::{Map, MapOptions};
