pub mod earthquakes;
pub mod plates;

pub use earthquakes::{EarthquakeRenderer, MagnitudeScaling, EARTHQUAKE_LAYER_ID};
pub use plates::{PlateRenderer, DEFAULT_PLATE_STYLE, PLATE_LAYER_ID};
