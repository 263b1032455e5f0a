pub mod earthquake;
pub mod fetch;
pub mod geojson;

pub use earthquake::{extract_records, EarthquakeRecord, ExtractionSummary};
pub use fetch::{FeedFetch, FetchError, HttpFeedClient};
pub use geojson::{Feature, FeedMetadata, GeoJson, Geometry, Position};
