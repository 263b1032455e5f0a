use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::core::geo::TileCoord;
use crate::layers::base::{Layer, LayerKind};

const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const OPENTOPO_ATTRIBUTION: &str = "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)";

/// A raster base layer addressed by URL template
///
/// Templates use the standard `{s}/{z}/{x}/{y}` placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    id: String,
    name: String,
    url_template: String,
    attribution: String,
    subdomains: Vec<String>,
    max_zoom: u8,
}

impl TileLayer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url_template: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url_template: url_template.into(),
            attribution: attribution.into(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            max_zoom: 19,
        }
    }

    pub fn with_subdomains(mut self, subdomains: Vec<String>) -> Self {
        self.subdomains = subdomains;
        self
    }

    pub fn with_max_zoom(mut self, max_zoom: u8) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// OpenStreetMap standard raster tiles
    pub fn openstreetmap() -> Self {
        Self::new(
            "osm",
            "Street Map",
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            OSM_ATTRIBUTION,
        )
    }

    /// OpenTopoMap terrain tiles
    pub fn opentopomap() -> Self {
        Self::new(
            "topo",
            "Topo Map",
            "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            OPENTOPO_ATTRIBUTION,
        )
        .with_max_zoom(17)
    }

    /// Resolves the template for one tile
    ///
    /// The `{s}` placeholder rotates through the subdomains by tile
    /// coordinate, so repeated requests for a tile hit the same host.
    pub fn tile_url(&self, coord: TileCoord) -> String {
        let mut url = self
            .url_template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string());
        if !self.subdomains.is_empty() {
            let index = (coord.x as usize + coord.y as usize) % self.subdomains.len();
            url = url.replace("{s}", &self.subdomains[index]);
        }
        url
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }
}

impl Layer for TileLayer {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Tile
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
