//! Two-stage pipeline that fetches feed data and composes the map
//!
//! Stage one fetches earthquakes and mounts the marker layer; stage two
//! fetches plate boundaries and mounts the outline overlay plus the depth
//! legend. The stages run strictly in order. A failed stage logs the error
//! and stops the pipeline in a named terminal state, leaving everything
//! already mounted in place.

use std::fmt;

use log::{error, info, warn};

use crate::core::config::MapConfig;
use crate::core::map::Map;
use crate::data::earthquake::extract_records;
use crate::data::fetch::FeedFetch;
use crate::layers::base::Layer;
use crate::layers::tile::TileLayer;
use crate::render::earthquakes::{EarthquakeRenderer, EARTHQUAKE_LAYER_ID};
use crate::render::plates::{PlateRenderer, PLATE_LAYER_ID};
use crate::ui::controls::{Control, LayersControl};
use crate::ui::legend::Legend;
use crate::Result;

/// Where the assembly pipeline currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssemblyState {
    /// Stage one in flight: earthquake feed not yet mounted
    AwaitingEarthquakes,
    /// Stage two in flight: plate boundaries not yet mounted
    AwaitingPlates,
    /// Both stages mounted
    Ready,
    /// Stage one failed; the map has base layers only
    EarthquakeFetchFailed,
    /// Stage two failed; earthquakes stay mounted, plates and legend absent
    PlateFetchFailed,
}

impl AssemblyState {
    /// True once the pipeline will make no further progress
    pub fn is_terminal(&self) -> bool {
        !matches!(
            self,
            AssemblyState::AwaitingEarthquakes | AssemblyState::AwaitingPlates
        )
    }
}

impl fmt::Display for AssemblyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyState::AwaitingEarthquakes => write!(f, "awaiting earthquakes"),
            AssemblyState::AwaitingPlates => write!(f, "awaiting plates"),
            AssemblyState::Ready => write!(f, "ready"),
            AssemblyState::EarthquakeFetchFailed => write!(f, "earthquake fetch failed"),
            AssemblyState::PlateFetchFailed => write!(f, "plate fetch failed"),
        }
    }
}

/// Drives fetching, extraction, rendering, and mounting over a feed source
pub struct MapAssembly<F> {
    config: MapConfig,
    feeds: F,
    state: AssemblyState,
}

impl<F: FeedFetch> MapAssembly<F> {
    pub fn new(config: MapConfig, feeds: F) -> Self {
        Self {
            config,
            feeds,
            state: AssemblyState::AwaitingEarthquakes,
        }
    }

    pub fn state(&self) -> AssemblyState {
        self.state
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Builds the map shell: viewport, tile base layers, and the layers
    /// control
    ///
    /// Overlay slots are registered in the control up front; the layers
    /// themselves mount as [`MapAssembly::run`] progresses.
    pub fn init_map(&self) -> Result<Map> {
        let mut map = Map::new(self.config.view);

        let street = TileLayer::openstreetmap();
        let topo = TileLayer::opentopomap();

        let mut switcher = LayersControl::new();
        switcher.add_base_layer(street.name(), street.id());
        switcher.add_base_layer(topo.name(), topo.id());
        switcher.add_overlay("Earthquakes", EARTHQUAKE_LAYER_ID);
        switcher.add_overlay("Tectonic Plates", PLATE_LAYER_ID);

        map.add_base_layer(street)?;
        map.add_base_layer(topo)?;
        map.add_control(Control::layers(switcher));
        Ok(map)
    }

    /// Runs both fetch stages in order, mounting results as they land
    ///
    /// Returns the terminal state; the same state stays readable through
    /// [`MapAssembly::state`]. Call once per map.
    pub async fn run(&mut self, map: &mut Map) -> AssemblyState {
        self.state = AssemblyState::AwaitingEarthquakes;
        match self.mount_earthquakes(map).await {
            Ok(count) => {
                info!("mounted {} earthquake markers", count);
                self.state = AssemblyState::AwaitingPlates;
            }
            Err(err) => {
                error!("error fetching earthquake data: {}", err);
                self.state = AssemblyState::EarthquakeFetchFailed;
                return self.state;
            }
        }

        match self.mount_plates(map).await {
            Ok(count) => {
                info!("mounted plate overlay with {} features", count);
                self.state = AssemblyState::Ready;
            }
            Err(err) => {
                error!("error fetching plate data: {}", err);
                self.state = AssemblyState::PlateFetchFailed;
            }
        }
        self.state
    }

    /// Shell plus full pipeline in one call
    ///
    /// The map is returned in every terminal state, so partial scenes
    /// survive a failed stage.
    pub async fn assemble(&mut self) -> Result<Map> {
        let mut map = self.init_map()?;
        self.run(&mut map).await;
        Ok(map)
    }

    async fn mount_earthquakes(&self, map: &mut Map) -> Result<usize> {
        let feed = self.feeds.fetch_feed(&self.config.earthquake_url).await?;
        if let Some(title) = feed.metadata().and_then(|metadata| metadata.title.as_deref()) {
            info!("earthquake feed: {}", title);
        }

        let (records, summary) = extract_records(&feed);
        if summary.skipped > 0 {
            warn!(
                "skipped {} of {} earthquake features",
                summary.skipped, summary.total
            );
        }

        let renderer = EarthquakeRenderer::new(
            self.config.depth_scale.clone(),
            self.config.scaling,
            self.config.marker_style,
        );
        let layer = renderer.layer(&records);
        let count = layer.len();
        map.add_overlay(layer)?;
        Ok(count)
    }

    async fn mount_plates(&self, map: &mut Map) -> Result<usize> {
        let boundaries = self.feeds.fetch_feed(&self.config.plates_url).await?;
        let overlay = PlateRenderer::new(self.config.plate_style).render(boundaries);
        let count = overlay.feature_count();
        map.add_overlay(overlay)?;

        let legend = Legend::from_scale(self.config.legend_title.clone(), &self.config.depth_scale);
        map.add_control(Control::legend(legend));
        Ok(count)
    }
}
