use anyhow::bail;
use log::{info, warn};

use quakemap::prelude::*;

/// Fetches live feeds, assembles the map, and reports what mounted
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MapConfig::default();
    info!("earthquake feed: {}", config.earthquake_url);
    info!("plate boundaries: {}", config.plates_url);

    let mut assembly = MapAssembly::new(config, HttpFeedClient::new());
    let map = assembly.assemble().await?;

    match assembly.state() {
        AssemblyState::Ready => info!("map ready"),
        AssemblyState::PlateFetchFailed => {
            warn!("plate overlay unavailable, continuing with earthquakes only")
        }
        AssemblyState::EarthquakeFetchFailed => bail!("earthquake feed unavailable"),
        state => bail!("assembly stopped while {}", state),
    }

    info!(
        "view centered at {} (zoom {})",
        map.center(),
        map.zoom()
    );
    for base in map.base_layers() {
        info!("base layer: {}", base.name());
    }
    for layer in map.overlays() {
        match layer.as_any().downcast_ref::<MarkerLayer>() {
            Some(markers) => info!("{}: {} markers", layer.name(), markers.len()),
            None => match layer.as_any().downcast_ref::<GeoJsonOverlay>() {
                Some(overlay) => info!("{}: {} features", layer.name(), overlay.feature_count()),
                None => info!("{}: {} layer", layer.name(), layer.kind()),
            },
        }
    }
    for control in map.controls() {
        match control.kind() {
            ControlKind::Layers(switcher) => info!(
                "layers control: {} base layers, {} overlays",
                switcher.base_layers().len(),
                switcher.overlays().len()
            ),
            ControlKind::Legend(legend) => {
                info!("legend \"{}\" with {} entries", legend.title(), legend.len())
            }
        }
    }
    if let Some(bounds) = map.overlay_bounds() {
        info!(
            "data bounds: {} to {}",
            bounds.south_west, bounds.north_east
        );
    }

    Ok(())
}
