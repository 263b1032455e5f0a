use serde::{Deserialize, Serialize};

use crate::core::geo::{LatLng, LatLngBounds};
use crate::layers::base::Layer;
use crate::layers::tile::TileLayer;
use crate::ui::controls::Control;
use crate::{MapError, Result};

/// Initial viewport of a map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
}

impl MapOptions {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: LatLng::default(),
            zoom: 2.0,
        }
    }
}

/// A fully composed map: viewport, tile base layers, data overlays, and
/// controls
///
/// The map owns everything added to it. A rendering widget walks the
/// composition through the accessors; nothing here holds a handle back
/// into widget state.
pub struct Map {
    options: MapOptions,
    base_layers: Vec<TileLayer>,
    overlays: Vec<Box<dyn Layer>>,
    controls: Vec<Control>,
}

impl Map {
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            base_layers: Vec::new(),
            overlays: Vec::new(),
            controls: Vec::new(),
        }
    }

    fn has_layer_id(&self, id: &str) -> bool {
        self.base_layers.iter().any(|layer| layer.id() == id)
            || self.overlays.iter().any(|layer| layer.id() == id)
    }

    /// Adds a selectable tile base layer
    ///
    /// Layer ids share one namespace with overlays and must be unique.
    pub fn add_base_layer(&mut self, layer: TileLayer) -> Result<()> {
        if self.has_layer_id(layer.id()) {
            return Err(MapError::Layer(format!(
                "duplicate layer id: {}",
                layer.id()
            )));
        }
        self.base_layers.push(layer);
        Ok(())
    }

    /// Mounts a data overlay on top of the base layers
    pub fn add_overlay<L>(&mut self, layer: L) -> Result<()>
    where
        L: Layer + 'static,
    {
        if self.has_layer_id(layer.id()) {
            return Err(MapError::Layer(format!(
                "duplicate layer id: {}",
                layer.id()
            )));
        }
        self.overlays.push(Box::new(layer));
        Ok(())
    }

    pub fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }

    pub fn options(&self) -> MapOptions {
        self.options
    }

    pub fn center(&self) -> LatLng {
        self.options.center
    }

    pub fn zoom(&self) -> f64 {
        self.options.zoom
    }

    pub fn base_layers(&self) -> &[TileLayer] {
        &self.base_layers
    }

    pub fn overlays(&self) -> impl Iterator<Item = &dyn Layer> {
        self.overlays.iter().map(|layer| layer.as_ref())
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Looks up a mounted overlay by id
    pub fn overlay(&self, id: &str) -> Option<&dyn Layer> {
        self.overlays
            .iter()
            .find(|layer| layer.id() == id)
            .map(|layer| layer.as_ref())
    }

    pub fn has_overlay(&self, id: &str) -> bool {
        self.overlay(id).is_some()
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Union of every overlay extent, when any overlay has one
    pub fn overlay_bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for layer in &self.overlays {
            if let Some(layer_bounds) = layer.bounds() {
                match &mut bounds {
                    Some(b) => {
                        b.extend(layer_bounds.south_west);
                        b.extend(layer_bounds.north_east);
                    }
                    None => bounds = Some(layer_bounds),
                }
            }
        }
        bounds
    }
}
