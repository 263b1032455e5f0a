//! Controls attached to the map chrome

use serde::{Deserialize, Serialize};

use crate::ui::legend::Legend;

/// Corner of the map a control docks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One selectable entry in a layers control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerChoice {
    /// Display name shown in the control
    pub name: String,
    /// Id of the layer the entry toggles
    pub layer_id: String,
}

impl LayerChoice {
    pub fn new(name: impl Into<String>, layer_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layer_id: layer_id.into(),
        }
    }
}

/// Base-layer switcher plus overlay toggles
///
/// Base layers are mutually exclusive; overlays toggle independently. An
/// entry may name a layer that has not mounted yet, matching how overlay
/// slots are registered before their data arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayersControl {
    base_layers: Vec<LayerChoice>,
    overlays: Vec<LayerChoice>,
}

impl LayersControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_base_layer(&mut self, name: impl Into<String>, layer_id: impl Into<String>) {
        self.base_layers.push(LayerChoice::new(name, layer_id));
    }

    pub fn add_overlay(&mut self, name: impl Into<String>, layer_id: impl Into<String>) {
        self.overlays.push(LayerChoice::new(name, layer_id));
    }

    pub fn base_layers(&self) -> &[LayerChoice] {
        &self.base_layers
    }

    pub fn overlays(&self) -> &[LayerChoice] {
        &self.overlays
    }
}

/// What a control renders as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlKind {
    Layers(LayersControl),
    Legend(Legend),
}

/// A positioned piece of map chrome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    position: ControlPosition,
    kind: ControlKind,
}

impl Control {
    /// Layers control in its usual top-right corner
    pub fn layers(control: LayersControl) -> Self {
        Self {
            position: ControlPosition::TopRight,
            kind: ControlKind::Layers(control),
        }
    }

    /// Legend control in its usual bottom-right corner
    pub fn legend(legend: Legend) -> Self {
        Self {
            position: ControlPosition::BottomRight,
            kind: ControlKind::Legend(legend),
        }
    }

    pub fn with_position(mut self, position: ControlPosition) -> Self {
        self.position = position;
        self
    }

    pub fn position(&self) -> ControlPosition {
        self.position
    }

    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    pub fn is_legend(&self) -> bool {
        matches!(self.kind, ControlKind::Legend(_))
    }

    pub fn is_layers(&self) -> bool {
        matches!(self.kind, ControlKind::Layers(_))
    }
}
