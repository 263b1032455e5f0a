pub mod controls;
pub mod legend;

pub use controls::{Control, ControlKind, ControlPosition, LayerChoice, LayersControl};
pub use legend::{Legend, LegendEntry};
