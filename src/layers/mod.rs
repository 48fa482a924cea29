pub mod base;
pub mod macros;
pub mod manager;
pub mod marker;
pub mod series;

pub use base::{LayerProperties, LayerTrait, LayerType};
pub use manager::LayerManager;
pub use marker::{MarkerDatum, MarkerLayer, MarkerTemplate};
pub use series::{GraticuleSeries, PolygonSeries, Series};
