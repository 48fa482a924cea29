#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Polygon,
    Graticule,
    Image,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Polygon => write!(f, "polygon"),
            LayerType::Graticule => write!(f, "graticule"),
            LayerType::Image => write!(f, "image"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub layer_type: LayerType,
    pub z_index: i32,
}

impl LayerProperties {
    pub fn new(id: String, layer_type: LayerType) -> Self {
        Self {
            id,
            layer_type,
            z_index: 0,
        }
    }
}

/// A series living on the globe surface
pub trait LayerTrait: Send + Sync {
    fn id(&self) -> &str;

    fn layer_type(&self) -> LayerType;

    /// Drawing order, lower first
    fn z_index(&self) -> i32;

    /// Layer settings and data as JSON, for inspection and logging
    fn options(&self) -> serde_json::Value;

    fn as_any(&self) -> &dyn std::any::Any;

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}
