use crate::core::config::{GraticuleStyle, PolygonStyle};
use crate::layers::{
    base::{LayerProperties, LayerTrait, LayerType},
    marker::MarkerLayer,
};

/// Country outlines drawn from the bundled world geodata
pub struct PolygonSeries {
    properties: LayerProperties,
    style: PolygonStyle,
    use_geodata: bool,
}

impl PolygonSeries {
    pub fn new(id: String, style: PolygonStyle) -> Self {
        Self {
            properties: LayerProperties::new(id, LayerType::Polygon),
            style,
            use_geodata: true,
        }
    }

    pub fn style(&self) -> &PolygonStyle {
        &self.style
    }

    pub fn uses_geodata(&self) -> bool {
        self.use_geodata
    }
}

impl LayerTrait for PolygonSeries {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "useGeodata": self.use_geodata,
            "tooltipText": self.style.tooltip_text,
            "fill": self.style.fill.to_hex(),
            "stroke": self.style.stroke.to_hex(),
            "strokeWidth": self.style.stroke_width,
            "hoverFill": self.style.hover_fill.to_hex(),
        })
    }
}

/// Latitude/longitude grid lines
pub struct GraticuleSeries {
    properties: LayerProperties,
    style: GraticuleStyle,
}

impl GraticuleSeries {
    pub fn new(id: String, style: GraticuleStyle) -> Self {
        Self {
            properties: LayerProperties::new(id, LayerType::Graticule),
            style,
        }
    }

    pub fn style(&self) -> &GraticuleStyle {
        &self.style
    }
}

impl LayerTrait for GraticuleSeries {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "stroke": self.style.stroke.to_hex(),
            "strokeOpacity": self.style.stroke_opacity,
            "fitExtent": self.style.fit_extent,
        })
    }
}

/// A series handed to [`GlobeSurface::push_series`](crate::traits::GlobeSurface::push_series)
pub enum Series {
    Polygon(PolygonSeries),
    Graticule(GraticuleSeries),
    Image(MarkerLayer),
}

impl Series {
    pub fn id(&self) -> &str {
        match self {
            Series::Polygon(series) => series.id(),
            Series::Graticule(series) => series.id(),
            Series::Image(layer) => layer.id(),
        }
    }

    pub fn into_layer(self) -> Box<dyn LayerTrait> {
        match self {
            Series::Polygon(series) => Box::new(series),
            Series::Graticule(series) => Box::new(series),
            Series::Image(layer) => Box::new(layer),
        }
    }
}
