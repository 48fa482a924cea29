use crate::{
    core::{
        constants::{MARKER_ICON_HREF, MARKER_ICON_SIZE, MARKER_TITLE},
        geo::LatLng,
    },
    layers::base::{LayerProperties, LayerTrait, LayerType},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalCenter {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalCenter {
    Top,
    Middle,
    Bottom,
}

/// How every point of an image series is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerTemplate {
    pub href: String,
    pub width: u32,
    pub height: u32,
    /// Keep the icon size constant when the globe zooms
    pub non_scaling: bool,
    /// `{title}` is replaced by the datum title
    pub tooltip_text: String,
    pub horizontal_center: HorizontalCenter,
    pub vertical_center: VerticalCenter,
}

impl MarkerTemplate {
    /// The station icon, standing on its coordinate
    pub fn iss() -> Self {
        Self {
            href: MARKER_ICON_HREF.to_string(),
            width: MARKER_ICON_SIZE.0,
            height: MARKER_ICON_SIZE.1,
            non_scaling: true,
            tooltip_text: "{title}".to_string(),
            horizontal_center: HorizontalCenter::Middle,
            vertical_center: VerticalCenter::Bottom,
        }
    }

    /// Offset in pixels from the anchored point to the icon's top-left corner
    pub fn anchor_offset(&self) -> (f64, f64) {
        let (w, h) = (self.width as f64, self.height as f64);
        let x = match self.horizontal_center {
            HorizontalCenter::Left => 0.0,
            HorizontalCenter::Middle => -w / 2.0,
            HorizontalCenter::Right => -w,
        };
        let y = match self.vertical_center {
            VerticalCenter::Top => 0.0,
            VerticalCenter::Middle => -h / 2.0,
            VerticalCenter::Bottom => -h,
        };
        (x, y)
    }

    pub fn tooltip_for(&self, datum: &MarkerDatum) -> String {
        self.tooltip_text.replace("{title}", &datum.title)
    }
}

/// One point of an image series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDatum {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
}

impl MarkerDatum {
    pub fn iss(position: LatLng) -> Self {
        Self {
            latitude: position.lat,
            longitude: position.lng,
            title: MARKER_TITLE.to_string(),
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Image series holding the station marker
pub struct MarkerLayer {
    properties: LayerProperties,
    template: MarkerTemplate,
    data: Vec<MarkerDatum>,
}

impl MarkerLayer {
    pub fn new(id: String, template: MarkerTemplate) -> Self {
        let mut properties = LayerProperties::new(id, LayerType::Image);
        // above polygons and graticule
        properties.z_index = 10;
        Self {
            properties,
            template,
            data: Vec::new(),
        }
    }

    pub fn template(&self) -> &MarkerTemplate {
        &self.template
    }

    pub fn data(&self) -> &[MarkerDatum] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<MarkerDatum>) {
        self.data = data;
    }
}

impl LayerTrait for MarkerLayer {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "href": self.template.href,
            "width": self.template.width,
            "height": self.template.height,
            "nonScaling": self.template.non_scaling,
            "data": self.data,
            "tooltips": self
                .data
                .iter()
                .map(|datum| self.template.tooltip_for(datum))
                .collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iss_template() {
        let template = MarkerTemplate::iss();
        assert_eq!(template.href, "img/iss_icon.png");
        assert_eq!((template.width, template.height), (40, 40));
        assert!(template.non_scaling);
        // bottom-center of the icon sits on the point
        assert_eq!(template.anchor_offset(), (-20.0, -40.0));
    }

    #[test]
    fn test_tooltip_uses_title() {
        let template = MarkerTemplate::iss();
        let datum = MarkerDatum::iss(LatLng::new(51.2, 3.4));
        assert_eq!(template.tooltip_for(&datum), "International Space Station");
        assert_eq!(datum.position(), LatLng::new(51.2, 3.4));
    }

    #[test]
    fn test_set_data_replaces_points() {
        let mut layer = MarkerLayer::new("iss".to_string(), MarkerTemplate::iss());
        assert!(layer.data().is_empty());

        layer.set_data(vec![MarkerDatum::iss(LatLng::new(1.0, 2.0))]);
        layer.set_data(vec![MarkerDatum::iss(LatLng::new(3.0, 4.0))]);
        assert_eq!(layer.data().len(), 1);
        assert_eq!(layer.data()[0].position(), LatLng::new(3.0, 4.0));

        let options = layer.options();
        assert_eq!(options["data"][0]["latitude"], 3.0);
        assert_eq!(options["tooltips"][0], "International Space Station");
    }
}
