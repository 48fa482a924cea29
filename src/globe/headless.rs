//! Software model of the globe widget
//!
//! Keeps the chart options, the pushed series and the view rotation, and runs
//! property animations when [`HeadlessGlobe::advance`] is called with the
//! frame time. Nothing is drawn; the app binary logs the state instead.

use crate::{
    animation::{AnimationRef, EasingType, PropertyAnimation, PropertyTarget},
    core::{
        config::{BackgroundStyle, ChartOptions},
        constants::{PROP_DELTA_LATITUDE, PROP_DELTA_LONGITUDE},
        geo::LatLng,
    },
    layers::{manager::LayerManager, marker::MarkerDatum, marker::MarkerLayer, series::Series},
    traits::{AnimationHandle, GlobeSurface},
    GlobeError, Result,
};
use std::time::Duration;

const MIN_ZOOM_LEVEL: f64 = 1.0;

pub struct HeadlessGlobe {
    options: ChartOptions,
    background: BackgroundStyle,
    layers: LayerManager,
    /// Rotation of the globe; the view center is its negation
    delta_longitude: f64,
    delta_latitude: f64,
    zoom_level: f64,
    easing: EasingType,
    animations: Vec<AnimationRef>,
    next_animation_id: u64,
}

impl HeadlessGlobe {
    pub fn new() -> Self {
        Self {
            options: ChartOptions::default(),
            background: BackgroundStyle::default(),
            layers: LayerManager::new(),
            delta_longitude: 0.0,
            delta_latitude: 0.0,
            zoom_level: MIN_ZOOM_LEVEL,
            easing: EasingType::default(),
            animations: Vec::new(),
            next_animation_id: 1,
        }
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn background(&self) -> &BackgroundStyle {
        &self.background
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    pub fn delta_longitude(&self) -> f64 {
        self.delta_longitude
    }

    pub fn delta_latitude(&self) -> f64 {
        self.delta_latitude
    }

    /// Sets the rotation directly, as a user drag would
    pub fn set_rotation(&mut self, delta_longitude: f64, delta_latitude: f64) {
        self.delta_longitude = delta_longitude;
        self.delta_latitude = delta_latitude;
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    /// Zooms within [1, max_zoom_level]
    pub fn set_zoom_level(&mut self, zoom_level: f64) {
        self.zoom_level = zoom_level.clamp(MIN_ZOOM_LEVEL, self.options.max_zoom_level);
    }

    /// Number of animations still running
    pub fn running_animations(&self) -> usize {
        self.animations.iter().filter(|a| a.is_running()).count()
    }

    /// Advances all animations by `delta`. Returns true while any is running.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let mut updates = Vec::new();
        for animation in &self.animations {
            updates.extend(animation.update(delta));
        }
        for (property, value) in updates {
            self.write_property(&property, value);
        }

        self.animations.retain(|a| a.is_running());
        !self.animations.is_empty()
    }

    /// Chart state as JSON, for logging
    pub fn snapshot(&self) -> serde_json::Value {
        let center = self.center_geo_point();
        serde_json::json!({
            "center": { "latitude": center.lat, "longitude": center.lng },
            "deltaLongitude": self.delta_longitude,
            "deltaLatitude": self.delta_latitude,
            "zoomLevel": self.zoom_level,
            "animating": self.running_animations(),
            "series": self
                .layers
                .layers()
                .iter()
                .map(|layer| serde_json::json!({
                    "id": layer.id(),
                    "type": layer.layer_type().to_string(),
                    "options": layer.options(),
                }))
                .collect::<Vec<_>>(),
        })
    }

    fn read_property(&self, property: &str) -> Option<f64> {
        match property {
            PROP_DELTA_LONGITUDE => Some(self.delta_longitude),
            PROP_DELTA_LATITUDE => Some(self.delta_latitude),
            _ => None,
        }
    }

    fn write_property(&mut self, property: &str, value: f64) {
        match property {
            PROP_DELTA_LONGITUDE => self.delta_longitude = value,
            PROP_DELTA_LATITUDE => self.delta_latitude = value,
            other => log::warn!("ignoring write to unknown property {}", other),
        }
    }
}

impl Default for HeadlessGlobe {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobeSurface for HeadlessGlobe {
    fn apply_chart_options(&mut self, options: &ChartOptions, background: &BackgroundStyle) {
        self.options = options.clone();
        self.background = background.clone();
        self.set_zoom_level(self.zoom_level);
    }

    fn push_series(&mut self, series: Series) -> Result<String> {
        let id = series.id().to_string();
        self.layers.add_layer(series.into_layer())?;
        log::debug!("pushed series {}", id);
        Ok(id)
    }

    fn set_image_data(&mut self, series_id: &str, data: Vec<MarkerDatum>) -> Result<()> {
        let layer = self
            .layers
            .get_as_mut::<MarkerLayer>(series_id)
            .ok_or_else(|| GlobeError::Layer(format!("no image series {}", series_id)))?;
        layer.set_data(data);
        Ok(())
    }

    fn image_data(&self, series_id: &str) -> Option<Vec<MarkerDatum>> {
        self.layers
            .get_as::<MarkerLayer>(series_id)
            .map(|layer| layer.data().to_vec())
    }

    fn animate(
        &mut self,
        targets: &[PropertyTarget],
        duration: Duration,
    ) -> Result<Box<dyn AnimationHandle>> {
        let id = self.next_animation_id;
        let animation = PropertyAnimation::new(id, targets, duration, self.easing, |property| {
            self.read_property(property)
        })?;
        self.next_animation_id += 1;

        let handle = AnimationRef::new(animation);
        self.animations.push(handle.clone());
        log::debug!("animation {} started for {:?}", id, duration);
        Ok(Box::new(handle))
    }

    fn center_geo_point(&self) -> LatLng {
        LatLng::new(
            LatLng::clamp_lat(-self.delta_latitude),
            LatLng::wrap_lng(-self.delta_longitude),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::marker::MarkerTemplate;

    fn rotation_to(lat: f64, lng: f64) -> Vec<PropertyTarget> {
        vec![
            PropertyTarget::new(PROP_DELTA_LONGITUDE, -lng),
            PropertyTarget::new(PROP_DELTA_LATITUDE, -lat),
        ]
    }

    #[test]
    fn test_center_is_negated_rotation() {
        let mut globe = HeadlessGlobe::new();
        assert_eq!(globe.center_geo_point(), LatLng::new(0.0, 0.0));

        globe.set_rotation(-3.4, -51.2);
        assert_eq!(globe.center_geo_point(), LatLng::new(51.2, 3.4));

        globe.set_rotation(200.0, 0.0);
        assert_eq!(globe.center_geo_point().lng, 160.0);
    }

    #[test]
    fn test_animation_moves_center() {
        let mut globe = HeadlessGlobe::new().with_easing(EasingType::Linear);
        let handle = globe
            .animate(&rotation_to(51.2, 3.4), Duration::from_millis(2000))
            .unwrap();
        assert!(handle.is_running());

        assert!(globe.advance(Duration::from_millis(1000)));
        assert_eq!(globe.delta_latitude(), -25.6);

        assert!(!globe.advance(Duration::from_millis(1000)));
        assert!(!handle.is_running());
        assert_eq!(globe.center_geo_point(), LatLng::new(51.2, 3.4));
    }

    #[test]
    fn test_configured_easing_shapes_the_rotation() {
        let config = crate::core::config::TrackerConfig {
            rotation_easing: EasingType::EaseIn,
            ..Default::default()
        };
        let mut eased = HeadlessGlobe::new().with_easing(config.rotation_easing);
        let mut linear = HeadlessGlobe::new().with_easing(EasingType::Linear);
        for globe in [&mut eased, &mut linear] {
            globe
                .animate(&rotation_to(40.0, 0.0), Duration::from_millis(2000))
                .unwrap();
            globe.advance(Duration::from_millis(1000));
        }
        // ease-in lags behind linear at the halfway point
        assert_eq!(linear.delta_latitude(), -20.0);
        assert_eq!(eased.delta_latitude(), -5.0);
    }

    #[test]
    fn test_stopped_animation_freezes_rotation() {
        let mut globe = HeadlessGlobe::new().with_easing(EasingType::Linear);
        let handle = globe
            .animate(&rotation_to(40.0, 0.0), Duration::from_millis(2000))
            .unwrap();
        globe.advance(Duration::from_millis(500));
        handle.stop();

        assert!(!globe.advance(Duration::from_millis(500)));
        assert_eq!(globe.delta_latitude(), -10.0);
        assert_eq!(globe.running_animations(), 0);
    }

    #[test]
    fn test_unknown_property_cannot_be_animated() {
        let mut globe = HeadlessGlobe::new();
        let result = globe.animate(
            &[PropertyTarget::new("rotationX", 1.0)],
            Duration::from_millis(10),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_image_data_requires_image_series() {
        let mut globe = HeadlessGlobe::new();
        assert!(globe
            .set_image_data("iss", vec![MarkerDatum::iss(LatLng::new(1.0, 2.0))])
            .is_err());

        let id = globe
            .push_series(Series::Image(MarkerLayer::new(
                "iss".to_string(),
                MarkerTemplate::iss(),
            )))
            .unwrap();
        globe
            .set_image_data(&id, vec![MarkerDatum::iss(LatLng::new(1.0, 2.0))])
            .unwrap();
        assert_eq!(globe.image_data(&id).unwrap()[0].latitude, 1.0);
    }

    #[test]
    fn test_zoom_is_clamped_to_chart_options() {
        let mut globe = HeadlessGlobe::new();
        globe.apply_chart_options(&ChartOptions::default(), &BackgroundStyle::default());
        globe.set_zoom_level(5.0);
        assert_eq!(globe.zoom_level(), 1.7);
        globe.set_zoom_level(0.2);
        assert_eq!(globe.zoom_level(), 1.0);
    }

    #[test]
    fn test_snapshot_lists_series() {
        let mut globe = HeadlessGlobe::new();
        globe
            .push_series(Series::Image(MarkerLayer::new(
                "iss".to_string(),
                MarkerTemplate::iss(),
            )))
            .unwrap();
        let snapshot = globe.snapshot();
        assert_eq!(snapshot["series"][0]["id"], "iss");
        assert_eq!(snapshot["series"][0]["type"], "image");
        assert_eq!(snapshot["center"]["latitude"], 0.0);
    }
}
