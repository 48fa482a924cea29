//! Owns the globe surface and reacts to bus events.
//!
//! Every position update moves the station marker. The globe is rotated
//! toward the station only while the user is not dragging it and only when
//! the station has drifted far enough from the view center. Pressing the
//! pointer stops a rotation in progress so the globe never fights the user.

use crate::{
    animation::PropertyTarget,
    core::{
        config::{GlobeStyle, TrackerConfig},
        constants::{PROP_DELTA_LATITUDE, PROP_DELTA_LONGITUDE},
        geo::LatLng,
        threshold::should_recenter,
    },
    globe::Interaction,
    input::events::MapEvent,
    layers::{
        marker::{MarkerDatum, MarkerLayer, MarkerTemplate},
        series::{GraticuleSeries, PolygonSeries, Series},
    },
    traits::{AnimationHandle, EventBus, GlobeSurface},
    GlobeError, Result,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const COUNTRIES_SERIES_ID: &str = "countries";
const GRATICULE_SERIES_ID: &str = "graticule";
const MARKER_SERIES_ID: &str = "iss";

pub struct GlobeController<S: GlobeSurface> {
    surface: S,
    interaction: Interaction,
    /// Last rotation started; at most one is ever live
    animation: Option<Box<dyn AnimationHandle>>,
    /// Image series holding the marker, created on first placement
    marker: Option<String>,
    threshold_deg: i64,
    rotation_duration: Duration,
    rotations_started: u64,
}

impl<S: GlobeSurface> GlobeController<S> {
    /// Sets up the chart and the static series on `surface`
    pub fn new(mut surface: S, style: &GlobeStyle, config: &TrackerConfig) -> Result<Self> {
        surface.apply_chart_options(&style.chart, &style.ocean);
        surface.push_series(Series::Polygon(PolygonSeries::new(
            COUNTRIES_SERIES_ID.to_string(),
            style.land.clone(),
        )))?;
        surface.push_series(Series::Graticule(GraticuleSeries::new(
            GRATICULE_SERIES_ID.to_string(),
            style.graticule.clone(),
        )))?;

        Ok(Self {
            surface,
            interaction: Interaction::Idle,
            animation: None,
            marker: None,
            threshold_deg: config.recenter_threshold_deg,
            rotation_duration: config.rotation_duration,
            rotations_started: 0,
        })
    }

    /// Subscribes the controller to pointer and position events on `bus`
    pub fn attach(controller: &Arc<Mutex<Self>>, bus: &dyn EventBus)
    where
        S: 'static,
    {
        let target = Arc::downgrade(controller);
        let callback: crate::traits::EventCallback = Arc::new(move |event: &MapEvent| {
            let Some(controller) = target.upgrade() else {
                return;
            };
            match controller.lock() {
                Ok(mut controller) => controller.handle_event(event),
                Err(_) => log::error!("controller lock poisoned, dropping {:?}", event),
            };
        });

        for event_type in [
            MapEvent::PointerDown.event_type(),
            MapEvent::PointerUp.event_type(),
            MapEvent::UpdateCoordinates(None).event_type(),
        ] {
            bus.subscribe(event_type, callback.clone());
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// True while the user is dragging the globe
    pub fn is_active(&self) -> bool {
        self.interaction == Interaction::Dragging
    }

    pub fn has_live_animation(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| a.is_running())
    }

    /// Number of rotations started over the controller's life
    pub fn rotations_started(&self) -> u64 {
        self.rotations_started
    }

    /// Where the marker currently is, if placed
    pub fn marker_position(&self) -> Option<LatLng> {
        self.marker_datum().map(|datum| datum.position())
    }

    pub fn pointer_down(&mut self) {
        self.interaction = Interaction::Dragging;
        self.stop_animation();
    }

    pub fn pointer_up(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Dispatches a bus event. Bad payloads are logged and dropped.
    pub fn handle_event(&mut self, event: &MapEvent) {
        match event {
            MapEvent::PointerDown => self.pointer_down(),
            MapEvent::PointerUp => self.pointer_up(),
            MapEvent::UpdateCoordinates(None) => {
                log::debug!("update without coordinates, ignoring");
            }
            MapEvent::UpdateCoordinates(Some(payload)) => {
                let result = payload
                    .to_lat_lng()
                    .and_then(|position| self.update_position(position));
                if let Err(e) = result {
                    log::warn!("dropping position update: {}", e);
                }
            }
        }
    }

    /// Moves the marker and re-centers the globe if it is idle and the
    /// station has drifted far enough
    pub fn update_position(&mut self, position: LatLng) -> Result<()> {
        if !position.is_valid() {
            return Err(GlobeError::InvalidCoordinates(position.to_string()));
        }
        if let Some(previous) = self.marker_position() {
            log::debug!(
                "station moved {:.1} km to {}",
                previous.distance_to(&position) / 1000.0,
                position
            );
        }
        self.place_marker(position)?;

        if !self.is_active() && self.should_update(&position) {
            self.rotate_to()?;
        }
        Ok(())
    }

    /// Whether `update` is far enough from the view center to re-center
    pub fn should_update(&self, update: &LatLng) -> bool {
        should_recenter(&self.surface.center_geo_point(), update, self.threshold_deg)
    }

    /// Puts the single marker at `position`, creating the series on first use
    pub fn place_marker(&mut self, position: LatLng) -> Result<()> {
        let series_id = match &self.marker {
            Some(id) => id.clone(),
            None => {
                let id = self.surface.push_series(Series::Image(MarkerLayer::new(
                    MARKER_SERIES_ID.to_string(),
                    MarkerTemplate::iss(),
                )))?;
                log::info!("station marker created at {}", position);
                self.marker = Some(id.clone());
                id
            }
        };

        self.surface
            .set_image_data(&series_id, vec![MarkerDatum::iss(position)])
    }

    /// Starts rotating the globe so the marker ends up in the center,
    /// replacing any rotation in progress
    pub fn rotate_to(&mut self) -> Result<()> {
        let target = self
            .marker_datum()
            .ok_or(GlobeError::MissingMarker)?
            .position();

        self.stop_animation();
        let handle = self.surface.animate(
            &[
                PropertyTarget::new(PROP_DELTA_LONGITUDE, -target.lng),
                PropertyTarget::new(PROP_DELTA_LATITUDE, -target.lat),
            ],
            self.rotation_duration,
        )?;
        log::info!("re-centering globe on {}", target);

        self.animation = Some(handle);
        self.rotations_started += 1;
        Ok(())
    }

    fn marker_datum(&self) -> Option<MarkerDatum> {
        let id = self.marker.as_ref()?;
        self.surface.image_data(id)?.into_iter().next()
    }

    fn stop_animation(&mut self) {
        if let Some(animation) = self.animation.take() {
            if animation.is_running() {
                log::debug!("stopping animation {}", animation.id());
                animation.stop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::headless::HeadlessGlobe;
    use crate::tracker::api::IssPosition;

    fn controller() -> GlobeController<HeadlessGlobe> {
        GlobeController::new(
            HeadlessGlobe::new(),
            &GlobeStyle::default(),
            &TrackerConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_construction_pushes_static_series() {
        let controller = controller();
        let ids: Vec<&str> = controller
            .surface()
            .layers()
            .layers()
            .iter()
            .map(|l| l.id())
            .collect();
        assert_eq!(ids, vec!["countries", "graticule"]);
        assert_eq!(controller.interaction(), Interaction::Idle);
        assert!(controller.marker_position().is_none());
    }

    #[test]
    fn test_place_marker_is_idempotent() {
        let mut controller = controller();
        let position = LatLng::new(12.0, 34.0);
        controller.place_marker(position).unwrap();
        controller.place_marker(position).unwrap();

        let data = controller.surface().image_data("iss").unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].position(), position);
        // one marker series in total
        assert_eq!(controller.surface().layers().len(), 3);
    }

    #[test]
    fn test_rotate_without_marker_is_an_error() {
        let mut controller = controller();
        assert!(matches!(
            controller.rotate_to(),
            Err(GlobeError::MissingMarker)
        ));
        assert!(!controller.has_live_animation());
        assert_eq!(controller.rotations_started(), 0);
    }

    #[test]
    fn test_pointer_down_stops_rotation() {
        let mut controller = controller();
        controller.update_position(LatLng::new(51.2, 3.4)).unwrap();
        assert!(controller.has_live_animation());

        controller.pointer_down();
        assert!(controller.is_active());
        assert!(!controller.has_live_animation());

        controller.pointer_up();
        assert!(!controller.is_active());
    }

    #[test]
    fn test_small_drift_does_not_rotate() {
        let mut controller = controller();
        controller.update_position(LatLng::new(19.9, -19.9)).unwrap();
        assert_eq!(controller.rotations_started(), 0);
        assert_eq!(controller.marker_position(), Some(LatLng::new(19.9, -19.9)));
    }

    #[test]
    fn test_bad_payload_is_dropped() {
        let mut controller = controller();
        controller.handle_event(&MapEvent::UpdateCoordinates(Some(IssPosition::new(
            "north", "3.4",
        ))));
        controller.handle_event(&MapEvent::UpdateCoordinates(None));
        assert!(controller.marker_position().is_none());
        assert_eq!(controller.surface().layers().len(), 2);
    }
}
