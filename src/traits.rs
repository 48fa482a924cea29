//! Trait seams between the tracker and its collaborators
//!
//! The globe widget, the event bus and the position API each sit behind a
//! trait so the controller and the poll loop can be driven by test doubles.

use crate::{
    animation::PropertyTarget,
    core::{
        config::{BackgroundStyle, ChartOptions},
        geo::LatLng,
    },
    input::events::MapEvent,
    layers::{marker::MarkerDatum, series::Series},
    tracker::api::IssNow,
    Result,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// The globe rendering widget
///
/// Only the handful of calls the controller needs: chart setup, series
/// creation, the marker data, property animation and the view center.
pub trait GlobeSurface: Send {
    /// Applies chart level options and the background (ocean) fill
    fn apply_chart_options(&mut self, options: &ChartOptions, background: &BackgroundStyle);

    /// Adds a series on top of the existing ones and returns its id
    fn push_series(&mut self, series: Series) -> Result<String>;

    /// Replaces the data points of an image series
    fn set_image_data(&mut self, series_id: &str, data: Vec<MarkerDatum>) -> Result<()>;

    /// Current data points of an image series
    fn image_data(&self, series_id: &str) -> Option<Vec<MarkerDatum>>;

    /// Starts animating view properties toward the given targets
    fn animate(
        &mut self,
        targets: &[PropertyTarget],
        duration: Duration,
    ) -> Result<Box<dyn AnimationHandle>>;

    /// Latitude/longitude currently in the middle of the rendered globe
    fn center_geo_point(&self) -> LatLng;
}

/// Handle to an animation started by a [`GlobeSurface`]
pub trait AnimationHandle: Send + Sync {
    fn id(&self) -> u64;

    /// Stops the animation where it is
    fn stop(&self);

    fn is_running(&self) -> bool;
}

pub type EventCallback = Arc<dyn Fn(&MapEvent) + Send + Sync>;

/// In-process publish/subscribe
pub trait EventBus: Send + Sync {
    /// Invokes every subscriber of the event's type right away, in
    /// registration order. Does nothing when there are no subscribers.
    fn publish(&self, event: &MapEvent);

    fn subscribe(&self, event_type: &str, callback: EventCallback);
}

/// Where the station's position comes from
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn fetch(&self) -> Result<IssNow>;
}
