//! # iss-globe
//!
//! Tracks the International Space Station on a rotating globe.
//!
//! A poll loop fetches the station's position from a public API and publishes
//! it on an in-process event bus. The [`GlobeController`] listens on that bus,
//! moves the station marker and rotates the globe toward it unless the user is
//! dragging the globe. The rendering widget itself sits behind the
//! [`GlobeSurface`] trait; [`HeadlessGlobe`] is a software model of it.

pub mod animation;
pub mod core;
pub mod globe;
pub mod input;
pub mod layers;
pub mod prelude;
#[cfg(feature = "tokio-runtime")]
pub mod runtime;
pub mod tracker;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{GlobeStyle, TrackerConfig},
    geo::LatLng,
    threshold::should_recenter,
};

pub use globe::{controller::GlobeController, headless::HeadlessGlobe, Interaction};

pub use input::{bus::EventManager, events::MapEvent};

pub use layers::marker::{MarkerDatum, MarkerLayer, MarkerTemplate};

pub use traits::{AnimationHandle, EventBus, GlobeSurface, PositionSource};

pub use tracker::api::{CoordinateValue, IssNow, IssPosition, OpenNotifyClient};

#[cfg(feature = "tokio-runtime")]
pub use tracker::poller::Poller;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GlobeError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GlobeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("No marker has been placed yet")]
    MissingMarker,

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Animation error: {0}")]
    Animation(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = GlobeError;
