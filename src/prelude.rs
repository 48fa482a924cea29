//! Prelude module for common iss-globe types and traits
//!
//! `use iss_globe::prelude::*;` brings in what an application needs to wire a
//! globe, a controller, the event bus and the poll loop together.

pub use crate::core::{
    config::{Color, GlobeStyle, TrackerConfig},
    geo::LatLng,
    threshold::should_recenter,
};

pub use crate::animation::{AnimationState, EasingType, PropertyTarget};

pub use crate::globe::{controller::GlobeController, headless::HeadlessGlobe, Interaction};

pub use crate::input::{bus::EventManager, events::MapEvent};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    marker::{MarkerDatum, MarkerTemplate},
    series::Series,
};

pub use crate::traits::{AnimationHandle, EventBus, EventCallback, GlobeSurface, PositionSource};

pub use crate::tracker::api::{IssNow, IssPosition, OpenNotifyClient};

#[cfg(feature = "tokio-runtime")]
pub use crate::runtime::{runtime, spawn, AsyncHandle, AsyncSpawner};

#[cfg(feature = "tokio-runtime")]
pub use crate::tracker::poller::Poller;

pub use crate::{Error as GlobeError, Result};

pub use std::{
    pin::Pin,
    sync::{Arc, Mutex},
    time::Duration,
};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

pub use futures::Future;
