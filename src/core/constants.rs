//! Fixed values of the tracker, collected in one place.
//! These are the literals the viewer has always run with.

use std::time::Duration;

/// Position endpoint of the open-notify API.
pub const ISS_NOW_URL: &str = "http://api.open-notify.org/iss-now.json";

/// Time between two poll ticks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1500);

/// Upper bound for a single position request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Re-center the globe once the station drifts this many whole degrees
/// away from the view center on either axis.
pub const RECENTER_THRESHOLD_DEG: i64 = 20;

/// Length of the rotation toward the station.
pub const ROTATION_DURATION: Duration = Duration::from_millis(2000);

/// Station icon, relative to the static asset root.
pub const MARKER_ICON_HREF: &str = "img/iss_icon.png";

/// Station icon size in pixels (width, height).
pub const MARKER_ICON_SIZE: (u32, u32) = (40, 40);

/// Tooltip text of the station marker.
pub const MARKER_TITLE: &str = "International Space Station";

/// Event names on the bus.
pub const EVENT_POINTER_DOWN: &str = "down";
pub const EVENT_POINTER_UP: &str = "up";
pub const EVENT_UPDATE_COORDINATES: &str = "update_cords";

/// Animated properties of the globe view.
pub const PROP_DELTA_LONGITUDE: &str = "deltaLongitude";
pub const PROP_DELTA_LATITUDE: &str = "deltaLatitude";
