pub mod api;
#[cfg(feature = "tokio-runtime")]
pub mod poller;

pub use api::{CoordinateValue, IssNow, IssPosition, OpenNotifyClient};
#[cfg(feature = "tokio-runtime")]
pub use poller::{PollStats, Poller, TickOutcome};
