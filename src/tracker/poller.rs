//! Fixed-interval poll loop
//!
//! Each tick runs as its own task: fetch the position, then publish it as an
//! `update_cords` event. A failed fetch is logged and the tick dropped; the
//! next tick fires on schedule regardless. A tick that comes due while the
//! previous one is still waiting on the network is skipped, so position
//! updates are never published out of order.

use crate::{
    core::config::TrackerConfig,
    input::events::MapEvent,
    runtime::{self, AsyncHandle},
    traits::{EventBus, PositionSource},
    Result,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// What a call to [`Poller::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Started,
    /// The previous tick was still in flight
    Skipped,
}

#[derive(Debug, Default)]
struct Counters {
    started: AtomicU64,
    skipped: AtomicU64,
    published: AtomicU64,
    failed: AtomicU64,
}

/// Tick counters since the poller was built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollStats {
    pub started: u64,
    pub skipped: u64,
    pub published: u64,
    pub failed: u64,
}

pub struct Poller {
    source: Arc<dyn PositionSource>,
    bus: Arc<dyn EventBus>,
    interval: Duration,
    in_flight: Mutex<Option<Box<dyn AsyncHandle>>>,
    counters: Arc<Counters>,
}

impl Poller {
    pub fn new(
        source: Arc<dyn PositionSource>,
        bus: Arc<dyn EventBus>,
        config: &TrackerConfig,
    ) -> Self {
        Self {
            source,
            bus,
            interval: config.poll_interval,
            in_flight: Mutex::new(None),
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn stats(&self) -> PollStats {
        PollStats {
            started: self.counters.started.load(Ordering::Relaxed),
            skipped: self.counters.skipped.load(Ordering::Relaxed),
            published: self.counters.published.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
        }
    }

    /// Runs one poll tick in the background
    pub fn tick(&self) -> TickOutcome {
        let mut in_flight = match self.in_flight.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if in_flight.as_ref().is_some_and(|handle| !handle.is_finished()) {
            self.counters.skipped.fetch_add(1, Ordering::Relaxed);
            log::debug!("previous position request still in flight, skipping tick");
            return TickOutcome::Skipped;
        }

        self.counters.started.fetch_add(1, Ordering::Relaxed);
        let source = self.source.clone();
        let bus = self.bus.clone();
        let counters = self.counters.clone();

        *in_flight = Some(runtime::spawn(async move {
            match poll_once(source.as_ref(), bus.as_ref()).await {
                Ok(()) => {
                    counters.published.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => {
                    counters.failed.fetch_add(1, Ordering::Relaxed);
                    log::warn!("position poll failed, skipping tick: {}", e);
                }
            }
        }));

        TickOutcome::Started
    }

    /// Ticks forever, first tick one interval from now
    pub async fn run(self: Arc<Self>) {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        log::info!("polling station position every {:?}", self.interval);

        loop {
            ticker.tick().await;
            self.tick();
        }
    }

    /// Starts [`run`](Self::run) on the runtime. Cancelling the handle stops
    /// the loop; a tick already in flight still completes.
    pub fn spawn(self: Arc<Self>) -> Box<dyn AsyncHandle> {
        runtime::spawn(self.run())
    }
}

/// Fetches once and publishes the result
pub async fn poll_once(source: &dyn PositionSource, bus: &dyn EventBus) -> Result<()> {
    let now = source.fetch().await?;
    if now.iss_position.is_none() {
        log::debug!("response without position (message: {:?})", now.message);
    }
    bus.publish(&MapEvent::UpdateCoordinates(now.iss_position));
    Ok(())
}
