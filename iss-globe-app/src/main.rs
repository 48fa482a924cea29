use anyhow::Context;
use iss_globe::{
    EventManager, GlobeController, GlobeStyle, GlobeSurface, HeadlessGlobe, LatLng, OpenNotifyClient,
    Poller, TrackerConfig,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// Headless ISS globe: polls the station position and logs what the globe does
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrackerConfig::from_env().context("reading configuration")?;
    let style = GlobeStyle::default();

    let controller = GlobeController::new(
        HeadlessGlobe::new().with_easing(config.rotation_easing),
        &style,
        &config,
    )
    .context("setting up the globe")?;
    let controller = Arc::new(Mutex::new(controller));

    let bus = Arc::new(EventManager::new());
    GlobeController::attach(&controller, bus.as_ref());

    let client = OpenNotifyClient::new(&config).context("building the HTTP client")?;
    log::info!("tracking the ISS from {}", client.endpoint());

    let poller = Arc::new(Poller::new(Arc::new(client), bus, &config));
    let poll_handle = poller.clone().spawn();

    let mut frames = tokio::time::interval(FRAME);
    let mut last_marker: Option<LatLng> = None;
    let mut was_animating = false;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = frames.tick() => {
                let mut controller = match controller.lock() {
                    Ok(guard) => guard,
                    Err(_) => anyhow::bail!("controller lock poisoned"),
                };
                let animating = controller.surface_mut().advance(FRAME);

                let marker = controller.marker_position();
                if marker != last_marker {
                    if let Some(position) = marker {
                        log::info!(
                            "ISS at {}, view center {}",
                            position,
                            controller.surface().center_geo_point()
                        );
                    }
                    last_marker = marker;
                }
                if was_animating && !animating {
                    log::info!("globe settled on {}", controller.surface().center_geo_point());
                    log::debug!("{}", controller.surface().snapshot());
                }
                was_animating = animating;
            }
            _ = &mut shutdown => {
                log::info!("shutting down");
                break;
            }
        }
    }

    poll_handle.cancel();
    let stats = poller.stats();
    log::info!(
        "{} polls, {} published, {} failed, {} skipped",
        stats.started,
        stats.published,
        stats.failed,
        stats.skipped
    );
    Ok(())
}
