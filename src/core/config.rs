//! Configuration of the tracker and of the globe's look
//!
//! `TrackerConfig` carries the fixed timing values of the poll loop and the
//! recentering rule. `GlobeStyle` carries the chart options and the colours
//! pushed to the globe surface when the controller is built.

use crate::animation::easing::EasingType;
use crate::core::constants::{
    ISS_NOW_URL, POLL_INTERVAL, RECENTER_THRESHOLD_DEG, REQUEST_TIMEOUT, ROTATION_DURATION,
};
use crate::{GlobeError, Result};
use std::time::Duration;

pub const ENV_ENDPOINT: &str = "ISS_GLOBE_ENDPOINT";
pub const ENV_POLL_MS: &str = "ISS_GLOBE_POLL_MS";
pub const ENV_TIMEOUT_MS: &str = "ISS_GLOBE_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub endpoint: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub recenter_threshold_deg: i64,
    pub rotation_duration: Duration,
    pub rotation_easing: EasingType,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            endpoint: ISS_NOW_URL.to_string(),
            poll_interval: POLL_INTERVAL,
            request_timeout: REQUEST_TIMEOUT,
            recenter_threshold_deg: RECENTER_THRESHOLD_DEG,
            rotation_duration: ROTATION_DURATION,
            rotation_easing: EasingType::EaseOut,
        }
    }
}

impl TrackerConfig {
    /// Defaults, with endpoint, poll interval and request timeout
    /// overridable from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            if endpoint.trim().is_empty() {
                return Err(GlobeError::Config(format!("{} is empty", ENV_ENDPOINT)));
            }
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(ms) = lookup(ENV_POLL_MS) {
            config.poll_interval = parse_millis(ENV_POLL_MS, &ms)?;
        }
        if let Some(ms) = lookup(ENV_TIMEOUT_MS) {
            config.request_timeout = parse_millis(ENV_TIMEOUT_MS, &ms)?;
        }

        Ok(config)
    }
}

fn parse_millis(key: &str, value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(GlobeError::Config(format!("{} must be positive", key))),
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(e) => Err(GlobeError::Config(format!("{}={:?}: {}", key, value, e))),
    }
}

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(GlobeError::Config(format!("invalid colour {:?}", hex)));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| GlobeError::Config(format!("invalid colour {:?}: {}", hex, e)))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Moves each channel toward white (positive amount) or black
    /// (negative amount). `amount` is a fraction in [-1, 1].
    pub fn brighten(&self, amount: f32) -> Self {
        let amount = amount.clamp(-1.0, 1.0);
        let shift = |c: u8| {
            let c = c as f32;
            let room = if amount < 0.0 { c } else { 255.0 - c };
            (c + room * amount).round().clamp(0.0, 255.0) as u8
        };
        Self::rgb(shift(self.r), shift(self.g), shift(self.b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Orthographic,
}

/// What a drag on the chart does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanBehavior {
    RotateLongLat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub projection: Projection,
    pub pan_behavior: PanBehavior,
    /// top, right, bottom, left
    pub padding: [f32; 4],
    pub series_container_draggable: bool,
    pub max_zoom_level: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            projection: Projection::Orthographic,
            pan_behavior: PanBehavior::RotateLongLat,
            padding: [10.0; 4],
            series_container_draggable: false,
            max_zoom_level: 1.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonStyle {
    pub tooltip_text: String,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
    pub hover_fill: Color,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            tooltip_text: "{name}".to_string(),
            fill: Color::rgb(0x47, 0xc7, 0x8a),
            stroke: Color::rgb(0x45, 0x4a, 0x58),
            stroke_width: 0.2,
            // first colour of the chart palette, darkened
            hover_fill: Color::rgb(0x67, 0xb7, 0xdc).brighten(-0.5),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraticuleStyle {
    pub stroke: Color,
    pub stroke_opacity: f32,
    pub fit_extent: bool,
}

impl Default for GraticuleStyle {
    fn default() -> Self {
        Self {
            stroke: Color::rgb(0xfd, 0xfe, 0xfe),
            stroke_opacity: 0.08,
            fit_extent: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStyle {
    pub fill: Color,
    pub fill_opacity: f32,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            fill: Color::rgb(0x5d, 0xad, 0xe2),
            fill_opacity: 0.5,
        }
    }
}

/// Everything the controller pushes to the surface at construction
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlobeStyle {
    pub chart: ChartOptions,
    pub land: PolygonStyle,
    pub graticule: GraticuleStyle,
    pub ocean: BackgroundStyle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_tracker_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.poll_interval, Duration::from_millis(1500));
        assert_eq!(config.recenter_threshold_deg, 20);
        assert_eq!(config.rotation_duration, Duration::from_millis(2000));
        assert_eq!(config.endpoint, "http://api.open-notify.org/iss-now.json");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_ENDPOINT, "http://localhost:9000/iss-now.json"),
            (ENV_POLL_MS, "250"),
        ]
        .into_iter()
        .collect();

        let config =
            TrackerConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/iss-now.json");
        assert_eq!(config.poll_interval, Duration::from_millis(250));
        assert_eq!(config.request_timeout, REQUEST_TIMEOUT);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let zero = TrackerConfig::from_lookup(|key| (key == ENV_POLL_MS).then(|| "0".to_string()));
        assert!(matches!(zero, Err(GlobeError::Config(_))));

        let junk =
            TrackerConfig::from_lookup(|key| (key == ENV_TIMEOUT_MS).then(|| "soon".to_string()));
        assert!(matches!(junk, Err(GlobeError::Config(_))));
    }

    #[test]
    fn test_color_hex() {
        let color = Color::from_hex("#47c78a").unwrap();
        assert_eq!(color, Color::rgb(0x47, 0xc7, 0x8a));
        assert_eq!(color.to_hex(), "#47c78a");
        assert_eq!(Color::from_hex("FDFEFE").unwrap(), Color::rgb(253, 254, 254));
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_color_brighten() {
        let color = Color::rgb(100, 200, 0);
        assert_eq!(color.brighten(-0.5), Color::rgb(50, 100, 0));
        assert_eq!(color.brighten(1.0), Color::rgb(255, 255, 255));
        assert_eq!(color.brighten(0.0), color);
    }

    #[test]
    fn test_default_style() {
        let style = GlobeStyle::default();
        assert_eq!(style.chart.projection, Projection::Orthographic);
        assert_eq!(style.chart.max_zoom_level, 1.7);
        assert!(!style.chart.series_container_draggable);
        assert_eq!(style.land.tooltip_text, "{name}");
        assert_eq!(style.ocean.fill.to_hex(), "#5dade2");
        assert!(!style.graticule.fit_extent);
    }
}
