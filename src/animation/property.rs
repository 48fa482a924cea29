//! Timed interpolation of named numeric properties.
//!
//! A [`PropertyAnimation`] is driven from outside by [`PropertyAnimation::update`]
//! with the elapsed frame time. [`AnimationRef`] is the shared handle given
//! back to whoever started the animation so it can be stopped later.

use crate::animation::easing::{lerp, EasingType};
use crate::traits::AnimationHandle;
use crate::{GlobeError, Result};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Target value for one animated property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTarget {
    pub property: String,
    pub to: f64,
}

impl PropertyTarget {
    pub fn new(property: impl Into<String>, to: f64) -> Self {
        Self {
            property: property.into(),
            to,
        }
    }
}

/// State of an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    NotStarted,
    Running,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
struct Track {
    property: String,
    from: f64,
    to: f64,
}

#[derive(Debug, Clone)]
pub struct PropertyAnimation {
    id: u64,
    tracks: Vec<Track>,
    duration: Duration,
    easing: EasingType,
    state: AnimationState,
    elapsed: Duration,
}

impl PropertyAnimation {
    /// `from` resolves the current value of each property at creation.
    pub fn new<F>(
        id: u64,
        targets: &[PropertyTarget],
        duration: Duration,
        easing: EasingType,
        from: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<f64>,
    {
        let mut tracks = Vec::with_capacity(targets.len());
        for target in targets {
            if !target.to.is_finite() {
                return Err(GlobeError::Animation(format!(
                    "non-finite target {} for {}",
                    target.to, target.property
                )));
            }
            let start = from(&target.property).ok_or_else(|| {
                GlobeError::Animation(format!("unknown property {}", target.property))
            })?;
            tracks.push(Track {
                property: target.property.clone(),
                from: start,
                to: target.to,
            });
        }

        Ok(Self {
            id,
            tracks,
            duration,
            easing,
            state: AnimationState::NotStarted,
            elapsed: Duration::ZERO,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            AnimationState::NotStarted | AnimationState::Running
        )
    }

    pub fn start(&mut self) {
        if self.state == AnimationState::NotStarted {
            self.state = AnimationState::Running;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Stops the animation where it is. Values already applied stay applied.
    pub fn stop(&mut self) {
        if self.is_active() {
            self.state = AnimationState::Cancelled;
        }
    }

    /// Normalized progress in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return if self.state == AnimationState::NotStarted {
                0.0
            } else {
                1.0
            };
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Advances the animation by `delta` and returns the property values to
    /// apply for this frame. Returns nothing once stopped or completed.
    pub fn update(&mut self, delta: Duration) -> Vec<(String, f64)> {
        match self.state {
            AnimationState::NotStarted => {
                self.start();
                self.step(delta)
            }
            AnimationState::Running => self.step(delta),
            _ => Vec::new(),
        }
    }

    fn step(&mut self, delta: Duration) -> Vec<(String, f64)> {
        self.elapsed += delta;
        let progress = self.progress();
        let eased = self.easing.apply(progress);

        let values = self
            .tracks
            .iter()
            .map(|track| {
                let value = if progress >= 1.0 {
                    track.to
                } else {
                    lerp(track.from, track.to, eased)
                };
                (track.property.clone(), value)
            })
            .collect();

        if progress >= 1.0 {
            self.state = AnimationState::Completed;
        }

        values
    }
}

/// Shared handle to a running [`PropertyAnimation`]
#[derive(Debug, Clone)]
pub struct AnimationRef(Arc<Mutex<PropertyAnimation>>);

impl AnimationRef {
    pub fn new(animation: PropertyAnimation) -> Self {
        Self(Arc::new(Mutex::new(animation)))
    }

    /// Advances the shared animation, see [`PropertyAnimation::update`]
    pub fn update(&self, delta: Duration) -> Vec<(String, f64)> {
        match self.0.lock() {
            Ok(mut animation) => animation.update(delta),
            Err(_) => Vec::new(),
        }
    }

    pub fn state(&self) -> AnimationState {
        self.0
            .lock()
            .map(|animation| animation.state())
            .unwrap_or(AnimationState::Cancelled)
    }
}

impl AnimationHandle for AnimationRef {
    fn id(&self) -> u64 {
        self.0.lock().map(|animation| animation.id()).unwrap_or(0)
    }

    fn stop(&self) {
        if let Ok(mut animation) = self.0.lock() {
            animation.stop();
        }
    }

    fn is_running(&self) -> bool {
        self.0
            .lock()
            .map(|animation| animation.is_active())
            .unwrap_or(false)
    }
}
