/// Easing curves for property animations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingType {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    Smooth,
}

impl EasingType {
    /// Apply easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseIn => t * t * t,
            EasingType::EaseOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingType::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            // smooth step (3t^2 - 2t^3)
            EasingType::Smooth => t * t * (3.0 - 2.0 * t),
        }
    }
}

pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            EasingType::Linear,
            EasingType::EaseIn,
            EasingType::EaseOut,
            EasingType::EaseInOut,
            EasingType::Smooth,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_easing_shapes() {
        assert_eq!(EasingType::Linear.apply(0.25), 0.25);
        assert!(EasingType::EaseOut.apply(0.5) > 0.5);
        assert!(EasingType::EaseIn.apply(0.5) < 0.5);
        assert_eq!(EasingType::Smooth.apply(0.5), 0.5);
        // out of range input is clamped
        assert_eq!(EasingType::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_default_easing_is_ease_out() {
        assert_eq!(EasingType::default(), EasingType::EaseOut);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, -51.2, 0.5), -25.6);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    }
}
