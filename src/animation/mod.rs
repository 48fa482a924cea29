pub mod easing;
pub mod property;

pub use easing::EasingType;
pub use property::{AnimationRef, AnimationState, PropertyAnimation, PropertyTarget};
