pub mod controller;
pub mod headless;

pub use controller::GlobeController;
pub use headless::HeadlessGlobe;

/// Whether the user is holding the globe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging,
}
