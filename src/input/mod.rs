pub mod bus;
pub mod events;

pub use bus::EventManager;
pub use events::MapEvent;
