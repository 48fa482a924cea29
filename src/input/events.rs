use crate::core::constants::{EVENT_POINTER_DOWN, EVENT_POINTER_UP, EVENT_UPDATE_COORDINATES};
use crate::tracker::api::IssPosition;

/// Events carried by the bus
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Pointer pressed on the globe
    PointerDown,
    /// Pointer released
    PointerUp,
    /// A fresh station position, as received from the API. `None` when the
    /// response had no position.
    UpdateCoordinates(Option<IssPosition>),
}

impl MapEvent {
    /// Name subscribers register under
    pub fn event_type(&self) -> &'static str {
        match self {
            MapEvent::PointerDown => EVENT_POINTER_DOWN,
            MapEvent::PointerUp => EVENT_POINTER_UP,
            MapEvent::UpdateCoordinates(_) => EVENT_UPDATE_COORDINATES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_types() {
        assert_eq!(MapEvent::PointerDown.event_type(), "down");
        assert_eq!(MapEvent::PointerUp.event_type(), "up");
        assert_eq!(MapEvent::UpdateCoordinates(None).event_type(), "update_cords");
    }
}
