use serde::{Deserialize, Serialize};

/// Presentational pointer-hover state for the widget's bounding frame.
///
/// Hover only drives the visibility and hit-testability of the control
/// affordances; it never touches animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HoverState {
    hovering: bool,
}

impl HoverState {
    #[must_use]
    pub const fn is_hovering(self) -> bool {
        self.hovering
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovering = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hovering = false;
    }
}
