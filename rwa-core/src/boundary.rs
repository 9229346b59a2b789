//! Error boundary state machine.
//!
//! `Healthy --capture--> Failed --reset--> Healthy`. While failed, the
//! boundary keeps its first message, ignores further captures and never
//! asks for the failing subtree to be rendered again.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Healthy,
    Failed {
        message: String,
        fallback_renders: u32,
    },
}

/// Result of reporting a failure to the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capture {
    /// The boundary just entered the failed state.
    Entered,
    /// The boundary was already failed; nothing changed.
    AlreadyFailed,
}

impl BoundaryState {
    pub fn capture(&mut self, message: impl Into<String>) -> Capture {
        match self {
            BoundaryState::Healthy => {
                let message = message.into();
                tracing::error!(%message, "render failure caught by boundary");
                *self = BoundaryState::Failed {
                    message,
                    fallback_renders: 0,
                };
                Capture::Entered
            }
            BoundaryState::Failed { .. } => Capture::AlreadyFailed,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BoundaryState::Failed { .. })
    }

    /// Children are only rendered while healthy.
    pub fn renders_children(&self) -> bool {
        !self.is_failed()
    }

    /// Record one render of the fallback view and return its message.
    pub fn render_fallback(&mut self) -> Option<String> {
        match self {
            BoundaryState::Healthy => None,
            BoundaryState::Failed {
                message,
                fallback_renders,
            } => {
                *fallback_renders += 1;
                Some(message.clone())
            }
        }
    }

    pub fn fallback_renders(&self) -> u32 {
        match self {
            BoundaryState::Healthy => 0,
            BoundaryState::Failed {
                fallback_renders, ..
            } => *fallback_renders,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            BoundaryState::Healthy => None,
            BoundaryState::Failed { message, .. } => Some(message.as_str()),
        }
    }

    /// User-triggered recovery.
    pub fn reset(&mut self) {
        if self.is_failed() {
            tracing::info!("error boundary reset");
        }
        *self = BoundaryState::Healthy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_capture_does_not_replace_the_first() {
        let mut state = BoundaryState::default();
        assert_eq!(state.capture("first"), Capture::Entered);
        assert_eq!(state.capture("second"), Capture::AlreadyFailed);
        assert_eq!(state.message(), Some("first"));
        assert!(!state.renders_children());
    }

    #[test]
    fn healthy_boundary_has_no_fallback() {
        let mut state = BoundaryState::default();
        assert_eq!(state.render_fallback(), None);
        assert_eq!(state.fallback_renders(), 0);
        assert!(state.renders_children());
    }

    #[test]
    fn reset_returns_to_healthy() {
        let mut state = BoundaryState::default();
        state.capture("boom");
        state.render_fallback();
        state.reset();
        assert_eq!(state, BoundaryState::Healthy);
        assert_eq!(state.capture("again"), Capture::Entered);
        assert_eq!(state.fallback_renders(), 0);
    }
}
