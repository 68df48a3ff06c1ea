//! Match State Machine
//!
//! Serve, pause and settings flow for a Pong match. The settings panel is a
//! sub-state of `Paused`, never a flag on something that draws.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    NotServed,
    InPlay,
    Paused { settings_open: bool },
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Serve,
    TogglePause,
    ToggleSettings,
    Reset,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::NotServed,
        }
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::NotServed, MatchAction::Serve) => Some(MatchState::InPlay),

            (MatchState::InPlay, MatchAction::TogglePause) => Some(MatchState::Paused {
                settings_open: false,
            }),
            // Resuming always closes the settings panel
            (MatchState::Paused { .. }, MatchAction::TogglePause) => Some(MatchState::InPlay),

            (MatchState::Paused { settings_open }, MatchAction::ToggleSettings) => {
                Some(MatchState::Paused {
                    settings_open: !settings_open,
                })
            }

            (_, MatchAction::Reset) => Some(MatchState::NotServed),

            _ => None,
        }
    }

    /// Back to the pre-serve state
    pub fn reset(&mut self) {
        self.state = MatchState::NotServed;
    }

    pub fn is_playing(&self) -> bool {
        self.state == MatchState::InPlay
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, MatchState::Paused { .. })
    }

    pub fn settings_open(&self) -> bool {
        matches!(
            self.state,
            MatchState::Paused {
                settings_open: true
            }
        )
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = MatchFsm::new();
        assert_eq!(fsm.state(), MatchState::NotServed);
    }

    #[test]
    fn test_serve_only_once() {
        let mut fsm = MatchFsm::new();
        assert!(fsm.transition(MatchAction::Serve).success);
        assert_eq!(fsm.state(), MatchState::InPlay);

        let result = fsm.transition(MatchAction::Serve);
        assert!(!result.success);
        assert_eq!(result.to_state, MatchState::InPlay);
    }

    #[test]
    fn test_pause_requires_serve() {
        let mut fsm = MatchFsm::new();
        assert!(!fsm.can_transition(MatchAction::TogglePause));
        assert!(!fsm.transition(MatchAction::ToggleSettings).success);
        assert_eq!(fsm.state(), MatchState::NotServed);
    }

    #[test]
    fn test_settings_only_while_paused() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::Serve);
        assert!(!fsm.transition(MatchAction::ToggleSettings).success);

        fsm.transition(MatchAction::TogglePause);
        assert!(fsm.transition(MatchAction::ToggleSettings).success);
        assert!(fsm.settings_open());
        fsm.transition(MatchAction::ToggleSettings);
        assert!(!fsm.settings_open());
        assert!(fsm.is_paused());
    }

    #[test]
    fn test_resume_closes_settings() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::Serve);
        fsm.transition(MatchAction::TogglePause);
        fsm.transition(MatchAction::ToggleSettings);
        assert!(fsm.settings_open());

        fsm.transition(MatchAction::TogglePause);
        assert!(fsm.is_playing());

        fsm.transition(MatchAction::TogglePause);
        assert_eq!(
            fsm.state(),
            MatchState::Paused {
                settings_open: false
            }
        );
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::Serve);
        fsm.transition(MatchAction::TogglePause);
        fsm.transition(MatchAction::ToggleSettings);
        assert!(fsm.transition(MatchAction::Reset).success);
        assert_eq!(fsm.state(), MatchState::NotServed);
    }
}
