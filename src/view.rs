//! Loading indicator and start/restart button state.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Button label before the first game.
pub const START_LABEL: &str = "START";
/// Button label while a board is loading.
pub const LOADING_LABEL: &str = "Loading...";
/// Button label once a setup has finished.
pub const RESTART_LABEL: &str = "RESET!!!";

/// The start/restart control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    /// Text on the button.
    pub label: String,
    /// Whether activating the button does anything.
    pub enabled: bool,
}

/// UI feedback around game setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    loading: bool,
    button: ButtonState,
    error: Option<String>,
}

impl ViewState {
    /// Idle view before any game has been set up.
    pub fn new() -> Self {
        Self {
            loading: false,
            button: ButtonState {
                label: START_LABEL.to_string(),
                enabled: true,
            },
            error: None,
        }
    }

    /// Spinner on, button disabled.
    #[instrument(skip(self))]
    pub fn show_loading(&mut self) {
        debug!("Showing loading view");
        self.loading = true;
        self.error = None;
        self.button = ButtonState {
            label: LOADING_LABEL.to_string(),
            enabled: false,
        };
    }

    /// Spinner off, button restored as a restart control.
    ///
    /// `error` is kept for display so a failed setup can be retried.
    #[instrument(skip(self))]
    pub fn hide_loading(&mut self, error: Option<String>) {
        debug!("Hiding loading view");
        self.loading = false;
        self.error = error;
        self.button = ButtonState {
            label: RESTART_LABEL.to_string(),
            enabled: true,
        };
    }

    /// Whether the loading indicator is showing.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The start/restart control.
    pub fn button(&self) -> &ButtonState {
        &self.button
    }

    /// Message from the last failed setup, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_cycle() {
        let mut view = ViewState::new();
        assert_eq!(view.button().label, START_LABEL);

        view.show_loading();
        assert!(view.is_loading());
        assert!(!view.button().enabled);
        assert_eq!(view.button().label, LOADING_LABEL);

        view.hide_loading(None);
        assert!(!view.is_loading());
        assert!(view.button().enabled);
        assert_eq!(view.button().label, RESTART_LABEL);
    }

    #[test]
    fn test_failure_leaves_button_retryable() {
        let mut view = ViewState::new();
        view.show_loading();
        view.hide_loading(Some("network failure: timed out".to_string()));
        assert!(view.button().enabled);
        assert_eq!(view.error(), Some("network failure: timed out"));

        view.show_loading();
        assert_eq!(view.error(), None);
    }
}
