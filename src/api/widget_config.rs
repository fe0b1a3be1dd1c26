use serde::{Deserialize, Serialize};

use crate::core::ChartOptions;

/// Message shown in the banner when a submitted form fails validation.
pub const DEFAULT_VALIDATION_MESSAGE: &str = "There is a problem with your input.";

/// Widget bootstrap configuration.
///
/// Serializable so hosts can ship it alongside their page instead of wiring
/// values in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub chart_options: ChartOptions,
    #[serde(default = "default_validation_message")]
    pub validation_message: String,
    #[serde(default = "default_validate_on_change")]
    pub validate_on_change: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chart_options: ChartOptions::default(),
            validation_message: default_validation_message(),
            validate_on_change: default_validate_on_change(),
        }
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn new(chart_options: ChartOptions) -> Self {
        Self {
            chart_options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = message.into();
        self
    }

    /// Enables or disables per-field validation on change events.
    #[must_use]
    pub fn with_validate_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }
}

fn default_validation_message() -> String {
    DEFAULT_VALIDATION_MESSAGE.to_owned()
}

fn default_validate_on_change() -> bool {
    true
}
