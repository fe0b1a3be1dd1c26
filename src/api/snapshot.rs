use serde::{Deserialize, Serialize};

use crate::core::ChartOptions;
use crate::render::DisplayRegion;

use super::Controller;

/// Point-in-time view of the widget for diagnostics and host debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub options: ChartOptions,
    pub items_len: usize,
    pub last_box: u64,
    pub valid: bool,
    pub error_visible: bool,
    pub output_text: String,
}

impl<R: DisplayRegion> Controller<R> {
    #[must_use]
    pub fn snapshot(&self) -> WidgetSnapshot {
        let chart = self.input.active_chart();
        WidgetSnapshot {
            options: chart.options().clone(),
            items_len: chart.items().len(),
            last_box: self.input.counter().last(),
            valid: self.input.is_valid(),
            error_visible: self.output.banner().visible,
            output_text: self.output.text().to_owned(),
        }
    }
}
