use serde::{Deserialize, Serialize};

use crate::api::FormField;
use crate::interaction::Panel;

/// Read-only widget state passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetContext {
    pub valid: bool,
    pub num_items: u32,
    pub items_len: usize,
    pub last_box: u64,
    pub error_visible: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetEvent {
    OptionsApplied,
    OptionsRejected { field: FormField },
    Rendered { items_len: usize },
    RenderFailed { message: String },
    FieldValidated { field: FormField, valid: bool },
    ValidationFailed { field: FormField },
    PanelToggled { panel: Panel, visible: bool },
    ErrorCleared,
}

/// Observer hook for host UI layers.
///
/// Plugins see every state transition the controller performs and can mirror
/// it into a real page, but cannot mutate widget state.
pub trait WidgetPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &WidgetEvent, context: WidgetContext);
}
