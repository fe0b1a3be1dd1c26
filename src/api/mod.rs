mod controller;
mod form;
mod input;
mod json_contract;
mod output;
mod plugin_registry;
mod snapshot;
mod validation;
mod widget_config;

pub use controller::{Controller, SubmitOutcome};
pub use form::{FormField, FormSnapshot};
pub use input::{Input, ValidationPass};
pub use json_contract::{WIDGET_SNAPSHOT_JSON_SCHEMA_V1, WidgetSnapshotJsonContractV1};
pub use output::{ErrorBanner, Output};
pub use snapshot::WidgetSnapshot;
pub use validation::{
    FieldFeedback, FieldRule, VALIDATION_ORDER, is_dom_id, is_hex_color, is_int_in_range,
    is_safe_label, parse_digits,
};
pub use widget_config::{DEFAULT_VALIDATION_MESSAGE, WidgetConfig};
