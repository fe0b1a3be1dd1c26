use thiserror::Error;

use crate::api::FormField;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("invalid value for `{field}`: {value:?}")]
    InvalidField { field: FormField, value: String },

    #[error("input validation failed at `{field}`")]
    ValidationFailed { field: FormField },

    #[error("Invalid visEngine: {0}")]
    InvalidVisEngine(String),

    #[error("{feature} - not yet implemented")]
    Unimplemented { feature: &'static str },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
