//! box-chart-maker: core of a form-driven box chart widget.
//!
//! A host UI layer feeds form snapshots and commands into the
//! [`api::Controller`]; the crate validates them, renders the active chart as
//! HTML markup into a [`render::DisplayRegion`] and exposes the escaped markup
//! for copy/paste embedding.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Controller, FormSnapshot, WidgetConfig};
pub use error::{WidgetError, WidgetResult};
