//! Extension points for hosts embedding the widget.

pub mod plugins;

pub use plugins::{WidgetContext, WidgetEvent, WidgetPlugin};
