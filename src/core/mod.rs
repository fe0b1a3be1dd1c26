mod box_item;
mod chart;
mod counter;
mod options;

pub use box_item::{BoxItem, DEFAULT_BOX_COLOR, DEFAULT_BOX_DATA};
pub use chart::Chart;
pub use counter::BoxCounter;
pub use options::{ChartOptions, ChartOptionsPatch, ChartType, VisEngine};
