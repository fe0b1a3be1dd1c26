mod escape;
mod markup;
mod markup_region;

pub use escape::escape_html;
pub use markup::{chart_markup, chart_stylesheet, is_row_break};
pub use markup_region::MarkupRegion;

/// Contract implemented by whatever hosts a chart's rendered markup.
///
/// A browser binding maps this onto a DOM container; tests and headless hosts
/// use [`MarkupRegion`]. Appends accumulate, so callers clear the region
/// before re-rendering.
pub trait DisplayRegion {
    fn clear(&mut self);

    fn append(&mut self, markup: &str);

    /// Current markup held by the region, as its inner HTML.
    fn inner_html(&self) -> String;
}
