use tracing::{debug, warn};

use crate::error::{WidgetError, WidgetResult};
use crate::render::{DisplayRegion, chart_markup, chart_stylesheet};

use super::{BoxCounter, BoxItem, ChartOptions, ChartOptionsPatch, ChartType, VisEngine};

/// A styled collection of boxes bound to one display region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    options: ChartOptions,
    items: Vec<BoxItem>,
    active_input: bool,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(ChartOptions::default())
    }
}

impl Chart {
    #[must_use]
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            items: Vec::new(),
            active_input: false,
        }
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Boxes produced by the last successful render.
    #[must_use]
    pub fn items(&self) -> &[BoxItem] {
        &self.items
    }

    #[must_use]
    pub fn items_mut(&mut self) -> &mut [BoxItem] {
        &mut self.items
    }

    #[must_use]
    pub fn is_active_input(&self) -> bool {
        self.active_input
    }

    pub(crate) fn set_active_input(&mut self, active: bool) {
        self.active_input = active;
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) -> &mut Self {
        self.options.chart_type = chart_type;
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.options.title = title.into();
        self
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.options.color = color.into();
        self
    }

    pub fn set_hover_color(&mut self, hover_color: impl Into<String>) -> &mut Self {
        self.options.hover_color = hover_color.into();
        self
    }

    pub fn set_row_length(&mut self, row_length: u32) -> &mut Self {
        self.options.row_length = row_length;
        self
    }

    pub fn set_num_items(&mut self, num_items: u32) -> &mut Self {
        self.options.num_items = num_items;
        self
    }

    pub fn set_margin(&mut self, margin: u32) -> &mut Self {
        self.options.margin = margin;
        self
    }

    pub fn set_dimensions(&mut self, dimensions: u32) -> &mut Self {
        self.options.dimensions = dimensions;
        self
    }

    pub fn set_vis_engine(&mut self, vis_engine: VisEngine) -> &mut Self {
        self.options.vis_engine = vis_engine;
        self
    }

    pub fn set_dom_id(&mut self, dom_id: impl Into<String>) -> &mut Self {
        self.options.dom_id = dom_id.into();
        self
    }

    pub fn set_number_in_title(&mut self, number_in_title: bool) -> &mut Self {
        self.options.number_in_title = number_in_title;
        self
    }

    /// Applies a partial option update.
    pub fn apply(&mut self, patch: ChartOptionsPatch) -> &mut Self {
        patch.apply_to(&mut self.options);
        self
    }

    /// Fails unless the selected engine can produce markup.
    pub fn check_engine(&self) -> WidgetResult<()> {
        match &self.options.vis_engine {
            VisEngine::Html => Ok(()),
            VisEngine::Vector => {
                warn!("vector engine selected; rendering skipped");
                Err(WidgetError::Unimplemented { feature: "Raphael" })
            }
            VisEngine::Unrecognized(name) => {
                warn!(vis_engine = %name, "unrecognized visual engine");
                Err(WidgetError::InvalidVisEngine(name.clone()))
            }
        }
    }

    /// Rebuilds the boxes and appends the chart markup to `region`.
    ///
    /// The region is not cleared here. Only the html engine renders; the
    /// vector placeholder and unknown engine names fail without touching the
    /// region or the current boxes.
    pub fn render<D>(&mut self, counter: &mut BoxCounter, region: &mut D) -> WidgetResult<()>
    where
        D: DisplayRegion + ?Sized,
    {
        self.check_engine()?;

        let count = self.options.num_items as usize;
        self.items.clear();
        self.items.reserve(count);
        for _ in 0..count {
            self.items.push(BoxItem::new(counter));
        }

        region.append(&chart_markup(&self.options, self.items.len()));
        debug!(
            dom_id = %self.options.dom_id,
            num_items = count,
            row_length = self.options.row_length,
            last_box = counter.last(),
            "rendered html chart"
        );
        Ok(())
    }

    /// Embedded stylesheet for this chart's boxes.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        chart_stylesheet(&self.options)
    }
}
