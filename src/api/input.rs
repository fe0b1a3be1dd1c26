use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{BoxCounter, Chart, ChartOptions};
use crate::error::{WidgetError, WidgetResult};
use crate::render::{DisplayRegion, MarkupRegion};

use super::validation::VALIDATION_ORDER;
use super::{FieldFeedback, FormField, FormSnapshot};

/// Outcome of each check that ran during the last validation pass.
pub type ValidationPass = SmallVec<[(FormField, bool); 7]>;

/// Owns the charts, the box counter and the display region, and applies
/// validated form state to the active chart.
#[derive(Debug)]
pub struct Input<R: DisplayRegion = MarkupRegion> {
    charts: Vec<Chart>,
    active: usize,
    counter: BoxCounter,
    valid: bool,
    region: R,
    feedback: IndexMap<FormField, FieldFeedback>,
    last_pass: ValidationPass,
    validation_enabled: bool,
}

impl<R: DisplayRegion> Input<R> {
    /// Creates the input context with a single active chart.
    #[must_use]
    pub fn new(options: ChartOptions, region: R) -> Self {
        let mut chart = Chart::new(options);
        chart.set_active_input(true);
        Self {
            charts: vec![chart],
            active: 0,
            counter: BoxCounter::new(),
            valid: true,
            region,
            feedback: IndexMap::new(),
            last_pass: ValidationPass::new(),
            validation_enabled: false,
        }
    }

    #[must_use]
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    #[must_use]
    pub fn active_chart(&self) -> &Chart {
        &self.charts[self.active]
    }

    #[must_use]
    pub fn active_chart_mut(&mut self) -> &mut Chart {
        &mut self.charts[self.active]
    }

    #[must_use]
    pub fn counter(&self) -> BoxCounter {
        self.counter
    }

    #[must_use]
    pub fn region(&self) -> &R {
        &self.region
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn field_feedback(&self, field: FormField) -> FieldFeedback {
        self.feedback.get(&field).copied().unwrap_or_default()
    }

    /// Checks that ran in the last full validation pass, in order.
    #[must_use]
    pub fn last_validation_pass(&self) -> &[(FormField, bool)] {
        &self.last_pass
    }

    #[must_use]
    pub fn is_validation_enabled(&self) -> bool {
        self.validation_enabled
    }

    pub(crate) fn enable_validation(&mut self) {
        self.validation_enabled = true;
    }

    /// Copies the chart-bound form controls onto the active chart.
    ///
    /// Nothing is written when a numeric control does not hold plain digits
    /// or the container id is not an identifier; the offending control is
    /// marked as erroneous instead.
    pub fn set_active_chart_options(&mut self, form: &FormSnapshot) -> WidgetResult<&mut Self> {
        let patch = form.to_patch().inspect_err(|err| {
            if let WidgetError::InvalidField { field, .. } = err {
                self.feedback.insert(*field, FieldFeedback::Error);
            }
        })?;
        self.active_chart_mut().apply(patch);
        let options = self.active_chart().options();
        debug!(
            num_items = options.num_items,
            row_length = options.row_length,
            dom_id = %options.dom_id,
            vis_engine = options.vis_engine.as_str(),
            "applied form options to active chart"
        );
        Ok(self)
    }

    /// Clears the display region and renders every chart into it, each
    /// followed by its stylesheet.
    ///
    /// Engines are checked up front so a failing configuration leaves the
    /// previous markup in place.
    pub fn render(&mut self) -> WidgetResult<()> {
        for chart in &self.charts {
            chart.check_engine()?;
        }

        self.region.clear();
        for chart in &mut self.charts {
            chart.render(&mut self.counter, &mut self.region)?;
            self.region.append(&chart.stylesheet());
        }
        trace!(charts = self.charts.len(), last_box = self.counter.last(), "render pass done");
        Ok(())
    }

    /// Validates one control and updates its feedback marker.
    ///
    /// Controls without a rule always pass.
    pub fn validate_field(&mut self, field: FormField, value: &str) -> bool {
        self.feedback.insert(field, FieldFeedback::None);
        let Some(rule) = field.rule() else {
            return true;
        };
        if rule.check(value) {
            return true;
        }
        warn!(field = %field, value, "form field failed validation");
        self.feedback.insert(field, FieldFeedback::Error);
        false
    }

    /// Runs the full validation pass, stopping at the first failing control.
    pub fn validate_input(&mut self, form: &FormSnapshot) -> WidgetResult<()> {
        self.valid = true;
        self.last_pass.clear();

        for field in VALIDATION_ORDER {
            let value = form.value(field).unwrap_or_default();
            let ok = self.validate_field(field, value);
            self.last_pass.push((field, ok));
            if !ok {
                self.valid = false;
                return Err(WidgetError::ValidationFailed { field });
            }
        }
        Ok(())
    }
}
