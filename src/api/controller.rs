use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::core::Chart;
use crate::error::WidgetError;
use crate::extensions::{WidgetContext, WidgetEvent, WidgetPlugin};
use crate::interaction::{ColorField, Panel, Panels};
use crate::render::{DisplayRegion, MarkupRegion};

use super::{FieldFeedback, FormField, FormSnapshot, Input, Output, WidgetConfig};

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Options were applied and the chart re-rendered.
    Rendered { items_len: usize },
    /// A control failed validation; nothing was applied or rendered.
    Invalid { field: FormField },
    /// A control passed validation but could not be applied to the chart.
    OptionsRejected(WidgetError),
    /// Options were applied but the chart could not be rendered.
    RenderFailed(WidgetError),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Top-level widget: composes input and output and exposes the commands a
/// host UI layer forwards from its form.
pub struct Controller<R: DisplayRegion = MarkupRegion> {
    pub(super) config: WidgetConfig,
    pub(super) input: Input<R>,
    pub(super) output: Output,
    pub(super) panels: Panels,
    pub(super) plugins: IndexMap<String, Box<dyn WidgetPlugin>>,
}

impl<R: DisplayRegion> Controller<R> {
    /// Runs the one-time startup sequence: apply the form's current values,
    /// render, enable validation, prepare the output UI and show the markup.
    ///
    /// A form the chart cannot take or render still yields a usable widget;
    /// the error is shown in the banner and the embed code stays empty.
    pub fn start(config: WidgetConfig, region: R, form: &FormSnapshot) -> Self {
        let input = Input::new(config.chart_options.clone(), region);
        let mut controller = Self {
            config,
            input,
            output: Output::new(),
            panels: Panels::default(),
            plugins: IndexMap::new(),
        };

        let startup = controller
            .input
            .set_active_chart_options(form)
            .and_then(|input| input.render());
        controller.input.enable_validation();
        controller.output.init_ui();
        controller.output.show_html(controller.input.region());

        match startup {
            Ok(()) => info!(
                items_len = controller.active_chart().items().len(),
                "box chart widget started"
            ),
            Err(err) => {
                warn!(error = %err, "box chart widget started without a chart");
                controller.output.display_error(&err.to_string());
            }
        }
        controller
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn input(&self) -> &Input<R> {
        &self.input
    }

    #[must_use]
    pub fn output(&self) -> &Output {
        &self.output
    }

    #[must_use]
    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    #[must_use]
    pub fn active_chart(&self) -> &Chart {
        self.input.active_chart()
    }

    #[must_use]
    pub fn output_text(&self) -> &str {
        self.output.text()
    }

    #[must_use]
    pub fn field_feedback(&self, field: FormField) -> FieldFeedback {
        self.input.field_feedback(field)
    }

    /// Validates the whole form and, when every check passes, applies it to
    /// the active chart and re-renders.
    ///
    /// Failures show a banner and keep the previous embed code.
    pub fn submit(&mut self, form: &FormSnapshot) -> SubmitOutcome {
        self.clear_error();

        let verdict = self.input.validate_input(form);
        let checked: Vec<(FormField, bool)> = self.input.last_validation_pass().to_vec();
        for (field, valid) in checked {
            self.emit_event(WidgetEvent::FieldValidated { field, valid });
        }
        match verdict {
            Ok(()) => {}
            Err(WidgetError::ValidationFailed { field }) => {
                let message = self.config.validation_message.clone();
                self.output.display_error(&message);
                self.emit_event(WidgetEvent::ValidationFailed { field });
                return SubmitOutcome::Invalid { field };
            }
            Err(err) => return self.options_rejected(err),
        }

        if let Err(err) = self.input.set_active_chart_options(form) {
            return self.options_rejected(err);
        }
        self.emit_event(WidgetEvent::OptionsApplied);

        if let Err(err) = self.input.render() {
            return self.render_failed(err);
        }

        self.output.show_html(self.input.region());
        let items_len = self.input.active_chart().items().len();
        debug!(items_len, "submit rendered chart");
        self.emit_event(WidgetEvent::Rendered { items_len });
        SubmitOutcome::Rendered { items_len }
    }

    /// Validates one control after its value changed.
    ///
    /// Returns `true` when the value is acceptable or change validation is
    /// not active.
    pub fn field_changed(&mut self, field: FormField, value: &str) -> bool {
        if !self.input.is_validation_enabled() || !self.config.validate_on_change {
            return true;
        }
        self.clear_error();
        let valid = self.input.validate_field(field, value);
        self.emit_event(WidgetEvent::FieldValidated { field, valid });
        valid
    }

    /// Flips a collapsible panel and returns its new visibility.
    pub fn toggle(&mut self, panel: Panel) -> bool {
        let visible = self.panels.toggle(panel);
        debug!(?panel, visible, "toggled panel");
        self.emit_event(WidgetEvent::PanelToggled { panel, visible });
        visible
    }

    /// Opens the picker attached to a color control.
    pub fn focus_color_field(&mut self, field: ColorField) {
        self.output.open_color_picker(field);
    }

    /// A click anywhere else on the page closes both pickers.
    pub fn document_clicked(&mut self) {
        self.output.close_color_pickers();
    }

    fn clear_error(&mut self) {
        let was_visible = self.output.banner().visible;
        self.output.clear_error();
        if was_visible {
            self.emit_event(WidgetEvent::ErrorCleared);
        }
    }

    fn options_rejected(&mut self, err: WidgetError) -> SubmitOutcome {
        warn!(error = %err, "submit could not apply form options");
        self.output.display_error(&err.to_string());
        if let WidgetError::InvalidField { field, .. } = &err {
            self.emit_event(WidgetEvent::OptionsRejected { field: *field });
        }
        SubmitOutcome::OptionsRejected(err)
    }

    fn render_failed(&mut self, err: WidgetError) -> SubmitOutcome {
        warn!(error = %err, "submit could not render chart");
        let message = err.to_string();
        self.output.display_error(&message);
        self.emit_event(WidgetEvent::RenderFailed { message });
        SubmitOutcome::RenderFailed(err)
    }

    pub(super) fn widget_context(&self) -> WidgetContext {
        let chart = self.input.active_chart();
        WidgetContext {
            valid: self.input.is_valid(),
            num_items: chart.options().num_items,
            items_len: chart.items().len(),
            last_box: self.input.counter().last(),
            error_visible: self.output.banner().visible,
        }
    }

    pub(super) fn emit_event(&mut self, event: WidgetEvent) {
        let context = self.widget_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(&event, context);
        }
    }
}
