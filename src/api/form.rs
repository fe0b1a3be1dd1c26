use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ChartOptions, ChartOptionsPatch, VisEngine};
use crate::error::{WidgetError, WidgetResult};

use super::validation::{is_dom_id, parse_digits};

/// Named input controls of the chart form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormField {
    NumItems,
    RowLength,
    Label,
    Color,
    HoverColor,
    Dimensions,
    Margin,
    DomId,
    NumberInTitle,
    VisEngine,
}

impl FormField {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NumItems => "num_items",
            Self::RowLength => "row_length",
            Self::Label => "label",
            Self::Color => "color",
            Self::HoverColor => "hover_color",
            Self::Dimensions => "dimensions",
            Self::Margin => "margin",
            Self::DomId => "dom_id",
            Self::NumberInTitle => "number_in_title",
            Self::VisEngine => "vis_engine",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values read from the form controls at one point in time.
///
/// Text controls carry their raw string value; nothing is coerced until the
/// snapshot is turned into an options patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub num_items: String,
    pub row_length: String,
    pub label: String,
    pub color: String,
    pub hover_color: String,
    pub dimensions: String,
    pub margin: String,
    pub dom_id: String,
    #[serde(default)]
    pub number_in_title: bool,
    #[serde(default = "default_vis_engine")]
    pub vis_engine: String,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self::from_options(&ChartOptions::default())
    }
}

impl FormSnapshot {
    /// Snapshot a form would show when prefilled from `options`.
    #[must_use]
    pub fn from_options(options: &ChartOptions) -> Self {
        Self {
            num_items: options.num_items.to_string(),
            row_length: options.row_length.to_string(),
            label: options.title.clone(),
            color: options.color.clone(),
            hover_color: options.hover_color.clone(),
            dimensions: options.dimensions.to_string(),
            margin: options.margin.to_string(),
            dom_id: options.dom_id.clone(),
            number_in_title: options.number_in_title,
            vis_engine: options.vis_engine.as_str().to_owned(),
        }
    }

    /// Raw value of a text control; `None` for the checkbox.
    #[must_use]
    pub fn value(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::NumItems => &self.num_items,
            FormField::RowLength => &self.row_length,
            FormField::Label => &self.label,
            FormField::Color => &self.color,
            FormField::HoverColor => &self.hover_color,
            FormField::Dimensions => &self.dimensions,
            FormField::Margin => &self.margin,
            FormField::DomId => &self.dom_id,
            FormField::VisEngine => &self.vis_engine,
            FormField::NumberInTitle => return None,
        };
        Some(value.as_str())
    }

    /// Sets a text control; returns `false` for the checkbox.
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) -> bool {
        let slot = match field {
            FormField::NumItems => &mut self.num_items,
            FormField::RowLength => &mut self.row_length,
            FormField::Label => &mut self.label,
            FormField::Color => &mut self.color,
            FormField::HoverColor => &mut self.hover_color,
            FormField::Dimensions => &mut self.dimensions,
            FormField::Margin => &mut self.margin,
            FormField::DomId => &mut self.dom_id,
            FormField::VisEngine => &mut self.vis_engine,
            FormField::NumberInTitle => return false,
        };
        *slot = value.into();
        true
    }

    /// Converts every chart-bound control into an options patch.
    ///
    /// Numeric controls must hold plain digits and the container id must be an
    /// identifier; anything else is reported as an invalid field.
    pub fn to_patch(&self) -> WidgetResult<ChartOptionsPatch> {
        Ok(ChartOptionsPatch {
            chart_type: None,
            num_items: Some(numeric(FormField::NumItems, &self.num_items)?),
            row_length: Some(numeric(FormField::RowLength, &self.row_length)?),
            title: Some(self.label.clone()),
            color: Some(self.color.clone()),
            hover_color: Some(self.hover_color.clone()),
            margin: Some(numeric(FormField::Margin, &self.margin)?),
            dimensions: Some(numeric(FormField::Dimensions, &self.dimensions)?),
            dom_id: Some(dom_id(&self.dom_id)?),
            number_in_title: Some(self.number_in_title),
            vis_engine: Some(VisEngine::parse(&self.vis_engine)),
        })
    }
}

fn numeric(field: FormField, value: &str) -> WidgetResult<u32> {
    parse_digits(value)
        .and_then(|number| u32::try_from(number).ok())
        .ok_or_else(|| WidgetError::InvalidField {
            field,
            value: value.to_owned(),
        })
}

fn dom_id(value: &str) -> WidgetResult<String> {
    if is_dom_id(value) {
        return Ok(value.to_owned());
    }
    Err(WidgetError::InvalidField {
        field: FormField::DomId,
        value: value.to_owned(),
    })
}

fn default_vis_engine() -> String {
    VisEngine::Html.as_str().to_owned()
}

#[cfg(test)]
mod tests {
    use super::{FormField, FormSnapshot};
    use crate::core::VisEngine;
    use crate::error::WidgetError;

    #[test]
    fn patch_parses_numeric_controls() {
        let mut form = FormSnapshot::default();
        form.set_value(FormField::NumItems, "007");
        form.set_value(FormField::VisEngine, "Raphael");
        let patch = form.to_patch().expect("patch");
        assert_eq!(patch.num_items, Some(7));
        assert_eq!(patch.vis_engine, Some(VisEngine::Vector));
        assert_eq!(patch.title.as_deref(), Some("Data title"));
    }

    #[test]
    fn patch_rejects_signed_or_empty_numbers() {
        for bad in ["+5", "-1", "", "1.5", "99999999999"] {
            let mut form = FormSnapshot::default();
            form.set_value(FormField::Margin, bad);
            assert_eq!(
                form.to_patch(),
                Err(WidgetError::InvalidField {
                    field: FormField::Margin,
                    value: bad.to_owned(),
                })
            );
        }
    }

    #[test]
    fn patch_rejects_ids_that_are_not_identifiers() {
        for bad in ["", "9lives", "box id", "x\" onmouseover=\"alert(1)", "a{b}"] {
            let mut form = FormSnapshot::default();
            form.set_value(FormField::DomId, bad);
            assert_eq!(
                form.to_patch(),
                Err(WidgetError::InvalidField {
                    field: FormField::DomId,
                    value: bad.to_owned(),
                })
            );
        }

        let mut form = FormSnapshot::default();
        form.set_value(FormField::DomId, "_votes-2024");
        let patch = form.to_patch().expect("patch");
        assert_eq!(patch.dom_id.as_deref(), Some("_votes-2024"));
    }

    #[test]
    fn checkbox_has_no_text_value() {
        let mut form = FormSnapshot::default();
        assert_eq!(form.value(FormField::NumberInTitle), None);
        assert!(!form.set_value(FormField::NumberInTitle, "true"));
        assert_eq!(form.value(FormField::Color), Some("#ra777a"));
    }
}
