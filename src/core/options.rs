use serde::{Deserialize, Serialize};

/// Chart kinds the widget knows how to lay out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Box,
}

/// Rendering strategy used for a chart's markup.
///
/// Names coming from the engine selector are kept even when unknown so the
/// failure surfaces at render time as a configuration error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisEngine {
    #[default]
    Html,
    /// Vector-graphics placeholder; rendering with it is not implemented.
    Vector,
    Unrecognized(String),
}

impl VisEngine {
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "html" => Self::Html,
            // `Raphael` is the selector value older forms still send.
            "vector" | "Raphael" => Self::Vector,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Html => "html",
            Self::Vector => "vector",
            Self::Unrecognized(name) => name,
        }
    }
}

impl From<String> for VisEngine {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<VisEngine> for String {
    fn from(value: VisEngine) -> Self {
        value.as_str().to_owned()
    }
}

/// Layout and style options of one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub chart_type: ChartType,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_hover_color")]
    pub hover_color: String,
    #[serde(default = "default_row_length")]
    pub row_length: u32,
    #[serde(default = "default_num_items")]
    pub num_items: u32,
    #[serde(default = "default_margin")]
    pub margin: u32,
    #[serde(default = "default_dimensions")]
    pub dimensions: u32,
    #[serde(default)]
    pub vis_engine: VisEngine,
    #[serde(default = "default_dom_id")]
    pub dom_id: String,
    #[serde(default)]
    pub number_in_title: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Box,
            title: default_title(),
            color: default_color(),
            hover_color: default_hover_color(),
            row_length: default_row_length(),
            num_items: default_num_items(),
            margin: default_margin(),
            dimensions: default_dimensions(),
            vis_engine: VisEngine::Html,
            dom_id: default_dom_id(),
            number_in_title: false,
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_hover_color(mut self, hover_color: impl Into<String>) -> Self {
        self.hover_color = hover_color.into();
        self
    }

    #[must_use]
    pub fn with_row_length(mut self, row_length: u32) -> Self {
        self.row_length = row_length;
        self
    }

    #[must_use]
    pub fn with_num_items(mut self, num_items: u32) -> Self {
        self.num_items = num_items;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = dimensions;
        self
    }

    #[must_use]
    pub fn with_vis_engine(mut self, vis_engine: VisEngine) -> Self {
        self.vis_engine = vis_engine;
        self
    }

    #[must_use]
    pub fn with_dom_id(mut self, dom_id: impl Into<String>) -> Self {
        self.dom_id = dom_id.into();
        self
    }

    #[must_use]
    pub fn with_number_in_title(mut self, number_in_title: bool) -> Self {
        self.number_in_title = number_in_title;
        self
    }
}

/// Partial update restricted to the known chart options.
///
/// `None` fields leave the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptionsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vis_engine: Option<VisEngine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dom_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_in_title: Option<bool>,
}

impl ChartOptionsPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, options: &mut ChartOptions) {
        if let Some(chart_type) = self.chart_type {
            options.chart_type = chart_type;
        }
        if let Some(title) = self.title {
            options.title = title;
        }
        if let Some(color) = self.color {
            options.color = color;
        }
        if let Some(hover_color) = self.hover_color {
            options.hover_color = hover_color;
        }
        if let Some(row_length) = self.row_length {
            options.row_length = row_length;
        }
        if let Some(num_items) = self.num_items {
            options.num_items = num_items;
        }
        if let Some(margin) = self.margin {
            options.margin = margin;
        }
        if let Some(dimensions) = self.dimensions {
            options.dimensions = dimensions;
        }
        if let Some(vis_engine) = self.vis_engine {
            options.vis_engine = vis_engine;
        }
        if let Some(dom_id) = self.dom_id {
            options.dom_id = dom_id;
        }
        if let Some(number_in_title) = self.number_in_title {
            options.number_in_title = number_in_title;
        }
    }
}

fn default_title() -> String {
    "Data title".to_owned()
}

fn default_color() -> String {
    "#ra777a".to_owned()
}

fn default_hover_color() -> String {
    "#73b1b7".to_owned()
}

fn default_row_length() -> u32 {
    10
}

fn default_num_items() -> u32 {
    36
}

fn default_margin() -> u32 {
    2
}

fn default_dimensions() -> u32 {
    15
}

fn default_dom_id() -> String {
    "box_id".to_owned()
}

#[cfg(test)]
mod tests {
    use super::{ChartOptions, ChartOptionsPatch, VisEngine};

    #[test]
    fn vis_engine_parses_known_aliases_and_keeps_unknown_names() {
        assert_eq!(VisEngine::parse("html"), VisEngine::Html);
        assert_eq!(VisEngine::parse("vector"), VisEngine::Vector);
        assert_eq!(VisEngine::parse("Raphael"), VisEngine::Vector);
        assert_eq!(
            VisEngine::parse("canvas"),
            VisEngine::Unrecognized("canvas".to_owned())
        );
        assert_eq!(VisEngine::parse("canvas").as_str(), "canvas");
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut options = ChartOptions::default();
        let patch = ChartOptionsPatch {
            title: Some("Votes".to_owned()),
            num_items: Some(5),
            ..ChartOptionsPatch::default()
        };
        assert!(!patch.is_empty());
        patch.apply_to(&mut options);

        assert_eq!(options.title, "Votes");
        assert_eq!(options.num_items, 5);
        assert_eq!(options.row_length, 10);
        assert_eq!(options.dom_id, "box_id");
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ChartOptions =
            serde_json::from_str(r#"{"title":"Seats","vis_engine":"Raphael"}"#)
                .expect("options json");
        assert_eq!(options.title, "Seats");
        assert_eq!(options.vis_engine, VisEngine::Vector);
        assert_eq!(options.num_items, 36);
        assert_eq!(options.hover_color, "#73b1b7");
    }
}
