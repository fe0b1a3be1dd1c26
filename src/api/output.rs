use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interaction::{ColorField, ColorPickers};
use crate::render::{DisplayRegion, escape_html};

/// Error banner shown above the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBanner {
    pub visible: bool,
    pub html: String,
}

/// Presentation state for the embed-code field, the error banner and the
/// color-picker popovers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    text: String,
    banner: ErrorBanner,
    pickers: ColorPickers,
}

impl Output {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Escaped markup currently shown in the embed-code field.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    #[must_use]
    pub fn color_pickers(&self) -> ColorPickers {
        self.pickers
    }

    /// Shows the region's live markup as literal text.
    pub fn show_html<D>(&mut self, region: &D) -> &mut Self
    where
        D: DisplayRegion + ?Sized,
    {
        self.text = escape_html(&region.inner_html());
        debug!(len = self.text.len(), "updated embed code");
        self
    }

    pub fn display_error(&mut self, description: &str) -> &mut Self {
        self.banner.html = format!(
            "<div class=\"alert alert-error\"><p><strong>Uh oh!</strong> {}</p></div>",
            escape_html(description)
        );
        self.banner.visible = true;
        self
    }

    pub fn clear_error(&mut self) -> &mut Self {
        self.banner.visible = false;
        self.banner.html.clear();
        self
    }

    /// Hides the banner and binds both color pickers, closed.
    pub fn init_ui(&mut self) -> &mut Self {
        self.banner.visible = false;
        self.pickers.bind();
        self
    }

    pub fn open_color_picker(&mut self, field: ColorField) -> &mut Self {
        self.pickers.open(field);
        self
    }

    pub fn close_color_pickers(&mut self) -> &mut Self {
        self.pickers.close_all();
        self
    }
}
