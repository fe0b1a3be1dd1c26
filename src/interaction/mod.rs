use serde::{Deserialize, Serialize};

/// Collapsible form panels with a show/hide toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    AdvancedOptions,
    EmbedCode,
}

impl Panel {
    fn noun(self) -> &'static str {
        match self {
            Self::AdvancedOptions => "advanced options",
            Self::EmbedCode => "embed code",
        }
    }
}

/// Visibility of one toggleable panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    pub panel: Panel,
    pub visible: bool,
}

impl PanelState {
    #[must_use]
    pub const fn hidden(panel: Panel) -> Self {
        Self {
            panel,
            visible: false,
        }
    }

    /// Flips visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Label the toggle button should carry for the current state.
    #[must_use]
    pub fn button_label(self) -> String {
        let verb = if self.visible { "Hide" } else { "Show" };
        format!("{verb} {}", self.panel.noun())
    }
}

/// Both toggleable panels, initially hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panels {
    pub advanced_options: PanelState,
    pub embed_code: PanelState,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            advanced_options: PanelState::hidden(Panel::AdvancedOptions),
            embed_code: PanelState::hidden(Panel::EmbedCode),
        }
    }
}

impl Panels {
    #[must_use]
    pub fn get(&self, panel: Panel) -> PanelState {
        match panel {
            Panel::AdvancedOptions => self.advanced_options,
            Panel::EmbedCode => self.embed_code,
        }
    }

    pub fn toggle(&mut self, panel: Panel) -> bool {
        match panel {
            Panel::AdvancedOptions => self.advanced_options.toggle(),
            Panel::EmbedCode => self.embed_code.toggle(),
        }
    }
}

/// Color fields that own a picker popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorField {
    Color,
    HoverColor,
}

/// Popover visibility for the two color pickers.
///
/// At most one picker is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPickers {
    pub bound: bool,
    pub color_open: bool,
    pub hover_color_open: bool,
}

impl ColorPickers {
    /// Binds both pickers to their fields, closed.
    pub fn bind(&mut self) {
        self.bound = true;
        self.close_all();
    }

    /// Opens the picker of `field` and closes the other one.
    pub fn open(&mut self, field: ColorField) {
        if !self.bound {
            return;
        }
        self.color_open = field == ColorField::Color;
        self.hover_color_open = field == ColorField::HoverColor;
    }

    pub fn close_all(&mut self) {
        self.color_open = false;
        self.hover_color_open = false;
    }

    #[must_use]
    pub fn is_open(&self, field: ColorField) -> bool {
        match field {
            ColorField::Color => self.color_open,
            ColorField::HoverColor => self.hover_color_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorField, ColorPickers, Panel, Panels};

    #[test]
    fn panel_toggle_flips_visibility_and_label() {
        let mut panels = Panels::default();
        assert_eq!(
            panels.get(Panel::AdvancedOptions).button_label(),
            "Show advanced options"
        );
        assert!(panels.toggle(Panel::AdvancedOptions));
        assert_eq!(
            panels.get(Panel::AdvancedOptions).button_label(),
            "Hide advanced options"
        );
        assert!(!panels.get(Panel::EmbedCode).visible);
        assert!(!panels.toggle(Panel::AdvancedOptions));
    }

    #[test]
    fn only_one_picker_is_open() {
        let mut pickers = ColorPickers::default();
        pickers.open(ColorField::Color);
        assert!(!pickers.is_open(ColorField::Color), "unbound pickers stay closed");

        pickers.bind();
        pickers.open(ColorField::Color);
        assert!(pickers.is_open(ColorField::Color));
        pickers.open(ColorField::HoverColor);
        assert!(!pickers.is_open(ColorField::Color));
        assert!(pickers.is_open(ColorField::HoverColor));
        pickers.close_all();
        assert!(!pickers.is_open(ColorField::HoverColor));
    }
}
