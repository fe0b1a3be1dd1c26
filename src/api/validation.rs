use serde::{Deserialize, Serialize};

use super::FormField;

/// Fields checked by a full validation pass, in check order.
pub const VALIDATION_ORDER: [FormField; 7] = [
    FormField::NumItems,
    FormField::RowLength,
    FormField::Label,
    FormField::Color,
    FormField::HoverColor,
    FormField::Dimensions,
    FormField::Margin,
];

/// Visual marker a form control carries after validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldFeedback {
    #[default]
    None,
    Error,
}

/// Check applied to the raw value of one form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldRule {
    /// Plain digits within an inclusive range.
    IntRange { min: u64, max: u64 },
    /// `#` followed by exactly six ASCII alphanumerics.
    HexColor,
    /// Free text without angle brackets.
    Label,
}

impl FieldRule {
    #[must_use]
    pub fn check(self, value: &str) -> bool {
        match self {
            Self::IntRange { min, max } => is_int_in_range(value, min, max),
            Self::HexColor => is_hex_color(value),
            Self::Label => is_safe_label(value),
        }
    }
}

impl FormField {
    /// Validation rule guarding this control, if any.
    #[must_use]
    pub fn rule(self) -> Option<FieldRule> {
        match self {
            Self::NumItems => Some(FieldRule::IntRange { min: 0, max: 1000 }),
            Self::RowLength | Self::Dimensions => Some(FieldRule::IntRange { min: 0, max: 100 }),
            Self::Margin => Some(FieldRule::IntRange { min: 0, max: 25 }),
            Self::Color | Self::HoverColor => Some(FieldRule::HexColor),
            Self::Label => Some(FieldRule::Label),
            Self::DomId | Self::NumberInTitle | Self::VisEngine => None,
        }
    }
}

/// Parses a non-empty run of ASCII digits. Signs, spaces and overflow yield `None`.
#[must_use]
pub fn parse_digits(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Container ids double as a CSS id selector: a letter or `_` followed by
/// letters, digits, `-` or `_`.
#[must_use]
pub fn is_dom_id(value: &str) -> bool {
    let mut bytes = value.bytes();
    bytes
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[must_use]
pub fn is_int_in_range(value: &str, min: u64, max: u64) -> bool {
    parse_digits(value).is_some_and(|number| (min..=max).contains(&number))
}

#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|rest| rest.len() == 6 && rest.bytes().all(|b| b.is_ascii_alphanumeric()))
}

#[must_use]
pub fn is_safe_label(value: &str) -> bool {
    !value.contains(['<', '>'])
}

#[cfg(test)]
mod tests {
    use super::{
        FieldRule, is_dom_id, is_hex_color, is_int_in_range, is_safe_label, parse_digits,
    };
    use crate::api::FormField;

    #[test]
    fn int_range_requires_digits_and_bounds() {
        assert!(is_int_in_range("0", 0, 25));
        assert!(is_int_in_range("25", 0, 25));
        assert!(is_int_in_range("0025", 0, 25));
        assert!(!is_int_in_range("26", 0, 25));
        assert!(!is_int_in_range("", 0, 25));
        assert!(!is_int_in_range(" 5", 0, 25));
        assert!(!is_int_in_range("5a", 0, 25));
        assert!(!is_int_in_range("-0", 0, 25));
        assert_eq!(parse_digits("184467440737095516160"), None);
    }

    #[test]
    fn hex_color_shape() {
        assert!(is_hex_color("#336699"));
        assert!(is_hex_color("#ra777a"));
        assert!(!is_hex_color("336699"));
        assert!(!is_hex_color("#33669"));
        assert!(!is_hex_color("#3366990"));
        assert!(!is_hex_color("#33-699"));
        assert!(!is_hex_color("#33é699"));
    }

    #[test]
    fn label_rejects_angle_brackets() {
        assert!(is_safe_label(""));
        assert!(is_safe_label("Votes & seats"));
        assert!(!is_safe_label("<b>"));
        assert!(!is_safe_label("a > b"));
    }

    #[test]
    fn dom_id_must_be_an_identifier() {
        assert!(is_dom_id("box_id"));
        assert!(is_dom_id("_chart-2"));
        assert!(!is_dom_id(""));
        assert!(!is_dom_id("2chart"));
        assert!(!is_dom_id("-chart"));
        assert!(!is_dom_id("box id"));
        assert!(!is_dom_id("box\"id"));
    }

    #[test]
    fn field_bounds_match_form_controls() {
        assert_eq!(
            FormField::NumItems.rule(),
            Some(FieldRule::IntRange { min: 0, max: 1000 })
        );
        assert_eq!(
            FormField::RowLength.rule(),
            Some(FieldRule::IntRange { min: 0, max: 100 })
        );
        assert_eq!(
            FormField::Dimensions.rule(),
            Some(FieldRule::IntRange { min: 0, max: 100 })
        );
        assert_eq!(
            FormField::Margin.rule(),
            Some(FieldRule::IntRange { min: 0, max: 25 })
        );
        assert_eq!(FormField::HoverColor.rule(), Some(FieldRule::HexColor));
        assert_eq!(FormField::DomId.rule(), None);
    }
}
