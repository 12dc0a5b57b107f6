use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::configuration::DesignConfiguration;
use super::font::FontFamily;
use crate::error::CoreError;
use crate::format;
use crate::range::RecommendedRange;

/// Names one field of [`DesignConfiguration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Field {
    FontFamily,
    LetterSpacing,
    BrandColor,
    TextColor,
    BackgroundColor,
    LightColor,
    DarkColor,
    DisplaySize,
    H1Size,
    H2Size,
    H3Size,
    H4Size,
    H5Size,
    H6Size,
    BodySize,
    Spacing,
    Padding,
    Margin,
    ShowGridOverlay,
    IsDarkMode,
}

/// Settings panel a field is edited from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldGroup {
    Typography,
    Color,
    Spacing,
    Display,
}

/// What kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Font,
    Color,
    /// A length; the payload is the CSS unit appended on export.
    Length(&'static str),
    Toggle,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Field::FontFamily,
        Field::LetterSpacing,
        Field::BrandColor,
        Field::TextColor,
        Field::BackgroundColor,
        Field::LightColor,
        Field::DarkColor,
        Field::DisplaySize,
        Field::H1Size,
        Field::H2Size,
        Field::H3Size,
        Field::H4Size,
        Field::H5Size,
        Field::H6Size,
        Field::BodySize,
        Field::Spacing,
        Field::Padding,
        Field::Margin,
        Field::ShowGridOverlay,
        Field::IsDarkMode,
    ];

    /// Stable kebab-case key used on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Field::FontFamily => "font-family",
            Field::LetterSpacing => "letter-spacing",
            Field::BrandColor => "brand-color",
            Field::TextColor => "text-color",
            Field::BackgroundColor => "background-color",
            Field::LightColor => "light-color",
            Field::DarkColor => "dark-color",
            Field::DisplaySize => "display-size",
            Field::H1Size => "h1-size",
            Field::H2Size => "h2-size",
            Field::H3Size => "h3-size",
            Field::H4Size => "h4-size",
            Field::H5Size => "h5-size",
            Field::H6Size => "h6-size",
            Field::BodySize => "body-size",
            Field::Spacing => "spacing",
            Field::Padding => "padding",
            Field::Margin => "margin",
            Field::ShowGridOverlay => "show-grid-overlay",
            Field::IsDarkMode => "is-dark-mode",
        }
    }

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FontFamily => "Font Family",
            Field::LetterSpacing => "Letter Spacing",
            Field::BrandColor => "Brand",
            Field::TextColor => "Text",
            Field::BackgroundColor => "Background Color",
            Field::LightColor => "Light",
            Field::DarkColor => "Dark",
            Field::DisplaySize => "Display Size",
            Field::H1Size => "H1 Size",
            Field::H2Size => "H2 Size",
            Field::H3Size => "H3 Size",
            Field::H4Size => "H4 Size",
            Field::H5Size => "H5 Size",
            Field::H6Size => "H6 Size",
            Field::BodySize => "Body Size",
            Field::Spacing => "Spacing",
            Field::Padding => "Padding",
            Field::Margin => "Margin",
            Field::ShowGridOverlay => "Show Grid Overlay",
            Field::IsDarkMode => "Dark Mode",
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            Field::FontFamily
            | Field::LetterSpacing
            | Field::DisplaySize
            | Field::H1Size
            | Field::H2Size
            | Field::H3Size
            | Field::H4Size
            | Field::H5Size
            | Field::H6Size
            | Field::BodySize => FieldGroup::Typography,
            Field::BrandColor
            | Field::TextColor
            | Field::BackgroundColor
            | Field::LightColor
            | Field::DarkColor => FieldGroup::Color,
            Field::Spacing | Field::Padding | Field::Margin => FieldGroup::Spacing,
            Field::ShowGridOverlay | Field::IsDarkMode => FieldGroup::Display,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::FontFamily => FieldKind::Font,
            Field::BrandColor
            | Field::TextColor
            | Field::BackgroundColor
            | Field::LightColor
            | Field::DarkColor => FieldKind::Color,
            Field::LetterSpacing => FieldKind::Length("em"),
            Field::DisplaySize
            | Field::H1Size
            | Field::H2Size
            | Field::H3Size
            | Field::H4Size
            | Field::H5Size
            | Field::H6Size
            | Field::BodySize
            | Field::Spacing
            | Field::Padding
            | Field::Margin => FieldKind::Length("rem"),
            Field::ShowGridOverlay | Field::IsDarkMode => FieldKind::Toggle,
        }
    }

    /// Whether the field reaches the exported stylesheet.
    pub fn is_exported(&self) -> bool {
        !matches!(self, Field::ShowGridOverlay | Field::IsDarkMode)
    }

    /// The `:root` custom property this field is exported as.
    pub fn css_var(&self) -> Option<&'static str> {
        match self {
            Field::FontFamily => Some("--font-family"),
            Field::LetterSpacing => Some("--letter-spacing"),
            Field::BrandColor => Some("--color-brand"),
            Field::TextColor => Some("--color-text"),
            Field::BackgroundColor => Some("--color-background"),
            Field::LightColor => Some("--color-light"),
            Field::DarkColor => Some("--color-dark"),
            Field::DisplaySize => Some("--font-size-display"),
            Field::H1Size => Some("--font-size-h1"),
            Field::H2Size => Some("--font-size-h2"),
            Field::H3Size => Some("--font-size-h3"),
            Field::H4Size => Some("--font-size-h4"),
            Field::H5Size => Some("--font-size-h5"),
            Field::H6Size => Some("--font-size-h6"),
            Field::BodySize => Some("--font-size-body"),
            Field::Spacing => Some("--spacing-unit"),
            Field::Padding => Some("--padding-unit"),
            Field::Margin => Some("--margin-unit"),
            Field::ShowGridOverlay | Field::IsDarkMode => None,
        }
    }

    pub fn recommended_range(&self) -> Option<RecommendedRange> {
        let range = match self {
            Field::DisplaySize => RecommendedRange::new(4.0, 10.0, 0.01),
            Field::H1Size => RecommendedRange::new(2.0, 8.0, 0.01),
            Field::H2Size => RecommendedRange::new(1.5, 6.0, 0.01),
            Field::H3Size => RecommendedRange::new(1.0, 5.0, 0.01),
            Field::H4Size => RecommendedRange::new(0.8, 4.0, 0.01),
            Field::H5Size => RecommendedRange::new(0.7, 3.0, 0.01),
            Field::H6Size => RecommendedRange::new(0.6, 2.0, 0.01),
            Field::BodySize => RecommendedRange::new(0.8, 2.0, 0.01),
            Field::LetterSpacing => RecommendedRange::new(-0.1, 0.1, 0.001),
            Field::Spacing | Field::Padding | Field::Margin => {
                RecommendedRange::new(0.0, 5.0, 0.01)
            }
            _ => return None,
        };
        Some(range)
    }

    /// Parse a raw string into a value for this field.
    ///
    /// Only type constraints are checked: numbers must parse, toggles must be
    /// a boolean word, fonts must be in the catalog. Colors are taken verbatim.
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue, CoreError> {
        let raw = raw.trim();
        match self.kind() {
            FieldKind::Font => Ok(FieldValue::FontFamily(raw.parse()?)),
            FieldKind::Color => {
                let color = raw.to_string();
                Ok(match self {
                    Field::BrandColor => FieldValue::BrandColor(color),
                    Field::TextColor => FieldValue::TextColor(color),
                    Field::BackgroundColor => FieldValue::BackgroundColor(color),
                    Field::LightColor => FieldValue::LightColor(color),
                    _ => FieldValue::DarkColor(color),
                })
            }
            FieldKind::Length(_) => {
                let n: f64 = raw.parse().map_err(|_| self.invalid(raw, "a number"))?;
                Ok(match self {
                    Field::LetterSpacing => FieldValue::LetterSpacing(n),
                    Field::DisplaySize => FieldValue::DisplaySize(n),
                    Field::H1Size => FieldValue::H1Size(n),
                    Field::H2Size => FieldValue::H2Size(n),
                    Field::H3Size => FieldValue::H3Size(n),
                    Field::H4Size => FieldValue::H4Size(n),
                    Field::H5Size => FieldValue::H5Size(n),
                    Field::H6Size => FieldValue::H6Size(n),
                    Field::BodySize => FieldValue::BodySize(n),
                    Field::Spacing => FieldValue::Spacing(n),
                    Field::Padding => FieldValue::Padding(n),
                    _ => FieldValue::Margin(n),
                })
            }
            FieldKind::Toggle => {
                let on = parse_toggle(raw).ok_or_else(|| self.invalid(raw, "on/off"))?;
                Ok(match self {
                    Field::ShowGridOverlay => FieldValue::ShowGridOverlay(on),
                    _ => FieldValue::IsDarkMode(on),
                })
            }
        }
    }

    fn invalid(&self, raw: &str, expected: &'static str) -> CoreError {
        CoreError::InvalidValue {
            field: self.key().to_string(),
            value: raw.to_string(),
            expected,
        }
    }
}

fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    /// Accepts the kebab-case key, the camelCase name, or snake_case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Field::ALL
            .into_iter()
            .find(|f| f.key().replace('-', "").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// A new value for exactly one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum FieldValue {
    FontFamily(FontFamily),
    LetterSpacing(f64),
    BrandColor(String),
    TextColor(String),
    BackgroundColor(String),
    LightColor(String),
    DarkColor(String),
    DisplaySize(f64),
    H1Size(f64),
    H2Size(f64),
    H3Size(f64),
    H4Size(f64),
    H5Size(f64),
    H6Size(f64),
    BodySize(f64),
    Spacing(f64),
    Padding(f64),
    Margin(f64),
    ShowGridOverlay(bool),
    IsDarkMode(bool),
}

impl FieldValue {
    pub fn field(&self) -> Field {
        match self {
            FieldValue::FontFamily(_) => Field::FontFamily,
            FieldValue::LetterSpacing(_) => Field::LetterSpacing,
            FieldValue::BrandColor(_) => Field::BrandColor,
            FieldValue::TextColor(_) => Field::TextColor,
            FieldValue::BackgroundColor(_) => Field::BackgroundColor,
            FieldValue::LightColor(_) => Field::LightColor,
            FieldValue::DarkColor(_) => Field::DarkColor,
            FieldValue::DisplaySize(_) => Field::DisplaySize,
            FieldValue::H1Size(_) => Field::H1Size,
            FieldValue::H2Size(_) => Field::H2Size,
            FieldValue::H3Size(_) => Field::H3Size,
            FieldValue::H4Size(_) => Field::H4Size,
            FieldValue::H5Size(_) => Field::H5Size,
            FieldValue::H6Size(_) => Field::H6Size,
            FieldValue::BodySize(_) => Field::BodySize,
            FieldValue::Spacing(_) => Field::Spacing,
            FieldValue::Padding(_) => Field::Padding,
            FieldValue::Margin(_) => Field::Margin,
            FieldValue::ShowGridOverlay(_) => Field::ShowGridOverlay,
            FieldValue::IsDarkMode(_) => Field::IsDarkMode,
        }
    }

    /// The numeric payload of a length field.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::LetterSpacing(n)
            | FieldValue::DisplaySize(n)
            | FieldValue::H1Size(n)
            | FieldValue::H2Size(n)
            | FieldValue::H3Size(n)
            | FieldValue::H4Size(n)
            | FieldValue::H5Size(n)
            | FieldValue::H6Size(n)
            | FieldValue::BodySize(n)
            | FieldValue::Spacing(n)
            | FieldValue::Padding(n)
            | FieldValue::Margin(n) => Some(*n),
            _ => None,
        }
    }
}

/// Human-readable value, with the unit for lengths (`5rem`, `-0.03em`).
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::FontFamily(font) => write!(f, "{font}"),
            FieldValue::BrandColor(c)
            | FieldValue::TextColor(c)
            | FieldValue::BackgroundColor(c)
            | FieldValue::LightColor(c)
            | FieldValue::DarkColor(c) => f.write_str(c),
            FieldValue::ShowGridOverlay(on) | FieldValue::IsDarkMode(on) => {
                f.write_str(if *on { "on" } else { "off" })
            }
            other => {
                let n = other.as_number().unwrap_or_default();
                match other.field().kind() {
                    FieldKind::Length(unit) => write!(f, "{}{unit}", format::number(n)),
                    _ => f.write_str(&format::number(n)),
                }
            }
        }
    }
}

impl DesignConfiguration {
    /// Read one field.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::FontFamily => FieldValue::FontFamily(self.font_family),
            Field::LetterSpacing => FieldValue::LetterSpacing(self.letter_spacing),
            Field::BrandColor => FieldValue::BrandColor(self.brand_color.clone()),
            Field::TextColor => FieldValue::TextColor(self.text_color.clone()),
            Field::BackgroundColor => FieldValue::BackgroundColor(self.background_color.clone()),
            Field::LightColor => FieldValue::LightColor(self.light_color.clone()),
            Field::DarkColor => FieldValue::DarkColor(self.dark_color.clone()),
            Field::DisplaySize => FieldValue::DisplaySize(self.display_size),
            Field::H1Size => FieldValue::H1Size(self.h1_size),
            Field::H2Size => FieldValue::H2Size(self.h2_size),
            Field::H3Size => FieldValue::H3Size(self.h3_size),
            Field::H4Size => FieldValue::H4Size(self.h4_size),
            Field::H5Size => FieldValue::H5Size(self.h5_size),
            Field::H6Size => FieldValue::H6Size(self.h6_size),
            Field::BodySize => FieldValue::BodySize(self.body_size),
            Field::Spacing => FieldValue::Spacing(self.spacing),
            Field::Padding => FieldValue::Padding(self.padding),
            Field::Margin => FieldValue::Margin(self.margin),
            Field::ShowGridOverlay => FieldValue::ShowGridOverlay(self.show_grid_overlay),
            Field::IsDarkMode => FieldValue::IsDarkMode(self.is_dark_mode),
        }
    }

    /// Replace exactly one field, returning its previous value.
    pub fn apply(&mut self, value: FieldValue) -> FieldValue {
        let previous = self.get(value.field());
        match value {
            FieldValue::FontFamily(v) => self.font_family = v,
            FieldValue::LetterSpacing(v) => self.letter_spacing = v,
            FieldValue::BrandColor(v) => self.brand_color = v,
            FieldValue::TextColor(v) => self.text_color = v,
            FieldValue::BackgroundColor(v) => self.background_color = v,
            FieldValue::LightColor(v) => self.light_color = v,
            FieldValue::DarkColor(v) => self.dark_color = v,
            FieldValue::DisplaySize(v) => self.display_size = v,
            FieldValue::H1Size(v) => self.h1_size = v,
            FieldValue::H2Size(v) => self.h2_size = v,
            FieldValue::H3Size(v) => self.h3_size = v,
            FieldValue::H4Size(v) => self.h4_size = v,
            FieldValue::H5Size(v) => self.h5_size = v,
            FieldValue::H6Size(v) => self.h6_size = v,
            FieldValue::BodySize(v) => self.body_size = v,
            FieldValue::Spacing(v) => self.spacing = v,
            FieldValue::Padding(v) => self.padding = v,
            FieldValue::Margin(v) => self.margin = v,
            FieldValue::ShowGridOverlay(v) => self.show_grid_overlay = v,
            FieldValue::IsDarkMode(v) => self.is_dark_mode = v,
        }
        previous
    }
}
