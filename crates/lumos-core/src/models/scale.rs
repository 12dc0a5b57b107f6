use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A step of the type scale: the display size, six heading levels, and body
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TypeScale {
    Display,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Body,
}

impl TypeScale {
    /// Display plus H1–H6, largest first.
    pub const HEADINGS: [TypeScale; 7] = [
        TypeScale::Display,
        TypeScale::H1,
        TypeScale::H2,
        TypeScale::H3,
        TypeScale::H4,
        TypeScale::H5,
        TypeScale::H6,
    ];

    /// Suffix used in `--font-size-*` and `.u-text-*` names.
    pub fn key(&self) -> &'static str {
        match self {
            TypeScale::Display => "display",
            TypeScale::H1 => "h1",
            TypeScale::H2 => "h2",
            TypeScale::H3 => "h3",
            TypeScale::H4 => "h4",
            TypeScale::H5 => "h5",
            TypeScale::H6 => "h6",
            TypeScale::Body => "body",
        }
    }

    /// Sample text shown for this step in the preview.
    pub fn label(&self) -> &'static str {
        match self {
            TypeScale::Display => "Display Heading",
            TypeScale::H1 => "Heading 1",
            TypeScale::H2 => "Heading 2",
            TypeScale::H3 => "Heading 3",
            TypeScale::H4 => "Heading 4",
            TypeScale::H5 => "Heading 5",
            TypeScale::H6 => "Heading 6",
            TypeScale::Body => "Body",
        }
    }

    /// The HTML heading element for H1–H6.
    pub fn element(&self) -> Option<&'static str> {
        match self {
            TypeScale::H1 => Some("h1"),
            TypeScale::H2 => Some("h2"),
            TypeScale::H3 => Some("h3"),
            TypeScale::H4 => Some("h4"),
            TypeScale::H5 => Some("h5"),
            TypeScale::H6 => Some("h6"),
            TypeScale::Display | TypeScale::Body => None,
        }
    }

    /// `--font-size-<key>`
    pub fn css_var(&self) -> String {
        format!("--font-size-{}", self.key())
    }
}
