use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::font::FontFamily;
use super::scale::TypeScale;

/// Every tunable design token, always fully populated.
///
/// Created once per session with [`Default`] values and then mutated one
/// field at a time by the session store. Renderers and the stylesheet
/// generator only ever see it by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DesignConfiguration {
    // Typography
    pub font_family: FontFamily,
    /// Letter spacing in `em`. Sign is significant.
    pub letter_spacing: f64,

    // Colors, carried verbatim (normally `#rrggbb`)
    pub brand_color: String,
    pub text_color: String,
    pub background_color: String,
    pub light_color: String,
    pub dark_color: String,

    // Font sizes in `rem`
    pub display_size: f64,
    pub h1_size: f64,
    pub h2_size: f64,
    pub h3_size: f64,
    pub h4_size: f64,
    pub h5_size: f64,
    pub h6_size: f64,
    pub body_size: f64,

    // Spacing units in `rem`
    pub spacing: f64,
    pub padding: f64,
    pub margin: f64,

    // Presentation only; never exported
    pub show_grid_overlay: bool,
    pub is_dark_mode: bool,
}

impl Default for DesignConfiguration {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Arial,
            letter_spacing: -0.03,
            brand_color: "#c6fb50".to_string(),
            text_color: "#353233".to_string(),
            background_color: "#ffffff".to_string(),
            light_color: "#ffffff".to_string(),
            dark_color: "#353233".to_string(),
            display_size: 7.0,
            h1_size: 5.0,
            h2_size: 4.0,
            h3_size: 3.0,
            h4_size: 2.0,
            h5_size: 1.5,
            h6_size: 1.0,
            body_size: 1.0,
            spacing: 1.0,
            padding: 1.0,
            margin: 1.0,
            show_grid_overlay: false,
            is_dark_mode: false,
        }
    }
}

impl DesignConfiguration {
    /// Font size in `rem` for a step of the type scale.
    pub fn font_size(&self, scale: TypeScale) -> f64 {
        match scale {
            TypeScale::Display => self.display_size,
            TypeScale::H1 => self.h1_size,
            TypeScale::H2 => self.h2_size,
            TypeScale::H3 => self.h3_size,
            TypeScale::H4 => self.h4_size,
            TypeScale::H5 => self.h5_size,
            TypeScale::H6 => self.h6_size,
            TypeScale::Body => self.body_size,
        }
    }
}
