use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::configuration::DesignConfiguration;

/// One of the two fixed presentation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub const BOTH: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The text/background pair this theme paints with.
    pub fn colors<'a>(&self, config: &'a DesignConfiguration) -> ThemeColors<'a> {
        match self {
            ThemeMode::Light => ThemeColors {
                text: &config.text_color,
                background: &config.light_color,
            },
            ThemeMode::Dark => ThemeColors {
                text: &config.light_color,
                background: &config.dark_color,
            },
        }
    }

    /// Text color for controls that sit on the brand color.
    pub fn on_brand<'a>(&self, config: &'a DesignConfiguration) -> &'a str {
        match self {
            ThemeMode::Light => &config.light_color,
            ThemeMode::Dark => &config.dark_color,
        }
    }

    /// Translucent fill for panels drawn on top of the theme background.
    pub fn panel_fill(&self) -> &'static str {
        match self {
            ThemeMode::Light => "rgba(0,0,0,0.05)",
            ThemeMode::Dark => "rgba(255,255,255,0.1)",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text and background colors borrowed from a configuration snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors<'a> {
    pub text: &'a str,
    pub background: &'a str,
}
