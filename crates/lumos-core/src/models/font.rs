use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The fixed catalog of font families the generator offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "Arial")]
    Arial,
    #[serde(rename = "Helvetica")]
    Helvetica,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    #[serde(rename = "Courier New")]
    CourierNew,
    #[serde(rename = "Verdana")]
    Verdana,
    #[serde(rename = "Georgia")]
    Georgia,
    #[serde(rename = "Palatino")]
    Palatino,
    #[serde(rename = "Garamond")]
    Garamond,
    #[serde(rename = "Bookman")]
    Bookman,
    #[serde(rename = "Comic Sans MS")]
    ComicSansMs,
    #[serde(rename = "Trebuchet MS")]
    TrebuchetMs,
    #[serde(rename = "Arial Black")]
    ArialBlack,
    #[serde(rename = "Impact")]
    Impact,
}

impl FontFamily {
    /// Every catalog entry, in the order the picker lists them.
    pub const ALL: [FontFamily; 13] = [
        FontFamily::Arial,
        FontFamily::Helvetica,
        FontFamily::TimesNewRoman,
        FontFamily::CourierNew,
        FontFamily::Verdana,
        FontFamily::Georgia,
        FontFamily::Palatino,
        FontFamily::Garamond,
        FontFamily::Bookman,
        FontFamily::ComicSansMs,
        FontFamily::TrebuchetMs,
        FontFamily::ArialBlack,
        FontFamily::Impact,
    ];

    /// The family name exactly as written into `font-family` declarations.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Verdana => "Verdana",
            FontFamily::Georgia => "Georgia",
            FontFamily::Palatino => "Palatino",
            FontFamily::Garamond => "Garamond",
            FontFamily::Bookman => "Bookman",
            FontFamily::ComicSansMs => "Comic Sans MS",
            FontFamily::TrebuchetMs => "Trebuchet MS",
            FontFamily::ArialBlack => "Arial Black",
            FontFamily::Impact => "Impact",
        }
    }

    /// The family name as a font-service query parameter (`Times+New+Roman`).
    pub fn query_name(&self) -> String {
        self.name().replace(' ', "+")
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = CoreError;

    /// Case-insensitive lookup by display name. `+` is accepted in place of
    /// spaces so query-style names round-trip.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('+', " ");
        FontFamily::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| CoreError::UnknownFont(s.to_string()))
    }
}
