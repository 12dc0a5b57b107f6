use std::path::PathBuf;

use serde::Serialize;

use lumos_core::format;
use lumos_core::DesignConfiguration;

use crate::delivery::{Download, FileDelivery};
use crate::error::ExportError;
use crate::render::render_template;

/// Filename offered to the user for the exported stylesheet.
pub const STYLESHEET_FILENAME: &str = "lumos-custom-styles.css";

/// MIME type the exported stylesheet is tagged with.
pub const STYLESHEET_MIME: &str = "text/css;charset=utf-8";

const TEMPLATE_NAME: &str = "lumos-custom-styles.css";

const TEMPLATE: &str = r#"/* Lumos Framework Custom Code */
:root {
  /* Typography */
  --font-family: {{ font_family }};
  --letter-spacing: {{ letter_spacing }};

  /* Colors */
  --color-brand: {{ brand_color }};
  --color-text: {{ text_color }};
  --color-background: {{ background_color }};
  --color-light: {{ light_color }};
  --color-dark: {{ dark_color }};

  /* Font Sizes */
  --font-size-display: {{ display_size }};
  --font-size-h1: {{ h1_size }};
  --font-size-h2: {{ h2_size }};
  --font-size-h3: {{ h3_size }};
  --font-size-h4: {{ h4_size }};
  --font-size-h5: {{ h5_size }};
  --font-size-h6: {{ h6_size }};
  --font-size-body: {{ body_size }};

  /* Spacing */
  --spacing-unit: {{ spacing }};
  --padding-unit: {{ padding }};
  --margin-unit: {{ margin }};
}

body {
  font-family: var(--font-family);
  color: var(--color-text);
  background-color: var(--color-background);
  font-size: var(--font-size-body);
}

h1, h2, h3, h4, h5, h6 {
  letter-spacing: var(--letter-spacing);
  line-height: 1em;
  margin-bottom: var(--margin-unit);
}

.u-text-display { font-size: var(--font-size-display); }
h1, .u-text-h1 { font-size: var(--font-size-h1); }
h2, .u-text-h2 { font-size: var(--font-size-h2); }
h3, .u-text-h3 { font-size: var(--font-size-h3); }
h4, .u-text-h4 { font-size: var(--font-size-h4); }
h5, .u-text-h5 { font-size: var(--font-size-h5); }
h6, .u-text-h6 { font-size: var(--font-size-h6); }

.u-button-primary {
  background-color: var(--color-brand);
  color: var(--color-background);
}

/* Spacing Utilities */
.u-spacing { gap: var(--spacing-unit); }
.u-padding { padding: var(--padding-unit); }
.u-margin { margin: var(--margin-unit); }

/* Dark Mode */
.dark-mode {
  --color-text: var(--color-light);
  --color-background: var(--color-dark);
}

[data-theme="invert"] {
  filter: invert(1) hue-rotate(180deg);
}
"#;

/// Template context. Every value is already a finished CSS string so the
/// template never formats numbers itself.
#[derive(Debug, Serialize)]
struct StylesheetTokens<'a> {
    font_family: &'a str,
    letter_spacing: String,
    brand_color: &'a str,
    text_color: &'a str,
    background_color: &'a str,
    light_color: &'a str,
    dark_color: &'a str,
    display_size: String,
    h1_size: String,
    h2_size: String,
    h3_size: String,
    h4_size: String,
    h5_size: String,
    h6_size: String,
    body_size: String,
    spacing: String,
    padding: String,
    margin: String,
}

impl<'a> StylesheetTokens<'a> {
    fn new(config: &'a DesignConfiguration) -> Self {
        Self {
            font_family: config.font_family.name(),
            letter_spacing: format::em(config.letter_spacing),
            brand_color: &config.brand_color,
            text_color: &config.text_color,
            background_color: &config.background_color,
            light_color: &config.light_color,
            dark_color: &config.dark_color,
            display_size: format::rem(config.display_size),
            h1_size: format::rem(config.h1_size),
            h2_size: format::rem(config.h2_size),
            h3_size: format::rem(config.h3_size),
            h4_size: format::rem(config.h4_size),
            h5_size: format::rem(config.h5_size),
            h6_size: format::rem(config.h6_size),
            body_size: format::rem(config.body_size),
            spacing: format::rem(config.spacing),
            padding: format::rem(config.padding),
            margin: format::rem(config.margin),
        }
    }
}

/// Generate the stylesheet text for a configuration snapshot.
///
/// Deterministic: identical configurations yield byte-identical output.
/// Values are written verbatim; nothing is validated or rounded. The grid
/// overlay and dark-mode toggles never reach the output.
pub fn generate(config: &DesignConfiguration) -> Result<Vec<u8>, ExportError> {
    let css = render_template(TEMPLATE_NAME, TEMPLATE, &StylesheetTokens::new(config))?;
    tracing::debug!(bytes = css.len(), font = %config.font_family, "stylesheet generated");
    Ok(css.into_bytes())
}

/// Generate the stylesheet and hand it to `delivery` as
/// `lumos-custom-styles.css`.
///
/// Delivery errors are returned unchanged.
pub fn export_stylesheet(
    config: &DesignConfiguration,
    delivery: &dyn FileDelivery,
) -> Result<PathBuf, ExportError> {
    let download = Download {
        bytes: generate(config)?,
        mime: STYLESHEET_MIME.to_string(),
        filename: STYLESHEET_FILENAME.to_string(),
    };
    let location = delivery.deliver(&download)?;
    tracing::info!(
        location = %location.display(),
        bytes = download.bytes.len(),
        "stylesheet exported"
    );
    Ok(location)
}
