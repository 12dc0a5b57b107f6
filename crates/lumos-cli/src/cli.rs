use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use lumos_core::{Field, FieldValue};

/// Tune Lumos design tokens, preview them, and export a stylesheet.
#[derive(Parser, Debug)]
#[command(name = "lumos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate lumos-custom-styles.css
    Export {
        #[command(flatten)]
        tokens: TokenArgs,

        /// Directory to write into (defaults to the configured output dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the stylesheet instead of writing a file
        #[arg(long, conflicts_with_all = ["out", "dialog"])]
        stdout: bool,

        /// Pick the destination with a native save dialog
        #[arg(long)]
        dialog: bool,
    },

    /// Render the light/dark preview page to lumos-preview.html
    Preview {
        #[command(flatten)]
        tokens: TokenArgs,

        /// Directory to write into (defaults to the configured output dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the preview tree as JSON instead of writing HTML
        #[arg(long, conflicts_with = "out")]
        json: bool,
    },

    /// Edit tokens interactively, one command per line
    Session {
        /// Directory the live preview and exports are written to
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List every token with its default and recommended range
    Fields,

    /// List the font catalog
    Fonts,

    /// Show or change application settings
    Settings {
        /// Default output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Font stylesheet service base URL
        #[arg(long)]
        font_css_base: Option<String>,

        /// Fetch font stylesheets in the background when the family changes
        #[arg(long)]
        prefetch_fonts: Option<bool>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct TokenArgs {
    /// Override a token, e.g. `--set h1-size=6` or `--set font-family="Comic Sans MS"`
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<FieldValue>,
}

/// Parse `key=value` into a typed field value.
pub fn parse_assignment(raw: &str) -> Result<FieldValue, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let field: Field = key.parse().map_err(|e| format!("{e}"))?;
    field.parse_value(value).map_err(|e| format!("{e}"))
}
