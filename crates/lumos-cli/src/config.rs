//! Application settings.
//!
//! These are the tool's own preferences (where files go, which font service
//! to use), not design tokens. Design configurations are never persisted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lumos_session::DEFAULT_FONT_CSS_BASE;

/// Current settings version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides `output_dir` when set.
pub const OUTPUT_DIR_ENV: &str = "LUMOS_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumosSettings {
    /// Schema version. Missing or 0 = pre-versioned settings.
    #[serde(default)]
    pub config_version: u32,
    /// Where exports and previews are written. Defaults to the working
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Font stylesheet service queried with `?family=<name>`.
    #[serde(default = "default_font_css_base")]
    pub font_css_base: String,
    /// Fetch font stylesheets in the background when the family changes.
    #[serde(default)]
    pub prefetch_fonts: bool,
}

fn default_font_css_base() -> String {
    DEFAULT_FONT_CSS_BASE.to_string()
}

impl Default for LumosSettings {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output_dir: None,
            font_css_base: default_font_css_base(),
            prefetch_fonts: false,
        }
    }
}

impl LumosSettings {
    /// Resolve the output directory: `$LUMOS_OUTPUT_DIR`, then the saved
    /// setting, then the working directory.
    pub fn output_dir(&self) -> PathBuf {
        std::env::var_os(OUTPUT_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.lumos.generator"))
}

pub fn settings_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

/// Load settings from the default location, falling back to defaults when
/// no file exists yet.
pub fn load_settings() -> eyre::Result<LumosSettings> {
    load_settings_from(&settings_path()?)
}

pub fn load_settings_from(path: &Path) -> eyre::Result<LumosSettings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(LumosSettings::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read settings at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));

    let migrated = migrate(json, on_disk_version)?;
    let settings: LumosSettings = serde_json::from_value(migrated)?;
    Ok(settings)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update lumos."
        ));
    }

    // v0 → v1: stamp the version; the shape is otherwise unchanged
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("settings file is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated settings v0 → v1");
    }

    Ok(json)
}

pub fn save_settings(settings: &LumosSettings) -> eyre::Result<PathBuf> {
    let path = settings_path()?;
    save_settings_to(&path, settings)?;
    Ok(path)
}

pub fn save_settings_to(path: &Path, settings: &LumosSettings) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("settings path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = settings.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}
