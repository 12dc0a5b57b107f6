use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lumos_core::{DesignConfiguration, Field, FieldValue, FontFamily, ThemeMode};
use lumos_export::{export_stylesheet, generate, DirectoryDelivery, Download, FileDelivery};
use lumos_preview::{render, render_page, to_html_document, PREVIEW_FILENAME, PREVIEW_MIME};
use lumos_session::{ConfigStore, FontLoader, LinkRegistry, RemoteFontLoader};

use crate::config::{self, LumosSettings};
use crate::delivery::{self, StdoutDelivery};

/// The font loader the settings ask for.
pub fn font_loader(settings: &LumosSettings) -> Arc<dyn FontLoader> {
    let links = Arc::new(LinkRegistry::new(settings.font_css_base.clone()));
    if settings.prefetch_fonts {
        Arc::new(RemoteFontLoader::new(links)) as Arc<dyn FontLoader>
    } else {
        links as Arc<dyn FontLoader>
    }
}

/// Start a session and apply command-line overrides in order.
pub fn build_store(
    settings: &LumosSettings,
    assignments: &[FieldValue],
) -> eyre::Result<ConfigStore> {
    let mut store = ConfigStore::new(font_loader(settings))?;
    for value in assignments {
        store.set(value.clone())?;
    }
    Ok(store)
}

/// The preview page for a snapshot, as a downloadable HTML file.
pub fn preview_download(
    config: &DesignConfiguration,
    font_links: &[String],
) -> eyre::Result<Download> {
    let stylesheet = String::from_utf8(generate(config)?)?;
    let page = render_page(config, &stylesheet, font_links);
    Ok(Download {
        bytes: to_html_document(&page).into_bytes(),
        mime: PREVIEW_MIME.to_string(),
        filename: PREVIEW_FILENAME.to_string(),
    })
}

pub fn write_preview(
    config: &DesignConfiguration,
    font_links: &[String],
    delivery: &dyn FileDelivery,
) -> eyre::Result<PathBuf> {
    let download = preview_download(config, font_links)?;
    let location = delivery.deliver(&download)?;
    tracing::debug!(location = %location.display(), "preview written");
    Ok(location)
}

fn output_delivery(settings: &LumosSettings, out: Option<&Path>) -> DirectoryDelivery {
    DirectoryDelivery::new(out.map(Path::to_path_buf).unwrap_or_else(|| settings.output_dir()))
}

pub fn export(
    settings: &LumosSettings,
    assignments: &[FieldValue],
    out: Option<&Path>,
    to_stdout: bool,
    use_dialog: bool,
) -> eyre::Result<()> {
    let store = build_store(settings, assignments)?;

    let delivery: Box<dyn FileDelivery> = if to_stdout {
        Box::new(StdoutDelivery)
    } else if use_dialog {
        delivery::dialog()?
    } else {
        Box::new(output_delivery(settings, out))
    };

    let location = export_stylesheet(store.config(), delivery.as_ref())?;
    if !to_stdout {
        println!("{}", location.display());
    }
    Ok(())
}

pub fn preview(
    settings: &LumosSettings,
    assignments: &[FieldValue],
    out: Option<&Path>,
    as_json: bool,
) -> eyre::Result<()> {
    let store = build_store(settings, assignments)?;
    let config = store.config();

    if as_json {
        let panels = serde_json::json!({
            "light": render(config, ThemeMode::Light),
            "dark": render(config, ThemeMode::Dark),
        });
        println!("{}", serde_json::to_string_pretty(&panels)?);
        return Ok(());
    }

    let links = store.loader().loaded_stylesheets();
    let location = write_preview(config, &links, &output_delivery(settings, out))?;
    println!("{}", location.display());
    Ok(())
}

/// One line per token: key, label, default, and recommended range.
pub fn fields(out: &mut impl Write) -> eyre::Result<()> {
    let defaults = DesignConfiguration::default();
    writeln!(out, "{:<20} {:<18} {:<12} RANGE", "KEY", "LABEL", "DEFAULT")?;
    for field in Field::ALL {
        let range = field
            .recommended_range()
            .map(|r| format!("{} – {} (step {})", r.min, r.max, r.step))
            .unwrap_or_default();
        writeln!(
            out,
            "{:<20} {:<18} {:<12} {}",
            field.key(),
            field.label(),
            defaults.get(field).to_string(),
            range
        )?;
    }
    Ok(())
}

pub fn fonts(out: &mut impl Write) -> eyre::Result<()> {
    for font in FontFamily::ALL {
        writeln!(out, "{font}")?;
    }
    Ok(())
}

pub fn settings(
    output_dir: Option<PathBuf>,
    font_css_base: Option<String>,
    prefetch_fonts: Option<bool>,
) -> eyre::Result<()> {
    let mut current = config::load_settings()?;
    let changed = output_dir.is_some() || font_css_base.is_some() || prefetch_fonts.is_some();

    if let Some(dir) = output_dir {
        current.output_dir = Some(dir);
    }
    if let Some(base) = font_css_base {
        current.font_css_base = base;
    }
    if let Some(prefetch) = prefetch_fonts {
        current.prefetch_fonts = prefetch;
    }

    if changed {
        config::save_settings(&current)?;
    }

    println!("{}", config::settings_path()?.display());
    println!("{}", serde_json::to_string_pretty(&current)?);
    Ok(())
}
