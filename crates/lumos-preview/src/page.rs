use lumos_core::{DesignConfiguration, Field, FieldGroup, ThemeMode};

use crate::card::render_card;
use crate::panel::render;
use crate::tree::{Element, Node, Style};

/// Filename the preview page is delivered under.
pub const PREVIEW_FILENAME: &str = "lumos-preview.html";

pub const PREVIEW_MIME: &str = "text/html;charset=utf-8";

const TITLE: &str = "Lumos Style Guide Generator";

/// Render the whole preview page.
///
/// `stylesheet` is the generated stylesheet, inlined into `<head>` so the
/// page exercises the same rules the export ships. Any `</` in it is
/// written as `<\/` so token values cannot close the `<style>` element.
/// `font_links` are the
/// font stylesheet URLs currently loaded.
pub fn render_page(config: &DesignConfiguration, stylesheet: &str, font_links: &[String]) -> Element {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(Element::new("title").text(TITLE))
        .children(font_links.iter().map(|href| {
            Node::from(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", href.as_str()),
            )
        }))
        .child(Element::new("style").child(Node::raw(stylesheet.replace("</", "<\\/"))));

    // The page chrome follows the dark-mode toggle; the two panels do not.
    let chrome = if config.is_dark_mode {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    };
    let colors = chrome.colors(config);

    let mut container = Element::new("div").class("lumos-page");
    if config.is_dark_mode {
        container = container.class("dark-mode");
    }

    let previews = Element::new("main")
        .class("lumos-page__previews")
        .children(ThemeMode::BOTH.into_iter().map(|mode| Node::from(theme_section(config, mode))));

    let container = container
        .style(
            Style::new()
                .with("background-color", colors.background)
                .with("color", colors.text)
                .with("padding", "1rem"),
        )
        .child(Element::new("h1").class("lumos-page__title").text(TITLE))
        .child(previews)
        .child(settings_panel(config, chrome));

    tracing::debug!(
        dark_mode = config.is_dark_mode,
        grid = config.show_grid_overlay,
        fonts = font_links.len(),
        "preview page rendered"
    );

    Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(Element::new("body").child(container))
}

fn theme_section(config: &DesignConfiguration, mode: ThemeMode) -> Element {
    let heading = match mode {
        ThemeMode::Light => "Light Theme Preview",
        ThemeMode::Dark => "Dark Theme Preview",
    };
    Element::new("section")
        .class("lumos-page__section")
        .attr("data-mode", mode.as_str())
        .child(Element::new("h2").text(heading))
        .child(render(config, mode))
        .child(render_card(config, mode))
}

fn settings_panel(config: &DesignConfiguration, chrome: ThemeMode) -> Element {
    let groups = [
        (FieldGroup::Typography, "Typography"),
        (FieldGroup::Color, "Color"),
        (FieldGroup::Spacing, "Spacing"),
        (FieldGroup::Display, "Display"),
    ];

    let sections = groups.into_iter().map(|(group, title)| {
        let rows = Field::ALL
            .into_iter()
            .filter(|f| f.group() == group)
            .flat_map(|field| {
                [
                    Node::from(Element::new("dt").text(field.label())),
                    Node::from(
                        Element::new("dd")
                            .attr("data-field", field.key())
                            .text(config.get(field).to_string()),
                    ),
                ]
            });
        Node::from(
            Element::new("section")
                .class("lumos-settings__group")
                .child(Element::new("h3").text(title))
                .child(Element::new("dl").children(rows)),
        )
    });

    let mut export = Element::new("button")
        .class("lumos-settings__export")
        .attr("type", "button");
    if config.is_dark_mode {
        export = export.attr("data-theme", "invert");
    }
    let export = export
        .style(
            Style::new()
                .with("background-color", config.brand_color.as_str())
                .with("color", chrome.on_brand(config)),
        )
        .text("Export Code");

    Element::new("aside")
        .class("lumos-settings")
        .children(sections)
        .child(export)
}
