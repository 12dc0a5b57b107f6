use lumos_core::format;
use lumos_core::{DesignConfiguration, ThemeMode, TypeScale};

use crate::grid::grid_overlay;
use crate::tree::{Element, Node, Style};

pub(crate) const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Suspendisse varius enim in eros elementum tristique. Duis cursus, mi quis viverra ornare";

pub(crate) const PANEL_BORDER: &str = "1px solid #ccc";

/// Render one themed preview panel.
///
/// The panel shows the display size and H1–H6 as styled blocks, then a row
/// holding a body paragraph and a brand-colored sample button. When
/// `show_grid_overlay` is set the 12-column overlay is laid over the top.
pub fn render(config: &DesignConfiguration, mode: ThemeMode) -> Element {
    let colors = mode.colors(config);

    let mut panel = Element::new("div")
        .class("lumos-preview")
        .class(&format!("lumos-preview--{mode}"))
        .attr("data-mode", mode.as_str())
        .style(
            Style::new()
                .with("position", "relative")
                .with("padding", "1rem")
                .with("border-radius", "0.5rem")
                .with("background-color", colors.background)
                .with("color", colors.text)
                .with("font-family", config.font_family.name()),
        );

    if config.show_grid_overlay {
        panel = panel.child(grid_overlay());
    }

    let headings = TypeScale::HEADINGS.into_iter().map(|scale| {
        Node::from(
            Element::new("div")
                .class("lumos-preview__heading")
                .attr("data-scale", scale.key())
                .style(heading_style(config, mode, scale))
                .text(scale.label()),
        )
    });

    tracing::trace!(%mode, grid = config.show_grid_overlay, "preview panel rendered");

    panel.children(headings).child(body_row(config, mode))
}

/// Inline style for one step of the type scale.
pub fn heading_style(config: &DesignConfiguration, mode: ThemeMode, scale: TypeScale) -> Style {
    Style::new()
        .with("font-family", config.font_family.name())
        .with("color", mode.colors(config).text)
        .with("letter-spacing", format::em(config.letter_spacing))
        .with("line-height", "1em")
        .with("margin-bottom", format::rem(config.margin))
        .with("padding", format::rem(config.padding))
        .with("border", PANEL_BORDER)
        .with("background-color", mode.panel_fill())
        .with("font-size", format::rem(config.font_size(scale)))
}

fn body_row(config: &DesignConfiguration, mode: ThemeMode) -> Element {
    let paragraph = Element::new("p")
        .class("lumos-preview__body")
        .style(
            Style::new()
                .with("margin-bottom", "0.5rem")
                .with("font-size", format::rem(config.body_size))
                .with("line-height", "1.5em")
                .with("padding", format::rem(config.padding))
                .with("border", PANEL_BORDER)
                .with("background-color", mode.panel_fill()),
        )
        .text(LOREM);

    let button = Element::new("button")
        .class("lumos-preview__button")
        .attr("type", "button")
        .style(
            Style::new()
                .with("background-color", config.brand_color.as_str())
                .with("color", mode.on_brand(config)),
        )
        .text("Button Text");

    Element::new("div")
        .class("lumos-preview__row")
        .style(
            Style::new()
                .with("display", "flex")
                .with("gap", format::rem(config.spacing)),
        )
        .child(paragraph)
        .child(button)
}
