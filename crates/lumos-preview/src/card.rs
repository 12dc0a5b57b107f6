use lumos_core::format;
use lumos_core::{DesignConfiguration, ThemeMode};

use crate::tree::{Element, Style};

const CARD_BODY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Suspendisse varius enim in eros elementum tristique.";

/// An example card for one theme: a title at the H2 size, a body paragraph,
/// and a primary/secondary button pair.
pub fn render_card(config: &DesignConfiguration, mode: ThemeMode) -> Element {
    let colors = mode.colors(config);
    let font = config.font_family.name();

    let title = Element::new("h3")
        .class("lumos-card__title")
        .style(
            Style::new()
                .with("font-size", format::rem(config.h2_size))
                .with("margin-bottom", format::rem(config.margin))
                .with("font-family", font)
                .with("letter-spacing", format::em(config.letter_spacing)),
        )
        .text("Heading");

    let body = Element::new("p")
        .class("lumos-card__body")
        .style(
            Style::new()
                .with("font-size", format::rem(config.body_size))
                .with("margin-bottom", format::rem(config.margin))
                .with("font-family", font),
        )
        .text(CARD_BODY);

    let primary = Element::new("button")
        .class("lumos-card__button")
        .class("lumos-card__button--primary")
        .attr("type", "button")
        .style(
            Style::new()
                .with("background-color", config.brand_color.as_str())
                .with("color", mode.on_brand(config))
                .with("padding", format::rem(config.padding))
                .with("font-family", font),
        )
        .text("Button Text");

    let secondary = Element::new("button")
        .class("lumos-card__button")
        .class("lumos-card__button--secondary")
        .attr("type", "button")
        .style(
            Style::new()
                .with("background-color", mode.panel_fill())
                .with("color", colors.text)
                .with("padding", format::rem(config.padding))
                .with("font-family", font),
        )
        .text("Button Text");

    Element::new("div")
        .class("lumos-card")
        .attr("data-mode", mode.as_str())
        .style(
            Style::new()
                .with("background-color", colors.background)
                .with("color", colors.text),
        )
        .child(Element::new("div").class("lumos-card__header").child(title))
        .child(
            Element::new("div")
                .class("lumos-card__content")
                .child(body)
                .child(
                    Element::new("div")
                        .class("lumos-card__actions")
                        .style(Style::new().with("display", "flex").with("gap", "0.5rem"))
                        .child(primary)
                        .child(secondary),
                ),
        )
}
