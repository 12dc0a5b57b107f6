use crate::tree::{Element, Node, Style};

/// Columns drawn by the layout grid overlay.
pub const GRID_COLUMNS: usize = 12;

/// The decorative 12-column overlay laid over a preview panel.
pub fn grid_overlay() -> Element {
    let columns = (1..=GRID_COLUMNS).map(|i| {
        Node::from(
            Element::new("div")
                .class("lumos-grid__column")
                .style(
                    Style::new()
                        .with("height", "100%")
                        .with("background-color", "rgba(191,219,254,0.2)")
                        .with("display", "flex")
                        .with("align-items", "flex-end")
                        .with("justify-content", "center"),
                )
                .child(
                    Element::new("span")
                        .style(
                            Style::new()
                                .with("font-size", "0.75rem")
                                .with("color", "#3b82f6"),
                        )
                        .text(i.to_string()),
                ),
        )
    });

    Element::new("div")
        .class("lumos-grid")
        .attr("aria-hidden", "true")
        .style(
            Style::new()
                .with("position", "absolute")
                .with("inset", "0")
                .with("display", "grid")
                .with("grid-template-columns", format!("repeat({GRID_COLUMNS}, minmax(0, 1fr))"))
                .with("gap", "1rem")
                .with("pointer-events", "none"),
        )
        .children(columns)
}
