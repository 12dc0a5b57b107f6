use lumos_core::{DesignConfiguration, FieldValue};
use lumos_preview::{render_page, to_html, to_html_document, Element, Node, Style};

const CSS: &str = "[data-theme=\"invert\"] { filter: invert(1); }";

#[test]
fn page_contains_both_theme_sections() {
    let page = render_page(&DesignConfiguration::default(), CSS, &[]);
    let sections = page.find_by_class("lumos-page__section");
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].attribute("data-mode"), Some("light"));
    assert_eq!(sections[1].attribute("data-mode"), Some("dark"));
    assert_eq!(page.find_by_class("lumos-preview").len(), 2);
    assert_eq!(page.find_by_class("lumos-card").len(), 2);
}

#[test]
fn dark_mode_toggle_drives_the_chrome_and_export_button() {
    let mut config = DesignConfiguration::default();
    let light = render_page(&config, CSS, &[]);
    assert!(light.find_by_class("dark-mode").is_empty());
    let button = &light.find_by_class("lumos-settings__export")[0];
    assert_eq!(button.attribute("data-theme"), None);

    config.is_dark_mode = true;
    let dark = render_page(&config, CSS, &[]);
    let container = &dark.find_by_class("dark-mode")[0];
    assert_eq!(container.style.get("background-color"), Some("#353233"));
    assert_eq!(container.style.get("color"), Some("#ffffff"));
    let button = &dark.find_by_class("lumos-settings__export")[0];
    assert_eq!(button.attribute("data-theme"), Some("invert"));
    assert_eq!(button.style.get("color"), Some("#353233"));
}

#[test]
fn settings_summary_lists_every_field() {
    let mut config = DesignConfiguration::default();
    config.h3_size = 2.5;
    let page = render_page(&config, CSS, &[]);
    let values = page.find_all(&|el| el.tag == "dd");
    assert_eq!(values.len(), 20);

    let h3 = page.find_all(&|el| el.attribute("data-field") == Some("h3-size"));
    assert_eq!(h3[0].text_content(), "2.5rem");
}

#[test]
fn stylesheet_is_inlined_raw_and_font_links_are_added() {
    let links = vec!["https://fonts.example/css?family=Comic+Sans+MS".to_string()];
    let page = render_page(&DesignConfiguration::default(), CSS, &links);
    let html = to_html_document(&page);

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\"><head>"));
    assert!(html.contains(&format!("<style>{CSS}</style>")));
    // Tera's escaper also encodes `/`, which browsers decode in attributes.
    assert!(html.contains(
        "<link rel=\"stylesheet\" href=\"https:&#x2F;&#x2F;fonts.example&#x2F;css?family=Comic+Sans+MS\">"
    ));
    assert!(!html.contains("</link>"));
}

#[test]
fn text_and_attributes_are_escaped() {
    let el = Element::new("p")
        .attr("title", "a \"quoted\" <value>")
        .style(Style::new().with("color", "#fff"))
        .text("1 < 2 & 3");
    let html = to_html(&Node::from(el));
    assert_eq!(
        html,
        "<p title=\"a &quot;quoted&quot; &lt;value&gt;\" style=\"color: #fff\">1 &lt; 2 &amp; 3</p>"
    );
}

#[test]
fn tree_serializes_to_json() {
    let el = Element::new("div").class("x").text("hi");
    let json = serde_json::to_value(Node::from(el)).unwrap();
    assert_eq!(json["type"], "element");
    assert_eq!(json["tag"], "div");
    assert_eq!(json["classes"][0], "x");
    assert_eq!(json["children"][0]["text"], "hi");
}

#[test]
fn token_values_cannot_close_the_inline_stylesheet() {
    let mut config = DesignConfiguration::default();
    config.apply(FieldValue::BrandColor("red}</style><script>alert(1)</script>".to_string()));
    let css = format!(":root {{ --color-brand: {}; }}", config.brand_color);

    let html = to_html_document(&render_page(&config, &css, &[]));

    assert_eq!(html.matches("</style>").count(), 1);
    assert!(!html.contains("</script>"));
    let script = html.find("<script>").expect("value kept inside the stylesheet");
    assert!(script < html.find("</style>").expect("style element closes"));
    assert!(html.contains("--color-brand: red}<\\/style><script>alert(1)<\\/script>;"));
}
