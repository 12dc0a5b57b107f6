use lumos_core::{DesignConfiguration, Field, FieldKind, FieldValue, FontFamily};
use lumos_export::{generate, STYLESHEET_FILENAME, STYLESHEET_MIME};

fn css(config: &DesignConfiguration) -> String {
    String::from_utf8(generate(config).expect("stylesheet renders")).expect("utf-8")
}

/// The declarations inside the leading `:root { ... }` block.
fn root_declarations(css: &str) -> Vec<String> {
    let start = css.find(":root {").expect(":root block");
    let end = start + css[start..].find('}').expect("closing brace");
    css[start..end]
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("--"))
        .map(str::to_string)
        .collect()
}

#[test]
fn default_configuration_scenario() {
    let css = css(&DesignConfiguration::default());
    assert!(css.starts_with("/* Lumos Framework Custom Code */"));
    assert!(css.contains("--font-family: Arial;"));
    assert!(css.contains("--font-size-h1: 5rem;"));
    assert!(css.contains("--color-brand: #c6fb50;"));
    assert!(css.contains(
        ".u-button-primary {\n  background-color: var(--color-brand);\n  color: var(--color-background);\n}"
    ));
}

#[test]
fn generation_is_deterministic() {
    let mut config = DesignConfiguration::default();
    config.font_family = FontFamily::TrebuchetMs;
    config.letter_spacing = 0.0125;
    assert_eq!(generate(&config).unwrap(), generate(&config.clone()).unwrap());
}

#[test]
fn one_custom_property_per_exported_field_with_units() {
    let config = DesignConfiguration::default();
    let declarations = root_declarations(&css(&config));
    assert_eq!(declarations.len(), 18);

    for field in Field::ALL.into_iter().filter(|f| f.is_exported()) {
        let var = field.css_var().unwrap();
        let matching: Vec<_> = declarations
            .iter()
            .filter(|d| d.starts_with(&format!("{var}:")))
            .collect();
        assert_eq!(matching.len(), 1, "{var}");

        if let FieldKind::Length(unit) = field.kind() {
            assert!(matching[0].ends_with(&format!("{unit};")), "{}", matching[0]);
        }
    }

    assert!(declarations.contains(&"--letter-spacing: -0.03em;".to_string()));
    assert!(declarations.contains(&"--font-size-h5: 1.5rem;".to_string()));
    assert!(declarations.contains(&"--margin-unit: 1rem;".to_string()));
}

#[test]
fn changing_one_field_changes_only_its_line() {
    let base = DesignConfiguration::default();
    let before = css(&base);

    for field in Field::ALL.into_iter().filter(|f| f.is_exported()) {
        let value = match field.kind() {
            FieldKind::Font => FieldValue::FontFamily(FontFamily::Georgia),
            FieldKind::Color => field.parse_value("#123456").unwrap(),
            FieldKind::Length(_) => field.parse_value("2.75").unwrap(),
            FieldKind::Toggle => unreachable!(),
        };
        let mut changed = base.clone();
        changed.apply(value);
        let after = css(&changed);

        let before_lines: Vec<_> = before.lines().collect();
        let after_lines: Vec<_> = after.lines().collect();
        assert_eq!(before_lines.len(), after_lines.len());

        let differing: Vec<_> = before_lines
            .iter()
            .zip(&after_lines)
            .filter(|(a, b)| a != b)
            .map(|(_, b)| b.trim())
            .collect();
        assert_eq!(differing.len(), 1, "{field}: {differing:?}");
        assert!(differing[0].starts_with(field.css_var().unwrap()));
    }
}

#[test]
fn presentation_toggles_never_reach_the_stylesheet() {
    let base = DesignConfiguration::default();
    let mut toggled = base.clone();
    toggled.show_grid_overlay = true;
    toggled.is_dark_mode = true;
    assert_eq!(generate(&base).unwrap(), generate(&toggled).unwrap());
}

#[test]
fn values_pass_through_unvalidated() {
    let mut config = DesignConfiguration::default();
    config.brand_color = "chartreuse-ish".to_string();
    config.h2_size = -3.0;
    config.spacing = 0.30000000000000004;
    let css = css(&config);
    assert!(css.contains("--color-brand: chartreuse-ish;"));
    assert!(css.contains("--font-size-h2: -3rem;"));
    assert!(css.contains("--spacing-unit: 0.30000000000000004rem;"));
}

#[test]
fn markup_characters_are_not_escaped() {
    let mut config = DesignConfiguration::default();
    config.dark_color = "<#000>&".to_string();
    assert!(css(&config).contains("--color-dark: <#000>&;"));
}

#[test]
fn multi_word_fonts_are_written_as_named() {
    let mut config = DesignConfiguration::default();
    config.font_family = FontFamily::TimesNewRoman;
    assert!(css(&config).contains("--font-family: Times New Roman;"));
}

#[test]
fn fixed_rules_are_present() {
    let css = css(&DesignConfiguration::default());
    for rule in [
        "body {\n  font-family: var(--font-family);",
        "h1, h2, h3, h4, h5, h6 {\n  letter-spacing: var(--letter-spacing);\n  line-height: 1em;",
        ".u-text-display { font-size: var(--font-size-display); }",
        "h6, .u-text-h6 { font-size: var(--font-size-h6); }",
        ".u-spacing { gap: var(--spacing-unit); }",
        ".u-padding { padding: var(--padding-unit); }",
        ".u-margin { margin: var(--margin-unit); }",
        ".dark-mode {\n  --color-text: var(--color-light);\n  --color-background: var(--color-dark);\n}",
        "[data-theme=\"invert\"] {\n  filter: invert(1) hue-rotate(180deg);\n}",
    ] {
        assert!(css.contains(rule), "missing rule: {rule}");
    }
}

#[test]
fn download_metadata_is_fixed() {
    assert_eq!(STYLESHEET_FILENAME, "lumos-custom-styles.css");
    assert_eq!(STYLESHEET_MIME, "text/css;charset=utf-8");
}
