//! Site palette.
//!
//! Rendered as CSS custom properties on `:root`; the stylesheet only
//! refers to the `var(--...)` names.

// === GOLD (Headings, accents, call-to-action) ===
pub const GOLD: &str = "#c9a45c";
pub const GOLD_DEEP: &str = "#a8843f";
pub const GOLD_SOFT: &str = "rgba(201, 164, 92, 0.15)";

// === INK (Text, dark sections) ===
pub const INK: &str = "#1b1f24";
pub const INK_SOFT: &str = "#4a525c";
pub const INK_MUTED: &str = "#8a929c";

// === SURFACES ===
pub const IVORY: &str = "#faf7f0";
pub const WHITE: &str = "#ffffff";
pub const BORDER: &str = "#e6e0d4";

// === SEMANTIC ===
pub const DANGER: &str = "#c0392b";
pub const SUCCESS: &str = "#2e7d4f";
pub const WHATSAPP: &str = "#25d366";

/// Custom property name and value for every palette entry.
pub const PALETTE: &[(&str, &str)] = &[
    ("gold", GOLD),
    ("gold-deep", GOLD_DEEP),
    ("gold-soft", GOLD_SOFT),
    ("ink", INK),
    ("ink-soft", INK_SOFT),
    ("ink-muted", INK_MUTED),
    ("ivory", IVORY),
    ("white", WHITE),
    ("border", BORDER),
    ("danger", DANGER),
    ("success", SUCCESS),
    ("whatsapp", WHATSAPP),
];

/// `:root { --name: value; ... }`
pub fn root_variables() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in PALETTE {
        css.push_str(&format!("  --{}: {};\n", name, value));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_block_lists_every_color() {
        let css = root_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --gold: #c9a45c;\n"));
        assert!(css.contains("  --whatsapp: #25d366;\n"));
        assert_eq!(css.matches("--").count(), PALETTE.len());
    }
}
