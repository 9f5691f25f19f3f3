//! Color presets and CSS color helpers.

pub const DEFAULT_COLOR: &str = "#000000";

pub const PRESET_COLORS: [&str; 20] = [
    "#000000", "#333333", "#666666", "#999999", //
    "#EF4444", "#F97316", "#F59E0B", "#EAB308", //
    "#84CC16", "#22C55E", "#10B981", "#14B8A6", //
    "#06B6D4", "#0EA5E9", "#3B82F6", "#6366F1", //
    "#8B5CF6", "#A855F7", "#D946EF", "#EC4899",
];

/// Whether a reported color is plain black, in either engine notation.
pub fn is_default_color(color: &str) -> bool {
    let color = color.trim();
    color.is_empty() || color == "rgb(0, 0, 0)" || color.eq_ignore_ascii_case(DEFAULT_COLOR)
}

/// Toolbar tint for the color button: the active color, unless it is black.
pub fn indicator_color(color: &str) -> Option<&str> {
    (!is_default_color(color)).then_some(color)
}

/// Convert a CSS color to `#rrggbb` for a color input.
///
/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)` (alpha dropped).
pub fn css_to_hex(color: &str) -> Option<String> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return match hex.len() {
            6 => Some(format!("#{}", hex.to_ascii_lowercase())),
            3 => {
                let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
                Some(format!("#{}", expanded.to_ascii_lowercase()))
            }
            _ => None,
        };
    }

    let inner = color
        .strip_prefix("rgba(")
        .or_else(|| color.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>());
    let r = channels.next()?.ok()?;
    let g = channels.next()?.ok()?;
    let b = channels.next()?.ok()?;
    Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
}
