// Renderer module - formatting utilities
// Most rendering logic is in layout.rs; this module holds the shared
// formatting helpers.

/// Format a price with precision scaled to its magnitude
pub fn format_price(value: f64) -> String {
    if value < 0.0001 {
        format!("${:.8}", value)
    } else if value < 0.01 {
        format!("${:.6}", value)
    } else if value < 1.0 {
        format!("${:.3}", value)
    } else if value < 100.0 {
        format!("${:.2}", value)
    } else {
        format!("${}", value.round() as i64)
    }
}

/// Signed percentage with two decimals
pub fn format_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Arrow glyph for a direction flag
pub fn trend_arrow(direction: i8) -> &'static str {
    match direction {
        d if d > 0 => "↑",
        d if d < 0 => "↓",
        _ => "→",
    }
}
