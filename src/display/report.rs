//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the report bundles.

/// Format a percentage with two decimals, as the KPI tiles show it
pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for a ratio already clamped to [0, 1]
pub fn format_progress(ratio: f64, width: usize) -> String {
    let bar = format_bar(ratio, 1.0, width);
    if ratio <= 0.0 {
        format!("[{}] 0%", "░".repeat(width))
    } else {
        format!("[{}] {:.0}%", bar, ratio * 100.0)
    }
}

/// Format a section title underlined to its own width
pub fn format_title(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
