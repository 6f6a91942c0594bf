//! Table rendering for terminal output

use tabled::builder::Builder;
use tabled::settings::Style;

/// Render rows under a header row, or `empty_message` when there are no rows
pub fn render_table(headers: &[&str], rows: Vec<Vec<String>>, empty_message: &str) -> String {
    if rows.is_empty() {
        return format!("{}\n", empty_message);
    }

    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    format!("{}\n", table)
}
