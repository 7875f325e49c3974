use std::fmt::Display;

use console::style;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct Row<'a> {
    #[tabled(rename = "Alias")]
    alias: &'a str,
    #[tabled(rename = "Emoji")]
    code: &'a str,
}

/// Renders `(alias, code)` pairs as a table.
pub fn alias_table<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let rows = entries
        .into_iter()
        .map(|(alias, code)| Row { alias, code });

    Table::new(rows)
        .with(Style::rounded())
        .to_string()
}

/// A dimmed summary line, written to standard error so piped output stays clean.
pub fn summary(msg: impl Display) {
    eprintln!("{}", style(msg).dim())
}

/// A highlighted `label: value` line.
pub fn labelled(label: &str, value: impl Display) {
    println!(
        "{} {}",
        style(format!("{label}:")).bold().cyan(),
        value
    )
}
