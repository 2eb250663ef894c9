//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table headers come
//! from the localization catalog, so they are built row by row with the
//! `tabled` builder instead of a derive.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list in the chosen format.
///
/// - `table`: `headers` plus one row of cells per item
/// - `json` / `json-compact` / `yaml`: the items themselves via serde
/// - `plain`: one `plain_fn` line per item
pub fn render_list<T: Serialize>(
    format: OutputFormat,
    data: &[T],
    headers: &[&str],
    cells: impl Fn(&T) -> Vec<String>,
    plain_fn: impl Fn(&T) -> String,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(render_table(headers, data.iter().map(cells))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(data)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputFormat::Plain => Ok(data.iter().map(plain_fn).collect::<Vec<_>>().join("\n")),
    }
}

/// A heading printed above a table, bold when color is on.
pub fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_owned()
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn render_table(headers: &[&str], rows: impl Iterator<Item = Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().copied());
    for row in rows {
        builder.push_record(row);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Item {
        id: i64,
        name: &'static str,
    }

    const ITEMS: [Item; 2] = [
        Item { id: 1, name: "alpha" },
        Item { id: 2, name: "beta" },
    ];

    fn render(format: OutputFormat) -> String {
        render_list(
            format,
            &ITEMS,
            &["ИД", "Name"],
            |i| vec![i.id.to_string(), i.name.to_owned()],
            |i| i.id.to_string(),
        )
        .unwrap()
    }

    #[test]
    fn table_uses_given_headers() {
        let table = render(OutputFormat::Table);
        assert!(table.contains("ИД"));
        assert!(table.contains("beta"));
    }

    #[test]
    fn structured_formats_serialize_items() {
        assert_eq!(
            render(OutputFormat::JsonCompact),
            r#"[{"id":1,"name":"alpha"},{"id":2,"name":"beta"}]"#
        );
        assert!(render(OutputFormat::Yaml).contains("name: alpha"));
        assert_eq!(render(OutputFormat::Plain), "1\n2");
    }

    #[test]
    fn heading_is_plain_without_color() {
        assert_eq!(heading("Devices", false), "Devices");
        assert_ne!(heading("Devices", true), "Devices");
    }
}
