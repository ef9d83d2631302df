//! CLI display utilities for formatting output

use crate::scanner::types::ScannerInfo;
use colored::Colorize;

/// Render the registered scanners as an aligned listing
///
/// One line per scanner with its name, required command and headers,
/// followed by an indented description.
pub fn format_scanner_table(scanners: &[ScannerInfo], use_color: bool) -> String {
    if scanners.is_empty() {
        return "No scanners registered.\n".to_string();
    }

    let name_width = scanners
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0)
        .max("Scanner".len());
    let command_width = scanners
        .iter()
        .map(|s| s.command.as_deref().unwrap_or("-").len())
        .max()
        .unwrap_or(0)
        .max("Command".len());

    let mut out = String::new();
    let header = format!(
        "{:<name_width$}  {:<command_width$}  Headers",
        "Scanner", "Command"
    );
    if use_color {
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');
    out.push_str(&"-".repeat(name_width + command_width + 4 + "Headers".len()));
    out.push('\n');

    for info in scanners {
        let name = format!("{:<name_width$}", info.name);
        let name = if use_color {
            name.green().to_string()
        } else {
            name
        };
        out.push_str(&format!(
            "{}  {:<command_width$}  {}\n",
            name,
            info.command.as_deref().unwrap_or("-"),
            info.headers.join(", ")
        ));
        if !info.description.is_empty() {
            out.push_str(&format!("{:name_width$}  {}\n", "", info.description));
        }
    }

    out
}

/// Print the scanner listing to stdout
pub fn display_scanner_table(scanners: &[ScannerInfo], use_color: bool) {
    print!("{}", format_scanner_table(scanners, use_color));
}
