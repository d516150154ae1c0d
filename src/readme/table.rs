// Color table rendering for the README
//
// Produces two strings from the color manifest:
// - a Markdown pipe table: Element | Hex | Color | Description
// - link-reference definitions backing the inline swatch images
//
// Hidden groups (`readme` falsy) are skipped. Every other group must pass
// the required-field check before anything is rendered.

use crate::error::GenError;
use crate::palette::{CheckedGroup, ColorManifest};
use crate::util::{pad_to_width, title_case};
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 4] = ["Element", "Hex", "Color", "Description"];

/// Placeholder in the swatch URL template replaced by the hex code
pub const HEX_PLACEHOLDER: &str = "{hex}";

/// One rendered row, cells in header order
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub element: String,
    pub hex: String,
    pub color: String,
    pub description: String,
}

impl Row {
    fn cells(&self) -> [&str; 4] {
        [&self.element, &self.hex, &self.color, &self.description]
    }
}

/// Rendered table plus its reference definitions
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    pub table: String,
    pub refs: String,
}

/// Normalize a manifest hex code for display: no `#`, upper case
pub fn normalize_hex(hex: &str) -> String {
    hex.strip_prefix('#').unwrap_or(hex).to_uppercase()
}

fn description(desc: &str, examples: &[String]) -> String {
    if examples.is_empty() {
        desc.to_string()
    } else {
        format!("{} (ie {})", desc, examples.join(", "))
    }
}

fn row(group: &CheckedGroup<'_>) -> Row {
    let hex = normalize_hex(group.hex);
    Row {
        element: group.element.to_string(),
        hex: format!("![][{hex}] `#{hex}`"),
        color: title_case(group.color_desc),
        description: description(group.desc, group.examples),
    }
}

fn reference(hex: &str, swatch_url: &str) -> String {
    format!("[{}]: {}", hex, swatch_url.replace(HEX_PLACEHOLDER, hex))
}

/// Render the visible groups of `manifest`.
///
/// Fails without producing anything if any visible group is missing a
/// required field.
pub fn render(manifest: &ColorManifest, swatch_url: &str) -> Result<ColorTable, GenError> {
    let checked = manifest
        .groups
        .iter()
        .filter(|g| g.in_readme())
        .map(|g| g.checked())
        .collect::<Result<Vec<_>, _>>()?;

    let rows: Vec<Row> = checked.iter().map(row).collect();
    let refs = checked
        .iter()
        .map(|g| reference(&normalize_hex(g.hex), swatch_url))
        .collect::<Vec<_>>()
        .join("\n");

    tracing::info!(
        "Rendered {} of {} group(s) into the color table",
        rows.len(),
        manifest.groups.len()
    );

    Ok(ColorTable {
        table: format_table(&rows),
        refs,
    })
}

/// Lay rows out as a padded Markdown pipe table (no trailing newline)
pub fn format_table(rows: &[Row]) -> String {
    let mut widths = HEADERS.map(|h| h.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.width());
        }
    }

    let line = |cells: [&str; 4]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad_to_width(cell, width))
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(line(HEADERS));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    lines.push(format!("|{}|", rule.join("|")));
    for row in rows {
        lines.push(line(row.cells()));
    }

    lines.join("\n")
}
