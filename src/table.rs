//! Presence matrix construction and markdown rendering.

use crate::catalog::driver_names;
use crate::scan::VersionDriverMap;

/// The driver presence matrix.
///
/// Row 0 is the header (`"Kernel"` plus the driver columns in ascending
/// name order); each data row is one kernel version, newest first, with
/// `"X"`/`"-"` cells marking driver presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DriverTable {
    /// Build the matrix from scan results using the catalog column order.
    pub fn build(map: &VersionDriverMap) -> Self {
        Self::with_columns(map, &driver_names())
    }

    fn with_columns(map: &VersionDriverMap, drivers: &[&str]) -> Self {
        let mut header = Vec::with_capacity(drivers.len() + 1);
        header.push("Kernel".to_string());
        header.extend(drivers.iter().map(|d| d.to_string()));

        let mut rows = Vec::with_capacity(map.len());
        for (version, present) in map.iter().rev() {
            let mut row = Vec::with_capacity(drivers.len() + 1);
            row.push(version.label());
            for driver in drivers {
                row.push(if present.contains(driver) { "X" } else { "-" }.to_string());
            }
            rows.push(row);
        }

        Self { header, rows }
    }

    /// The header row.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The data rows, newest kernel first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Render the matrix as a markdown table.
    ///
    /// Cell width is derived from the header row only; a data cell wider
    /// than the widest header cell misaligns its column rather than being
    /// truncated.
    pub fn to_markdown(&self) -> String {
        let width = self.header.iter().map(|c| c.len()).max().unwrap_or(0);

        let mut out = String::new();

        let mut cells = self.header.iter();
        if let Some(first) = cells.next() {
            out.push_str(&format!("| {:<width$} ", first, width = width));
        }
        for cell in cells {
            out.push_str(&format!("| {:^width$} ", cell, width = width));
        }
        out.push_str("|\n");

        out.push_str(&format!("|-{}:|", "-".repeat(width)));
        for _ in 1..self.header.len() {
            out.push_str(&format!(":{}:|", "-".repeat(width)));
        }
        out.push('\n');

        for row in &self.rows {
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                out.push_str(&format!("| {:>width$} ", first, width = width));
            }
            for cell in cells {
                out.push_str(&format!("| {:^width$} ", cell, width = width));
            }
            out.push_str("|\n");
        }

        out
    }
}
