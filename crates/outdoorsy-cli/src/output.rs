//! Output formatting module

use std::io::Write;
use std::path::Path;

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table};
use outdoorsy_app::app::{CustomerListing, IngestReport};
use outdoorsy_types::{CustomerVehicleRecord, OutputFormat, Result, COLUMN_HEADERS};

use crate::ui::{MessageType, Style};

/// Render records as a bordered table with human-readable headers
///
/// Lengths are right-aligned. An empty slice still renders the header row.
pub fn render_table(records: &[CustomerVehicleRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED);
    table.set_header(COLUMN_HEADERS.to_vec());

    for record in records {
        let [first, last, email, vehicle_type, vehicle_name, length] = record.display_fields();
        table.add_row(vec![
            Cell::new(first),
            Cell::new(last),
            Cell::new(email),
            Cell::new(vehicle_type),
            Cell::new(vehicle_name),
            Cell::new(length).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

/// Message shown when a view finds no imported data
pub fn no_data_message(style: &Style, db_file: &Path) -> String {
    format!(
        "{}\n{}",
        style.message(
            MessageType::Info,
            &format!("No data yet: nothing has been imported into {}", db_file.display())
        ),
        style.message(
            MessageType::Hint,
            "Upload a file first, e.g. `outdoorsy import customers.csv --delimiter comma`"
        )
    )
}

pub fn output_listing<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    listing: &CustomerListing,
) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let content = serde_json::to_string_pretty(&listing.records)?;
            writeln!(out, "{}", content)?;
        }
        OutputFormat::Table => {
            writeln!(out, "{}", render_table(&listing.records))?;
        }
    }
    Ok(())
}

pub fn output_report<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    report: &IngestReport,
    db_file: &Path,
    style: &Style,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        writeln!(out, "{}", content)?;
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        style.message(
            MessageType::Ok,
            &format!("File uploaded successfully! Database is located at: {}", db_file.display())
        )
    )?;
    writeln!(out, "{}", style.message_detail("Rows imported", &report.inserted.to_string()))?;

    if !report.is_clean() {
        writeln!(
            out,
            "{}",
            style.message(
                MessageType::Warn,
                &format!("{} line(s) were skipped", report.rejected.len())
            )
        )?;
        for rejected in &report.rejected {
            writeln!(
                out,
                "{}",
                style.message_detail(&format!("Line {}", rejected.line), &rejected.reason)
            )?;
        }
    }

    Ok(())
}
