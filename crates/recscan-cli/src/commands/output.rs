//! Table and report formatting.

use std::fs;
use std::io;
use std::path::Path;

use recscan_core::models::{TableFormat, RECORD_COLUMNS};
use recscan_core::{Record, TemplateMatch};

/// Write records to `path` in the given format.
pub fn write_table(path: &Path, records: &[Record], format: TableFormat) -> anyhow::Result<()> {
    match format {
        TableFormat::Csv => {
            let mut wtr = csv::Writer::from_path(path)?;
            write_csv(&mut wtr, records)?;
        }
        TableFormat::Json => {
            fs::write(path, serde_json::to_string_pretty(records)?)?;
        }
    }
    Ok(())
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, records: &[Record]) -> anyhow::Result<()> {
    wtr.write_record(RECORD_COLUMNS)?;
    for record in records {
        wtr.write_record(record.fields())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Records as CSV text, header included.
pub fn format_csv(records: &[Record]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    write_csv(&mut wtr, records)?;
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Human-readable listing, optionally naming the template behind each record.
pub fn format_text(matches: &[TemplateMatch], show_templates: bool) -> String {
    let mut output = String::new();

    for (i, m) in matches.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}", i + 1, m.record));
        if show_templates {
            output.push_str(&format!("  [{} #{}]", m.template, m.template.number()));
        }
        output.push('\n');
    }

    output
}
