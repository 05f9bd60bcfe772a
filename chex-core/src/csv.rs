//! CSV persistence for baselines and comparison reports.
//!
//! The baseline is the tool's only persisted artifact: UTF-8 text, a header
//! row, then one `filename,checksum` row per tracked file. Fields containing
//! the delimiter, quotes or newlines are double-quoted with embedded quotes
//! doubled, so arbitrary filenames survive a round trip.

use std::borrow::Cow;
use std::io::{Read, Write};

use crate::baseline::BaselineTable;
use crate::compare::ComparisonReport;
use crate::error::{ChexError, Result};
use crate::hash::digest::parse_digest;
use crate::policy::DuplicatePolicy;

pub const BASELINE_COLUMNS: [&str; 2] = ["filename", "checksum"];
pub const REPORT_COLUMNS: [&str; 4] = [
    "filename",
    "status",
    "baseline_checksum",
    "current_checksum",
];

pub fn write_baseline(table: &BaselineTable, mut w: impl Write) -> Result<()> {
    writeln!(w, "{}", BASELINE_COLUMNS.join(","))?;
    for r in &table.records {
        writeln!(w, "{},{}", quote_field(&r.name), r.digest)?;
    }
    Ok(())
}

/// Parse a persisted baseline back into a table.
///
/// Rejects the whole file on the first defect (missing required column,
/// short row, unparseable checksum); no partial recovery. Extra columns are
/// tolerated, the `filename` and `checksum` columns are located by header.
/// Duplicate filenames collapse last-write-wins.
pub fn read_baseline(mut r: impl Read) -> Result<BaselineTable> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    let text = String::from_utf8(buf)
        .map_err(|_| ChexError::MalformedBaseline("not valid UTF-8".into()))?;

    let mut records = parse_records(&text)?;
    if records.is_empty() {
        return Err(ChexError::MalformedBaseline("missing header row".into()));
    }
    let header = records.remove(0);
    let name_col = column(&header, "filename")?;
    let sum_col = column(&header, "checksum")?;

    let mut table = BaselineTable::default();
    for (i, rec) in records.iter().enumerate() {
        let row = i + 2; // 1-based, counting the header
        let name = rec.get(name_col).ok_or_else(|| {
            ChexError::MalformedBaseline(format!("row {row}: missing filename field"))
        })?;
        if name.is_empty() {
            return Err(ChexError::MalformedBaseline(format!(
                "row {row}: empty filename"
            )));
        }
        let field = rec.get(sum_col).ok_or_else(|| {
            ChexError::MalformedBaseline(format!("row {row}: missing checksum field"))
        })?;
        let digest = parse_digest(field).map_err(|e| row_context(row, e))?;
        table.insert(name.clone(), digest, DuplicatePolicy::LastWins)?;
    }
    Ok(table)
}

pub fn write_report(report: &ComparisonReport, mut w: impl Write) -> Result<()> {
    writeln!(w, "{}", REPORT_COLUMNS.join(","))?;
    for row in &report.rows {
        writeln!(
            w,
            "{},{},{},{}",
            quote_field(&row.name),
            row.status.label(),
            row.baseline_digest.as_deref().unwrap_or(""),
            row.current_digest.as_deref().unwrap_or(""),
        )?;
    }
    Ok(())
}

fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn column(header: &[String], want: &str) -> Result<usize> {
    header
        .iter()
        .position(|h| h.trim() == want)
        .ok_or_else(|| ChexError::MalformedBaseline(format!("missing required column {want:?}")))
}

fn row_context(row: usize, e: ChexError) -> ChexError {
    match e {
        ChexError::MalformedBaseline(msg) => {
            ChexError::MalformedBaseline(format!("row {row}: {msg}"))
        }
        other => other,
    }
}

/// Split CSV text into records, honoring quoted fields. `\r\n` and `\n` both
/// end a record; blank lines are dropped.
fn parse_records(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err(ChexError::MalformedBaseline(
            "unterminated quoted field".into(),
        ));
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records.retain(|r| !(r.len() == 1 && r[0].is_empty()));
    Ok(records)
}
