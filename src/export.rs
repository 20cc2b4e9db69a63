// src/export.rs

use std::io::{self, Write};

use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::session::SessionRecord;

/// Fixed CSV column order.
pub const CSV_COLUMNS: [&str; 7] =
    ["date", "time", "type", "title", "description", "speakers", "room"];

/// Write the record list to `w` in the requested format. An unsupported
/// format value fails before a single byte is written.
pub fn write_sessions<W: Write>(mut w: W, sessions: &[SessionRecord], format: &str) -> Result<()> {
    match format {
        "json" => write_json(&mut w, sessions),
        "csv" => write_csv(&mut w, sessions),
        other => bail!("'{other}' is not a supported format"),
    }
}

fn write_json<W: Write>(w: &mut W, sessions: &[SessionRecord]) -> Result<()> {
    let fmt = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(w, fmt);
    sessions.serialize(&mut ser)?;
    Ok(())
}

fn write_csv<W: Write>(w: &mut W, sessions: &[SessionRecord]) -> Result<()> {
    write_row(w, &CSV_COLUMNS)?;
    for s in sessions {
        write_row(w, &[
            s.date.as_str(),
            s.time.as_str(),
            s.kind.as_str(),
            s.title.as_str(),
            s.description.as_str(),
            s.speakers.as_deref().unwrap_or(""),
            s.room.as_str(),
        ])?;
    }
    Ok(())
}

/* ---------------- CSV writing ---------------- */

fn needs_quotes(cell: &str) -> bool {
    cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}

fn write_row<W: Write>(w: &mut W, cells: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in cells {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}
