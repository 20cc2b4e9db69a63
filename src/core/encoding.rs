// src/core/encoding.rs

//! Repair for double-encoded response bodies.
//!
//! The schedule page arrives with UTF-8 multi-byte sequences sitting in the
//! body as raw bytes; read one byte at a time they render as Latin-1
//! mojibake ("Ã©" where "é" belongs). This pass finds byte runs shaped like
//! a UTF-8 sequence (lead byte 0xC2-0xF4 followed by continuation bytes
//! 0x80-0xBF) and re-decodes them; every other byte keeps its one-byte code
//! point.
//!
//! It is a heuristic: a run of unrelated single-byte characters that happens
//! to fall in those ranges matches too. A matched run that is not valid
//! UTF-8 is an error, never a silent pass-through.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::bytes::Regex;

static UTF8_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)[\xC2-\xF4][\x80-\xBF]+").unwrap());

/// Decode `raw` into text, re-interpreting embedded UTF-8 byte runs.
/// Input with no such runs comes back unchanged.
pub fn fix_encoding(raw: &[u8]) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut last = 0;
    for m in UTF8_RUN.find_iter(raw) {
        push_single_byte(&mut out, &raw[last..m.start()]);
        let run = std::str::from_utf8(m.as_bytes())
            .with_context(|| format!("byte run at offset {} is not valid UTF-8", m.start()))?;
        out.push_str(run);
        last = m.end();
    }
    push_single_byte(&mut out, &raw[last..]);
    Ok(out)
}

/// Emit each byte as its own code point (the Latin-1 reading).
fn push_single_byte(out: &mut String, bytes: &[u8]) {
    for &b in bytes {
        out.push(b as char);
    }
}
