// src/runner.rs

use anyhow::Result;
use scraper::Html;

use crate::core::{encoding, net};
use crate::session::SessionRecord;
use crate::specs::schedule::{self, ScheduleSpec};

/// Fetch the schedule page and extract every session record: one GET, one
/// parse, one pass.
pub fn collect_sessions(url: &str, spec: &ScheduleSpec) -> Result<Vec<SessionRecord>> {
    log::info!("fetching {url}");
    let raw = net::http_get(url)?;
    let text = encoding::fix_encoding(&raw)?;
    let doc = Html::parse_document(&text);
    let sessions = schedule::extract_sessions(&doc, spec)?;
    log::info!("extracted {} sessions", sessions.len());
    Ok(sessions)
}
