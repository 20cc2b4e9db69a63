// src/specs/schedule.rs
//! Scraping spec for the conference schedule page.
//!
//! The schedule is a single page: one `ul.listview.pane` per conference
//! day, one child element per session. A session carries its type, title
//! and description in class-tagged columns and room/time in a two-paragraph
//! meta block. Dates never appear in machine-readable form anywhere on the
//! page, so day containers are paired positionally with a fixed date list.

use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::DATES;
use crate::core::sanitize::collapse_blank_lines;
use crate::session::SessionRecord;

/// Everything page-structure-dependent, in one table.
#[derive(Clone, Copy, Debug)]
pub struct ScheduleSpec {
    /// One container per conference day, in document order.
    pub days: &'static str,
    /// Paired with day containers by position; the shorter sequence wins.
    pub dates: &'static [&'static str],
    /// First match inside a session element, text content.
    pub session_type: &'static str,
    /// First match inside a session element, text content.
    pub title: &'static str,
    /// Every match contributes one description paragraph.
    pub description: &'static str,
    /// Exactly two matches expected: room first, then time.
    pub meta: &'static str,
}

pub const NICAR_2015: ScheduleSpec = ScheduleSpec {
    days: "ul.listview.pane",
    dates: DATES,
    session_type: ".col-10",
    title: ".title3",
    description: ".col-60 p",
    meta: ".meta p",
};

/// Per-run compiled form of the per-session selectors.
struct Compiled {
    session_type: Selector,
    title: Selector,
    description: Selector,
    meta: Selector,
}

impl Compiled {
    fn new(spec: &ScheduleSpec) -> Result<Self> {
        Ok(Self {
            session_type: compile(spec.session_type)?,
            title: compile(spec.title)?,
            description: compile(spec.description)?,
            meta: compile(spec.meta)?,
        })
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("bad selector {css:?}: {e}"))
}

/// Pull every session record out of a parsed schedule page, in document
/// order. A page with no day containers yields no records, not an error.
pub fn extract_sessions(doc: &Html, spec: &ScheduleSpec) -> Result<Vec<SessionRecord>> {
    let days = compile(spec.days)?;
    let sels = Compiled::new(spec)?;

    let day_els: Vec<ElementRef<'_>> = doc.select(&days).collect();
    if day_els.len() != spec.dates.len() {
        log::warn!(
            "{} day containers but {} dates; pairing stops at the shorter",
            day_els.len(),
            spec.dates.len()
        );
    }

    let mut sessions = Vec::new();
    for (day, date) in day_els.into_iter().zip(spec.dates.iter().copied()) {
        sessions.extend(parse_day(day, date, spec, &sels)?);
    }
    Ok(sessions)
}

/// Every direct child element of a day container is one session.
fn parse_day(
    day: ElementRef<'_>,
    date: &str,
    spec: &ScheduleSpec,
    sels: &Compiled,
) -> Result<Vec<SessionRecord>> {
    let out = day
        .children()
        .filter_map(ElementRef::wrap)
        .map(|el| parse_session(el, date, spec, sels))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("{date}: {} sessions", out.len());
    Ok(out)
}

fn parse_session(
    el: ElementRef<'_>,
    date: &str,
    spec: &ScheduleSpec,
    sels: &Compiled,
) -> Result<SessionRecord> {
    let kind = first_text(el, &sels.session_type)
        .with_context(|| format!("no {:?} element in session", spec.session_type))?;
    let title = first_text(el, &sels.title)
        .with_context(|| format!("no {:?} element in session", spec.title))?;

    let grafs: Vec<String> = el.select(&sels.description).map(text_of).collect();
    let desc = collapse_blank_lines(grafs.join("\n\n").trim());
    let (speakers, description) = split_speakers(&desc);

    // Room first, then time. Positional; the page never labels these.
    let meta: Vec<String> = el.select(&sels.meta).map(text_of).collect();
    let [room, time] = <[String; 2]>::try_from(meta).map_err(|v| {
        anyhow!(
            "expected exactly 2 {:?} paragraphs in session, found {}",
            spec.meta,
            v.len()
        )
    })?;

    Ok(SessionRecord {
        kind,
        title,
        description,
        speakers,
        room,
        time,
        date: date.to_string(),
    })
}

fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(text_of)
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

static SPEAKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(?:Speakers?: ([^\n]+))?(.*)$").unwrap());

/// Split a leading "Speakers: ..." line off a description. Without one, the
/// whole text is the description and there are no speakers.
pub fn split_speakers(text: &str) -> (Option<String>, String) {
    match SPEAKERS.captures(text) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str().to_string()),
            caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        ),
        None => (None, text.trim().to_string()),
    }
}
