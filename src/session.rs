// src/session.rs

use serde::Serialize;

/// One scheduled talk or panel. Built once during extraction, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    /// Short category label, e.g. "Panel" or "Hands-on".
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    /// Body text with the leading speaker line removed and blank-line runs
    /// collapsed.
    pub description: String,
    /// Names from a leading "Speakers: ..." line, when the description
    /// carries one.
    pub speakers: Option<String>,
    pub room: String,
    pub time: String,
    /// Assigned positionally from the configured date list, not read from
    /// the page.
    pub date: String,
}
