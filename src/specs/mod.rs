// src/specs/mod.rs
//! Page-specific scraping specs.
//!
//! Each spec encodes *where the data lives in the HTML* for one page: the
//! selectors, the positional assumptions, and how to shape what they match
//! into typed records. Everything page-structure-dependent sits in the
//! spec's table, so a markup change on the site is a one-place edit.
//!
//! Specs do not fetch, cache, or format output; callers hand them a parsed
//! document and get records back.

pub mod schedule;
