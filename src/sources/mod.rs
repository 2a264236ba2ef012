// Copyright 2026 Bidwatch Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-source extraction heuristics.
//!
//! Each live portal gets one module implementing [`Extractor`]: a pure
//! function from fetched HTML to draft [`BidRecord`]s, plus one static
//! fallback record used when extraction yields nothing (fetch failure or a
//! markup change). Sources are independently replaceable — a structural
//! change in one portal's markup must not affect the others.
//!
//! None of the extractors filter by electrical relevance. Keyword lists only
//! inform metadata wording; every candidate construction bid is included and
//! the dashboard filters downstream. This is deliberate — many general
//! construction projects carry electrical scope.

pub mod mdot;
pub mod odot;
pub mod ofcc;
pub mod standing;
pub mod umich;

use chrono::NaiveDate;
use scraper::ElementRef;

use crate::fetch::Fetcher;
use crate::model::BidRecord;

/// One live source: where to fetch, how to read the markup, and what to
/// emit when the markup yields nothing.
pub trait Extractor {
    /// Human-readable source label, e.g. `"U-M AEC"`.
    fn label(&self) -> &str;

    /// Two-letter state tag for operator output.
    fn state(&self) -> &str;

    /// Page fetched for this source. A struct field, so tests can point a
    /// source at a fixture server.
    fn url(&self) -> &str;

    /// Turn raw HTML into zero or more draft records. Pure: no I/O, no
    /// clock reads beyond the supplied run date.
    fn extract(&self, html: &str, posted: NaiveDate) -> Vec<BidRecord>;

    /// The one static record substituted when extraction yields nothing,
    /// so the source is never silently absent from the feed.
    fn fallback(&self, posted: NaiveDate) -> BidRecord;
}

/// Fetch-then-extract driver with explicit fallback substitution.
///
/// Two stages: raw extraction, then — iff it produced zero drafts —
/// exactly one fallback record. A failed fetch skips extraction entirely
/// and lands in the same fallback path.
pub async fn scrape(fetcher: &Fetcher, source: &dyn Extractor, posted: NaiveDate) -> Vec<BidRecord> {
    println!("[{}] Scraping {}...", source.state(), source.label());

    let fetched = fetcher.get(source.url()).await;
    let drafts = if fetched.ok {
        source.extract(&fetched.body, posted)
    } else {
        Vec::new()
    };

    if drafts.is_empty() {
        println!("  No live listings found — using fallback entry");
        return vec![source.fallback(posted)];
    }

    println!("  Found {} entries", drafts.len());
    drafts
}

/// Visible text of an element, whitespace-collapsed and trimmed.
pub(crate) fn text_of(el: &ElementRef<'_>) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
