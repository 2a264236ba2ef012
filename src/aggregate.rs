// Copyright 2026 Bidwatch Contributors
// SPDX-License-Identifier: Apache-2.0

//! Aggregation: status reclassification, cross-source dedup, feed assembly.
//!
//! The aggregator is the only owner of the merged working list, scoped to a
//! single run. It never fails: whatever the extractors produced — live
//! records, fallbacks, or nothing but standing entries — it always assembles
//! a complete [`Feed`].

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use tracing::info;

use crate::model::{BidRecord, Deadline, Feed, Status};

/// A record whose concrete deadline is this many days away or fewer is
/// reclassified as `closing`.
pub const CLOSING_WINDOW_DAYS: i64 = 14;

/// Fixed list of consulted sources, published in every feed regardless of
/// which extractors actually returned data.
pub const SOURCES_CHECKED: [&str; 11] = [
    "U-M AEC (umaec.umich.edu)",
    "MDOT Bid Letting (michigan.gov/mdot)",
    "DTMB SIGMA VSS (michigan.gov/dtmb)",
    "MSU IPF Plan Room (ipf.msu.edu)",
    "BidNet / MITN (bidnetdirect.com/mitn)",
    "OFCC Bids & RFQs (ofcc.ohio.gov)",
    "OFCC Public Notices (ofcc.ohio.gov)",
    "ODOT Contract Admin (dot.state.oh.us)",
    "OSU Bid Express (fod.osu.edu)",
    "Franklin County (bids.franklincountyohio.gov)",
    "BidNet / Ohio (bidnetdirect.com/ohio)",
];

/// Concatenated drafts in, finished feed out.
///
/// Input order is preserved through dedup, so "first occurrence wins" is
/// deterministic as long as callers append source groups in a fixed order.
pub fn aggregate(drafts: Vec<BidRecord>, today: NaiveDate, last_updated: String) -> Feed {
    let mut bids = drafts;
    reclassify_status(&mut bids, today);
    let bids = dedup_by_title(bids);

    for (state, count) in state_counts(&bids) {
        info!("{state}: {count} bids");
    }

    Feed {
        last_updated,
        sources_checked: SOURCES_CHECKED.iter().map(|s| s.to_string()).collect(),
        bids,
    }
}

/// Recompute `status` from deadline proximity. Extractor-asserted status is
/// never trusted. Sentinel deadlines stay `open`.
pub fn reclassify_status(bids: &mut [BidRecord], today: NaiveDate) {
    for bid in bids {
        if let Deadline::Date(deadline) = bid.deadline {
            let days = (deadline - today).num_days();
            bid.status = if (0..=CLOSING_WINDOW_DAYS).contains(&days) {
                Status::Closing
            } else {
                Status::Open
            };
        } else {
            bid.status = Status::Open;
        }
    }
}

/// Drop records whose lowercase, trimmed title was already seen; first
/// occurrence wins regardless of source. Idempotent.
pub fn dedup_by_title(bids: Vec<BidRecord>) -> Vec<BidRecord> {
    let mut seen = HashSet::new();
    bids.into_iter()
        .filter(|bid| seen.insert(bid.title.trim().to_lowercase()))
        .collect()
}

/// Bid counts per state, for the operator summary only — not part of the
/// persisted feed.
pub fn state_counts(bids: &[BidRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for bid in bids {
        *counts.entry(bid.state.clone()).or_insert(0) += 1;
    }
    counts
}
