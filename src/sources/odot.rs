//! ODOT contract administration lettings.
//!
//! ODOT advertises lettings as PDF ads linked from the contracts page; the
//! extractor keys on navigation wording (`letting`, `schedule`,
//! `advertisement`) to find them. Per-letting deadlines live in the linked
//! schedule, hence the `See Schedule` sentinel.

use chrono::NaiveDate;
use scraper::{Html, Selector};

use super::{text_of, Extractor};
use crate::model::{BidRecord, Deadline, Drawings, Status};
use crate::normalize::truncate;

const SOURCE_URL: &str =
    "https://www.dot.state.oh.us/Divisions/ContractAdmin/Contracts/Pages/default.aspx";
const LABEL: &str = "ODOT Bid Letting";

/// Navigation wording that marks a letting link. These identify structural
/// units, not project scope.
const LETTING_TERMS: &[&str] = &["letting", "schedule", "advertisement"];

pub struct Odot {
    pub url: String,
}

impl Default for Odot {
    fn default() -> Self {
        Self {
            url: SOURCE_URL.to_string(),
        }
    }
}

impl Extractor for Odot {
    fn label(&self) -> &str {
        LABEL
    }

    fn state(&self) -> &str {
        "OH"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn extract(&self, html: &str, posted: NaiveDate) -> Vec<BidRecord> {
        let document = Html::parse_document(html);
        let link_sel = Selector::parse("a[href]").unwrap();

        let mut bids = Vec::new();
        for link in document.select(&link_sel) {
            let text = text_of(&link);
            let lower = text.to_lowercase();
            if text.is_empty() || lower.contains("awarded") {
                continue;
            }
            if !LETTING_TERMS.iter().any(|term| lower.contains(term)) {
                continue;
            }

            bids.push(BidRecord {
                title: format!("ODOT Letting — {}", truncate(&text, 80)),
                subtitle: "Ohio DOT construction letting — check for electrical/signalization scope"
                    .into(),
                location: "Statewide".into(),
                state: "OH".into(),
                status: Status::Open,
                deadline: Deadline::SeeSchedule,
                value: "See Bid Docs".into(),
                value_sortable: 0,
                posted,
                source: LABEL.into(),
                url: SOURCE_URL.into(),
                drawings: Drawings::Yes,
                drawings_note: "ODOT eProposal and Bid Express".into(),
            });
        }
        bids
    }

    fn fallback(&self, posted: NaiveDate) -> BidRecord {
        BidRecord {
            title: "ODOT 2026 Statewide Highway Electrical Lettings".into(),
            subtitle: "Multiple lighting, signalization, and ITS electrical projects — check Bid Express for current listings".into(),
            location: "Statewide".into(),
            state: "OH".into(),
            status: Status::Open,
            deadline: Deadline::Varies,
            value: "$1M–$5M".into(),
            value_sortable: 5_000_000,
            posted,
            source: LABEL.into(),
            url: SOURCE_URL.into(),
            drawings: Drawings::Yes,
            drawings_note: "Full plans via ODOT eProposal and Bid Express".into(),
        }
    }
}
