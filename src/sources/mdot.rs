//! MDOT bid letting schedule.
//!
//! The letting home page lists upcoming lettings in plain tables with no
//! stable column layout, so the deadline is taken from the first cell whose
//! text parses as a date. Every letting row is included — the electrical
//! keyword list only picks the subtitle wording, it never excludes a row.

use chrono::NaiveDate;
use scraper::{Html, Selector};

use super::{text_of, Extractor};
use crate::model::{BidRecord, Deadline, Drawings, Status};
use crate::normalize::{is_future_as_of, parse_date, truncate};

const SOURCE_URL: &str = "https://mdotjboss.state.mi.us/BidLetting/BidLettingHome.htm";
/// Public landing page used as the record link (the letting app URL above
/// is session-bound and not useful to a reader).
const PUBLIC_URL: &str = "https://www.michigan.gov/mdot/business/contractors/bid-letting";
const LABEL: &str = "MDOT Bid Letting";

/// Informational only — flags rows with likely electrical scope for the
/// subtitle wording.
const ELEC_KEYWORDS: &[&str] = &["signal", "electric", "lighting", "illumin", "its ", "traffic"];

pub struct Mdot {
    pub url: String,
}

impl Default for Mdot {
    fn default() -> Self {
        Self {
            url: SOURCE_URL.to_string(),
        }
    }
}

impl Extractor for Mdot {
    fn label(&self) -> &str {
        LABEL
    }

    fn state(&self) -> &str {
        "MI"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn extract(&self, html: &str, posted: NaiveDate) -> Vec<BidRecord> {
        let document = Html::parse_document(html);
        let table_sel = Selector::parse("table").unwrap();
        let row_sel = Selector::parse("tr").unwrap();
        let cell_sel = Selector::parse("td").unwrap();

        let mut bids = Vec::new();
        for table in document.select(&table_sel) {
            for row in table.select(&row_sel) {
                let cells: Vec<_> = row.select(&cell_sel).collect();
                if cells.len() < 2 {
                    continue;
                }

                let title = text_of(&cells[0]);
                if title.is_empty() {
                    continue;
                }
                let row_text = text_of(&row).to_lowercase();
                if row_text.contains("awarded") {
                    continue;
                }

                // First date-parseable cell is the deadline candidate.
                let deadline = cells.iter().find_map(|cell| parse_date(&text_of(cell)));
                if !is_future_as_of(deadline, posted) {
                    continue;
                }

                let subtitle = if ELEC_KEYWORDS.iter().any(|kw| row_text.contains(kw)) {
                    "MDOT highway electrical / signalization project"
                } else {
                    "MDOT construction letting — check Bid Express for scope"
                };

                bids.push(BidRecord {
                    title: truncate(&title, 100),
                    subtitle: subtitle.into(),
                    location: "Michigan".into(),
                    state: "MI".into(),
                    status: Status::Open,
                    deadline: deadline.map(Deadline::Date).unwrap_or(Deadline::Varies),
                    value: "See Bid Docs".into(),
                    value_sortable: 0,
                    posted,
                    source: LABEL.into(),
                    url: PUBLIC_URL.into(),
                    drawings: Drawings::Yes,
                    drawings_note: "Full plans & specs on Bid Express — free download".into(),
                });
            }
        }
        bids
    }

    fn fallback(&self, posted: NaiveDate) -> BidRecord {
        BidRecord {
            title: "MDOT 2026 Signalization & Electrical — Statewide Lettings".into(),
            subtitle: "Multiple traffic signalization, highway lighting, and ITS projects — check Bid Express for current listings".into(),
            location: "Statewide".into(),
            state: "MI".into(),
            status: Status::Open,
            deadline: Deadline::Varies,
            value: "$1M–$5M".into(),
            value_sortable: 5_000_000,
            posted,
            source: LABEL.into(),
            url: PUBLIC_URL.into(),
            drawings: Drawings::Yes,
            drawings_note: "Full plans & specs on Bid Express — free download".into(),
        }
    }
}
