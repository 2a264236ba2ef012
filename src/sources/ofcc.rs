//! Ohio Facilities Construction Commission bids & RFQs.
//!
//! OFCC publishes solicitations as PDF links (`SOL-XXX-XXXXXX` naming) mixed
//! with card layouts and occasional notice tables, so this extractor makes
//! two passes over the same document: an anchor scan for solicitation links
//! and a table scan for notice rows. Deadlines live inside the PDFs, hence
//! the `See Document` sentinel.

use chrono::NaiveDate;
use scraper::{Html, Selector};

use super::{text_of, Extractor};
use crate::model::{BidRecord, Deadline, Drawings, Status};
use crate::normalize::truncate;

const SOURCE_URL: &str = "https://ofcc.ohio.gov/project-opportunities/bids-rfqs";
const LABEL: &str = "OFCC / Bid Express";

pub struct Ofcc {
    pub url: String,
}

impl Default for Ofcc {
    fn default() -> Self {
        Self {
            url: SOURCE_URL.to_string(),
        }
    }
}

impl Ofcc {
    fn record(&self, title: String, subtitle: &str, note: &str, posted: NaiveDate) -> BidRecord {
        BidRecord {
            title,
            subtitle: subtitle.into(),
            location: "Ohio".into(),
            state: "OH".into(),
            status: Status::Open,
            deadline: Deadline::SeeDocument,
            value: "See Bid Docs".into(),
            value_sortable: 0,
            posted,
            source: LABEL.into(),
            url: SOURCE_URL.into(),
            drawings: Drawings::Yes,
            drawings_note: note.into(),
        }
    }
}

impl Extractor for Ofcc {
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
        let mut bids = Vec::new();

        // Pass 1: solicitation links.
        let link_sel = Selector::parse("a[href]").unwrap();
        for link in document.select(&link_sel) {
            let href = link.value().attr("href").unwrap_or("");
            let text = text_of(&link);
            if text.to_lowercase().contains("awarded") {
                continue;
            }
            if href.to_uppercase().contains("SOL-") || text.to_uppercase().contains("BID") {
                let title = if text.is_empty() {
                    "OFCC Construction Bid".to_string()
                } else {
                    truncate(&text, 120)
                };
                bids.push(self.record(
                    title,
                    "Ohio Facilities Construction Commission solicitation",
                    "Available on ofcc.ohio.gov and Bid Express",
                    posted,
                ));
            }
        }

        // Pass 2: public notice tables, first row is the header.
        let table_sel = Selector::parse("table").unwrap();
        let row_sel = Selector::parse("tr").unwrap();
        let cell_sel = Selector::parse("td").unwrap();
        for table in document.select(&table_sel) {
            for row in table.select(&row_sel).skip(1) {
                let cells: Vec<_> = row.select(&cell_sel).collect();
                if cells.len() < 2 {
                    continue;
                }
                let title = text_of(&cells[0]);
                if title.len() <= 5 || text_of(&row).to_lowercase().contains("awarded") {
                    continue;
                }
                bids.push(self.record(
                    truncate(&title, 120),
                    "OFCC public notice — may include electrical scope",
                    "Bid Express — free download after registration",
                    posted,
                ));
            }
        }

        bids
    }

    fn fallback(&self, posted: NaiveDate) -> BidRecord {
        BidRecord {
            title: "OFCC Construction Bids & RFQs — Current Solicitations".into(),
            subtitle: "Ohio Facilities Construction Commission opportunities — check ofcc.ohio.gov for current listings".into(),
            location: "Ohio".into(),
            state: "OH".into(),
            status: Status::Open,
            deadline: Deadline::Varies,
            value: "See Bid Docs".into(),
            value_sortable: 0,
            posted,
            source: LABEL.into(),
            url: SOURCE_URL.into(),
            drawings: Drawings::Yes,
            drawings_note: "Available on ofcc.ohio.gov and Bid Express".into(),
        }
    }
}
