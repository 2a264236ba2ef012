//! University of Michigan AEC "Out to Bid" page.
//!
//! Project tables with a `P###### – Name` convention in the first column and
//! the bid-due date in the last. Awarded projects stay on the page for a
//! while, so rows mentioning "awarded" are skipped.

use chrono::NaiveDate;
use regex::Regex;
use scraper::{Html, Selector};

use super::{text_of, Extractor};
use crate::model::{BidRecord, Deadline, Drawings, Status};
use crate::normalize::{is_future_as_of, parse_date, truncate};

const SOURCE_URL: &str = "https://umaec.umich.edu/for-vendors/bids-proposals/";
const LABEL: &str = "U-M AEC";

pub struct Umich {
    pub url: String,
}

impl Default for Umich {
    fn default() -> Self {
        Self {
            url: SOURCE_URL.to_string(),
        }
    }
}

impl Extractor for Umich {
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
        let cell_sel = Selector::parse("td, th").unwrap();
        // Project number prefix, e.g. "P00012345 – Hospital Switchgear".
        let code_re = Regex::new(r"^(P\d+)\s*[–-]\s*(.*)").unwrap();

        let mut bids = Vec::new();
        for table in document.select(&table_sel) {
            for row in table.select(&row_sel) {
                let cells: Vec<_> = row.select(&cell_sel).collect();
                if cells.len() < 2 {
                    continue;
                }

                let text = text_of(&cells[0]);
                if text.is_empty() || (text.contains("Project") && text.contains("Name")) {
                    continue;
                }
                if text_of(&row).to_lowercase().contains("awarded") {
                    continue;
                }

                let (code, mut title) = match code_re.captures(&text) {
                    Some(caps) => (Some(caps[1].to_string()), caps[2].trim().to_string()),
                    None => (None, text.clone()),
                };
                if title.is_empty() {
                    title = text.clone();
                }

                let deadline = parse_date(&text_of(&cells[cells.len() - 1]));
                if !is_future_as_of(deadline, posted) {
                    continue;
                }

                let subtitle = match &code {
                    Some(code) => format!("{code} · University of Michigan construction project"),
                    None => "University of Michigan construction project".to_string(),
                };

                bids.push(BidRecord {
                    title: truncate(&title, 120),
                    subtitle,
                    location: "Ann Arbor".into(),
                    state: "MI".into(),
                    status: Status::Open,
                    deadline: deadline.map(Deadline::Date).unwrap_or(Deadline::Tbd),
                    value: "See Bid Docs".into(),
                    value_sortable: 0,
                    posted,
                    source: LABEL.into(),
                    url: SOURCE_URL.into(),
                    drawings: Drawings::Reg,
                    drawings_note: "BuildingConnected — vendor registration required".into(),
                });
            }
        }
        bids
    }

    fn fallback(&self, posted: NaiveDate) -> BidRecord {
        BidRecord {
            title: "U-M AEC — Out to Bid Construction Projects".into(),
            subtitle: "University of Michigan AEC bids & proposals — check the Out to Bid page for current listings".into(),
            location: "Ann Arbor".into(),
            state: "MI".into(),
            status: Status::Open,
            deadline: Deadline::Varies,
            value: "See Bid Docs".into(),
            value_sortable: 0,
            posted,
            source: LABEL.into(),
            url: SOURCE_URL.into(),
            drawings: Drawings::Reg,
            drawings_note: "BuildingConnected — vendor registration required".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posted() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn extract(html: &str) -> Vec<BidRecord> {
        Umich::default().extract(html, posted())
    }

    #[test]
    fn test_code_and_name_row() {
        let html = r#"
        <table>
          <tr><th>Project Name</th><th>Bids Due</th></tr>
          <tr><td>P123 – Electrical Upgrade</td><td>12/31/2099</td></tr>
        </table>
        "#;
        let bids = extract(html);
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].title, "Electrical Upgrade");
        assert!(bids[0].subtitle.contains("P123"));
        assert_eq!(bids[0].deadline.to_string(), "2099-12-31");
        assert_eq!(bids[0].status, Status::Open);
        assert_eq!(bids[0].state, "MI");
    }

    #[test]
    fn test_past_deadline_discards_row() {
        let html = r#"
        <table>
          <tr><td>P123 – Electrical Upgrade</td><td>01/01/2000</td></tr>
        </table>
        "#;
        assert!(extract(html).is_empty());
    }

    #[test]
    fn test_awarded_row_skipped() {
        let html = r#"
        <table>
          <tr><td>P777 – Chiller Plant</td><td>12/31/2099</td><td>Awarded</td></tr>
          <tr><td>P888 – Boiler House</td><td>12/31/2099</td><td>Open</td></tr>
        </table>
        "#;
        let bids = extract(html);
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].title, "Boiler House");
    }

    #[test]
    fn test_row_without_code_uses_full_text() {
        let html = r#"
        <table>
          <tr><td>Campus Lighting Replacement</td><td>12/31/2099</td></tr>
        </table>
        "#;
        let bids = extract(html);
        assert_eq!(bids[0].title, "Campus Lighting Replacement");
        assert_eq!(
            bids[0].subtitle,
            "University of Michigan construction project"
        );
    }

    #[test]
    fn test_two_digit_year_deadline_kept_as_future() {
        // chrono maps 00–68 to the 2000s; this row must survive the
        // future-date filter with its real deadline, not year 68 AD.
        let html = r#"
        <table>
          <tr><td>P42 – Substation Rebuild</td><td>12/31/68</td></tr>
        </table>
        "#;
        let bids = extract(html);
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].deadline.to_string(), "2068-12-31");
    }

    #[test]
    fn test_unparseable_deadline_kept_as_tbd() {
        let html = r#"
        <table>
          <tr><td>P9 – Tunnel Power Feed</td><td>late fall</td></tr>
        </table>
        "#;
        let bids = extract(html);
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].deadline, Deadline::Tbd);
    }

    #[test]
    fn test_empty_page_yields_nothing() {
        assert!(extract("<html><body><p>Maintenance</p></body></html>").is_empty());
    }

    #[test]
    fn test_fallback_record_shape() {
        let fb = Umich::default().fallback(posted());
        assert_eq!(fb.source, "U-M AEC");
        assert_eq!(fb.deadline, Deadline::Varies);
        assert!(!fb.title.is_empty());
        assert_eq!(fb.posted, posted());
    }
}
