//! End-to-end pipeline tests against a fixture HTTP server.
//!
//! Exercises the full fetch → extract → fallback → aggregate → publish flow
//! with wiremock standing in for the portals, including the degraded paths
//! (non-2xx responses, empty markup).

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bidwatch::aggregate::aggregate;
use bidwatch::fetch::Fetcher;
use bidwatch::model::{Deadline, Status};
use bidwatch::publish::write_feed;
use bidwatch::sources::mdot::Mdot;
use bidwatch::sources::odot::Odot;
use bidwatch::sources::ofcc::Ofcc;
use bidwatch::sources::standing::standing_entries;
use bidwatch::sources::umich::Umich;
use bidwatch::sources::{scrape, Extractor};

const UMICH_FIXTURE: &str = r#"
<html><body>
<table>
  <tr><th>Project Name</th><th>Bids Due</th></tr>
  <tr><td>P123 – Electrical Upgrade</td><td>12/31/2099</td></tr>
  <tr><td>P456 – Steam Tunnel Repairs</td><td>01/01/2000</td></tr>
</table>
</body></html>
"#;

const OFCC_FIXTURE: &str = r#"
<html><body>
<a href="/docs/SOL-055-260001.pdf">Electrical Upgrade</a>
<a href="/docs/SOL-055-260002.pdf">Juvenile Center Bid Package</a>
</body></html>
"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

/// Shared buffer standing in for the operator log, so tests can assert on
/// emitted tracing events.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_failure_degrades_to_exactly_the_fallback_and_warns() {
    let server = MockServer::start().await;
    mount(&server, "/bids", ResponseTemplate::new(500)).await;

    let logs = LogCapture::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let url = format!("{}/bids", server.uri());
    let source = Umich { url: url.clone() };
    let fetcher = Fetcher::new().unwrap();
    let bids = scrape(&fetcher, &source, today()).await;

    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0], source.fallback(today()));

    let output = logs.contents();
    assert!(output.contains("WARN"), "no WARN event in: {output}");
    assert!(output.contains("failed to fetch"));
    assert!(output.contains(&url));
}

#[tokio::test]
async fn empty_markup_degrades_to_exactly_the_fallback() {
    let server = MockServer::start().await;
    let body = ResponseTemplate::new(200).set_body_string("<html><body>nothing here</body></html>");
    mount(&server, "/lettings", body).await;

    let source = Mdot {
        url: format!("{}/lettings", server.uri()),
    };
    let fetcher = Fetcher::new().unwrap();
    let bids = scrape(&fetcher, &source, today()).await;

    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].title, "MDOT 2026 Signalization & Electrical — Statewide Lettings");
}

#[tokio::test]
async fn live_fixture_extracts_future_bids_only() {
    let server = MockServer::start().await;
    mount(&server, "/bids", ResponseTemplate::new(200).set_body_string(UMICH_FIXTURE)).await;

    let source = Umich {
        url: format!("{}/bids", server.uri()),
    };
    let fetcher = Fetcher::new().unwrap();
    let bids = scrape(&fetcher, &source, today()).await;

    // The past-deadline row is discarded entirely.
    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].title, "Electrical Upgrade");
    assert!(bids[0].subtitle.contains("P123"));
    assert_eq!(bids[0].deadline.to_string(), "2099-12-31");
}

#[tokio::test]
async fn full_run_with_mixed_outcomes_produces_complete_feed() {
    let server = MockServer::start().await;
    mount(&server, "/umich", ResponseTemplate::new(200).set_body_string(UMICH_FIXTURE)).await;
    mount(&server, "/mdot", ResponseTemplate::new(500)).await;
    mount(&server, "/ofcc", ResponseTemplate::new(200).set_body_string(OFCC_FIXTURE)).await;
    mount(&server, "/odot", ResponseTemplate::new(404)).await;

    let umich = Umich {
        url: format!("{}/umich", server.uri()),
    };
    let mdot = Mdot {
        url: format!("{}/mdot", server.uri()),
    };
    let ofcc = Ofcc {
        url: format!("{}/ofcc", server.uri()),
    };
    let odot = Odot {
        url: format!("{}/odot", server.uri()),
    };

    let fetcher = Fetcher::new().unwrap();
    let live: [&dyn Extractor; 4] = [&umich, &mdot, &ofcc, &odot];
    let mut drafts = Vec::new();
    for source in live {
        drafts.extend(scrape(&fetcher, source, today()).await);
    }
    drafts.extend(standing_entries(today()));

    let feed = aggregate(drafts, today(), "2026-08-30T12:00:00".into());

    // 1 live U-M bid + MDOT fallback + 2 OFCC links + ODOT fallback
    // + 6 standing entries, minus the OFCC "Electrical Upgrade" duplicate.
    assert_eq!(feed.bids.len(), 10);

    // First occurrence of the duplicated title wins: the U-M record.
    let upgrade: Vec<_> = feed
        .bids
        .iter()
        .filter(|b| b.title.trim().eq_ignore_ascii_case("Electrical Upgrade"))
        .collect();
    assert_eq!(upgrade.len(), 1);
    assert_eq!(upgrade[0].source, "U-M AEC");

    // Failed sources are present via their fallbacks.
    assert!(feed.bids.iter().any(|b| b.source == "MDOT Bid Letting"));
    assert!(feed
        .bids
        .iter()
        .any(|b| b.title == "ODOT 2026 Statewide Highway Electrical Lettings"));

    // Standing entries survive aggregation untouched.
    assert!(feed.bids.iter().any(|b| b.source == "DTMB SIGMA VSS"));
    assert!(feed
        .bids
        .iter()
        .filter(|b| b.deadline == Deadline::Varies)
        .all(|b| b.status == Status::Open));

    // Fixed source labels, independent of which fetches succeeded.
    assert_eq!(feed.sources_checked.len(), 11);

    // The published artifact honors the schema contract.
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bids.json");
    write_feed(&feed, &out).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let top_level: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(top_level, vec!["bids", "last_updated", "sources_checked"]);
    let first = &value["bids"][0];
    for key in [
        "title",
        "subtitle",
        "location",
        "state",
        "status",
        "deadline",
        "value",
        "valueSortable",
        "posted",
        "source",
        "url",
        "drawings",
        "drawingsNote",
    ] {
        assert!(first.get(key).is_some(), "missing field {key}");
    }
}
