//! Standing entries for portals that require a login to list bids.
//!
//! These can't be scraped, so they appear as fixed records pointing at the
//! portal itself. They skip the future-date filter (all carry the `Varies`
//! sentinel) but participate in the final title dedup like everything else.

use chrono::NaiveDate;

use crate::model::{BidRecord, Deadline, Drawings, Status};

struct StandingSource {
    title: &'static str,
    subtitle: &'static str,
    location: &'static str,
    state: &'static str,
    value: &'static str,
    value_sortable: u64,
    source: &'static str,
    url: &'static str,
    drawings: Drawings,
    drawings_note: &'static str,
}

const STANDING: &[StandingSource] = &[
    StandingSource {
        title: "Michigan DTMB — State Facility Electrical Projects",
        subtitle: "DTMB Design & Construction capital improvement projects — browse SIGMA VSS for current listings",
        location: "Lansing / Various",
        state: "MI",
        value: "$500K–$2M",
        value_sortable: 2_000_000,
        source: "DTMB SIGMA VSS",
        url: "https://www.michigan.gov/dtmb/procurement/design-and-construction",
        drawings: Drawings::Reg,
        drawings_note: "SIGMA VSS — vendor registration required",
    },
    StandingSource {
        title: "MSU Capital Projects — Electrical & Building Systems",
        subtitle: "Michigan State University IPF construction bids — check Plan Room for current listings",
        location: "East Lansing",
        state: "MI",
        value: "$200K–$2M+",
        value_sortable: 2_000_000,
        source: "MSU IPF Plan Room",
        url: "https://ipf.msu.edu/plan-room",
        drawings: Drawings::Reg,
        drawings_note: "MSU Plan Room — Bid Manager registration required",
    },
    StandingSource {
        title: "MITN Local Government Electrical — Multiple MI Municipalities",
        subtitle: "Aggregated electrical bids from ~200 Michigan local governments incl. schools & utilities",
        location: "Various",
        state: "MI",
        value: "$50K–$1M+",
        value_sortable: 1_000_000,
        source: "BidNet / MITN",
        url: "https://www.bidnetdirect.com/mitn",
        drawings: Drawings::Reg,
        drawings_note: "Varies by agency — most require BidNet login",
    },
    StandingSource {
        title: "Ohio State University — Campus Electrical & Infrastructure",
        subtitle: "OSU Facilities Operations capital projects — browse Bid Express for current listings",
        location: "Columbus",
        state: "OH",
        value: "$1M–$5M",
        value_sortable: 5_000_000,
        source: "OSU / Bid Express",
        url: "https://fod.osu.edu/resources",
        drawings: Drawings::Reg,
        drawings_note: "Bid Express — free vendor registration required",
    },
    StandingSource {
        title: "Franklin County — Public Works Electrical Projects",
        subtitle: "County construction bids incl. electrical, lighting, and building systems — Columbus metro",
        location: "Columbus",
        state: "OH",
        value: "$200K–$2M",
        value_sortable: 2_000_000,
        source: "Franklin County",
        url: "https://bids.franklincountyohio.gov/",
        drawings: Drawings::Tbd,
        drawings_note: "Obtain at county office (373 S. High St) or per ad",
    },
    StandingSource {
        title: "Ohio Purchasing Group — Statewide Local Electrical Bids",
        subtitle: "Aggregated state and local government electrical RFPs and bids across Ohio municipalities",
        location: "Various",
        state: "OH",
        value: "$50K–$1M+",
        value_sortable: 1_000_000,
        source: "BidNet / Ohio",
        url: "https://www.bidnetdirect.com/ohio",
        drawings: Drawings::Reg,
        drawings_note: "Varies by agency — most require BidNet registration",
    },
];

/// The fixed, hand-curated standing records, stamped with the run date.
pub fn standing_entries(posted: NaiveDate) -> Vec<BidRecord> {
    STANDING
        .iter()
        .map(|s| BidRecord {
            title: s.title.into(),
            subtitle: s.subtitle.into(),
            location: s.location.into(),
            state: s.state.into(),
            status: Status::Open,
            deadline: Deadline::Varies,
            value: s.value.into(),
            value_sortable: s.value_sortable,
            posted,
            source: s.source.into(),
            url: s.url.into(),
            drawings: s.drawings,
            drawings_note: s.drawings_note.into(),
        })
        .collect()
}
