//! The normalized bid schema shared by every source.
//!
//! Field names and casing on [`BidRecord`] are a compatibility contract with
//! the dashboard that consumes `bids.json` — do not rename them without
//! coordinating a downstream change. Unknown values are always expressed as
//! sentinels (`TBD`, `Varies`, …), never as nulls, so every serialized record
//! carries every field.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Deadline-driven classification. `closing` means 14 days or fewer remain.
///
/// Always recomputed by the aggregator from the deadline; extractors emit
/// `Open` and their opinion is not trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Closing,
}

/// Whether design drawings are freely downloadable, registration-gated,
/// or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drawings {
    Yes,
    Reg,
    Tbd,
}

/// A bid deadline: either a concrete calendar date or a non-comparable
/// sentinel meaning "unknown, not orderable".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    /// Concrete date, serialized `YYYY-MM-DD`.
    Date(NaiveDate),
    Tbd,
    Varies,
    SeeDocument,
    SeeSchedule,
}

impl Deadline {
    /// True when this is a concrete, comparable calendar date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Deadline::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deadline::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Deadline::Tbd => f.write_str("TBD"),
            Deadline::Varies => f.write_str("Varies"),
            Deadline::SeeDocument => f.write_str("See Document"),
            Deadline::SeeSchedule => f.write_str("See Schedule"),
        }
    }
}

impl FromStr for Deadline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TBD" => Ok(Deadline::Tbd),
            "Varies" => Ok(Deadline::Varies),
            "See Document" => Ok(Deadline::SeeDocument),
            "See Schedule" => Ok(Deadline::SeeSchedule),
            other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
                .map(Deadline::Date)
                .map_err(|_| format!("not a deadline: {other:?}")),
        }
    }
}

impl Serialize for Deadline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Deadline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One normalized bid listing — the unit of output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidRecord {
    /// Project title, non-empty, at most 120 characters.
    pub title: String,
    /// Provenance / scope summary, e.g. `"P123 · University of Michigan …"`.
    pub subtitle: String,
    pub location: String,
    /// Two-letter state code (`MI`, `OH`).
    pub state: String,
    pub status: Status,
    pub deadline: Deadline,
    /// Display string for the estimated contract value.
    pub value: String,
    /// Numeric value estimate for downstream sort ordering, 0 when unknown.
    #[serde(rename = "valueSortable")]
    pub value_sortable: u64,
    /// Date of the scrape run.
    pub posted: NaiveDate,
    /// Human-readable source label.
    pub source: String,
    /// Canonical link back to the source page.
    pub url: String,
    pub drawings: Drawings,
    #[serde(rename = "drawingsNote")]
    pub drawings_note: String,
}

/// The published artifact, written once per run and never mutated after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    /// ISO-8601 timestamp of the run, with time component.
    pub last_updated: String,
    /// Fixed list of consulted source labels, independent of scrape outcomes.
    pub sources_checked: Vec<String>,
    /// Final deduplicated, ordered records.
    pub bids: Vec<BidRecord>,
}
