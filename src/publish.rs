//! Feed serialization — the durable artifact the dashboard consumes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Feed;

/// Default artifact name, written to the working directory.
pub const OUTPUT_FILE: &str = "bids.json";

/// Serialize the feed as pretty-printed JSON at `path`.
pub fn write_feed(feed: &Feed, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(feed).context("failed to serialize feed")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
