// Copyright 2026 Bidwatch Contributors
// SPDX-License-Identifier: Apache-2.0

//! One-shot entry point: scrape every source, aggregate, publish.
//!
//! There is deliberately no configuration surface — no flags, no env-driven
//! behavior, no state between runs. Schedule it with cron or CI; exit code
//! is 0 whenever a feed was produced, however degraded.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use clap::Parser;

use bidwatch::aggregate::{aggregate, state_counts};
use bidwatch::fetch::Fetcher;
use bidwatch::publish::{write_feed, OUTPUT_FILE};
use bidwatch::sources::mdot::Mdot;
use bidwatch::sources::odot::Odot;
use bidwatch::sources::ofcc::Ofcc;
use bidwatch::sources::standing::standing_entries;
use bidwatch::sources::umich::Umich;
use bidwatch::sources::{scrape, Extractor};

#[derive(Parser)]
#[command(
    name = "bidwatch",
    about = "Aggregate Michigan & Ohio public construction bids into bids.json",
    version
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bidwatch=info".parse().unwrap()),
        )
        .init();

    println!("{}", "=".repeat(60));
    println!("bidwatch — MI & OH construction bid aggregator");
    println!("{}", "=".repeat(60));
    println!();

    // Sole hard-fail point; everything past here degrades instead.
    let fetcher = Fetcher::new()?;

    let now = Local::now();
    let today = now.date_naive();

    let umich = Umich::default();
    let mdot = Mdot::default();
    let ofcc = Ofcc::default();
    let odot = Odot::default();
    let live: [&dyn Extractor; 4] = [&umich, &mdot, &ofcc, &odot];

    let mut drafts = Vec::new();
    for source in live {
        drafts.extend(scrape(&fetcher, source, today).await);
    }
    drafts.extend(standing_entries(today));

    let last_updated = now.naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    let feed = aggregate(drafts, today, last_updated);

    let path = Path::new(OUTPUT_FILE);
    write_feed(&feed, path)?;

    println!();
    println!("Done! {} bids written to {}", feed.bids.len(), path.display());
    println!("Timestamp: {}", feed.last_updated);
    println!();
    let counts = state_counts(&feed.bids);
    println!(
        "  Michigan: {}  |  Ohio: {}",
        counts.get("MI").copied().unwrap_or(0),
        counts.get("OH").copied().unwrap_or(0)
    );

    Ok(())
}
