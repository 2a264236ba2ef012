// Copyright 2026 Bidwatch Contributors
// SPDX-License-Identifier: Apache-2.0

//! Bidwatch library — multi-source construction-bid aggregation pipeline.
//!
//! Scrapes public procurement portals in Michigan and Ohio, normalizes the
//! heterogeneous listings into a single [`model::BidRecord`] schema, and
//! assembles a deduplicated [`model::Feed`] for the downstream dashboard.
//! The pipeline modules are exposed here so integration tests can drive
//! them against fixture servers.

pub mod aggregate;
pub mod fetch;
pub mod model;
pub mod normalize;
pub mod publish;
pub mod sources;
