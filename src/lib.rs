// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Rotation Engine
//!
//! A batch engine that analyzes weekly training logs for exercise rotation
//! risk. It aggregates per-week exercise appearances into a frequency index,
//! classifies every exercise as overused, balanced, or underused, and
//! suggests biomechanically similar substitutes for the overused ones using
//! a movement-pattern taxonomy.
//!
//! ## Features
//!
//! - **Frequency analysis**: distinct-week counting, immune to multiple
//!   sessions inside one week
//! - **Tiered classification**: configurable overused/balanced thresholds
//!   with deterministic ordering
//! - **Substitution suggestions**: same-family first, same-muscle-group
//!   fallback, ranked by confidence
//! - **Change-aware reporting**: the report sink rewrites its destination
//!   only when content actually changed
//!
//! ## Architecture
//!
//! - **Analysis**: the pure core (parser, frequency database, classifier,
//!   recommender, report renderer)
//! - **Taxonomy**: static movement-pattern families, overridable from TOML
//! - **Providers**: collaborator traits for row sources and report sinks
//! - **Pipeline**: one end-to-end run over the configured week sheets
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rotation_engine::config::EngineConfig;
//! use rotation_engine::pipeline::RotationPipeline;
//! use rotation_engine::providers::LocalWorkbook;
//! use rotation_engine::taxonomy::Taxonomy;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration and the exercise taxonomy
//!     let config = EngineConfig::load(None)?;
//!     let taxonomy = Taxonomy::load(None)?;
//!
//!     // A directory-backed workbook acts as both source and sink
//!     let workbook = LocalWorkbook::new("./data", config.report_sheet.as_str());
//!
//!     let pipeline = RotationPipeline::new(&config, &taxonomy);
//!     let outcome = pipeline.run(&workbook, &workbook).await?;
//!     println!("{:?}", outcome);
//!
//!     Ok(())
//! }
//! ```

/// Rotation analysis core: parsing, aggregation, classification, reporting
pub mod analysis;

/// Configuration thresholds and week-sheet names
pub mod config;

/// Logging configuration and structured output
pub mod logging;

/// Common data models for rotation analysis
pub mod models;

/// End-to-end analysis run orchestration
pub mod pipeline;

/// Collaborator interfaces for row sources and report sinks
pub mod providers;

/// Movement-pattern taxonomy for substitution lookups
pub mod taxonomy;
