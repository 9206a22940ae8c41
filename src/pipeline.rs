// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One rotation-analysis run end to end
//!
//! Fetch the configured week sheets (skipping absent or failing ones), parse
//! and aggregate the rows, classify, render, and hand the report to the sink
//! exactly once. Only sink failures abort a run.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{build_db, parse_rows, report_lines, week_number, RotationClassifier};
use crate::config::EngineConfig;
use crate::models::ExerciseRecord;
use crate::providers::{ReportSink, RowSource};
use crate::taxonomy::Taxonomy;

/// Title row written above every report
pub const REPORT_TITLE: &str = "🧠 Automated Rotation Analysis";

/// Tier counts and the sink's change signal for a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub exercises: usize,
    pub overused: usize,
    pub balanced: usize,
    pub underused: usize,
    /// Whether the sink rewrote the report this run
    pub report_updated: bool,
}

/// Outcome of a single analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    /// None of the configured week sheets could be fetched
    NoWeekSheets,
    /// Week sheets were present but held no valid exercise rows
    NoExercises,
    Completed(RunSummary),
}

/// Drives one batch analysis over a row source and a report sink
pub struct RotationPipeline<'a> {
    config: &'a EngineConfig,
    taxonomy: &'a Taxonomy,
}

impl<'a> RotationPipeline<'a> {
    pub fn new(config: &'a EngineConfig, taxonomy: &'a Taxonomy) -> Self {
        Self { config, taxonomy }
    }

    /// Run the analysis stamped with the current local time
    pub async fn run(&self, source: &dyn RowSource, sink: &dyn ReportSink) -> Result<RunOutcome> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.run_at(source, sink, &timestamp).await
    }

    /// Run the analysis with an explicit report timestamp
    ///
    /// Reruns over identical data and the same timestamp produce
    /// byte-identical reports, so the sink reports no change.
    pub async fn run_at(
        &self,
        source: &dyn RowSource,
        sink: &dyn ReportSink,
        timestamp: &str,
    ) -> Result<RunOutcome> {
        info!("Starting rotation analysis");

        let mut records: Vec<ExerciseRecord> = Vec::new();
        let mut fetched_sheets = 0usize;
        for week_name in &self.config.week_sheets {
            let Some(week) = week_number(week_name) else {
                warn!(sheet = %week_name, "Sheet name carries no week number, skipping");
                continue;
            };
            match source.fetch_week(week_name).await {
                Ok(Some(rows)) => {
                    fetched_sheets += 1;
                    let parsed = parse_rows(week, &rows);
                    info!(sheet = %week_name, exercises = parsed.len(), "Parsed week sheet");
                    records.extend(parsed);
                }
                Ok(None) => {
                    info!(sheet = %week_name, "Week sheet not found, skipping");
                }
                Err(err) => {
                    warn!(sheet = %week_name, error = %err, "Failed to fetch week sheet, skipping");
                }
            }
        }

        if fetched_sheets == 0 {
            info!("No week sheets found");
            return Ok(RunOutcome::NoWeekSheets);
        }
        if records.is_empty() {
            info!("No exercises found in any week sheet");
            return Ok(RunOutcome::NoExercises);
        }

        info!(records = records.len(), "Analyzing training rows");
        let db = build_db(&records);
        let classifier =
            RotationClassifier::new(self.taxonomy, self.config.overused, self.config.balanced_min);
        let result = classifier.classify(&db);
        let lines = report_lines(
            &db,
            &result,
            self.config.overused,
            self.config.balanced_min,
            timestamp,
        );

        let target = sink
            .ensure_report_target()
            .await
            .context("Failed to prepare report destination")?;
        let updated = sink
            .write_if_changed(&target, REPORT_TITLE, &lines)
            .await
            .context("Failed to write rotation report")?;
        info!("Report {}", if updated { "updated" } else { "unchanged" });

        let summary = RunSummary {
            exercises: db.len(),
            overused: result.overused.len(),
            balanced: result.balanced.len(),
            underused: result.underused.len(),
            report_updated: updated,
        };
        info!(
            exercises = summary.exercises,
            overused = summary.overused,
            balanced = summary.balanced,
            underused = summary.underused,
            "Analysis complete"
        );
        Ok(RunOutcome::Completed(summary))
    }
}
