// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures for rotation analysis.
//!
//! ## Core Models
//!
//! - [`ExerciseRecord`]: One validated workout-log row
//! - [`FrequencyEntry`]: Aggregated appearance data for one exercise name
//! - [`Substitution`]: A ranked replacement candidate for an overused exercise
//! - [`ClassificationResult`]: The three rotation tiers plus suggestion strings

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single validated row from a week sheet
///
/// Produced by the row parser and consumed during aggregation. The exercise
/// name is trimmed and never empty or numeric noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// 1-based training week the row belongs to
    pub week: u32,
    /// Muscle group from the log; "Unknown" when the cell was blank
    pub muscle_group: String,
    /// Trimmed exercise name
    pub exercise: String,
    /// Presence weight. Rotation analysis counts appearances, not load.
    pub volume: f64,
}

/// Aggregated appearance data for one distinct exercise name
///
/// Keyed by exact (case-sensitive) exercise string in the frequency database.
/// Week membership uses set semantics: repeats within the same week do not
/// inflate rotation frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// Muscle group recorded the first time the exercise was seen
    pub muscle_group: String,
    /// Distinct weeks the exercise appeared in
    pub weeks: BTreeSet<u32>,
    /// Cumulative volume across all appearances
    pub total_volume: f64,
}

impl FrequencyEntry {
    /// Create an empty entry for an exercise first seen in `muscle_group`
    pub fn new(muscle_group: String) -> Self {
        Self {
            muscle_group,
            weeks: BTreeSet::new(),
            total_volume: 0.0,
        }
    }

    /// Rotation frequency: the number of distinct weeks the exercise appeared in
    pub fn frequency(&self) -> usize {
        self.weeks.len()
    }
}

/// Urgency of rotating an overused exercise out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
}

/// A replacement candidate for an overused exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    /// Suggested alternative exercise
    pub alternative: String,
    /// Heuristic weight in (0, 1]: 0.9 for same-family, 0.6 for same-muscle-group
    pub confidence: f64,
    /// Why the alternative was suggested
    pub rationale: String,
}

/// An overused exercise with its substitution candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverusedEntry {
    pub exercise: String,
    pub frequency: usize,
    pub urgency: Urgency,
    /// Up to five candidates, highest confidence first
    pub substitutions: Vec<Substitution>,
}

/// An exercise in the balanced or underused tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEntry {
    pub exercise: String,
    pub frequency: usize,
}

/// The three disjoint rotation tiers plus formatted suggestion strings
///
/// Every exercise in the frequency database lands in exactly one tier.
/// Overused and balanced are sorted most-frequent first, underused
/// least-frequent first; names break ties case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub overused: Vec<OverusedEntry>,
    pub balanced: Vec<TierEntry>,
    pub underused: Vec<TierEntry>,
    /// One replace-suggestion per overused exercise that has candidates
    pub ideas: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_counts_distinct_weeks() {
        let mut entry = FrequencyEntry::new("Back".to_string());
        entry.weeks.insert(1);
        entry.weeks.insert(1);
        entry.weeks.insert(2);
        entry.total_volume += 3.0;

        assert_eq!(entry.frequency(), 2);
        assert_eq!(entry.total_volume, 3.0);
    }

    #[test]
    fn test_urgency_serialization() {
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Urgency::Medium).unwrap(), "\"medium\"");
    }
}
