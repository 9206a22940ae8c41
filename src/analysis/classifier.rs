// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rotation tier classification

use super::frequency::FrequencyDb;
use super::recommendation::SubstitutionRecommender;
use crate::models::{ClassificationResult, OverusedEntry, TierEntry, Urgency};
use crate::taxonomy::Taxonomy;

/// Weeks at or above which an overused exercise is flagged high urgency.
/// Fixed knob, independent of the configurable overused threshold.
pub const HIGH_URGENCY_WEEKS: usize = 6;

/// Partitions the frequency database into rotation tiers
///
/// `frequency >= overused_threshold` is overused, `balanced_min <= frequency
/// < overused_threshold` is balanced, anything below is underused. Only
/// overused exercises are handed to the recommender.
pub struct RotationClassifier<'a> {
    recommender: SubstitutionRecommender<'a>,
    overused_threshold: usize,
    balanced_min: usize,
}

impl<'a> RotationClassifier<'a> {
    /// Create a classifier with the given taxonomy and tier thresholds
    pub fn new(taxonomy: &'a Taxonomy, overused_threshold: usize, balanced_min: usize) -> Self {
        Self {
            recommender: SubstitutionRecommender::new(taxonomy),
            overused_threshold,
            balanced_min,
        }
    }

    /// Classify every exercise in the database into exactly one tier
    ///
    /// Overused and balanced tiers are sorted by descending frequency,
    /// underused by ascending frequency; names break ties case-insensitively.
    /// One idea string is emitted per overused exercise with at least one
    /// substitution candidate, in tier order, using the top candidate.
    pub fn classify(&self, db: &FrequencyDb) -> ClassificationResult {
        let mut overused_names = Vec::new();
        let mut balanced = Vec::new();
        let mut underused = Vec::new();

        for (exercise, entry) in db {
            let frequency = entry.frequency();
            if frequency >= self.overused_threshold {
                overused_names.push((exercise, entry, frequency));
            } else if frequency >= self.balanced_min {
                balanced.push(TierEntry {
                    exercise: exercise.clone(),
                    frequency,
                });
            } else {
                underused.push(TierEntry {
                    exercise: exercise.clone(),
                    frequency,
                });
            }
        }

        overused_names.sort_by(|a, b| {
            b.2.cmp(&a.2)
                .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
        });
        balanced.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.exercise.to_lowercase().cmp(&b.exercise.to_lowercase()))
        });
        underused.sort_by(|a, b| {
            a.frequency
                .cmp(&b.frequency)
                .then_with(|| a.exercise.to_lowercase().cmp(&b.exercise.to_lowercase()))
        });

        let mut overused = Vec::with_capacity(overused_names.len());
        let mut ideas = Vec::new();
        for (exercise, entry, frequency) in overused_names {
            let substitutions = self.recommender.suggest(exercise, &entry.muscle_group);
            let urgency = if frequency >= HIGH_URGENCY_WEEKS {
                Urgency::High
            } else {
                Urgency::Medium
            };
            if let Some(best) = substitutions.first() {
                ideas.push(format!(
                    "Replace \"{}\" (used {} weeks) → \"{}\" ({})",
                    exercise, frequency, best.alternative, best.rationale
                ));
            }
            overused.push(OverusedEntry {
                exercise: exercise.clone(),
                frequency,
                urgency,
                substitutions,
            });
        }

        ClassificationResult {
            overused,
            balanced,
            underused,
            ideas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FrequencyEntry;

    fn entry(muscle_group: &str, weeks: &[u32]) -> FrequencyEntry {
        let mut entry = FrequencyEntry::new(muscle_group.to_string());
        for &week in weeks {
            entry.weeks.insert(week);
            entry.total_volume += 1.0;
        }
        entry
    }

    fn db_from(entries: &[(&str, &str, &[u32])]) -> FrequencyDb {
        entries
            .iter()
            .map(|(exercise, muscle_group, weeks)| {
                (exercise.to_string(), entry(muscle_group, weeks))
            })
            .collect()
    }

    fn classifier(taxonomy: &Taxonomy) -> RotationClassifier<'_> {
        RotationClassifier::new(taxonomy, 4, 2)
    }

    #[test]
    fn test_tier_partition_is_complete() {
        let taxonomy = Taxonomy::default();
        let db = db_from(&[
            ("Bench Press", "Chest", &[1, 2, 3, 4, 5]),
            ("Barbell Rows", "Back", &[1, 2, 3, 4]),
            ("Planks", "Core", &[1, 2, 3]),
            ("Lunges", "Legs", &[2, 5]),
            ("Face Pulls", "Shoulders", &[7]),
        ]);

        let result = classifier(&taxonomy).classify(&db);

        assert_eq!(
            result.overused.len() + result.balanced.len() + result.underused.len(),
            db.len()
        );
        for exercise in db.keys() {
            let in_overused = result.overused.iter().any(|e| &e.exercise == exercise);
            let in_balanced = result.balanced.iter().any(|e| &e.exercise == exercise);
            let in_underused = result.underused.iter().any(|e| &e.exercise == exercise);
            assert_eq!(
                [in_overused, in_balanced, in_underused].iter().filter(|&&b| b).count(),
                1,
                "{} must land in exactly one tier",
                exercise
            );
        }
    }

    #[test]
    fn test_threshold_boundaries() {
        let taxonomy = Taxonomy::default();
        let db = db_from(&[
            ("Bench Press", "Chest", &[1, 2, 3, 4]),
            ("Barbell Rows", "Back", &[1, 2, 3]),
            ("Face Pulls", "Shoulders", &[1]),
        ]);

        let result = classifier(&taxonomy).classify(&db);

        assert_eq!(result.overused[0].exercise, "Bench Press");
        assert_eq!(result.balanced[0].exercise, "Barbell Rows");
        assert_eq!(result.underused[0].exercise, "Face Pulls");
    }

    #[test]
    fn test_urgency_flag() {
        let taxonomy = Taxonomy::default();
        let db = db_from(&[
            ("Bench Press", "Chest", &[1, 2, 3, 4, 5, 6]),
            ("Barbell Rows", "Back", &[1, 2, 3, 4, 5]),
        ]);

        let result = classifier(&taxonomy).classify(&db);

        let bench = result.overused.iter().find(|e| e.exercise == "Bench Press").unwrap();
        let rows = result.overused.iter().find(|e| e.exercise == "Barbell Rows").unwrap();
        assert_eq!(bench.urgency, Urgency::High);
        assert_eq!(rows.urgency, Urgency::Medium);
    }

    #[test]
    fn test_sort_order_and_tie_breaks() {
        let taxonomy = Taxonomy::default();
        let db = db_from(&[
            ("bench press", "Chest", &[1, 2, 3, 4]),
            ("Barbell Rows", "Back", &[1, 2, 3, 4]),
            ("Deadlifts", "Back", &[1, 2, 3, 4, 5]),
            ("Planks", "Core", &[1, 2]),
            ("Crunches", "Core", &[1, 2, 3]),
            ("Face Pulls", "Shoulders", &[1]),
            ("Arnold Press", "Shoulders", &[1]),
        ]);

        let result = classifier(&taxonomy).classify(&db);

        let overused: Vec<&str> = result.overused.iter().map(|e| e.exercise.as_str()).collect();
        assert_eq!(overused, vec!["Deadlifts", "Barbell Rows", "bench press"]);

        let balanced: Vec<&str> = result.balanced.iter().map(|e| e.exercise.as_str()).collect();
        assert_eq!(balanced, vec!["Crunches", "Planks"]);

        let underused: Vec<&str> = result.underused.iter().map(|e| e.exercise.as_str()).collect();
        assert_eq!(underused, vec!["Arnold Press", "Face Pulls"]);
    }

    #[test]
    fn test_ideas_use_top_candidate() {
        let taxonomy = Taxonomy::default();
        let db = db_from(&[("Barbell Rows", "Back", &[1, 2, 3, 4])]);

        let result = classifier(&taxonomy).classify(&db);

        assert_eq!(result.ideas.len(), 1);
        assert_eq!(
            result.ideas[0],
            "Replace \"Barbell Rows\" (used 4 weeks) → \"Bent-Over Rows\" (Same pattern (Horizontal Pull (Barbell)))"
        );
    }

    #[test]
    fn test_no_idea_without_candidates() {
        let taxonomy = Taxonomy::default();
        let db = db_from(&[("Zercher Carries", "Forearms", &[1, 2, 3, 4])]);

        let result = classifier(&taxonomy).classify(&db);

        assert_eq!(result.overused.len(), 1);
        assert!(result.overused[0].substitutions.is_empty());
        assert!(result.ideas.is_empty());
    }

    #[test]
    fn test_underused_never_reaches_recommender() {
        let taxonomy = Taxonomy::default();
        let db = db_from(&[("Bench Press", "Chest", &[1])]);

        let result = classifier(&taxonomy).classify(&db);

        assert_eq!(result.underused[0].frequency, 1);
        assert!(result.ideas.is_empty());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let taxonomy = Taxonomy::default();
        let db = db_from(&[
            ("Bench Press", "Chest", &[1, 2, 3, 4, 5, 6]),
            ("Barbell Rows", "Back", &[1, 2, 3, 4]),
            ("Planks", "Core", &[1, 2, 3]),
            ("Face Pulls", "Shoulders", &[1]),
        ]);
        let classifier = classifier(&taxonomy);

        let first = classifier.classify(&db);
        let second = classifier.classify(&db);

        assert_eq!(first, second);
    }
}
