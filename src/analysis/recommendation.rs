// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Substitution recommendation over the exercise taxonomy

use crate::models::Substitution;
use crate::taxonomy::Taxonomy;

/// Confidence assigned to same-family candidates
const FAMILY_CONFIDENCE: f64 = 0.9;

/// Confidence assigned to same-muscle-group candidates
const MUSCLE_GROUP_CONFIDENCE: f64 = 0.6;

/// Maximum candidates returned per exercise
const MAX_SUGGESTIONS: usize = 5;

/// Suggests replacement exercises for an overused one
///
/// Two-tier lookup: other members of every family the exercise belongs to
/// (membership is matched case-insensitively), then, only when no family
/// matches, members of all families mapped to the exercise's muscle group.
pub struct SubstitutionRecommender<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> SubstitutionRecommender<'a> {
    /// Create a recommender over the given taxonomy
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Up to five candidates, highest confidence first
    ///
    /// Candidates from overlapping families are pooled without deduplication;
    /// the same alternative can appear more than once at the same confidence.
    /// The sort is stable, so discovery order is preserved among equals.
    /// Returns an empty vec when the exercise is in no family and the muscle
    /// group is unmapped.
    pub fn suggest(&self, exercise: &str, muscle_group: &str) -> Vec<Substitution> {
        let target = exercise.to_lowercase();
        let mut candidates = Vec::new();

        for family in &self.taxonomy.families {
            if !family.members.iter().any(|member| member.to_lowercase() == target) {
                continue;
            }
            for member in &family.members {
                if member.to_lowercase() != target {
                    candidates.push(Substitution {
                        alternative: member.clone(),
                        confidence: FAMILY_CONFIDENCE,
                        rationale: format!("Same pattern ({})", family.name),
                    });
                }
            }
        }

        if candidates.is_empty() && !muscle_group.is_empty() {
            for family_name in self.taxonomy.families_for_muscle_group(muscle_group) {
                if let Some(members) = self.taxonomy.family_members(family_name) {
                    for member in members {
                        candidates.push(Substitution {
                            alternative: member.clone(),
                            confidence: MUSCLE_GROUP_CONFIDENCE,
                            rationale: format!("Same muscle group ({})", muscle_group),
                        });
                    }
                }
            }
        }

        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(MAX_SUGGESTIONS);
        candidates
    }
}
