// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Report rendering
//!
//! Pure formatting of classification results into the ordered line sequence
//! persisted by the report sink. Section order is fixed: summary, rotation
//! priority, smart ideas, well-balanced, trailing timestamp.

use super::frequency::FrequencyDb;
use crate::models::{ClassificationResult, Urgency};

/// Entries shown per report section
const MAX_SECTION_ENTRIES: usize = 10;

fn urgency_marker(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::High => "🔥",
        Urgency::Medium => "⚠️",
    }
}

/// Render the report lines for one analysis run
///
/// Sections with no entries are omitted entirely, including their headers.
/// The thresholds are only used for the summary labels; classification
/// happened upstream with the same values.
pub fn report_lines(
    db: &FrequencyDb,
    result: &ClassificationResult,
    overused_threshold: usize,
    balanced_min: usize,
    timestamp: &str,
) -> Vec<String> {
    let mut lines = vec![
        "📊 SUMMARY".to_string(),
        String::new(),
        format!("• Total exercises: {}", db.len()),
        format!("• Overused (>= {} wks): {}", overused_threshold, result.overused.len()),
        format!(
            "• Balanced ({}–{} wks): {}",
            balanced_min,
            overused_threshold.saturating_sub(1),
            result.balanced.len()
        ),
        format!("• Underused / New: {}", result.underused.len()),
        String::new(),
    ];

    if !result.overused.is_empty() {
        lines.push("🚨 ROTATION PRIORITY:".to_string());
        for entry in result.overused.iter().take(MAX_SECTION_ENTRIES) {
            let swap = entry
                .substitutions
                .first()
                .map(|s| format!(" → {}", s.alternative))
                .unwrap_or_default();
            lines.push(format!(
                "{} {} ({} wks){}",
                urgency_marker(entry.urgency),
                entry.exercise,
                entry.frequency,
                swap
            ));
        }
        lines.push(String::new());
    }

    if !result.ideas.is_empty() {
        lines.push("💡 SMART IDEAS:".to_string());
        for idea in result.ideas.iter().take(MAX_SECTION_ENTRIES) {
            lines.push(format!("• {}", idea));
        }
        lines.push(String::new());
    }

    if !result.balanced.is_empty() {
        lines.push("✅ WELL-BALANCED:".to_string());
        for entry in result.balanced.iter().take(MAX_SECTION_ENTRIES) {
            lines.push(format!("• {} ({} wks)", entry.exercise, entry.frequency));
        }
        lines.push(String::new());
    }

    lines.push(format!("Last updated: {}", timestamp));
    lines
}
