// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Week-sheet row parsing and filtering

use crate::models::ExerciseRecord;

/// Muscle group recorded when the cell is blank
const UNKNOWN_MUSCLE_GROUP: &str = "Unknown";

/// Extract the week number from a sheet name like "Week 3"
///
/// The last whitespace-separated token must parse as an integer; sheet names
/// without one ("Deload", "Notes") yield `None`.
pub fn week_number(sheet_name: &str) -> Option<u32> {
    sheet_name.split_whitespace().last()?.parse().ok()
}

/// Parse raw rows from one week sheet into validated records
///
/// Cell 0 is the muscle group, cell 1 the exercise name. Rows are dropped
/// when they have fewer than two cells, when the exercise cell is blank
/// after trimming, or when it is numeric noise (stray set/rep artifacts
/// like "6 6 6" landing in the exercise column). Surviving rows carry
/// `volume = 1.0`: presence counting, not training load.
pub fn parse_rows(week: u32, rows: &[Vec<String>]) -> Vec<ExerciseRecord> {
    let mut records = Vec::new();

    for row in rows {
        if row.len() < 2 {
            continue;
        }

        let exercise = row[1].trim();
        if exercise.is_empty() || is_numeric_noise(exercise) {
            continue;
        }

        let muscle_group = row[0].trim();
        records.push(ExerciseRecord {
            week,
            muscle_group: if muscle_group.is_empty() {
                UNKNOWN_MUSCLE_GROUP.to_string()
            } else {
                muscle_group.to_string()
            },
            exercise: exercise.to_string(),
            volume: 1.0,
        });
    }

    records
}

/// A non-empty cell is numeric noise when every whitespace-separated token
/// parses as a number ("12", "6.5", "6 6 6").
fn is_numeric_noise(cell: &str) -> bool {
    cell.split_whitespace().all(|token| token.parse::<f64>().is_ok())
}
