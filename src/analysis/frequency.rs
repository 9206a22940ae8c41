// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Frequency database construction

use crate::models::{ExerciseRecord, FrequencyEntry};
use std::collections::HashMap;

/// One entry per distinct exercise name, keyed by the exact string
pub type FrequencyDb = HashMap<String, FrequencyEntry>;

/// Aggregate parsed records into the frequency database
///
/// Single pass over the records. The muscle group is fixed the first time an
/// exercise is seen; later rows only add their week and volume. Week
/// membership is a set, so an exercise logged on three days of the same week
/// still counts that week once.
pub fn build_db(records: &[ExerciseRecord]) -> FrequencyDb {
    let mut db = FrequencyDb::new();

    for record in records {
        let entry = db
            .entry(record.exercise.clone())
            .or_insert_with(|| FrequencyEntry::new(record.muscle_group.clone()));
        entry.weeks.insert(record.week);
        entry.total_volume += record.volume;
    }

    db
}
