use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{Intensity, WorkoutEntry};

pub fn total_workouts(entries: &[WorkoutEntry]) -> usize {
    entries.len()
}

pub fn total_calories_burned(entries: &[WorkoutEntry]) -> i64 {
    entries.iter().map(|e| e.calories_burned as i64).sum()
}

/// Session count per catalog category, for pie display. Unordered.
pub fn workouts_by_category(entries: &[WorkoutEntry]) -> HashMap<String, i64> {
    let mut counts = HashMap::new();
    for entry in entries {
        *counts.entry(entry.category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Summed calories per exercise name, ascending by sum so a horizontal
/// bar chart reads bottom-up. Ties order by name.
pub fn calories_by_exercise(entries: &[WorkoutEntry]) -> Vec<(String, i64)> {
    let mut sums: HashMap<String, i64> = HashMap::new();
    for entry in entries {
        *sums.entry(entry.exercise_name.clone()).or_insert(0) += entry.calories_burned as i64;
    }

    let mut totals: Vec<(String, i64)> = sums.into_iter().collect();
    totals.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    totals
}

/// Summed duration minutes per session date, ascending by date.
pub fn duration_by_day(entries: &[WorkoutEntry]) -> Vec<(NaiveDate, i64)> {
    let mut sums: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for entry in entries {
        *sums.entry(entry.session_date).or_insert(0) += entry.duration_minutes as i64;
    }
    sums.into_iter().collect()
}

pub fn intensity_distribution(entries: &[WorkoutEntry]) -> HashMap<Intensity, i64> {
    let mut counts = HashMap::new();
    for entry in entries {
        *counts.entry(entry.intensity).or_insert(0) += 1;
    }
    counts
}
