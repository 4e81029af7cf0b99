// ABOUTME: Valid-set volume engine converting logged sets into normalized training volume
// ABOUTME: Applies the RIR credit policy and compound-exercise synergist spreading per workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness Intelligence

//! Valid-set volume accounting.
//!
//! A "valid set" is the unit of productive hypertrophy volume. Each logged
//! set earns a credit between 0 and 1 based on its recorded RIR, and an
//! exercise's credits roll up into three views: the workout total, volume
//! per muscle group, and volume per exercise.
//!
//! Compound exercises spread half credit into each synergist muscle group
//! on top of the full credit their primary group receives. Summing
//! `by_muscle_group` can therefore exceed `total_valid_sets`; that is the
//! intended double-counting for group-level volume tracking, not a bug.

use std::collections::HashMap;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use treino_core::constants::{rir, synergy};
use treino_core::models::{ExerciseKind, Workout};

use crate::config::SynergistConfig;

/// Credit a single set is worth, derived from its reps in reserve.
///
/// Policy, applied exactly in this order:
/// - no RIR recorded: full credit (assumed taken near failure)
/// - RIR above 3: warm-up, no credit
/// - RIR 2 to 3 inclusive: adjustment set, half credit
/// - RIR below 2: full credit
///
/// Values are taken as logged. A negative RIR falls into the below-2 branch
/// and earns full credit.
#[must_use]
pub fn set_credit(rir_value: Option<f64>) -> f64 {
    match rir_value {
        None => rir::FULL_SET_CREDIT,
        Some(v) if v > rir::WARMUP_THRESHOLD => rir::WARMUP_SET_CREDIT,
        Some(v) if v >= rir::ADJUSTMENT_LOWER_BOUND => rir::ADJUSTMENT_SET_CREDIT,
        Some(_) => rir::FULL_SET_CREDIT,
    }
}

/// Volume breakdown for a single workout.
///
/// Freshly computed on every call; the engine keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutVolume {
    /// Sum of set credits across the whole workout
    pub total_valid_sets: f64,
    /// Valid sets per muscle group, synergist spreading included
    pub by_muscle_group: HashMap<String, f64>,
    /// Valid sets per exercise name
    pub by_exercise: HashMap<String, f64>,
}

/// One workout's volume tagged with its calendar date, for history charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyVolume {
    /// Calendar date of the workout
    pub date: NaiveDate,
    /// Sum of set credits for the workout
    pub total_valid_sets: f64,
    /// Valid sets per muscle group, synergist spreading included
    pub by_muscle_group: HashMap<String, f64>,
}

/// One (date, muscle group) point of a volume time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroupVolumePoint {
    /// Calendar date of the workout
    pub date: NaiveDate,
    /// Muscle group display name (underscores humanized to spaces)
    pub muscle_group: String,
    /// Valid sets credited to the group on that date
    pub valid_sets: f64,
}

/// Volume calculator holding the synergist configuration.
///
/// All methods are pure: same input, same output, no shared state. The
/// calculator is cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct VolumeCalculator {
    synergists: SynergistConfig,
}

impl VolumeCalculator {
    /// Create a calculator with the built-in synergist catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with an externally loaded synergist table
    #[must_use]
    pub const fn with_config(synergists: SynergistConfig) -> Self {
        Self { synergists }
    }

    /// Compute the valid-set breakdown for one workout.
    ///
    /// Accumulation is commutative over the exercise list: permuting
    /// exercises never changes the result, and splitting a workout in two
    /// and merging the results component-wise is equivalent to analyzing it
    /// whole.
    #[must_use]
    pub fn analyze_workout(&self, workout: &Workout) -> WorkoutVolume {
        let mut volume = WorkoutVolume::default();

        for exercise in &workout.exercises {
            let exercise_valid_sets: f64 = exercise
                .sets
                .iter()
                .map(|set| set_credit(set.rir))
                .sum();

            volume.total_valid_sets += exercise_valid_sets;
            *volume
                .by_exercise
                .entry(exercise.name.clone())
                .or_insert(0.0) += exercise_valid_sets;

            // Primary group always gets full credit
            *volume
                .by_muscle_group
                .entry(exercise.muscle_group.clone())
                .or_insert(0.0) += exercise_valid_sets;

            // Synergist spreading only for compounds with a table entry
            let synergists = self.synergists.synergists(&exercise.name);
            if exercise.kind == ExerciseKind::Compound && !synergists.is_empty() {
                for group in synergists {
                    *volume.by_muscle_group.entry(group.clone()).or_insert(0.0) +=
                        exercise_valid_sets * synergy::SYNERGIST_SET_CREDIT;
                }
            }
        }

        debug!(
            exercises = workout.exercises.len(),
            total_valid_sets = volume.total_valid_sets,
            "computed workout volume"
        );
        volume
    }

    /// Compute per-workout volume for a whole training history.
    ///
    /// Workouts are independent, so the sweep runs in parallel; output
    /// order matches input order.
    #[must_use]
    pub fn workout_history(&self, workouts: &[Workout]) -> Vec<DailyVolume> {
        workouts
            .par_iter()
            .map(|workout| {
                let volume = self.analyze_workout(workout);
                DailyVolume {
                    date: workout.date.date_naive(),
                    total_valid_sets: volume.total_valid_sets,
                    by_muscle_group: volume.by_muscle_group,
                }
            })
            .collect()
    }
}

/// Flatten a volume history into a chart-ready time series.
///
/// One point per (date, muscle group) pair, group names humanized
/// (`lower_back` becomes `lower back`), sorted by date then group name.
#[must_use]
pub fn volume_timeline(history: &[DailyVolume]) -> Vec<MuscleGroupVolumePoint> {
    let mut points: Vec<MuscleGroupVolumePoint> = history
        .iter()
        .flat_map(|day| {
            day.by_muscle_group
                .iter()
                .map(|(group, valid_sets)| MuscleGroupVolumePoint {
                    date: day.date,
                    muscle_group: group.replace('_', " "),
                    valid_sets: *valid_sets,
                })
        })
        .collect();

    points.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.muscle_group.cmp(&b.muscle_group))
    });
    points
}
