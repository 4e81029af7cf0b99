// ABOUTME: Domain models for logged strength-training data
// ABOUTME: Defines the workout, exercise performance, and set records the engine computes over
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness Intelligence

//! # Data Models
//!
//! Plain records describing logged training data. The intelligence crate
//! treats all of them as read-only input: aggregation never mutates a
//! workout, and every result is freshly computed.
//!
//! ## Design Principles
//!
//! - **Permissive**: missing exercise metadata deserializes to empty
//!   strings rather than failing, so sparsely-populated rows from the
//!   caller's store still aggregate (under the empty-string key)
//! - **Serializable**: all models support JSON serialization with the
//!   camelCase field names the companion application uses
//! - **No validation**: numeric fields are taken as-is; the engine is pure
//!   arithmetic over data the caller already owns

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged attempt of an exercise.
///
/// `rir` (reps in reserve) is the lifter's own estimate of how many more
/// repetitions were left before failure. An absent value is meaningful, not
/// an error: it means no estimate was recorded and the set is assumed to
/// have been taken near failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    /// Load in kilograms
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Reps in reserve at the end of the set, if recorded
    #[serde(default)]
    pub rir: Option<f64>,
}

impl WorkoutSet {
    /// Create a set with a recorded RIR value
    #[must_use]
    pub const fn new(weight: f64, reps: u32, rir: f64) -> Self {
        Self {
            weight,
            reps,
            rir: Some(rir),
        }
    }

    /// Create a set with no RIR recorded
    #[must_use]
    pub const fn without_rir(weight: f64, reps: u32) -> Self {
        Self {
            weight,
            reps,
            rir: None,
        }
    }
}

/// Whether an exercise recruits a single muscle group or several.
///
/// Compound movements spread partial volume credit into their synergist
/// groups; isolation movements credit only their primary target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Multi-joint movement recruiting synergist muscle groups
    Compound,
    /// Single-joint movement targeting one muscle group
    #[default]
    Isolation,
}

/// One exercise's sets within a single workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    /// Exercise name, used as the exact-match key into the synergist table
    #[serde(default)]
    pub name: String,
    /// Primary muscle group targeted by the exercise
    #[serde(default)]
    pub muscle_group: String,
    /// Compound or isolation; unspecified rows default to isolation
    #[serde(default, rename = "type")]
    pub kind: ExerciseKind,
    /// Logged sets, in the order they were performed
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutExercise {
    /// Create an exercise performance record
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        muscle_group: impl Into<String>,
        kind: ExerciseKind,
        sets: Vec<WorkoutSet>,
    ) -> Self {
        Self {
            name: name.into(),
            muscle_group: muscle_group.into(),
            kind,
            sets,
        }
    }
}

/// A dated training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Exercises performed, in session order
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    /// Create a workout from a date and its exercise performances
    #[must_use]
    pub const fn new(date: DateTime<Utc>, exercises: Vec<WorkoutExercise>) -> Self {
        Self { date, exercises }
    }
}
