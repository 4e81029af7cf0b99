// ABOUTME: Workout duration estimation from set counts, rest pacing, and transitions
// ABOUTME: Produces a per-exercise breakdown plus the total session length in minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness Intelligence

//! Session length estimates.
//!
//! Time per exercise is working time plus the rests between its sets;
//! compound lifts rest longer than isolation work. Consecutive exercises
//! add a transition. Exercises with nothing logged yet are estimated at a
//! default planned set count so a program sketch still gets a number.

use serde::{Deserialize, Serialize};
use treino_core::constants::pacing;
use treino_core::models::{ExerciseKind, WorkoutExercise};

/// Estimated time for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTimeEstimate {
    /// Exercise name, echoed for display
    pub exercise_name: String,
    /// Estimated minutes including rests between this exercise's sets
    pub estimated_minutes: f64,
    /// Set count the estimate assumed
    pub sets_count: usize,
}

/// Estimated time for a whole session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTimeEstimate {
    /// Total session minutes including transitions between exercises
    pub total_minutes: f64,
    /// Per-exercise breakdown, in session order
    pub breakdown: Vec<ExerciseTimeEstimate>,
}

/// Estimate how long a list of exercises takes to perform.
#[must_use]
pub fn estimate_workout_time(exercises: &[WorkoutExercise]) -> WorkoutTimeEstimate {
    let mut breakdown = Vec::with_capacity(exercises.len());
    let mut total_minutes = 0.0;

    for (index, exercise) in exercises.iter().enumerate() {
        let sets_count = if exercise.sets.is_empty() {
            pacing::DEFAULT_PLANNED_SETS
        } else {
            exercise.sets.len()
        };

        let rest_between_sets = if exercise.kind == ExerciseKind::Compound {
            pacing::REST_COMPOUND_MIN
        } else {
            pacing::REST_ISOLATION_MIN
        };

        let sets = sets_count as f64;
        let exercise_minutes =
            sets * pacing::TIME_PER_SET_MIN + (sets - 1.0) * rest_between_sets;

        breakdown.push(ExerciseTimeEstimate {
            exercise_name: exercise.name.clone(),
            estimated_minutes: exercise_minutes,
            sets_count,
        });
        total_minutes += exercise_minutes;

        if index < exercises.len() - 1 {
            total_minutes += pacing::TRANSITION_MIN;
        }
    }

    WorkoutTimeEstimate {
        total_minutes,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use treino_core::models::WorkoutSet;

    use super::*;

    fn exercise(name: &str, kind: ExerciseKind, sets: usize) -> WorkoutExercise {
        WorkoutExercise::new(
            name,
            "chest",
            kind,
            vec![WorkoutSet::without_rir(60.0, 10); sets],
        )
    }

    #[test]
    fn compound_rest_is_longer_than_isolation() {
        // 3 sets compound: 3*0.5 + 2*2.5 = 6.5 min
        // transition: 2.5 min
        // 3 sets isolation: 3*0.5 + 2*1.75 = 5.0 min
        let estimate = estimate_workout_time(&[
            exercise("Supino reto barra", ExerciseKind::Compound, 3),
            exercise("Crucifixo", ExerciseKind::Isolation, 3),
        ]);

        assert_eq!(estimate.breakdown[0].estimated_minutes, 6.5);
        assert_eq!(estimate.breakdown[1].estimated_minutes, 5.0);
        assert_eq!(estimate.total_minutes, 14.0);
    }

    #[test]
    fn unlogged_exercise_assumes_three_sets() {
        let estimate = estimate_workout_time(&[exercise(
            "Elevação lateral",
            ExerciseKind::Isolation,
            0,
        )]);

        assert_eq!(estimate.breakdown[0].sets_count, 3);
        assert_eq!(estimate.breakdown[0].estimated_minutes, 5.0);
        assert_eq!(estimate.total_minutes, 5.0);
    }

    #[test]
    fn last_exercise_adds_no_transition() {
        let single = estimate_workout_time(&[exercise("Remada alta", ExerciseKind::Compound, 2)]);
        // 2*0.5 + 1*2.5 = 3.5, no transition
        assert_eq!(single.total_minutes, 3.5);
    }

    #[test]
    fn empty_session_estimates_to_zero() {
        let estimate = estimate_workout_time(&[]);
        assert_eq!(estimate.total_minutes, 0.0);
        assert!(estimate.breakdown.is_empty());
    }
}
