// ABOUTME: Weekly volume summation and recommendation-band classification per muscle group
// ABOUTME: Includes week-window calendar helpers and display formatting for dashboards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness Intelligence

//! Weekly volume analysis.
//!
//! Sums per-workout volume across a week and classifies each muscle group
//! against the recommended 10-20 weekly valid-set band. The band is a fixed
//! guideline constant: it is the whole point of the classifier and is
//! deliberately not configurable.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;
use treino_core::constants::weekly_volume::{RECOMMENDED_MAX, RECOMMENDED_MIN};
use treino_core::models::Workout;

use crate::volume::VolumeCalculator;

/// Where a muscle group's weekly volume sits relative to the recommended band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeStatus {
    /// Within the recommended band
    Optimal,
    /// Below the recommended minimum
    Low,
    /// Above the recommended maximum
    High,
    /// No valid sets logged at all
    None,
}

impl VolumeStatus {
    /// Dashboard accent color for the status, as a hex string
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Optimal => "#10b981",
            Self::Low => "#f59e0b",
            Self::High => "#ef4444",
            Self::None => "#6b7280",
        }
    }

    /// Dashboard glyph for the status
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Optimal => "✅",
            Self::Low => "⚠️",
            Self::High => "🔴",
            Self::None => "⚪",
        }
    }
}

/// Weekly assessment for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroupAssessment {
    /// Position relative to the recommended band
    pub status: VolumeStatus,
    /// Weekly valid-set total for the group
    pub valid_sets: f64,
    /// Human-readable guidance for the status
    pub recommendation: String,
}

/// Sum valid sets per muscle group across a week of workouts.
///
/// Pure summation, not averaging: a group trained twice contributes both
/// sessions' volume. Synergist spreading from the per-workout aggregation
/// carries through.
#[must_use]
pub fn weekly_volume(
    calculator: &VolumeCalculator,
    workouts: &[Workout],
) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();

    for workout in workouts {
        let volume = calculator.analyze_workout(workout);
        for (group, valid_sets) in volume.by_muscle_group {
            *totals.entry(group).or_insert(0.0) += valid_sets;
        }
    }

    debug!(
        workouts = workouts.len(),
        groups = totals.len(),
        "aggregated weekly volume"
    );
    totals
}

/// Classify each muscle group's weekly total against the recommended band.
///
/// - exactly zero valid sets: [`VolumeStatus::None`]
/// - below the minimum: [`VolumeStatus::Low`]
/// - within the band (inclusive): [`VolumeStatus::Optimal`]
/// - above the maximum: [`VolumeStatus::High`]
#[must_use]
#[allow(clippy::float_cmp)] // exact zero means "nothing logged", not a tolerance check
pub fn classify_weekly_volume(
    weekly_totals: &HashMap<String, f64>,
) -> HashMap<String, MuscleGroupAssessment> {
    weekly_totals
        .iter()
        .map(|(group, &valid_sets)| {
            let assessment = if valid_sets == 0.0 {
                MuscleGroupAssessment {
                    status: VolumeStatus::None,
                    valid_sets,
                    recommendation:
                        "No valid sets logged. Add training for this muscle group.".to_owned(),
                }
            } else if valid_sets < RECOMMENDED_MIN {
                MuscleGroupAssessment {
                    status: VolumeStatus::Low,
                    valid_sets,
                    recommendation: format!(
                        "Below the recommended minimum ({RECOMMENDED_MIN} sets). Consider adding more exercises or sets."
                    ),
                }
            } else if valid_sets > RECOMMENDED_MAX {
                MuscleGroupAssessment {
                    status: VolumeStatus::High,
                    valid_sets,
                    recommendation: format!(
                        "Above the recommended maximum ({RECOMMENDED_MAX} sets). May be more than this group can recover from."
                    ),
                }
            } else {
                MuscleGroupAssessment {
                    status: VolumeStatus::Optimal,
                    valid_sets,
                    recommendation: format!(
                        "Within the recommended range ({RECOMMENDED_MIN}-{RECOMMENDED_MAX} weekly valid sets)."
                    ),
                }
            };
            (group.clone(), assessment)
        })
        .collect()
}

/// Monday-through-Sunday bounds of the week containing `date`
#[must_use]
pub fn week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = date.week(Weekday::Mon);
    (week.first_day(), week.last_day())
}

/// ISO-8601 week number (1-53) of `date`
#[must_use]
pub fn week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Title-case display form of a muscle group key (`lower_back` -> `Lower Back`)
#[must_use]
pub fn format_muscle_group(muscle_group: &str) -> String {
    muscle_group
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
