// ABOUTME: History-based load progression suggestions keyed on average RIR
// ABOUTME: Applies detraining damping, trend adjustment, and practical plate rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness Intelligence

//! Load progression suggestions.
//!
//! Given an exercise's recent history (last set, last-workout average,
//! personal record), proposes the next load and rep target. Average RIR
//! drives the progression percentage; time away from the exercise damps it;
//! the result is rounded to plates a gym actually has. With no history at
//! all there is nothing to suggest and the function returns `None`.

use serde::{Deserialize, Serialize};
use tracing::debug;
use treino_core::constants::progression as consts;
use treino_core::models::ExerciseKind;

/// Condensed view of a logged set, or of a last-workout average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSummary {
    /// Load in kilograms
    pub weight: f64,
    /// Repetitions (callers round averages to whole reps)
    pub reps: u32,
    /// Average reps in reserve, if recorded
    #[serde(default)]
    pub rir: Option<f64>,
}

/// Best recorded single set for an exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    /// Load in kilograms
    pub weight: f64,
    /// Repetitions at that load
    pub reps: u32,
}

/// Recent direction of an exercise's loading, computed by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendData {
    /// Load delta across the compared workouts, in kilograms
    pub weight_change: f64,
    /// Rep delta across the compared workouts
    pub reps_change: f64,
    /// Days spanned by the comparison
    pub days_between: i64,
    /// Number of workouts in the comparison window
    pub workouts_count: u32,
    /// Whether load or reps moved up over the window
    pub is_improving: bool,
}

/// Suggested next loading for an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightSuggestion {
    /// Proposed load in kilograms, rounded to a practical increment
    pub suggested_weight: f64,
    /// Proposed rep target
    pub suggested_reps: u32,
    /// Why this suggestion was made
    pub reason: String,
    /// Load of the most recent set, echoed for display
    pub last_weight: Option<f64>,
    /// Reps of the most recent set, echoed for display
    pub last_reps: Option<u32>,
    /// Personal-record load, echoed for display
    pub pr_weight: Option<f64>,
    /// Personal-record reps, echoed for display
    pub pr_reps: Option<u32>,
}

/// Round a load to the increments a loaded barbell or dumbbell rack offers:
/// 0.5 kg below 5 kg, 1 kg below 20 kg, 2.5 kg below 50 kg, 5 kg above.
#[must_use]
pub fn round_to_increment(weight: f64) -> f64 {
    if weight < 5.0 {
        (weight * 2.0).round() / 2.0
    } else if weight < 20.0 {
        weight.round()
    } else if weight < 50.0 {
        (weight / 2.5).round() * 2.5
    } else {
        (weight / 5.0).round() * 5.0
    }
}

/// Propose the next load for an exercise from its history.
///
/// Base load precedence: last-workout average, then most recent set, then
/// personal record, skipping zero entries. Returns `None` when no usable
/// history exists.
#[must_use]
#[allow(clippy::float_cmp)] // zero filtering and post-rounding equality are exact by construction
// Long function: single decision pipeline, kept linear for auditability
pub fn suggest_weight(
    last_set: Option<&SetSummary>,
    personal_record: Option<&PersonalRecord>,
    average_set: Option<&SetSummary>,
    trend: Option<&TrendData>,
    days_since_last_workout: Option<i64>,
    kind: ExerciseKind,
) -> Option<WeightSuggestion> {
    // Prefer the last-workout average (most representative), then the most
    // recent set, then the PR; zero entries are treated as unusable.
    let base_weight = [
        average_set.map(|s| s.weight),
        last_set.map(|s| s.weight),
        personal_record.map(|p| p.weight),
    ]
    .into_iter()
    .flatten()
    .find(|w| *w != 0.0)
    .unwrap_or(0.0);

    let base_reps = [
        average_set.map(|s| s.reps),
        last_set.map(|s| s.reps),
        personal_record.map(|p| p.reps),
    ]
    .into_iter()
    .flatten()
    .find(|r| *r != 0)
    .unwrap_or(0);

    let base_rir = average_set
        .and_then(|s| s.rir)
        .or_else(|| last_set.and_then(|s| s.rir));

    if base_weight == 0.0 || base_reps == 0 {
        return None;
    }

    let time_adjustment = match days_since_last_workout {
        Some(days) if days > 14 => consts::TWO_WEEKS_AWAY_ADJUSTMENT,
        Some(days) if days > 7 => consts::ONE_WEEK_AWAY_ADJUSTMENT,
        _ => 1.0,
    };

    let is_compound = kind == ExerciseKind::Compound;

    let mut suggested_weight = base_weight;
    let mut suggested_reps = base_reps;
    let mut reason = String::new();

    if let Some(rir) = base_rir {
        if rir <= 1.0 {
            suggested_weight = base_weight * consts::NEAR_FAILURE_INCREMENT * time_adjustment;
            reason = format!(
                "Average RIR {rir:.1} (near failure). Suggestion: increase load by ~2.5%"
            );
        } else if rir <= 2.0 {
            suggested_weight = base_weight * consts::CLOSE_TO_FAILURE_INCREMENT * time_adjustment;
            reason = format!(
                "Average RIR {rir:.1} (near failure). Suggestion: increase load by ~2%"
            );
        } else if rir <= 2.5 {
            suggested_weight = base_weight * consts::MODERATE_INCREMENT * time_adjustment;
            reason = format!("Average RIR {rir:.1}. Suggestion: increase load by ~2.5%");
        } else if rir >= 3.0 {
            let increment = if is_compound {
                consts::FAR_FROM_FAILURE_COMPOUND_INCREMENT
            } else {
                consts::FAR_FROM_FAILURE_ISOLATION_INCREMENT
            };
            suggested_weight = base_weight * increment * time_adjustment;
            let percent = (increment - 1.0) * 100.0;

            if base_weight > consts::HEAVY_LOAD_THRESHOLD_KG && rir >= 4.0 {
                suggested_reps = base_reps + 1;
                reason = format!(
                    "Average RIR {rir:.1} (very far from failure). Suggestion: increase load by ~{percent:.0}% or move up to {suggested_reps} reps"
                );
            } else {
                reason = format!(
                    "Average RIR {rir:.1} (far from failure). Suggestion: increase load by ~{percent:.0}%"
                );
            }
        }
        // RIR between 2.5 and 3 exclusive: no branch applies, base loading stands
    } else {
        suggested_weight = base_weight * consts::DEFAULT_INCREMENT * time_adjustment;
        reason = "Standard progression: increase load by ~2.5%".to_owned();
    }

    if let Some(trend) = trend {
        if trend.workouts_count >= consts::TREND_MIN_WORKOUTS {
            if trend.is_improving {
                suggested_weight *= consts::IMPROVING_TREND_ADJUSTMENT;
                reason.push_str(" (positive trend)");
            } else {
                suggested_weight *= consts::FLAT_TREND_ADJUSTMENT;
                reason.push_str(" (flat trend - conservative progression)");
            }
        }
    }

    if let Some(days) = days_since_last_workout {
        if days > 7 {
            reason.push_str(&format!(
                " (last workout {days} days ago - progression adjusted)"
            ));
        }
    }

    suggested_weight = round_to_increment(suggested_weight);

    // Never walk the load backwards
    if suggested_weight < base_weight {
        suggested_weight = base_weight;
    }

    // If rounding ate the whole increase, push reps instead
    if suggested_weight == base_weight
        && suggested_reps == base_reps
        && base_reps < consts::REP_BUMP_CEILING
    {
        suggested_reps = base_reps + 1;
        if reason.contains("increase load") {
            reason = reason.replace("increase load", "increase reps");
        } else if reason.is_empty() {
            reason = "Suggestion: add 1 rep".to_owned();
        }
    }

    debug!(
        base_weight,
        suggested_weight, suggested_reps, "computed load suggestion"
    );

    Some(WeightSuggestion {
        suggested_weight,
        suggested_reps,
        reason,
        last_weight: last_set.map(|s| s.weight),
        last_reps: last_set.map(|s| s.reps),
        pr_weight: personal_record.map(|p| p.weight),
        pr_reps: personal_record.map(|p| p.reps),
    })
}

/// Display form of a suggestion, e.g. `62.5kg × 8 reps`
#[must_use]
pub fn format_suggestion(suggestion: Option<&WeightSuggestion>) -> String {
    suggestion.map_or_else(
        || "No history available".to_owned(),
        |s| format!("{:.1}kg × {} reps", s.suggested_weight, s.suggested_reps),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    fn set(weight: f64, reps: u32, rir: Option<f64>) -> SetSummary {
        SetSummary { weight, reps, rir }
    }

    #[test]
    fn no_history_yields_no_suggestion() {
        assert!(suggest_weight(None, None, None, None, None, ExerciseKind::Isolation).is_none());
    }

    #[test]
    fn zero_weight_history_is_unusable() {
        let zeros = set(0.0, 0, None);
        assert!(
            suggest_weight(Some(&zeros), None, None, None, None, ExerciseKind::Isolation)
                .is_none()
        );
    }

    #[test]
    fn near_failure_increases_load() {
        let average = set(100.0, 8, Some(1.0));
        let suggestion =
            suggest_weight(None, None, Some(&average), None, None, ExerciseKind::Compound)
                .unwrap();

        // 100 * 1.025 = 102.5, rounded to the 5 kg bracket
        assert_eq!(suggestion.suggested_weight, 105.0);
        assert_eq!(suggestion.suggested_reps, 8);
        assert!(suggestion.reason.contains("near failure"));
    }

    #[test]
    fn rounded_away_increase_bumps_reps_instead() {
        // 40 * 1.025 = 41, which rounds back down to 40 in the 2.5 kg bracket
        let average = set(40.0, 10, Some(1.0));
        let suggestion =
            suggest_weight(None, None, Some(&average), None, None, ExerciseKind::Isolation)
                .unwrap();

        assert_eq!(suggestion.suggested_weight, 40.0);
        assert_eq!(suggestion.suggested_reps, 11);
        assert!(suggestion.reason.contains("increase reps"));
    }

    #[test]
    fn suggestion_never_drops_below_base_weight() {
        // Two weeks away damps 100 kg to 92.25, but the floor is the base load
        let average = set(100.0, 8, None);
        let suggestion = suggest_weight(
            None,
            None,
            Some(&average),
            None,
            Some(20),
            ExerciseKind::Compound,
        )
        .unwrap();

        assert_eq!(suggestion.suggested_weight, 100.0);
        assert_eq!(suggestion.suggested_reps, 9);
        assert!(suggestion.reason.contains("20 days ago"));
    }

    #[test]
    fn far_from_failure_heavy_load_offers_rep_alternative() {
        let average = set(60.0, 8, Some(4.0));
        let suggestion =
            suggest_weight(None, None, Some(&average), None, None, ExerciseKind::Compound)
                .unwrap();

        // 60 * 1.05 = 63, rounded to 65 in the 5 kg bracket
        assert_eq!(suggestion.suggested_weight, 65.0);
        assert_eq!(suggestion.suggested_reps, 9);
        assert!(suggestion.reason.contains("very far from failure"));
    }

    #[test]
    fn average_set_takes_precedence_over_last_and_pr() {
        let average = set(50.0, 10, Some(1.0));
        let last = set(55.0, 8, Some(0.0));
        let pr = PersonalRecord {
            weight: 70.0,
            reps: 5,
        };
        let suggestion = suggest_weight(
            Some(&last),
            Some(&pr),
            Some(&average),
            None,
            None,
            ExerciseKind::Isolation,
        )
        .unwrap();

        // Base is the 50 kg average; history echoes come from last set and PR
        assert!(suggestion.suggested_weight >= 50.0);
        assert!(suggestion.suggested_weight < 55.0);
        assert_eq!(suggestion.last_weight, Some(55.0));
        assert_eq!(suggestion.pr_weight, Some(70.0));
    }

    #[test]
    fn improving_trend_pushes_a_little_harder() {
        let average = set(100.0, 8, Some(2.0));
        let trend = TrendData {
            weight_change: 5.0,
            reps_change: 0.0,
            days_between: 14,
            workouts_count: 4,
            is_improving: true,
        };

        let with_trend = suggest_weight(
            None,
            None,
            Some(&average),
            Some(&trend),
            None,
            ExerciseKind::Compound,
        )
        .unwrap();

        // 100 * 1.02 * 1.01 = 103.02, rounded to 105
        assert_eq!(with_trend.suggested_weight, 105.0);
        assert!(with_trend.reason.contains("positive trend"));
    }

    #[test]
    fn flat_trend_is_conservative() {
        let average = set(30.0, 12, Some(1.0));
        let trend = TrendData {
            weight_change: 0.0,
            reps_change: 0.0,
            days_between: 14,
            workouts_count: 3,
            is_improving: false,
        };

        let suggestion = suggest_weight(
            None,
            None,
            Some(&average),
            Some(&trend),
            None,
            ExerciseKind::Isolation,
        )
        .unwrap();

        // 30 * 1.025 * 0.98 = 30.135, rounded back to 30: rep bump path
        assert_eq!(suggestion.suggested_weight, 30.0);
        assert_eq!(suggestion.suggested_reps, 13);
        assert!(suggestion.reason.contains("flat trend"));
    }

    #[test]
    fn practical_increments_follow_weight_brackets() {
        assert_eq!(round_to_increment(3.3), 3.5);
        assert_eq!(round_to_increment(12.4), 12.0);
        assert_eq!(round_to_increment(23.0), 22.5);
        assert_eq!(round_to_increment(47.6), 47.5);
        assert_eq!(round_to_increment(63.0), 65.0);
    }

    #[test]
    fn formatting_handles_both_cases() {
        assert_eq!(format_suggestion(None), "No history available");
        let suggestion = WeightSuggestion {
            suggested_weight: 62.5,
            suggested_reps: 8,
            reason: String::new(),
            last_weight: None,
            last_reps: None,
            pr_weight: None,
            pr_reps: None,
        };
        assert_eq!(format_suggestion(Some(&suggestion)), "62.5kg × 8 reps");
    }
}
