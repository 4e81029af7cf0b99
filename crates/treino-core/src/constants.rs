// ABOUTME: Training-science constants for volume accounting, progression, and pacing
// ABOUTME: Organized by domain with references to the underlying hypertrophy research
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness Intelligence

//! Training-science constants used throughout the engine.
//!
//! Values are grouped by domain. Where a constant encodes a published
//! training guideline the reference is noted on the constant itself.

/// Set-validity credits derived from reps in reserve (RIR)
///
/// RIR is used as a proxy for proximity to failure: sets taken too far from
/// failure do not count as fully productive hypertrophy volume.
///
/// References:
/// - Zourdos, M.C., et al. (2016). "Novel resistance training-specific rating
///   of perceived exertion scale measuring repetitions in reserve."
///   *Journal of Strength and Conditioning Research*, 30(1), 267-275.
/// - Helms, E.R., et al. (2016). "Application of the repetitions in reserve-based
///   rating of perceived exertion scale for resistance training."
///   *Strength and Conditioning Journal*, 38(4), 42-49.
pub mod rir {
    /// Sets above this RIR are warm-ups and earn no volume credit
    pub const WARMUP_THRESHOLD: f64 = 3.0;

    /// Lower bound of the adjustment band; sets at RIR 2-3 earn half credit
    pub const ADJUSTMENT_LOWER_BOUND: f64 = 2.0;

    /// Credit for a set near failure (RIR below 2) or with no RIR recorded
    pub const FULL_SET_CREDIT: f64 = 1.0;

    /// Credit for a borderline adjustment set (RIR 2-3)
    pub const ADJUSTMENT_SET_CREDIT: f64 = 0.5;

    /// Credit for a warm-up set (RIR above 3)
    pub const WARMUP_SET_CREDIT: f64 = 0.0;
}

/// Compound-exercise synergist credit
pub mod synergy {
    /// Fraction of an exercise's valid sets credited to each synergist group.
    /// The primary group always receives full credit on top of this.
    pub const SYNERGIST_SET_CREDIT: f64 = 0.5;
}

/// Weekly volume recommendation band per muscle group
///
/// The 10-20 weekly-set band follows the volume dose-response literature and
/// is a fixed guideline, not a tunable parameter.
///
/// References:
/// - Schoenfeld, B.J., Ogborn, D., & Krieger, J.W. (2017). "Dose-response
///   relationship between weekly resistance training volume and increases in
///   muscle mass." *Journal of Sports Sciences*, 35(11), 1073-1082.
pub mod weekly_volume {
    /// Minimum recommended weekly valid sets per muscle group
    pub const RECOMMENDED_MIN: f64 = 10.0;

    /// Maximum recommended weekly valid sets per muscle group
    pub const RECOMMENDED_MAX: f64 = 20.0;
}

/// Load-progression heuristics
///
/// Percentage increments keyed on average RIR, with damping for time away
/// from training. Reference: Helms, E.R., et al. (2018). "RPE vs. percentage
/// 1RM loading in periodized programs." *Frontiers in Physiology*, 9, 247.
pub mod progression {
    /// Load increase when training very near failure (RIR <= 1)
    pub const NEAR_FAILURE_INCREMENT: f64 = 1.025;

    /// Load increase at RIR <= 2
    pub const CLOSE_TO_FAILURE_INCREMENT: f64 = 1.02;

    /// Load increase at RIR <= 2.5
    pub const MODERATE_INCREMENT: f64 = 1.025;

    /// Load increase for compound lifts far from failure (RIR >= 3)
    pub const FAR_FROM_FAILURE_COMPOUND_INCREMENT: f64 = 1.05;

    /// Load increase for isolation lifts far from failure (RIR >= 3)
    pub const FAR_FROM_FAILURE_ISOLATION_INCREMENT: f64 = 1.04;

    /// Default increase when no RIR history exists
    pub const DEFAULT_INCREMENT: f64 = 1.025;

    /// Damping after more than one week without training this exercise
    pub const ONE_WEEK_AWAY_ADJUSTMENT: f64 = 0.95;

    /// Damping after more than two weeks without training this exercise
    pub const TWO_WEEKS_AWAY_ADJUSTMENT: f64 = 0.9;

    /// Extra push when the recent trend is improving over enough workouts
    pub const IMPROVING_TREND_ADJUSTMENT: f64 = 1.01;

    /// Pullback when the recent trend is flat over enough workouts
    pub const FLAT_TREND_ADJUSTMENT: f64 = 0.98;

    /// Workouts of history required before trend adjustments apply
    pub const TREND_MIN_WORKOUTS: u32 = 3;

    /// Rep ceiling for suggesting an extra rep instead of more load
    pub const REP_BUMP_CEILING: u32 = 15;

    /// Loads at or above this are heavy enough to favor a rep bump at high RIR
    pub const HEAVY_LOAD_THRESHOLD_KG: f64 = 20.0;
}

/// Session pacing used for workout duration estimates
pub mod pacing {
    /// Working time per set, in minutes
    pub const TIME_PER_SET_MIN: f64 = 0.5;

    /// Average rest between sets of a compound exercise, in minutes
    pub const REST_COMPOUND_MIN: f64 = 2.5;

    /// Average rest between sets of an isolation exercise, in minutes
    pub const REST_ISOLATION_MIN: f64 = 1.75;

    /// Average transition time between consecutive exercises, in minutes
    pub const TRANSITION_MIN: f64 = 2.5;

    /// Assumed set count for exercises with nothing logged yet
    pub const DEFAULT_PLANNED_SETS: usize = 3;
}
