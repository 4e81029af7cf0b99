// ABOUTME: Training-volume intelligence engine for the Treino platform
// ABOUTME: Valid-set accounting, weekly classification, progression, and pacing estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness Intelligence

#![deny(unsafe_code)]

//! # Treino Intelligence
//!
//! Pure calculation engine for strength-training analytics. Every function
//! here is synchronous, side-effect-free, and safe to call concurrently:
//! callers fetch the logged data, the engine turns it into volume metrics,
//! and callers render or persist the results.
//!
//! The core pipeline converts raw logged sets (weight, reps, RIR) into a
//! normalized "valid sets" volume metric per muscle group, with compound
//! exercises spreading partial credit into their synergist groups, then
//! aggregates that volume per week and classifies each muscle group against
//! the recommended 10-20 weekly set band.
//!
//! ## Modules
//!
//! - **config**: compound-exercise synergist table (built-in catalog or
//!   externalized JSON)
//! - **volume**: RIR set-credit policy and per-workout volume aggregation
//! - **weekly**: weekly summation, recommendation-band classification, and
//!   calendar helpers
//! - **progression**: history-based load suggestions
//! - **duration**: session length estimates from set counts and rest pacing

/// Compound-exercise synergist configuration
pub mod config;

/// Session length estimates from set counts and rest pacing
pub mod duration;

/// History-based load progression suggestions
pub mod progression;

/// RIR set-credit policy and per-workout volume aggregation
pub mod volume;

/// Weekly volume summation and recommendation-band classification
pub mod weekly;

pub use config::SynergistConfig;
pub use volume::{
    set_credit, volume_timeline, DailyVolume, MuscleGroupVolumePoint, VolumeCalculator,
    WorkoutVolume,
};
pub use weekly::{classify_weekly_volume, weekly_volume, MuscleGroupAssessment, VolumeStatus};
