// ABOUTME: Compound-exercise synergist table configuration
// ABOUTME: Built-in catalog plus externalized JSON loading with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness Intelligence

//! Synergist table configuration.
//!
//! Compound movements train more than their primary muscle group. The
//! synergist table maps an exercise name to the secondary groups that
//! receive partial volume credit when that exercise is performed. Lookup is
//! exact and case-sensitive: an exercise not present in the table earns no
//! synergist credit regardless of its declared kind.
//!
//! The table is immutable configuration, captured by the calculator at
//! construction time. The built-in catalog matches the exercise names the
//! companion application seeds its database with; deployments with their own
//! exercise catalog load a replacement table with [`SynergistConfig::from_json`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use treino_core::errors::ConfigError;

/// Built-in synergist catalog, keyed by seeded exercise name.
///
/// Primary groups receive full credit; each group listed here receives half
/// credit per valid set of the exercise.
const BUILTIN_CATALOG: &[(&str, &[&str])] = &[
    // Rows and pulldowns (back + biceps)
    ("Remada curvada barra", &["biceps"]),
    ("Remada baixa máquina", &["biceps"]),
    ("Remada cavalinho T-bar", &["biceps"]),
    ("Remada unilateral halter", &["biceps"]),
    ("Remada com cabo", &["biceps"]),
    ("Barra fixa", &["biceps"]),
    ("Puxada frontal pegada aberta", &["biceps"]),
    ("Puxada frontal pegada fechada", &["biceps"]),
    ("Remada alta", &["biceps"]),
    ("Puxada no pulley", &["biceps"]),
    ("Pulldown pull-over", &["biceps"]),
    // Presses (chest + triceps + front delts)
    ("Supino reto barra", &["triceps", "shoulders"]),
    ("Supino reto halteres", &["triceps", "shoulders"]),
    ("Supino inclinado halteres", &["triceps", "shoulders"]),
    ("Supino inclinado máquina", &["triceps", "shoulders"]),
    ("Supino declinado barra", &["triceps", "shoulders"]),
    ("Supino declinado halteres", &["triceps", "shoulders"]),
    ("Supino com pegada fechada", &["triceps", "shoulders"]),
    ("Flexão de braço", &["triceps", "shoulders"]),
    // Overhead presses (shoulders + triceps)
    ("Desenvolvimento halteres sentado", &["triceps"]),
    ("Desenvolvimento máquina", &["triceps"]),
    ("Desenvolvimento com barra", &["triceps"]),
    ("Desenvolvimento Arnold", &["triceps"]),
    // Squat patterns (quads + glutes + calves)
    ("Agachamento livre", &["glutes", "calves"]),
    ("Agachamento frontal", &["glutes", "calves"]),
    ("Agachamento sumô", &["glutes", "calves"]),
    ("Agachamento búlgaro", &["glutes", "calves"]),
    ("Leg press", &["glutes", "calves"]),
    ("Leg press 45°", &["glutes", "calves"]),
    ("Hack squat", &["glutes", "calves"]),
    ("Afundo", &["glutes", "calves"]),
    // Hinge patterns (hamstrings + glutes + calves + lower back)
    ("Terra tradicional", &["glutes", "calves", "lower_back"]),
    ("Levantamento terra romeno", &["glutes", "calves", "lower_back"]),
    ("Stiff", &["glutes", "calves", "lower_back"]),
    // Hip extension (glutes + hamstrings)
    ("Hip thrust barra", &["hamstrings"]),
    ("Elevação pélvica", &["hamstrings"]),
    // Dips (triceps + chest + shoulders)
    ("Paralelas", &["chest", "shoulders"]),
];

/// Immutable exercise-name to synergist-groups mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynergistConfig {
    table: HashMap<String, Vec<String>>,
}

impl Default for SynergistConfig {
    fn default() -> Self {
        let table = BUILTIN_CATALOG
            .iter()
            .map(|(name, groups)| {
                (
                    (*name).to_owned(),
                    groups.iter().map(|g| (*g).to_owned()).collect(),
                )
            })
            .collect();
        Self { table }
    }
}

impl SynergistConfig {
    /// Build a config from an explicit table.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidEntry` if any exercise name is empty or
    /// any synergist list is empty - such entries would silently change
    /// volume accounting, so they are rejected at load time.
    pub fn from_table(table: HashMap<String, Vec<String>>) -> Result<Self, ConfigError> {
        for (name, groups) in &table {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidEntry(
                    "exercise name must not be empty".to_owned(),
                ));
            }
            if groups.is_empty() {
                return Err(ConfigError::InvalidEntry(format!(
                    "exercise '{name}' has no synergist groups"
                )));
            }
            if groups.iter().any(|g| g.trim().is_empty()) {
                return Err(ConfigError::InvalidEntry(format!(
                    "exercise '{name}' has an empty synergist group"
                )));
            }
        }
        Ok(Self { table })
    }

    /// Load a table from a JSON document of shape `{"exercise": ["group", ...]}`.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::InvalidEntry` for structurally invalid entries.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let table: HashMap<String, Vec<String>> = serde_json::from_str(document)?;
        Self::from_table(table)
    }

    /// Synergist groups for an exercise name; empty for unknown names.
    ///
    /// Lookup is exact and case-sensitive.
    #[must_use]
    pub fn synergists(&self, exercise_name: &str) -> &[String] {
        self.table.get(exercise_name).map_or(&[], Vec::as_slice)
    }

    /// Whether the table has an entry for this exercise name
    #[must_use]
    pub fn contains(&self, exercise_name: &str) -> bool {
        self.table.contains_key(exercise_name)
    }

    /// Number of exercises in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_covers_seeded_compounds() {
        let config = SynergistConfig::default();

        assert_eq!(config.synergists("Remada curvada barra"), ["biceps"]);
        assert_eq!(
            config.synergists("Supino reto barra"),
            ["triceps", "shoulders"]
        );
        assert_eq!(
            config.synergists("Terra tradicional"),
            ["glutes", "calves", "lower_back"]
        );
        assert_eq!(config.synergists("Paralelas"), ["chest", "shoulders"]);
    }

    #[test]
    fn unknown_exercise_has_no_synergists() {
        let config = SynergistConfig::default();
        assert!(config.synergists("Rosca direta").is_empty());
        // case-sensitive by design
        assert!(config.synergists("supino reto barra").is_empty());
    }

    #[test]
    fn from_json_accepts_well_formed_tables() {
        let config =
            SynergistConfig::from_json(r#"{"Bench press": ["triceps", "shoulders"]}"#).unwrap();
        assert_eq!(config.synergists("Bench press"), ["triceps", "shoulders"]);
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn from_json_rejects_empty_synergist_list() {
        let err = SynergistConfig::from_json(r#"{"Bench press": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntry(_)));
    }

    #[test]
    fn from_json_rejects_empty_exercise_name() {
        let err = SynergistConfig::from_json(r#"{"": ["triceps"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntry(_)));
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        let err = SynergistConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
