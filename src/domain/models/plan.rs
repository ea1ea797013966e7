//! Search plan model.
//!
//! A plan is produced by the [`Planner`](crate::domain::ports::Planner)
//! capability and is never partially mutated: refinement always yields a
//! whole new value.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{ProviderError, ProviderResult};

/// A structured research plan for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPlan {
    /// What the investigation is trying to establish.
    pub objective: String,

    /// The 5-8 areas the investigation is decomposed into.
    #[serde(default)]
    pub research_areas: Vec<String>,

    /// Search keywords per area, 3-5 each.
    #[serde(default)]
    pub search_keywords: BTreeMap<String, Vec<String>>,

    /// The research areas again, ordered by priority.
    #[serde(default)]
    pub priority_order: Vec<String>,

    /// Staged approach: what to establish first, how areas depend on each
    /// other, how results will be cross-checked.
    #[serde(default)]
    pub research_strategy: String,

    /// Concrete deliverables the plan expects to produce.
    #[serde(default)]
    pub expected_outcomes: Vec<String>,
}

impl SearchPlan {
    pub const MIN_AREAS: usize = 5;
    pub const MAX_AREAS: usize = 8;

    /// Check the structural invariants a planner must satisfy.
    ///
    /// The area count must be within [`MIN_AREAS`](Self::MIN_AREAS)..=
    /// [`MAX_AREAS`](Self::MAX_AREAS) and `priority_order` must be a
    /// permutation of `research_areas`.
    pub fn validate(&self) -> ProviderResult<()> {
        if self.objective.trim().is_empty() {
            return Err(ProviderError::SchemaViolation(
                "plan objective is empty".into(),
            ));
        }

        let count = self.research_areas.len();
        if !(Self::MIN_AREAS..=Self::MAX_AREAS).contains(&count) {
            return Err(ProviderError::SchemaViolation(format!(
                "plan has {count} research areas, expected {}-{}",
                Self::MIN_AREAS,
                Self::MAX_AREAS
            )));
        }

        let areas: BTreeSet<&str> = self.research_areas.iter().map(String::as_str).collect();
        if areas.len() != count {
            return Err(ProviderError::SchemaViolation(
                "plan research areas contain duplicates".into(),
            ));
        }

        let priorities: BTreeSet<&str> = self.priority_order.iter().map(String::as_str).collect();
        if self.priority_order.len() != count || priorities != areas {
            return Err(ProviderError::SchemaViolation(
                "plan priority order is not a permutation of its research areas".into(),
            ));
        }

        Ok(())
    }

    /// Keywords registered for one area, empty if the planner gave none.
    pub fn keywords_for(&self, area: &str) -> &[String] {
        self.search_keywords
            .get(area)
            .map_or(&[], Vec::as_slice)
    }
}
