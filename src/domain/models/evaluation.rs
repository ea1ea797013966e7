//! Six-axis evaluation models.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{ProviderError, ProviderResult};
use crate::domain::models::plan::SearchPlan;

/// One of the six axes a research result is judged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    ObjectiveAchievement,
    Coverage,
    DepthInsight,
    Actionability,
    Credibility,
    Quantitative,
}

impl Axis {
    /// All axes, in reporting order.
    pub const ALL: [Self; 6] = [
        Self::ObjectiveAchievement,
        Self::Coverage,
        Self::DepthInsight,
        Self::Actionability,
        Self::Credibility,
        Self::Quantitative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ObjectiveAchievement => "objective achievement",
            Self::Coverage => "coverage",
            Self::DepthInsight => "depth & insight",
            Self::Actionability => "actionability",
            Self::Credibility => "credibility",
            Self::Quantitative => "quantitative rigor",
        }
    }
}

/// The six axis scores, each in 0..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisScores {
    #[serde(default)]
    pub objective_achievement: u8,
    #[serde(default)]
    pub coverage: u8,
    #[serde(default)]
    pub depth_insight: u8,
    #[serde(default)]
    pub actionability: u8,
    #[serde(default)]
    pub credibility: u8,
    #[serde(default)]
    pub quantitative: u8,
}

impl AxisScores {
    pub const MAX_AXIS: u8 = 10;
    pub const MAX_TOTAL: u16 = 60;

    pub fn new(
        objective_achievement: u8,
        coverage: u8,
        depth_insight: u8,
        actionability: u8,
        credibility: u8,
        quantitative: u8,
    ) -> Self {
        Self {
            objective_achievement,
            coverage,
            depth_insight,
            actionability,
            credibility,
            quantitative,
        }
    }

    pub fn get(&self, axis: Axis) -> u8 {
        match axis {
            Axis::ObjectiveAchievement => self.objective_achievement,
            Axis::Coverage => self.coverage,
            Axis::DepthInsight => self.depth_insight,
            Axis::Actionability => self.actionability,
            Axis::Credibility => self.credibility,
            Axis::Quantitative => self.quantitative,
        }
    }

    /// Iterate `(axis, score)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, u8)> + '_ {
        Axis::ALL.into_iter().map(|axis| (axis, self.get(axis)))
    }

    /// Sum of the six axes, in 0..=60.
    pub fn total(&self) -> u16 {
        self.iter().map(|(_, score)| u16::from(score)).sum()
    }

    /// Reject any axis outside 0..=10.
    pub fn validate(&self) -> ProviderResult<()> {
        for (axis, score) in self.iter() {
            if score > Self::MAX_AXIS {
                return Err(ProviderError::SchemaViolation(format!(
                    "{} score {score} is out of range 0-{}",
                    axis.label(),
                    Self::MAX_AXIS
                )));
            }
        }
        Ok(())
    }
}

/// Raw output of the evaluator capability, before the gate derives the
/// overall score and the refine decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub scores: AxisScores,
    /// Essential angles the result failed to cover.
    #[serde(default)]
    pub coverage_gaps: Vec<String>,
    /// Prioritized improvement plan, present when the evaluator sees room.
    #[serde(default)]
    pub refinement_strategy: Option<String>,
    /// Full replacement plan for the next iteration, if proposed.
    #[serde(default)]
    pub refined_plan: Option<SearchPlan>,
    /// Blunt domain-expert commentary on what is missing.
    #[serde(default)]
    pub expert_observations: String,
}

/// Sealed evaluation of one iteration.
///
/// `overall_score` is always the arithmetic sum of the six axis scores and
/// `should_refine` is always derived by the gate; neither is ever taken
/// from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub iteration_number: u32,
    pub scores: AxisScores,
    pub overall_score: u16,
    #[serde(default)]
    pub coverage_gaps: Vec<String>,
    pub should_refine: bool,
    #[serde(default)]
    pub refinement_strategy: Option<String>,
    #[serde(default)]
    pub refined_plan: Option<SearchPlan>,
    #[serde(default)]
    pub expert_observations: String,
}
