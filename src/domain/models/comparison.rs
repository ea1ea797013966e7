//! Comparison models for the one-shot vs agentic report.

use serde::{Deserialize, Serialize};

use crate::domain::models::evaluation::Axis;

/// Score pair and improvement rate for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisComparison {
    pub axis: Axis,
    pub simple: u8,
    pub agentic: u8,
    /// Percent improvement of the agentic score over the simple score.
    pub improvement_rate: f64,
}

/// Qualitative half of the comparison, produced by the comparator
/// capability. The aggregator supplies the numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonNarrative {
    #[serde(default)]
    pub key_differences: Vec<String>,
    #[serde(default)]
    pub simple_strengths: Vec<String>,
    #[serde(default)]
    pub simple_weaknesses: Vec<String>,
    #[serde(default)]
    pub agentic_strengths: Vec<String>,
    #[serde(default)]
    pub agentic_weaknesses: Vec<String>,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub cost_effectiveness_analysis: String,
}

/// The complete comparison record, built once per run.
///
/// Totals are on the canonical 0-60 scale (sum of six 0-10 axes) with the
/// pass line at 48.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub theme: String,
    /// One entry per axis, in [`Axis::ALL`] order.
    pub axes: Vec<AxisComparison>,
    pub simple_total: u16,
    pub agentic_total: u16,
    pub simple_passes: bool,
    pub agentic_passes: bool,
    pub key_differences: Vec<String>,
    pub simple_strengths: Vec<String>,
    pub simple_weaknesses: Vec<String>,
    pub agentic_strengths: Vec<String>,
    pub agentic_weaknesses: Vec<String>,
    pub recommendation: String,
    pub cost_effectiveness_analysis: String,
}

impl ComparisonRecord {
    /// The comparison entry for one axis.
    pub fn axis(&self, axis: Axis) -> Option<&AxisComparison> {
        self.axes.iter().find(|entry| entry.axis == axis)
    }
}
