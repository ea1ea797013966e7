//! Comparison aggregator: the quantitative half of the comparison record.
//!
//! Improvement rates are computed per axis over the six axes, with the
//! zero-baseline case pinned so the record never carries a NaN or an
//! infinity. Totals are on the canonical 0-60 scale.

use crate::domain::models::{
    Axis, AxisComparison, AxisScores, ComparisonNarrative, ComparisonRecord,
};
use crate::services::gate;

/// Percent improvement of `agentic` over `simple` on one axis.
///
/// A zero baseline yields +100% when the agentic side scored at all, and
/// 0% when both sides scored zero.
pub fn improvement_rate(simple: u8, agentic: u8) -> f64 {
    if simple == 0 {
        if agentic > 0 {
            100.0
        } else {
            0.0
        }
    } else {
        (f64::from(agentic) - f64::from(simple)) / f64::from(simple) * 100.0
    }
}

/// Per-axis comparison entries in [`Axis::ALL`] order.
pub fn compare_axes(simple: &AxisScores, agentic: &AxisScores) -> Vec<AxisComparison> {
    Axis::ALL
        .into_iter()
        .map(|axis| {
            let s = simple.get(axis);
            let a = agentic.get(axis);
            AxisComparison {
                axis,
                simple: s,
                agentic: a,
                improvement_rate: improvement_rate(s, a),
            }
        })
        .collect()
}

/// Compose the full comparison record from the two score sets and the
/// comparator's qualitative narrative.
pub fn aggregate(
    theme: &str,
    simple: &AxisScores,
    agentic: &AxisScores,
    narrative: ComparisonNarrative,
) -> ComparisonRecord {
    let simple_total = simple.total();
    let agentic_total = agentic.total();

    ComparisonRecord {
        theme: theme.to_string(),
        axes: compare_axes(simple, agentic),
        simple_total,
        agentic_total,
        simple_passes: gate::passes_total(simple_total),
        agentic_passes: gate::passes_total(agentic_total),
        key_differences: narrative.key_differences,
        simple_strengths: narrative.simple_strengths,
        simple_weaknesses: narrative.simple_weaknesses,
        agentic_strengths: narrative.agentic_strengths,
        agentic_weaknesses: narrative.agentic_weaknesses,
        recommendation: narrative.recommendation,
        cost_effectiveness_analysis: narrative.cost_effectiveness_analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_baseline_zero_agentic_is_zero_percent() {
        assert!(improvement_rate(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_baseline_nonzero_agentic_is_one_hundred_percent() {
        assert!((improvement_rate(0, 5) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn regular_rate_arithmetic() {
        assert!((improvement_rate(5, 8) - 60.0).abs() < f64::EPSILON);
        assert!((improvement_rate(8, 4) + 50.0).abs() < f64::EPSILON);
        assert!(improvement_rate(7, 7).abs() < f64::EPSILON);
    }

    #[test]
    fn rates_are_always_finite() {
        for simple in 0..=10u8 {
            for agentic in 0..=10u8 {
                assert!(improvement_rate(simple, agentic).is_finite());
            }
        }
    }

    #[test]
    fn aggregate_headline_scenario() {
        // One-shot scores 5 on every axis (total 30); the agentic run
        // finishes at 8 on every axis (total 48). Every axis improves by
        // 60%, the agentic run passes, the one-shot does not.
        let simple = AxisScores::new(5, 5, 5, 5, 5, 5);
        let agentic = AxisScores::new(8, 8, 8, 8, 8, 8);

        let record = aggregate("X", &simple, &agentic, ComparisonNarrative::default());

        assert_eq!(record.simple_total, 30);
        assert_eq!(record.agentic_total, 48);
        assert!(!record.simple_passes);
        assert!(record.agentic_passes);
        assert_eq!(record.axes.len(), 6);
        for entry in &record.axes {
            assert!((entry.improvement_rate - 60.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn aggregate_keeps_narrative_fields() {
        let narrative = ComparisonNarrative {
            key_differences: vec!["depth".into()],
            simple_strengths: vec!["fast".into()],
            simple_weaknesses: vec!["shallow".into()],
            agentic_strengths: vec!["thorough".into()],
            agentic_weaknesses: vec!["slow".into()],
            recommendation: "use the cycle for decisions that matter".into(),
            cost_effectiveness_analysis: "roughly 5x the API spend".into(),
        };
        let scores = AxisScores::new(6, 6, 6, 6, 6, 6);
        let record = aggregate("theme", &scores, &scores, narrative);

        assert_eq!(record.key_differences, vec!["depth".to_string()]);
        assert_eq!(record.recommendation, "use the cycle for decisions that matter");
        assert_eq!(record.cost_effectiveness_analysis, "roughly 5x the API spend");
    }

    #[test]
    fn axis_lookup_by_kind() {
        let simple = AxisScores::new(1, 2, 3, 4, 5, 6);
        let agentic = AxisScores::new(2, 4, 6, 8, 10, 6);
        let record = aggregate("t", &simple, &agentic, ComparisonNarrative::default());

        let coverage = record.axis(Axis::Coverage).unwrap();
        assert_eq!(coverage.simple, 2);
        assert_eq!(coverage.agentic, 4);
        assert!((coverage.improvement_rate - 100.0).abs() < f64::EPSILON);
    }
}
