//! Property-based tests for the scoring gate and the aggregator.

use proptest::prelude::*;

use tandem::domain::models::AxisScores;
use tandem::services::{aggregate, gate};

fn axis_scores() -> impl Strategy<Value = AxisScores> {
    (0u8..=10, 0u8..=10, 0u8..=10, 0u8..=10, 0u8..=10, 0u8..=10)
        .prop_map(|(a, b, c, d, e, f)| AxisScores::new(a, b, c, d, e, f))
}

proptest! {
    /// The overall score is always the arithmetic sum of the six axes.
    #[test]
    fn overall_is_sum(scores in axis_scores()) {
        let decision = gate::gate(&scores);
        prop_assert_eq!(decision.overall, scores.total());
        prop_assert!(decision.overall <= AxisScores::MAX_TOTAL);
    }

    /// A pass always means: total at the line, no weak axis, at most one
    /// borderline axis.
    #[test]
    fn pass_implies_all_three_conditions(scores in axis_scores()) {
        let decision = gate::gate(&scores);
        if !decision.should_refine {
            prop_assert!(decision.overall >= gate::PASS_TOTAL);
            prop_assert!(scores.iter().all(|(_, s)| s >= 6));
            prop_assert!(scores.iter().filter(|&(_, s)| s < 7).count() <= 1);
        }
    }

    /// Raising any single axis can never turn a pass into a refine.
    #[test]
    fn gate_is_monotone_in_each_axis(scores in axis_scores(), axis_index in 0usize..6) {
        let before = gate::gate(&scores);
        if !before.should_refine {
            let mut raised = scores;
            match axis_index {
                0 => raised.objective_achievement = (raised.objective_achievement + 1).min(10),
                1 => raised.coverage = (raised.coverage + 1).min(10),
                2 => raised.depth_insight = (raised.depth_insight + 1).min(10),
                3 => raised.actionability = (raised.actionability + 1).min(10),
                4 => raised.credibility = (raised.credibility + 1).min(10),
                _ => raised.quantitative = (raised.quantitative + 1).min(10),
            }
            prop_assert!(!gate::gate(&raised).should_refine);
        }
    }

    /// Improvement rates are finite for every score pair, including the
    /// zero baseline.
    #[test]
    fn improvement_rates_are_finite(simple in 0u8..=10, agentic in 0u8..=10) {
        let rate = aggregate::improvement_rate(simple, agentic);
        prop_assert!(rate.is_finite());
        if simple == 0 && agentic == 0 {
            prop_assert!(rate.abs() < f64::EPSILON);
        }
        if simple == 0 && agentic > 0 {
            prop_assert!((rate - 100.0).abs() < f64::EPSILON);
        }
    }
}
