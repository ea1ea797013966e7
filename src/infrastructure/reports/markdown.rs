//! Markdown rendering for the three run documents.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::domain::models::{Evidence, RunOutcome};

/// The one-shot search document.
pub fn render_simple(outcome: &RunOutcome, executed_at: &str) -> String {
    let simple = &outcome.simple_result;
    let mut out = format!(
        "# One-shot search result\n\nTheme: {}\n\nExecuted: {executed_at}\n\n\
         ## Overview\n\nThis search collected information on the theme in a \
         single comprehensive session.\n\n## Key findings\n\nFindings: {}\n\n",
        outcome.theme,
        simple.findings.len()
    );
    for (i, finding) in simple.findings.iter().enumerate() {
        let _ = writeln!(out, "{}. {}\n   Source: {}\n", i + 1, finding.content, finding.source);
    }
    let _ = write!(out, "\n## Evidence\n\nEntries: {}\n\n", simple.evidence.len());
    for (i, evidence) in simple.evidence.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. **{}**\n   - URL: {}\n   - Summary: {}\n",
            i + 1,
            evidence.title,
            evidence.url,
            evidence.summary
        );
    }
    out.push_str("## Areas covered\n\n");
    for area in &simple.coverage_areas {
        let _ = writeln!(out, "- {area}");
    }
    let _ = write!(out, "\n## Summary\n\n{}\n", simple.summary);
    out
}

/// The agentic research report: plan, per-iteration scores, verified
/// findings linked to their evidence, interconnections.
pub fn render_agentic(outcome: &RunOutcome, executed_at: &str) -> String {
    let result = &outcome.final_result;
    let mut out = format!(
        "# Research report\n\nTheme: {}\n\nExecuted: {executed_at}\n\n---\n\n\
         ## Executive summary\n\n{}\n\n---\n\n## Key findings\n\n",
        outcome.theme, result.summary
    );

    // Link findings to their evidence by URL where possible.
    let evidence_by_url: BTreeMap<&str, &Evidence> = result
        .evidence
        .iter()
        .map(|e| (e.url.as_str(), e))
        .collect();
    for (i, finding) in result.findings.iter().enumerate() {
        let _ = writeln!(out, "### {}. {}\n", i + 1, finding.content);
        if let Some(evidence) = evidence_by_url.get(finding.source.as_str()) {
            let _ = writeln!(out, "Source: [{}]({})\n", evidence.title, evidence.url);
        } else if !finding.source.is_empty() {
            let _ = writeln!(out, "Source: {}\n", finding.source);
        }
    }

    if !result.interconnections.is_empty() {
        out.push_str("---\n\n## Interconnections\n\n");
        for item in &result.interconnections {
            let _ = writeln!(out, "- {item}");
        }
        out.push('\n');
    }

    if !result.depth_analysis.is_empty() {
        let _ = write!(out, "---\n\n## Depth analysis\n\n{}\n\n", result.depth_analysis);
    }

    out.push_str("---\n\n## Iteration history\n\n");
    out.push_str("| Iteration | Objective | Coverage | Depth | Action. | Cred. | Quant. | Overall | Refine? |\n");
    out.push_str("|---|---|---|---|---|---|---|---|---|\n");
    for evaluation in &outcome.evaluations {
        let s = &evaluation.scores;
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {} | {}/60 | {} |",
            evaluation.iteration_number,
            s.objective_achievement,
            s.coverage,
            s.depth_insight,
            s.actionability,
            s.credibility,
            s.quantitative,
            evaluation.overall_score,
            if evaluation.should_refine { "yes" } else { "no" }
        );
    }

    if !outcome.fact_checks.is_empty() {
        out.push_str("\n## Source verification\n\n");
        out.push_str("| Iteration | Verified | Removed | Reliability |\n|---|---|---|---|\n");
        for record in &outcome.fact_checks {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {:.0}% |",
                record.iteration,
                record.verified,
                record.removed,
                record.reliability * 100.0
            );
        }
    }

    out.push_str("\n## Final plan\n\n");
    let plan = &outcome.final_plan;
    let _ = writeln!(out, "Objective: {}\n\nResearch areas:\n", plan.objective);
    for area in &plan.research_areas {
        let keywords = plan.keywords_for(area);
        if keywords.is_empty() {
            let _ = writeln!(out, "- {area}");
        } else {
            let _ = writeln!(out, "- {area} ({})", keywords.join(", "));
        }
    }
    let _ = write!(out, "\nStrategy: {}\n", plan.research_strategy);
    out
}

/// The comparison document.
pub fn render_comparison(outcome: &RunOutcome, executed_at: &str) -> String {
    let record = &outcome.comparison;
    let mut out = format!(
        "# Comparison: one-shot vs agentic research\n\nTheme: {}\n\n\
         Executed: {executed_at}\n\n## Scores\n\n\
         | Axis | One-shot | Agentic | Improvement |\n|---|---|---|---|\n",
        outcome.theme
    );
    for entry in &record.axes {
        let _ = writeln!(
            out,
            "| {} | {}/10 | {}/10 | {:+.1}% |",
            entry.axis.label(),
            entry.simple,
            entry.agentic,
            entry.improvement_rate
        );
    }
    let _ = writeln!(
        out,
        "| **total** | **{}/60** | **{}/60** | |",
        record.simple_total, record.agentic_total
    );
    let _ = write!(
        out,
        "\nPass line is 48/60: one-shot {}, agentic {}.\n",
        if record.simple_passes { "passes" } else { "does not pass" },
        if record.agentic_passes { "passes" } else { "does not pass" },
    );

    out.push_str("\n## Key differences\n\n");
    for item in &record.key_differences {
        let _ = writeln!(out, "- {item}");
    }

    out.push_str("\n## One-shot search\n\n**Strengths**\n\n");
    for item in &record.simple_strengths {
        let _ = writeln!(out, "- {item}");
    }
    out.push_str("\n**Weaknesses**\n\n");
    for item in &record.simple_weaknesses {
        let _ = writeln!(out, "- {item}");
    }

    out.push_str("\n## Agentic search\n\n**Strengths**\n\n");
    for item in &record.agentic_strengths {
        let _ = writeln!(out, "- {item}");
    }
    out.push_str("\n**Weaknesses**\n\n");
    for item in &record.agentic_weaknesses {
        let _ = writeln!(out, "- {item}");
    }

    let _ = write!(
        out,
        "\n## Recommendation\n\n{}\n\n## Cost effectiveness\n\n{}\n",
        record.recommendation, record.cost_effectiveness_analysis
    );
    out
}
