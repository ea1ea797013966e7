//! Prompt construction for the LLM-backed capability providers.
//!
//! Every prompt demands a single JSON object matching the crate's domain
//! schema; the client side extracts and validates it.

use std::fmt::Write as _;

use crate::domain::models::{
    CycleContext, EvaluationResult, ResearchResult, SearchPlan, SimpleSearchResult,
};

pub const PLANNER_SYSTEM: &str = "\
You are a research planning expert. Given a theme, you produce a \
comprehensive, structured investigation plan: a clear objective, 5-8 \
research areas, 3-5 search keywords per area, a priority order over the \
areas (foundational areas first, dependent areas later), a staged research \
strategy, and 3-5 expected outcomes. Reply with a single JSON object with \
the fields: objective, research_areas, search_keywords (object mapping \
area to keyword array), priority_order, research_strategy, \
expected_outcomes. No prose outside the JSON.";

pub const RESEARCHER_SYSTEM: &str = "\
You are a meticulous research agent executing one iteration of a planned \
investigation using web search. You follow the plan systematically, \
extract detailed findings with sources, record evidence with real URLs \
only, identify cross-area interconnections, and summarize. Never invent, \
guess, or prettify URLs; use only URLs actually returned by search. Reply \
with a single JSON object with the fields: findings (array of {content, \
source}), evidence (array of {title, url, summary}), depth_analysis, \
interconnections (array of strings), summary. No prose outside the JSON.";

pub const EVALUATOR_SYSTEM: &str = "\
You are a strict domain expert evaluating a research result on six axes, \
each scored 0-10: objective achievement, coverage, depth and insight, \
actionability, credibility, and quantitative rigor. Surface-level \
collection never earns high scores. Reply with a single JSON object with \
the fields: scores ({objective_achievement, coverage, depth_insight, \
actionability, credibility, quantitative}), coverage_gaps (array), \
refinement_strategy (string or null), refined_plan (a full plan object \
or null), expert_observations. The refined plan, when present, must have \
5-8 research_areas and a priority_order that permutes them. No prose \
outside the JSON.";

pub const FACT_CHECKER_SYSTEM: &str = "\
You are a fact checker verifying the sources behind a research result. \
Language models fabricate URLs; finding those is your most important job. \
You verify each URL by attempting access and by searching for its title \
and content. You only sort entries into verified or removed: never invent \
replacement URLs, and a verified URL must match the original exactly. \
Reply with a single JSON object with the fields: verified_evidence (array \
of {title, url, original_url, summary, status, verification_note}), \
removed_evidence (array of {title, original_url, reason}), \
verified_findings (array of {content, source, source_url, confidence}), \
removed_findings (array of {content, source, reason}), \
verification_summary, total_verified, total_removed, reliability_score \
(verified over checked, 0.0-1.0). No prose outside the JSON.";

pub const SINGLE_SHOT_SYSTEM: &str = "\
You are a search agent collecting broad information on a theme in one \
comprehensive pass: market angles, technical angles, business angles, \
social and regulatory angles, concrete cases. Reply with a single JSON \
object with the fields: findings (array of {content, source}, 10-20 \
entries), evidence (array of {title, url, summary}), summary (300-500 \
words), coverage_areas (array of strings). No prose outside the JSON.";

pub const COMPARATOR_SYSTEM: &str = "\
You are an analyst comparing two research outputs on the same theme: a \
one-shot broad search and a multi-iteration agentic investigation. You \
analyze their differences, each approach's strengths and weaknesses, and \
cost effectiveness, and recommend when to use which. Reply with a single \
JSON object with the fields: key_differences, simple_strengths, \
simple_weaknesses, agentic_strengths, agentic_weaknesses (arrays of \
strings), recommendation, cost_effectiveness_analysis. No prose outside \
the JSON.";

pub fn plan_prompt(theme: &str) -> String {
    format!(
        "Draft a comprehensive, systematic investigation plan for the \
         following theme.\n\nTheme:\n{theme}\n\nRequirements:\n\
         - decompose the theme into 5-8 major research areas\n\
         - define 3-5 search keywords per area\n\
         - order the areas by priority\n\
         - describe a staged research strategy\n\
         - define 3-5 expected outcomes"
    )
}

pub fn revise_prompt(theme: &str, instructions: &str, previous: &SearchPlan) -> String {
    format!(
        "Revise the investigation plan below to honor the operator's \
         additional instructions.\n\nTheme:\n{theme}\n\n\
         Current plan:\n- objective: {}\n- research areas: {}\n- priority \
         order: {}\n\nOperator instructions:\n{instructions}\n\n\
         Requirements:\n- reflect the instructions faithfully\n\
         - maintain or improve quality and coverage\n\
         - keep the plan concrete and executable",
        previous.objective,
        previous.research_areas.join(", "),
        previous.priority_order.join(", "),
    )
}

pub fn research_prompt(
    theme: &str,
    plan: &SearchPlan,
    iteration: u32,
    context: &CycleContext,
) -> String {
    let keywords = serde_json::to_string(&plan.search_keywords).unwrap_or_default();
    let mut prompt = format!(
        "Execute a detailed, systematic research iteration under the \
         following plan.\n\nTheme: {theme}\n\nIteration number: \
         {iteration}\n\nPlan:\n- objective: {}\n- research areas: {}\n\
         - search keywords: {keywords}\n- strategy: {}\n",
        plan.objective,
        plan.research_areas.join(", "),
        plan.research_strategy,
    );

    if !context.accepted_findings.is_empty() {
        let _ = write!(
            prompt,
            "\nVerified findings from previous iterations ({}): look for \
             NEW information that does not duplicate these.\n",
            context.accepted_findings.len()
        );
        for finding in context.accepted_findings.iter().take(10) {
            let head: String = finding.content.chars().take(80).collect();
            let _ = writeln!(prompt, "  - {head}...");
        }
    }
    if !context.accepted_evidence.is_empty() {
        let _ = write!(
            prompt,
            "\nAlready-verified source URLs ({}): find new sources instead \
             of revisiting these.\n",
            context.accepted_evidence.len()
        );
        for evidence in context.accepted_evidence.iter().take(8) {
            let _ = writeln!(prompt, "  - {} ({})", evidence.url, evidence.title);
        }
    }
    if let Some(last) = context.last_fact_check() {
        let _ = write!(
            prompt,
            "\nPrevious fact-check outcome: {} verified / {} removed \
             (reliability {:.0}%).\n",
            last.verified,
            last.removed,
            last.reliability * 100.0
        );
        if !last.removed_reasons.is_empty() {
            prompt.push_str("Removed URL/content patterns:\n");
            for reason in last.removed_reasons.iter().take(5) {
                let _ = writeln!(prompt, "  REMOVED: {reason}");
            }
            prompt.push_str(
                "Do not repeat these patterns. Fabricated URLs will be \
                 removed again by fact-checking; use only URLs actually \
                 returned by web search.\n",
            );
        }
    }
    if !context.latest_gaps.is_empty() {
        let _ = write!(
            prompt,
            "\nEvaluator improvement request:\n- previous overall score: \
             {}/60\n- missing angles: {}\n- improvement strategy: {}\n\
             Investigate these gaps with priority.\n",
            context
                .previous_overall
                .map_or_else(|| "n/a".to_string(), |s| s.to_string()),
            context.latest_gaps.join(", "),
            context
                .latest_strategy
                .as_deref()
                .unwrap_or("none given"),
        );
    }

    prompt.push_str(
        "\nRequirements:\n\
         - search systematically, following the plan\n\
         - extract 10-15 detailed findings (quality over quantity)\n\
         - record evidence with title, URL, and summary for each source\n\
         - identify interconnections between areas\n\
         - maximize depth and specificity\n\
         - write a 200-400 word summary\n\n\
         Strict URL rules: only URLs actually retrieved by web search; \
         never guess, generate, or fabricate a URL, an organization, or a \
         journal; if no URL exists for a finding, say so in its source \
         field and keep it out of evidence.",
    );
    prompt
}

pub fn assess_prompt(result: &ResearchResult, context: &CycleContext) -> String {
    let mut prompt = format!(
        "Evaluate the following research result with extreme rigor, as a \
         domain expert. Early iterations always have room to improve; do \
         not reward surface-level collection.\n\nTheme: {}\n\nPlan \
         objective:\n{}\n\nResult ({} findings, {} evidence entries):\n",
        result.theme,
        result.plan_used.objective,
        result.findings.len(),
        result.evidence.len(),
    );
    for finding in result.findings.iter().take(15) {
        let _ = writeln!(prompt, "  - {} (source: {})", finding.content, finding.source);
    }
    prompt.push_str("\nEvidence:\n");
    for evidence in result.evidence.iter().take(10) {
        let _ = writeln!(
            prompt,
            "  - [{}]({}): {}",
            evidence.title, evidence.url, evidence.summary
        );
    }
    let _ = write!(
        prompt,
        "\nDepth analysis:\n{}\n\nInterconnections:\n",
        result.depth_analysis
    );
    for item in result.interconnections.iter().take(5) {
        let _ = writeln!(prompt, "  - {item}");
    }
    let _ = write!(prompt, "\nSummary:\n{}\n", result.summary);

    if let Some(last) = context.last_fact_check() {
        let _ = write!(
            prompt,
            "\nFact-check outcome, to be reflected in the credibility \
             score: {} verified, {} removed (reliability {:.0}%). ",
            last.verified,
            last.removed,
            last.reliability * 100.0
        );
        let removal_rate = last.removal_rate();
        if removal_rate > 0.0 {
            let _ = write!(
                prompt,
                "Removal rate {:.0}%: cap credibility at 5 above 30% \
                 removals, at 6 above 20%, at 7 above 10%.",
                removal_rate * 100.0
            );
        }
        prompt.push('\n');
        if context.fact_check_history.len() > 1 {
            prompt.push_str("Fact-check history:\n");
            for record in &context.fact_check_history {
                let _ = writeln!(
                    prompt,
                    "  iteration {}: {} verified / {} removed (reliability {:.0}%)",
                    record.iteration,
                    record.verified,
                    record.removed,
                    record.reliability * 100.0
                );
            }
        }
    }
    if let Some(previous) = context.previous_overall {
        let _ = write!(
            prompt,
            "\nPrevious iteration scored {previous}/60 with gaps: {}.\n",
            context.latest_gaps.join(", ")
        );
    }

    prompt.push_str(
        "\nScore all six axes 0-10. When the result falls short, list the \
         missing angles in coverage_gaps, give a prioritized \
         refinement_strategy, and provide a revised plan in refined_plan. \
         In expert_observations be blunt about what is missing; abstract \
         praise is useless.",
    );
    prompt
}

pub fn fact_check_prompt(result: &ResearchResult) -> String {
    let mut prompt = String::from(
        "Verify every source URL in the research result below, one by \
         one. For each URL: attempt direct access, then search for the \
         title and content keywords to confirm existence. Watch for \
         suspiciously well-formed URLs such as neat arxiv identifiers. \
         Sort each entry into verified or removed; never propose \
         substitutes.\n\nEvidence to verify:\n",
    );
    if result.evidence.is_empty() {
        prompt.push_str("  (no evidence)\n");
    }
    for evidence in &result.evidence {
        let _ = writeln!(
            prompt,
            "  - title: {}, url: {}, summary: {}",
            evidence.title, evidence.url, evidence.summary
        );
    }
    prompt.push_str("\nFindings to verify:\n");
    if result.findings.is_empty() {
        prompt.push_str("  (no findings)\n");
    }
    for finding in &result.findings {
        let head: String = finding.content.chars().take(100).collect();
        let _ = writeln!(prompt, "  - content: {head}..., source: {}", finding.source);
    }
    prompt
}

pub fn single_shot_prompt(theme: &str) -> String {
    format!(
        "Run one comprehensive, multi-angle search pass on the following \
         theme.\n\nTheme:\n{theme}\n\nRequirements:\n\
         - search from several distinct perspectives\n\
         - cover market, technology, business, and case-study angles\n\
         - extract 10-20 key findings\n\
         - record evidence with URL and source for every finding\n\
         - write a 300-500 word summary"
    )
}

pub fn compare_prompt(
    theme: &str,
    simple: &SimpleSearchResult,
    agentic: &ResearchResult,
    history: &[EvaluationResult],
) -> String {
    let mut prompt = format!(
        "Compare the two research outputs below from multiple angles.\n\n\
         Theme: {theme}\n\nOne-shot search result:\n- findings: {}\n\
         - evidence entries: {}\n- areas covered: {}\n- summary:\n{}\n\n\
         Agentic search result ({} iterations):\n- findings: {}\n\
         - evidence entries: {}\n- depth analysis:\n{}\n- summary:\n{}\n",
        simple.findings.len(),
        simple.evidence.len(),
        simple.coverage_areas.join(", "),
        simple.summary,
        history.len(),
        agentic.findings.len(),
        agentic.evidence.len(),
        agentic.depth_analysis,
        agentic.summary,
    );
    if !history.is_empty() {
        prompt.push_str("\nPer-iteration evaluation scores:\n");
        for evaluation in history {
            let _ = writeln!(
                prompt,
                "  iteration {}: {}/60",
                evaluation.iteration_number, evaluation.overall_score
            );
        }
    }
    prompt.push_str(
        "\nRequirements:\n\
         - name the key differences between the two approaches\n\
         - analyze each approach's strengths and weaknesses in detail\n\
         - analyze cost effectiveness (time, API spend) and recommend \
         which approach fits which situation",
    );
    prompt
}
