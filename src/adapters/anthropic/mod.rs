//! Anthropic-backed capability providers.
//!
//! One provider value implements every LLM-backed port against the
//! Messages API. The provider, not the model, is authoritative for the
//! theme, the plan in use, and the iteration number on research results;
//! the model's echo of those fields is ignored.

pub mod client;
pub mod prompts;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::errors::ProviderResult;
use crate::domain::models::{
    AnthropicConfig, Assessment, ComparisonNarrative, CycleContext, EvaluationResult, Evidence,
    FactCheckReport, Finding, ResearchResult, SearchPlan, SimpleSearchResult,
};
use crate::domain::ports::{
    Comparator, Evaluator, FactChecker, PlanRevision, Planner, Researcher, SingleShotSearcher,
};

pub use client::MessagesClient;

/// Tolerant wire shape for a researcher reply; the provider supplies the
/// theme, plan, and iteration number itself.
#[derive(Debug, Deserialize)]
struct ResearchWire {
    #[serde(default)]
    findings: Vec<Finding>,
    #[serde(default)]
    evidence: Vec<Evidence>,
    #[serde(default)]
    depth_analysis: String,
    #[serde(default)]
    interconnections: Vec<String>,
    #[serde(default)]
    summary: String,
}

/// All LLM-backed capabilities, served by one Messages API client.
pub struct AnthropicProvider {
    client: MessagesClient,
}

impl AnthropicProvider {
    pub fn new(config: AnthropicConfig, api_key: &str) -> ProviderResult<Self> {
        Ok(Self {
            client: MessagesClient::new(config, api_key)?,
        })
    }

    /// The conventional environment variable carrying the API key.
    pub fn api_key_from_env() -> Option<String> {
        std::env::var("ANTHROPIC_API_KEY").ok()
    }
}

#[async_trait]
impl Planner for AnthropicProvider {
    async fn plan(
        &self,
        theme: &str,
        revision: Option<PlanRevision<'_>>,
    ) -> ProviderResult<SearchPlan> {
        let prompt = match revision {
            None => prompts::plan_prompt(theme),
            Some(r) => prompts::revise_prompt(theme, r.instructions, r.previous),
        };
        let plan: SearchPlan = self
            .client
            .complete_json(prompts::PLANNER_SYSTEM, &prompt)
            .await?;
        plan.validate()?;
        Ok(plan)
    }
}

#[async_trait]
impl Researcher for AnthropicProvider {
    async fn research(
        &self,
        theme: &str,
        plan: &SearchPlan,
        iteration: u32,
        context: &CycleContext,
    ) -> ProviderResult<ResearchResult> {
        let prompt = prompts::research_prompt(theme, plan, iteration, context);
        let wire: ResearchWire = self
            .client
            .complete_json(prompts::RESEARCHER_SYSTEM, &prompt)
            .await?;
        Ok(ResearchResult {
            theme: theme.to_string(),
            plan_used: plan.clone(),
            findings: wire.findings,
            evidence: wire.evidence,
            depth_analysis: wire.depth_analysis,
            interconnections: wire.interconnections,
            summary: wire.summary,
            iteration_number: iteration,
        })
    }
}

#[async_trait]
impl Evaluator for AnthropicProvider {
    async fn assess(
        &self,
        result: &ResearchResult,
        context: &CycleContext,
    ) -> ProviderResult<Assessment> {
        let prompt = prompts::assess_prompt(result, context);
        let assessment: Assessment = self
            .client
            .complete_json(prompts::EVALUATOR_SYSTEM, &prompt)
            .await?;
        assessment.scores.validate()?;
        if let Some(refined) = &assessment.refined_plan {
            refined.validate()?;
        }
        Ok(assessment)
    }
}

#[async_trait]
impl SingleShotSearcher for AnthropicProvider {
    async fn search(&self, theme: &str) -> ProviderResult<SimpleSearchResult> {
        let prompt = prompts::single_shot_prompt(theme);
        let mut result: SimpleSearchResult = self
            .client
            .complete_json(prompts::SINGLE_SHOT_SYSTEM, &prompt)
            .await?;
        result.theme = theme.to_string();
        Ok(result)
    }
}

#[async_trait]
impl FactChecker for AnthropicProvider {
    async fn verify(&self, result: &ResearchResult) -> ProviderResult<FactCheckReport> {
        let prompt = prompts::fact_check_prompt(result);
        let report: FactCheckReport = self
            .client
            .complete_json(prompts::FACT_CHECKER_SYSTEM, &prompt)
            .await?;
        report.validate()?;
        Ok(report)
    }
}

#[async_trait]
impl Comparator for AnthropicProvider {
    async fn compare(
        &self,
        simple: &SimpleSearchResult,
        agentic: &ResearchResult,
        history: &[EvaluationResult],
    ) -> ProviderResult<ComparisonNarrative> {
        let prompt = prompts::compare_prompt(&simple.theme, simple, agentic, history);
        self.client
            .complete_json(prompts::COMPARATOR_SYSTEM, &prompt)
            .await
    }
}
