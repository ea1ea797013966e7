//! Cross-iteration context carried by the research cycle.

use serde::{Deserialize, Serialize};

use crate::domain::models::fact_check::FactCheckRecord;
use crate::domain::models::research::{Evidence, Finding};

/// Length of the content prefix used to deduplicate findings across
/// iterations. Long findings frequently differ only in trailing detail.
pub const FINDING_KEY_LEN: usize = 80;

/// Accumulated state a researcher sees when starting iteration N+1.
///
/// Only fact-check-passed material accumulates here; removed entries
/// survive solely as exclusion patterns inside the history records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleContext {
    /// Verified findings from all prior iterations, deduplicated.
    pub accepted_findings: Vec<Finding>,
    /// Verified evidence from all prior iterations, deduplicated by URL.
    pub accepted_evidence: Vec<Evidence>,
    /// Coverage gaps named by the most recent evaluation.
    pub latest_gaps: Vec<String>,
    /// Improvement strategy from the most recent evaluation.
    pub latest_strategy: Option<String>,
    /// Overall score of the most recent evaluation.
    pub previous_overall: Option<u16>,
    /// Credibility axis of the most recent evaluation.
    pub previous_credibility: Option<u8>,
    /// One record per completed iteration, including skipped checks.
    pub fact_check_history: Vec<FactCheckRecord>,
}

impl CycleContext {
    /// Fold newly verified findings in, skipping content already accepted.
    pub fn absorb_findings<I: IntoIterator<Item = Finding>>(&mut self, verified: I) {
        let mut seen: std::collections::BTreeSet<String> = self
            .accepted_findings
            .iter()
            .map(|f| finding_key(&f.content))
            .collect();
        for finding in verified {
            let key = finding_key(&finding.content);
            if seen.insert(key) {
                self.accepted_findings.push(finding);
            }
        }
    }

    /// Fold newly verified evidence in, skipping URLs already accepted.
    pub fn absorb_evidence<I: IntoIterator<Item = Evidence>>(&mut self, verified: I) {
        let mut seen: std::collections::BTreeSet<String> = self
            .accepted_evidence
            .iter()
            .map(|e| e.url.clone())
            .collect();
        for evidence in verified {
            if evidence.url.is_empty() {
                continue;
            }
            if seen.insert(evidence.url.clone()) {
                self.accepted_evidence.push(evidence);
            }
        }
    }

    /// The most recent fact-check record, if any iteration has completed.
    pub fn last_fact_check(&self) -> Option<&FactCheckRecord> {
        self.fact_check_history.last()
    }
}

/// Dedup key for a finding: its content truncated to a stable prefix.
pub fn finding_key(content: &str) -> String {
    content.chars().take(FINDING_KEY_LEN).collect()
}
