//! Fact-check models.
//!
//! Every research iteration passes through source verification before
//! evaluation. Only verified findings and evidence accumulate into the
//! terminal report; removed entries carry the reason so later iterations
//! can avoid repeating the same fabrication pattern.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{ProviderError, ProviderResult};

/// Confidence the checker has in a verified finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// URL and content both confirmed.
    High,
    /// A related source was located.
    Medium,
    /// Only indirect corroboration via search.
    Low,
}

impl Default for Confidence {
    fn default() -> Self {
        Self::Low
    }
}

/// Verification status of an evidence URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// The original URL resolves and matches the claimed content.
    Verified,
    /// The original URL was dead or fabricated; a substitute was found.
    Replaced,
    /// Related material exists but no URL could be confirmed.
    Unverified,
}

impl Default for VerificationStatus {
    fn default() -> Self {
        Self::Unverified
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedFinding {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub confidence: Confidence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovedFinding {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedEvidence {
    #[serde(default)]
    pub title: String,
    /// The URL to report: the original if it verified, otherwise the
    /// substitute the checker located.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub original_url: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default)]
    pub verification_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovedEvidence {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_url: String,
    #[serde(default)]
    pub reason: String,
}

/// Full output of the fact-check capability for one iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckReport {
    #[serde(default)]
    pub verified_evidence: Vec<VerifiedEvidence>,
    #[serde(default)]
    pub removed_evidence: Vec<RemovedEvidence>,
    #[serde(default)]
    pub verified_findings: Vec<VerifiedFinding>,
    #[serde(default)]
    pub removed_findings: Vec<RemovedFinding>,
    #[serde(default)]
    pub verification_summary: String,
    #[serde(default)]
    pub total_verified: usize,
    #[serde(default)]
    pub total_removed: usize,
    /// Verified / (verified + removed), in 0.0..=1.0.
    #[serde(default)]
    pub reliability_score: f64,
}

impl FactCheckReport {
    pub fn validate(&self) -> ProviderResult<()> {
        if !(0.0..=1.0).contains(&self.reliability_score) {
            return Err(ProviderError::SchemaViolation(format!(
                "reliability score {} is out of range 0.0-1.0",
                self.reliability_score
            )));
        }
        Ok(())
    }

    /// Removal patterns to feed forward into the next research iteration.
    pub fn removal_reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        for rf in &self.removed_findings {
            reasons.push(format!("{} -> {}", prefix(&rf.content, 50), rf.reason));
        }
        for re in &self.removed_evidence {
            reasons.push(format!("URL {} -> {}", re.original_url, re.reason));
        }
        reasons
    }
}

/// One entry of the fact-check history the cycle carries across iterations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckRecord {
    pub iteration: u32,
    pub verified: usize,
    pub removed: usize,
    pub reliability: f64,
    #[serde(default)]
    pub removed_reasons: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

impl FactCheckRecord {
    pub fn from_report(iteration: u32, report: &FactCheckReport) -> Self {
        Self {
            iteration,
            verified: report.total_verified,
            removed: report.total_removed,
            reliability: report.reliability_score,
            removed_reasons: report.removal_reasons(),
            summary: report.verification_summary.clone(),
        }
    }

    /// Record for an iteration whose result had nothing to verify.
    pub fn skipped(iteration: u32) -> Self {
        Self {
            iteration,
            verified: 0,
            removed: 0,
            reliability: 0.0,
            removed_reasons: Vec::new(),
            summary: "fact-check skipped: no findings or evidence".into(),
        }
    }

    /// Share of checked items that were removed.
    pub fn removal_rate(&self) -> f64 {
        let checked = self.verified + self.removed;
        if checked == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.removed as f64 / checked as f64
            }
        }
    }
}

fn prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reliability_out_of_range_is_rejected() {
        let report = FactCheckReport {
            verified_evidence: vec![],
            removed_evidence: vec![],
            verified_findings: vec![],
            removed_findings: vec![],
            verification_summary: String::new(),
            total_verified: 0,
            total_removed: 0,
            reliability_score: 1.2,
        };
        assert!(report.validate().is_err());
    }

    #[test]
    fn removal_reasons_cover_findings_and_evidence() {
        let report = FactCheckReport {
            verified_evidence: vec![],
            removed_evidence: vec![RemovedEvidence {
                title: "ghost paper".into(),
                original_url: "https://arxiv.org/abs/2501.99999".into(),
                reason: "URL does not resolve".into(),
            }],
            verified_findings: vec![],
            removed_findings: vec![RemovedFinding {
                content: "market doubled in 2024".into(),
                source: "unknown".into(),
                reason: "no corroborating source".into(),
            }],
            verification_summary: String::new(),
            total_verified: 0,
            total_removed: 2,
            reliability_score: 0.0,
        };
        let reasons = report.removal_reasons();
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].contains("no corroborating source"));
        assert!(reasons[1].contains("arxiv.org"));
    }

    #[test]
    fn removal_rate_handles_empty_check() {
        assert!(FactCheckRecord::skipped(1).removal_rate().abs() < f64::EPSILON);

        let record = FactCheckRecord {
            iteration: 2,
            verified: 6,
            removed: 2,
            reliability: 0.75,
            removed_reasons: vec![],
            summary: String::new(),
        };
        assert!((record.removal_rate() - 0.25).abs() < f64::EPSILON);
    }
}
