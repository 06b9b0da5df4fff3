//! Assessment data model — per-control verdicts, aggregate summary, and the
//! readiness report returned by `/api/v1/analyze`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::control::ControlRecord;

/// Compliance status of a single control. Wire values match the assessor
/// prompt vocabulary exactly; anything else fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlStatus {
    #[serde(rename = "MET")]
    Met,
    #[serde(rename = "PARTIALLY MET")]
    PartiallyMet,
    #[serde(rename = "NOT MET")]
    NotMet,
}

impl ControlStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlStatus::Met => "MET",
            ControlStatus::PartiallyMet => "PARTIALLY MET",
            ControlStatus::NotMet => "NOT MET",
        }
    }
}

/// Risk level assigned by the assessor for the gap a control leaves open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// The JSON object the LLM must return for a single control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlVerdict {
    pub status: ControlStatus,
    pub justification: String,
    pub risk_level: RiskLevel,
    pub recommendation: String,
}

/// A per-control assessment record: catalogue identity plus the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlResult {
    pub control_id: String,
    pub control_title: String,
    pub domain: String,
    pub status: ControlStatus,
    pub risk_level: RiskLevel,
    pub justification: String,
    pub recommendation: String,
}

impl ControlResult {
    pub fn new(control: &ControlRecord, verdict: ControlVerdict) -> Self {
        Self {
            control_id: control.new_control_id.clone(),
            control_title: control.new_title.clone(),
            domain: control.domain.clone(),
            status: verdict.status,
            risk_level: verdict.risk_level,
            justification: verdict.justification,
            recommendation: verdict.recommendation,
        }
    }
}

/// Aggregate statistics across one assessment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub total_controls: usize,
    pub met_count: usize,
    pub partially_met_count: usize,
    pub not_met_count: usize,
    /// met_count / total_controls × 100, rounded to two decimals. 0 when empty.
    pub compliance_percentage: f64,
}

impl AssessmentSummary {
    pub fn from_results(results: &[ControlResult]) -> Self {
        let total_controls = results.len();
        let met_count = results
            .iter()
            .filter(|r| r.status == ControlStatus::Met)
            .count();
        let partially_met_count = results
            .iter()
            .filter(|r| r.status == ControlStatus::PartiallyMet)
            .count();
        let not_met_count = results
            .iter()
            .filter(|r| r.status == ControlStatus::NotMet)
            .count();

        let compliance_percentage = if total_controls > 0 {
            let raw = met_count as f64 / total_controls as f64 * 100.0;
            (raw * 100.0).round() / 100.0
        } else {
            0.0
        };

        Self {
            total_controls,
            met_count,
            partially_met_count,
            not_met_count,
            compliance_percentage,
        }
    }
}

/// The aggregate output of one assessment run across the selected controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub source_document: String,
    pub summary: AssessmentSummary,
    pub results: Vec<ControlResult>,
}
