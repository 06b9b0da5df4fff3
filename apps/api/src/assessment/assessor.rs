//! Per-control assessment — pluggable, trait-based.
//!
//! Default: `LlmAssessor` (one Chat Completions call per control).
//! `AppState` holds an `Arc<dyn ControlAssessor>`; tests stub the trait.

use async_trait::async_trait;

use crate::assessment::prompts::{control_assess_prompt, ASSESSOR_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::assessment::ControlVerdict;
use crate::models::control::ControlRecord;

/// The assessor trait. Implement this to swap backends without touching
/// the endpoint, handler, or engine code.
///
/// Carried in `AppState` as `Arc<dyn ControlAssessor>`.
#[async_trait]
pub trait ControlAssessor: Send + Sync {
    async fn assess(
        &self,
        control: &ControlRecord,
        policy_text: &str,
    ) -> Result<ControlVerdict, AppError>;
}

/// Production assessor: one LLM call per control, JSON verdict back.
pub struct LlmAssessor {
    llm: LlmClient,
}

impl LlmAssessor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ControlAssessor for LlmAssessor {
    async fn assess(
        &self,
        control: &ControlRecord,
        policy_text: &str,
    ) -> Result<ControlVerdict, AppError> {
        let prompt = control_assess_prompt(control, policy_text);
        self.llm
            .call_json::<ControlVerdict>(&prompt, ASSESSOR_SYSTEM)
            .await
            .map_err(|e| {
                AppError::Llm(format!(
                    "Assessment of control {} failed: {e}",
                    control.new_control_id
                ))
            })
    }
}
