// Assessment LLM prompt templates.
// All prompts for the assessment module are defined here.

pub const ASSESSOR_SYSTEM: &str = "\
You are an ISO 27001 information security compliance assessor. \
Your task is to perform a pre-audit readiness and gap assessment. \
You are strict, factual, and conservative in your evaluation. \
If evidence is unclear, incomplete, or missing, you must mark the control as NOT MET or PARTIALLY MET. \
You do not assume compliance. \
You do not give benefit of the doubt. \
You base decisions only on the provided document text. \
Your output must be structured, concise, and suitable for a professional compliance report. \
You must always respond only in valid JSON as instructed.";

/// Per-control assessment prompt template.
/// Replace `{control_id}`, `{control_title}`, `{control_description}`,
/// and `{policy_text}` before sending.
pub const CONTROL_ASSESS_PROMPT_TEMPLATE: &str = r#"Assess the following ISO 27001 control against the provided policy text.

CONTROL ID: {control_id}
CONTROL TITLE: {control_title}
CONTROL DESCRIPTION: {control_description}

POLICY TEXT:
{policy_text}

Instructions:
1. Determine whether this control is MET, PARTIALLY MET, or NOT MET.
2. Base your decision strictly on evidence found in the policy text.
3. If no clear evidence exists, mark as NOT MET.
4. Provide a short justification referencing the policy text or stating that evidence is missing.
5. Assign a risk level (LOW, MEDIUM, HIGH).
6. Provide a clear, actionable recommendation to address gaps.

Respond in the following JSON format ONLY:

{
  "status": "MET | PARTIALLY MET | NOT MET",
  "justification": "...",
  "risk_level": "LOW | MEDIUM | HIGH",
  "recommendation": "..."
}"#;

/// Renders the per-control prompt for one catalogue entry.
pub fn control_assess_prompt(
    control: &crate::models::control::ControlRecord,
    policy_text: &str,
) -> String {
    CONTROL_ASSESS_PROMPT_TEMPLATE
        .replace("{control_id}", &control.new_control_id)
        .replace("{control_title}", &control.new_title)
        .replace("{control_description}", &control.description)
        .replace("{policy_text}", policy_text)
}
