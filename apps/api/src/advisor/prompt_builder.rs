//! Prompt Builder — turns a profile and an artifact kind into a completion request.

use crate::advisor::prompts::{
    ANALYSIS_PROMPT_TEMPLATE, COLD_EMAIL_PROMPT_TEMPLATE, RESUME_PROMPT_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, MODEL};
use crate::models::profile::Profile;

/// Sampling temperature shared by every artifact kind.
pub const TEMPERATURE: f64 = 0.7;

/// Which artifact a request produces. Drives template and output budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Analysis,
    Resume,
    ColdEmail,
}

impl ArtifactKind {
    pub fn max_tokens(&self) -> u32 {
        match self {
            ArtifactKind::Analysis => 500,
            ArtifactKind::Resume => 1000,
            ArtifactKind::ColdEmail => 500,
        }
    }

    fn template(&self) -> &'static str {
        match self {
            ArtifactKind::Analysis => ANALYSIS_PROMPT_TEMPLATE,
            ArtifactKind::Resume => RESUME_PROMPT_TEMPLATE,
            ArtifactKind::ColdEmail => COLD_EMAIL_PROMPT_TEMPLATE,
        }
    }
}

/// Builds the completion request for `kind`. Pure: same input, same bytes.
///
/// The profile is embedded as pretty-printed JSON. Field order comes from the
/// struct declarations, so the rendering is deterministic.
pub fn build_prompt(profile: &Profile, kind: ArtifactKind) -> Result<CompletionRequest, AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}")))?;

    Ok(CompletionRequest {
        model: MODEL.to_string(),
        prompt: kind.template().replace("{profile_json}", &profile_json),
        max_tokens: kind.max_tokens(),
        temperature: TEMPERATURE,
    })
}
