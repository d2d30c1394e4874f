//! Profile Advisor — sequences prompt building, completion, and interpretation.
//!
//! Flow per operation: build_prompt → completer.complete → (analysis only)
//! parse_rating + resolve_badge → return.
//!
//! Operations are independent and hold no state between calls, so callers may
//! run them concurrently against the same profile.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::advisor::badge::{resolve_badge, Badge};
use crate::advisor::interpreter::parse_rating;
use crate::advisor::prompt_builder::{build_prompt, ArtifactKind};
use crate::errors::AppError;
use crate::llm_client::Completer;
use crate::models::profile::Profile;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of a single analyze call. Created fresh per call, never stored.
///
/// `rating` is 0 when the model output had no usable `Rating:` line; a
/// failed completion is an `Err`, never a zero rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub text: String,
    pub rating: i64,
    pub badge: Badge,
}

impl AnalysisResult {
    pub fn badge_url(&self) -> &'static str {
        self.badge.image_url()
    }

    pub fn share_text(&self) -> String {
        format!("Check out my profile rating: {}/100!", self.rating)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestrator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ProfileAdvisor {
    completer: Arc<dyn Completer>,
}

impl ProfileAdvisor {
    pub fn new(completer: Arc<dyn Completer>) -> Self {
        Self { completer }
    }

    /// Scores the profile and resolves its badge.
    pub async fn analyze(&self, profile: &Profile) -> Result<AnalysisResult, AppError> {
        let text = self.run(profile, ArtifactKind::Analysis).await?;
        let rating = parse_rating(&text);
        let badge = resolve_badge(rating);

        info!(
            "Analyzed profile {}: rating={} badge={}",
            profile.id,
            rating,
            badge.id()
        );

        Ok(AnalysisResult {
            text,
            rating,
            badge,
        })
    }

    /// Markdown resume, returned exactly as generated.
    pub async fn generate_resume(&self, profile: &Profile) -> Result<String, AppError> {
        self.run(profile, ArtifactKind::Resume).await
    }

    /// Outreach email, returned exactly as generated.
    pub async fn generate_cold_email(&self, profile: &Profile) -> Result<String, AppError> {
        self.run(profile, ArtifactKind::ColdEmail).await
    }

    async fn run(&self, profile: &Profile, kind: ArtifactKind) -> Result<String, AppError> {
        let request = build_prompt(profile, kind)?;
        let text = self.completer.complete(&request).await?;

        info!(
            "Completed {:?} for profile {} ({} bytes)",
            kind,
            profile.id,
            text.len()
        );

        Ok(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
