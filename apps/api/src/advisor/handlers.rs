//! Axum route handlers for the Profile Advisor API.

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::advisor::badge::Badge;
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// Response envelopes use camelCase, matching the nested `Profile` JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: String,
    pub rating: i64,
    pub badge: Badge,
    pub badge_url: String,
    pub share_text: String,
    /// The submitted profile with rating and badge filled in.
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColdEmailResponse {
    pub cold_email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeInfo {
    pub id: &'static str,
    pub min_rating: Option<i64>,
    pub image_url: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// Normalizes tags, assigns an id if missing, then validates.
fn prepare_profile(submitted: Profile) -> Result<Profile, AppError> {
    let mut profile = submitted.normalized();
    if profile.id.trim().is_empty() {
        profile.id = Uuid::new_v4().to_string();
    }
    profile.validate()?;
    Ok(profile)
}

/// POST /api/v1/profile/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(submitted): Json<Profile>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let profile = prepare_profile(submitted)?;
    let result = state.advisor.analyze(&profile).await?;

    Ok(Json(AnalyzeResponse {
        badge_url: result.badge_url().to_string(),
        share_text: result.share_text(),
        profile: profile.with_rating(result.rating),
        rating: result.rating,
        badge: result.badge,
        analysis: result.text,
    }))
}

/// POST /api/v1/profile/resume
pub async fn handle_resume(
    State(state): State<AppState>,
    Json(submitted): Json<Profile>,
) -> Result<Json<ResumeResponse>, AppError> {
    let profile = prepare_profile(submitted)?;
    let resume = state.advisor.generate_resume(&profile).await?;
    Ok(Json(ResumeResponse { resume }))
}

/// POST /api/v1/profile/cold-email
pub async fn handle_cold_email(
    State(state): State<AppState>,
    Json(submitted): Json<Profile>,
) -> Result<Json<ColdEmailResponse>, AppError> {
    let profile = prepare_profile(submitted)?;
    let cold_email = state.advisor.generate_cold_email(&profile).await?;
    Ok(Json(ColdEmailResponse { cold_email }))
}

/// GET /api/v1/badges
pub async fn handle_badges() -> Json<Vec<BadgeInfo>> {
    Json(
        Badge::ALL
            .iter()
            .map(|badge| BadgeInfo {
                id: badge.id(),
                min_rating: badge.min_rating(),
                image_url: badge.image_url(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Project;

    #[test]
    fn test_prepare_profile_assigns_id() {
        let profile = prepare_profile(Profile::default()).unwrap();
        assert!(Uuid::parse_str(&profile.id).is_ok());
    }

    #[test]
    fn test_prepare_profile_keeps_existing_id() {
        let profile = prepare_profile(Profile {
            id: "keep-me".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(profile.id, "keep-me");
    }

    #[test]
    fn test_prepare_profile_normalizes_before_validating() {
        let profile = prepare_profile(Profile {
            projects: vec![Project {
                title: "cli".to_string(),
                technologies: vec![" rust ".to_string(), " ".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(profile.projects[0].technologies, vec!["rust"]);
    }

    #[test]
    fn test_prepare_profile_rejects_bad_rating() {
        let err = prepare_profile(Profile {
            rating: Some(500),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
