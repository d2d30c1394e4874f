use serde::{Deserialize, Serialize};

use crate::advisor::badge::{resolve_badge, Badge};
use crate::errors::AppError;

/// The user-supplied record submitted for analysis. Read-only to the advisor.
///
/// Field names follow the browser form's camelCase JSON. Every collection
/// defaults to empty because the form submits whatever the user filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub coding_profiles: Vec<CodingProfile>,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodingProfile {
    pub platform: String,
    pub username: String,
    pub url: String,
}

/// An empty `end_date` means the position is current.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub role: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Project {
    /// Splits a comma-separated technology list, trimming each tag and
    /// dropping empties: `"rust, , axum "` → `["rust", "axum"]`.
    pub fn parse_technologies(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Profile {
    /// Returns a copy with technology tags re-split on commas, trimmed, and
    /// empty tags removed.
    pub fn normalized(&self) -> Profile {
        let mut profile = self.clone();
        for project in &mut profile.projects {
            project.technologies = Project::parse_technologies(&project.technologies.join(","));
        }
        profile
    }

    /// Returns a copy carrying the rating and the badge it resolves to.
    /// The stored rating is clamped into 0..=100; the badge is unaffected
    /// since out-of-range values already land in the end tiers.
    pub fn with_rating(&self, rating: i64) -> Profile {
        let rating = rating.clamp(0, 100);
        Profile {
            rating: Some(rating),
            badge: Some(resolve_badge(rating)),
            ..self.clone()
        }
    }

    /// Checks the rating range, rating/badge consistency, and tag shape.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(rating) = self.rating {
            if !(0..=100).contains(&rating) {
                return Err(AppError::Validation(format!(
                    "rating must be between 0 and 100, got {rating}"
                )));
            }
        }

        match (self.rating, self.badge) {
            (None, Some(badge)) => {
                return Err(AppError::Validation(format!(
                    "badge '{}' given without a rating",
                    badge.id()
                )));
            }
            (Some(rating), Some(badge)) if resolve_badge(rating) != badge => {
                return Err(AppError::Validation(format!(
                    "badge '{}' does not match rating {rating} (expected '{}')",
                    badge.id(),
                    resolve_badge(rating).id()
                )));
            }
            _ => {}
        }

        for project in &self.projects {
            if project
                .technologies
                .iter()
                .any(|t| t.is_empty() || t.trim() != t)
            {
                return Err(AppError::Validation(format!(
                    "project '{}' has an empty or untrimmed technology tag",
                    project.title
                )));
            }
        }

        Ok(())
    }
}
