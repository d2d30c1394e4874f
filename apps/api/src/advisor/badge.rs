//! Badge tiers — a fixed rating → image mapping consumed by the front end.

use serde::{Deserialize, Serialize};

pub const GOLD_BADGE_URL: &str = "https://img.shields.io/badge/Profile_Rating-Gold-FFD700";
pub const SILVER_BADGE_URL: &str = "https://img.shields.io/badge/Profile_Rating-Silver-C0C0C0";
pub const BRONZE_BADGE_URL: &str = "https://img.shields.io/badge/Profile_Rating-Bronze-CD7F32";
pub const GROWTH_BADGE_URL: &str = "https://img.shields.io/badge/Profile_Rating-Growth-4C9AFF";

/// Badge tier. Variant order is tier order, so `Ord` compares tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Growth,
    Bronze,
    Silver,
    Gold,
}

impl Badge {
    /// Highest tier first.
    pub const ALL: [Badge; 4] = [Badge::Gold, Badge::Silver, Badge::Bronze, Badge::Growth];

    pub fn id(&self) -> &'static str {
        match self {
            Badge::Gold => "gold",
            Badge::Silver => "silver",
            Badge::Bronze => "bronze",
            Badge::Growth => "growth",
        }
    }

    pub fn image_url(&self) -> &'static str {
        match self {
            Badge::Gold => GOLD_BADGE_URL,
            Badge::Silver => SILVER_BADGE_URL,
            Badge::Bronze => BRONZE_BADGE_URL,
            Badge::Growth => GROWTH_BADGE_URL,
        }
    }

    /// Lowest rating that earns this tier. `Growth` has no floor.
    pub fn min_rating(&self) -> Option<i64> {
        match self {
            Badge::Gold => Some(90),
            Badge::Silver => Some(70),
            Badge::Bronze => Some(50),
            Badge::Growth => None,
        }
    }
}

/// Maps any rating to its tier. Total: negative and >100 values are fine.
pub fn resolve_badge(rating: i64) -> Badge {
    match rating {
        r if r >= 90 => Badge::Gold,
        r if r >= 70 => Badge::Silver,
        r if r >= 50 => Badge::Bronze,
        _ => Badge::Growth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(resolve_badge(90), Badge::Gold);
        assert_eq!(resolve_badge(89), Badge::Silver);
        assert_eq!(resolve_badge(70), Badge::Silver);
        assert_eq!(resolve_badge(69), Badge::Bronze);
        assert_eq!(resolve_badge(50), Badge::Bronze);
        assert_eq!(resolve_badge(49), Badge::Growth);
        assert_eq!(resolve_badge(-5), Badge::Growth);
    }

    #[test]
    fn test_out_of_range_values_resolve() {
        assert_eq!(resolve_badge(0), Badge::Growth);
        assert_eq!(resolve_badge(150), Badge::Gold);
        assert_eq!(resolve_badge(i64::MIN), Badge::Growth);
        assert_eq!(resolve_badge(i64::MAX), Badge::Gold);
    }

    #[test]
    fn test_tiers_are_monotonic_in_rating() {
        let mut previous = resolve_badge(-20);
        for rating in -19..=120 {
            let current = resolve_badge(rating);
            assert!(
                current >= previous,
                "tier dropped from {previous:?} to {current:?} at rating {rating}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_min_rating_agrees_with_resolver() {
        for badge in Badge::ALL {
            if let Some(floor) = badge.min_rating() {
                assert_eq!(resolve_badge(floor), badge);
                assert!(resolve_badge(floor - 1) < badge);
            }
        }
    }

    #[test]
    fn test_ids_and_images_are_distinct() {
        let ids: std::collections::HashSet<_> = Badge::ALL.iter().map(|b| b.id()).collect();
        let urls: std::collections::HashSet<_> =
            Badge::ALL.iter().map(|b| b.image_url()).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(urls.len(), 4);
    }

    #[test]
    fn test_badge_serializes_as_lowercase_id() {
        assert_eq!(serde_json::to_string(&Badge::Silver).unwrap(), "\"silver\"");
        let badge: Badge = serde_json::from_str("\"growth\"").unwrap();
        assert_eq!(badge, Badge::Growth);
    }
}
