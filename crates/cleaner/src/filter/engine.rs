//! Selection engine — decides which containers to stop and which images to delete.
//!
//! Pure functions over the daemon's listings. All ages are measured against the
//! daemon's clock (`now`), never the local one.

use std::time::Duration;

use tracing::{debug, info};

use crate::docker::inventory::{ContainerInfo, ImageInfo, UNTAGGED_SENTINEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// Running (or stored) longer than the threshold.
    OlderThan(Duration),
    /// Only tag is `<none>:<none>`.
    Untagged,
}

/// One picked identifier and the rule that picked it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: String,
    pub reason: SelectionReason,
}

/// Age in seconds of something created at `created_at`, on the daemon clock.
#[inline]
pub fn age_secs(now: i64, created_at: i64) -> i64 {
    now - created_at
}

/// Strictly older than `threshold`; an age equal to it does not qualify.
#[inline]
pub fn exceeds(age: i64, threshold: Duration) -> bool {
    // Thresholds beyond i64 seconds can never be exceeded.
    i64::try_from(threshold.as_secs()).map_or(false, |limit| age > limit)
}

/// Exactly one tag, and that tag is the sentinel.
pub fn is_untagged(repo_tags: &[String]) -> bool {
    matches!(repo_tags, [only] if only == UNTAGGED_SENTINEL)
}

/// Containers whose age exceeds `stop_old`, in listing order.
pub fn select_containers(containers: &[ContainerInfo], now: i64, stop_old: Duration) -> Vec<Selection> {
    containers
        .iter()
        .filter(|c| {
            let age = age_secs(now, c.created_at);
            debug!(container_id = %c.id, age_secs = age, "Container age");
            exceeds(age, stop_old)
        })
        .map(|c| {
            info!(container_id = %c.id, status = %c.status, "Going to stop container");
            Selection {
                id: c.id.clone(),
                reason: SelectionReason::OlderThan(stop_old),
            }
        })
        .collect()
}

/// Images picked by the age rule, then images picked by the untagged rule.
///
/// The two rules are evaluated independently; an image matching both appears twice.
pub fn select_images(
    images: &[ImageInfo],
    now: i64,
    clean_old: Option<Duration>,
    clean_none: bool,
) -> Vec<Selection> {
    let mut selected = Vec::new();

    if let Some(threshold) = clean_old {
        for image in images {
            if exceeds(age_secs(now, image.created_at), threshold) {
                info!(
                    image_id = %image.id,
                    tags = ?image.repo_tags,
                    "Going to delete image because it is older than {}",
                    humantime::format_duration(threshold)
                );
                selected.push(Selection {
                    id: image.id.clone(),
                    reason: SelectionReason::OlderThan(threshold),
                });
            }
        }
    }

    if clean_none {
        for image in images.iter().filter(|i| is_untagged(&i.repo_tags)) {
            info!(image_id = %image.id, tags = ?image.repo_tags, "Going to delete image because it is not tagged");
            selected.push(Selection {
                id: image.id.clone(),
                reason: SelectionReason::Untagged,
            });
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_700_000_000;

    fn container(id: &str, created_at: i64) -> ContainerInfo {
        ContainerInfo {
            id: id.into(),
            created_at,
            status: "Up".into(),
        }
    }

    fn image(id: &str, created_at: i64, tags: &[&str]) -> ImageInfo {
        ImageInfo {
            id: id.into(),
            created_at,
            repo_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn ids(selections: &[Selection]) -> Vec<&str> {
        selections.iter().map(|s| s.id.as_str()).collect()
    }

    // ── Age rule ─────────────────────────────────────────────────

    #[test]
    fn test_container_one_hour_old_exceeds_thirty_minutes() {
        let containers = vec![container("c1", T)];
        let picked = select_containers(&containers, T + 3600, Duration::from_secs(30 * 60));
        assert_eq!(ids(&picked), vec!["c1"]);
        assert_eq!(picked[0].reason, SelectionReason::OlderThan(Duration::from_secs(1800)));
    }

    #[test]
    fn test_container_one_hour_old_within_two_hours() {
        let containers = vec![container("c1", T)];
        let picked = select_containers(&containers, T + 3600, Duration::from_secs(2 * 3600));
        assert!(picked.is_empty());
    }

    #[test]
    fn test_container_age_equal_to_threshold_not_selected() {
        let containers = vec![container("exact", T), container("older", T - 1)];
        let picked = select_containers(&containers, T + 600, Duration::from_secs(600));
        assert_eq!(ids(&picked), vec!["older"]);
    }

    #[test]
    fn test_container_selection_keeps_listing_order() {
        let containers = vec![container("b", T - 100), container("a", T - 200), container("young", T)];
        let picked = select_containers(&containers, T, Duration::from_secs(50));
        assert_eq!(ids(&picked), vec!["b", "a"]);
    }

    #[test]
    fn test_container_created_in_future_not_selected() {
        let containers = vec![container("skewed", T + 500)];
        assert!(select_containers(&containers, T, Duration::ZERO).is_empty());
    }

    #[test]
    fn test_image_age_rule() {
        let images = vec![
            image("old", T - 7201, &["app:v1"]),
            image("edge", T - 7200, &["app:v2"]),
            image("new", T, &["app:v3"]),
        ];
        let picked = select_images(&images, T, Some(Duration::from_secs(7200)), false);
        assert_eq!(ids(&picked), vec!["old"]);
    }

    #[test]
    fn test_exceeds_huge_threshold() {
        assert!(!exceeds(i64::MAX, Duration::from_secs(u64::MAX)));
    }

    // ── Untagged rule ────────────────────────────────────────────

    #[test]
    fn test_is_untagged_literal_match() {
        let tags = |t: &[&str]| t.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert!(is_untagged(&tags(&["<none>:<none>"])));
        assert!(!is_untagged(&tags(&[])));
        assert!(!is_untagged(&tags(&["myrepo:latest", "<none>:<none>"])));
        assert!(!is_untagged(&tags(&["<none>:<none>", "<none>:<none>"])));
        assert!(!is_untagged(&tags(&["myrepo:<none>"])));
        assert!(!is_untagged(&tags(&["<none>:<none> "])));
    }

    #[test]
    fn test_untagged_rule_selects_only_single_sentinel() {
        let images = vec![
            image("dangling", T, &["<none>:<none>"]),
            image("multi", T, &["myrepo:latest", "<none>:<none>"]),
            image("bare", T, &[]),
            image("tagged", T, &["myrepo:latest"]),
        ];
        let picked = select_images(&images, T, None, true);
        assert_eq!(ids(&picked), vec!["dangling"]);
        assert_eq!(picked[0].reason, SelectionReason::Untagged);
    }

    #[test]
    fn test_untagged_rule_off_selects_nothing() {
        let images = vec![image("dangling", T, &["<none>:<none>"])];
        assert!(select_images(&images, T, None, false).is_empty());
    }

    // ── Combined ─────────────────────────────────────────────────

    #[test]
    fn test_image_matching_both_rules_is_listed_twice() {
        let images = vec![
            image("both", T - 10_000, &["<none>:<none>"]),
            image("old-only", T - 10_000, &["app:v1"]),
        ];
        let picked = select_images(&images, T, Some(Duration::from_secs(60)), true);
        assert_eq!(ids(&picked), vec!["both", "old-only", "both"]);
        assert_eq!(picked[0].reason, SelectionReason::OlderThan(Duration::from_secs(60)));
        assert_eq!(picked[2].reason, SelectionReason::Untagged);
    }
}
