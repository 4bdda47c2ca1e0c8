use bollard::models::{ContainerSummary, ImageDeleteResponseItem, ImageSummary};

/// Tag docker reports for an image that has lost every repo:tag.
pub const UNTAGGED_SENTINEL: &str = "<none>:<none>";

/// Running container as seen by the list API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub id: String,          // Full container ID 64-char hash
    pub created_at: i64,     // Unix timestamp, daemon clock
    pub status: String,      // "Up 2 hours"
}

impl From<ContainerSummary> for ContainerInfo {
    fn from(s: ContainerSummary) -> Self {
        Self {
            id: s.id.unwrap_or_default(),
            created_at: s.created.unwrap_or_default(),
            status: s.status.unwrap_or_default(),
        }
    }
}

/// Stored image as seen by the list API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub id: String,
    pub created_at: i64,
    pub repo_tags: Vec<String>,  // "repo:tag", or the sentinel for dangling images
}

impl From<ImageSummary> for ImageInfo {
    fn from(s: ImageSummary) -> Self {
        Self {
            id: s.id,
            created_at: s.created,
            repo_tags: s.repo_tags,
        }
    }
}

/// One line of the daemon's answer to an image removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalEntry {
    Deleted(String),
    Untagged(String),
}

impl RemovalEntry {
    /// Flatten a bollard response item; an item may carry both fields.
    pub fn from_item(item: ImageDeleteResponseItem) -> Vec<RemovalEntry> {
        let mut entries = Vec::with_capacity(2);
        if let Some(untagged) = item.untagged.filter(|s| !s.is_empty()) {
            entries.push(RemovalEntry::Untagged(untagged));
        }
        if let Some(deleted) = item.deleted.filter(|s| !s.is_empty()) {
            entries.push(RemovalEntry::Deleted(deleted));
        }
        entries
    }
}
