//! System domain — the daemon's wall clock.

use chrono::DateTime;

use super::client::{DockerClient, DockerError};

impl DockerClient {
    /// Current time on the daemon host, in epoch seconds.
    pub async fn system_time(&self) -> Result<i64, DockerError> {
        let info = self.client.info().await?;
        parse_system_time(info.system_time.as_deref())
    }
}

/// Parse the RFC 3339 `SystemTime` field of `/info`, truncating to whole seconds.
pub fn parse_system_time(raw: Option<&str>) -> Result<i64, DockerError> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DockerError::InvalidSystemTime("daemon did not report SystemTime".into()))?;

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.timestamp())
        .map_err(|e| DockerError::InvalidSystemTime(format!("{:?}: {}", raw, e)))
}
