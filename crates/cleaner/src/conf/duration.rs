//! Duration — the `24h` / `90m` / `1h30m` grammar used by `-clean-old` and `-stop-old`.

use std::time::Duration;

use super::model::ConfigError;

/// Parse a threshold for `flag`. An empty value means the flag is unset.
pub fn parse_threshold(flag: &'static str, value: Option<&str>) -> Result<Option<Duration>, ConfigError> {
    let raw = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    // A bare zero needs no unit.
    if raw == "0" {
        return Ok(Some(Duration::ZERO));
    }

    humantime::parse_duration(raw)
        .map(Some)
        .map_err(|e| ConfigError::InvalidDuration {
            flag,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
