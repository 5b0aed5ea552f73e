use super::types::UpstreamFailure;

const RATE_LIMIT_MARKERS: &[&str] = &["rate limit"];
const TIMEOUT_MARKERS: &[&str] = &["timeout", "timed out"];

impl UpstreamFailure {
    /// Buckets an upstream error by its description. Matching is
    /// case-insensitive; rate limiting is checked before timeouts.
    // TODO: switch to the typed error once the client exposes HTTP status and error code.
    pub fn from_description(description: &str) -> Self {
        let lowered = description.to_lowercase();
        let contains_any = |markers: &[&str]| markers.iter().any(|m| lowered.contains(m));

        if contains_any(RATE_LIMIT_MARKERS) {
            Self::RateLimited
        } else if contains_any(TIMEOUT_MARKERS) {
            Self::Timeout
        } else {
            Self::Other
        }
    }
}
