/// Error types for host browser interactions

use thiserror::Error;

/// A failed call against the host browser's tab API. The payload carries the
/// host-side context, already rendered to text at the JS boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("tab query failed: {0}")]
    Query(String),

    #[error("tab activation failed: {0}")]
    Activate(String),

    #[error("tab close failed: {0}")]
    Remove(String),

    #[error("malformed host response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = HostError::Query("chrome.tabs unavailable".to_string());
        assert_eq!(err.to_string(), "tab query failed: chrome.tabs unavailable");
    }
}
