//! Error types for registry construction and slug extraction.

use thiserror::Error;

/// Data-entry problems caught while compiling the registry.
///
/// These can only arise from a bad `PlatformSlugFormat` record; the builtin
/// dataset is validated by tests, so `Registry::builtin()` never hits them at
/// runtime.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate platform key: {0}")]
    DuplicatePlatform(String),

    #[error("platform {platform} has no extraction patterns")]
    EmptyPatterns { platform: String },

    #[error("platform {platform} has no acceptable formats")]
    EmptyFormats { platform: String },

    #[error("platform {platform} pattern {index} is not anchored with ^...$")]
    UnanchoredPattern { platform: String, index: usize },

    #[error("platform {platform} pattern {index} is not a valid regex: {source}")]
    InvalidPattern {
        platform: String,
        index: usize,
        #[source]
        source: regex::Error,
    },

    #[error("platform {platform} pattern {index} has {found} capture groups, expected exactly 1")]
    WrongCaptureCount {
        platform: String,
        index: usize,
        found: usize,
    },
}

/// Non-fatal extraction failures.
///
/// Both variants are recoverable conditions reported back to the caller for
/// user-facing handling; neither is ever raised as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The requested platform key is not in the registry. Indicates a stale
    /// platform list in the caller rather than a user-input problem; surface
    /// to logs, not to end users.
    #[error("unknown platform: {platform}")]
    UnknownPlatform { platform: String },

    /// Every pattern for the platform failed to match. Common and expected;
    /// the original input is preserved so the UI can echo it back alongside
    /// the platform's format guidance.
    #[error("input did not match any known {platform} format: {input:?}")]
    NoMatch { platform: String, input: String },
}

impl ExtractError {
    /// Check if this error represents an unknown platform key.
    pub fn is_unknown_platform(&self) -> bool {
        matches!(self, Self::UnknownPlatform { .. })
    }

    /// Check if this error represents a failed match.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_error_predicates() {
        let err = ExtractError::UnknownPlatform {
            platform: "not-a-real-platform".to_string(),
        };
        assert!(err.is_unknown_platform());
        assert!(!err.is_no_match());
    }

    #[test]
    fn no_match_display_includes_input() {
        let err = ExtractError::NoMatch {
            platform: "yelp".to_string(),
            input: "hello world".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "input did not match any known yelp format: \"hello world\""
        );
    }
}
