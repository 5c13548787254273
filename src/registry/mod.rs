//! Immutable platform registry with patterns compiled once at construction.
//!
//! The registry is a read-only dataset: it is built from static records,
//! validated and compiled up front, and only ever read afterwards. Extraction
//! over it is a pure function, so the shared builtin instance needs no
//! synchronization.

pub mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::errors::RegistryError;
use crate::models::platform::{PlatformGuidance, PlatformSlugFormat};

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new(data::builtin_entries()).expect("builtin registry data is valid")
});

/// A registry record together with its compiled patterns, index-aligned with
/// `format.patterns`.
#[derive(Debug)]
pub struct CompiledPlatform {
    pub format: PlatformSlugFormat,
    pub regexes: Vec<Regex>,
}

/// Read-only mapping from platform key to compiled slug grammar.
#[derive(Debug)]
pub struct Registry {
    platforms: HashMap<&'static str, CompiledPlatform>,
    // Data-entry order, for stable listing.
    keys: Vec<&'static str>,
}

impl Registry {
    /// Validate and compile a set of records into a registry.
    ///
    /// Rejects duplicate keys, empty pattern or format lists, unanchored or
    /// invalid regexes, and patterns whose capture-group count is not exactly
    /// one.
    pub fn new(entries: Vec<PlatformSlugFormat>) -> Result<Self, RegistryError> {
        let mut platforms = HashMap::with_capacity(entries.len());
        let mut keys = Vec::with_capacity(entries.len());

        for entry in entries {
            let key = entry.platform_key;

            if entry.patterns.is_empty() {
                return Err(RegistryError::EmptyPatterns {
                    platform: key.to_string(),
                });
            }
            if entry.acceptable_formats.is_empty() {
                return Err(RegistryError::EmptyFormats {
                    platform: key.to_string(),
                });
            }

            let mut regexes = Vec::with_capacity(entry.patterns.len());
            for (index, pattern) in entry.patterns.iter().enumerate() {
                // Full-input anchoring is load-bearing: numeric slugs must not
                // be fished out of unrelated substrings like ports or query
                // parameters.
                if !pattern.source.starts_with('^') || !pattern.source.ends_with('$') {
                    return Err(RegistryError::UnanchoredPattern {
                        platform: key.to_string(),
                        index,
                    });
                }

                let regex = RegexBuilder::new(pattern.source)
                    .case_insensitive(pattern.case_insensitive)
                    .build()
                    .map_err(|source| RegistryError::InvalidPattern {
                        platform: key.to_string(),
                        index,
                        source,
                    })?;

                let found = regex.captures_len() - 1;
                if found != 1 {
                    return Err(RegistryError::WrongCaptureCount {
                        platform: key.to_string(),
                        index,
                        found,
                    });
                }
                regexes.push(regex);
            }

            if platforms
                .insert(
                    key,
                    CompiledPlatform {
                        format: entry,
                        regexes,
                    },
                )
                .is_some()
            {
                return Err(RegistryError::DuplicatePlatform(key.to_string()));
            }
            keys.push(key);
        }

        Ok(Self { platforms, keys })
    }

    /// The builtin dataset, compiled once on first use.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Look up a platform by its exact, case-sensitive key.
    pub fn get(&self, platform_key: &str) -> Option<&CompiledPlatform> {
        self.platforms.get(platform_key)
    }

    /// Format guidance for a platform, if it exists.
    pub fn guidance(&self, platform_key: &str) -> Option<PlatformGuidance> {
        self.platforms
            .get(platform_key)
            .map(|platform| platform.format.guidance())
    }

    /// Platform keys in data-entry order.
    pub fn platform_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keys.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::platform::SlugPattern;

    fn record(key: &'static str, patterns: &[&'static str]) -> PlatformSlugFormat {
        PlatformSlugFormat {
            platform_key: key,
            example_url: "https://example.com/biz/some-business",
            acceptable_formats: vec!["some-business"],
            patterns: patterns.iter().map(|raw| SlugPattern::parse(raw)).collect(),
            lower_cased: false,
        }
    }

    #[test]
    fn builtin_dataset_compiles() {
        let registry = Registry::new(data::builtin_entries()).unwrap();
        assert_eq!(registry.len(), data::builtin_entries().len());
        assert!(registry.get("google").is_some());
        assert!(registry.get("not-a-real-platform").is_none());
    }

    #[test]
    fn builtin_keys_are_lowercase_and_ordered() {
        let registry = Registry::builtin();
        for key in registry.platform_keys() {
            assert_eq!(key, key.to_lowercase(), "platform key must be lowercase");
        }
        let first = registry.platform_keys().next();
        assert_eq!(first, Some("google"));
    }

    #[test]
    fn rejects_duplicate_platform_keys() {
        let entries = vec![record("yelp", &[r"^(\d+)$"]), record("yelp", &[r"^(\d+)$"])];
        let err = Registry::new(entries).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicatePlatform(key) if key == "yelp"));
    }

    #[test]
    fn rejects_empty_pattern_list() {
        let err = Registry::new(vec![record("yelp", &[])]).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyPatterns { .. }));
    }

    #[test]
    fn rejects_unanchored_pattern() {
        let err = Registry::new(vec![record("yelp", &[r"(\d+)"])]).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::UnanchoredPattern { index: 0, .. }
        ));
    }

    #[test]
    fn rejects_wrong_capture_count() {
        let err = Registry::new(vec![record("yelp", &[r"^(\d+)-([a-z]+)$"])]).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::WrongCaptureCount { found: 2, .. }
        ));

        let err = Registry::new(vec![record("yelp", &[r"^\d+$"])]).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::WrongCaptureCount { found: 0, .. }
        ));
    }

    #[test]
    fn rejects_invalid_regex() {
        let err = Registry::new(vec![record("yelp", &[r"^([a-z+$"])]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPattern { .. }));
    }

    #[test]
    fn guidance_returns_display_fields() {
        let registry = Registry::builtin();
        let guidance = registry.guidance("yelp").unwrap();
        assert_eq!(guidance.platform_key, "yelp");
        assert!(!guidance.acceptable_formats.is_empty());
        assert!(guidance.example_url.starts_with("https://"));
        assert!(registry.guidance("not-a-real-platform").is_none());
    }
}
