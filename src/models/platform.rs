//! Per-platform slug grammar records.

use serde::Serialize;

/// A single extraction rule: an anchored regex source with exactly one
/// capturing group for the canonical slug.
///
/// Most rules are plain regex strings. A handful of entries carried over from
/// the original dataset are written in a legacy `@...@i` delimited form, where
/// the trailing `i` marks case-insensitive matching (e.g. the `carfax` entry).
/// That encoding is inconsistent with the record-level `lower_cased` flag used
/// elsewhere, but it is preserved as platform data rather than unified;
/// [`SlugPattern::parse`] recognizes both forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugPattern {
    /// Regex source, without any legacy delimiters.
    pub source: &'static str,
    /// Match case-insensitively (the legacy `i` flag).
    pub case_insensitive: bool,
}

impl SlugPattern {
    /// Parse a raw pattern string in either plain or legacy `@...@flags` form.
    pub fn parse(raw: &'static str) -> Self {
        if let Some(body) = raw.strip_prefix('@') {
            if let Some((source, flags)) = body.rsplit_once('@') {
                return Self {
                    source,
                    case_insensitive: flags.contains('i'),
                };
            }
        }
        Self {
            source: raw,
            case_insensitive: false,
        }
    }
}

/// One registry record: the slug grammar for a single review platform.
#[derive(Debug, Clone)]
pub struct PlatformSlugFormat {
    /// Unique lowercase lookup key. Stable; never changes after creation.
    pub platform_key: &'static str,
    /// Representative full URL, shown to users. Not consulted when matching.
    pub example_url: &'static str,
    /// Documented input shapes, most canonical first. Informational only.
    pub acceptable_formats: Vec<&'static str>,
    /// Extraction rules, tried in order; first match wins.
    pub patterns: Vec<SlugPattern>,
    /// Fold the extracted slug to lowercase before returning it.
    ///
    /// Set for platforms whose slugs are business-name based and treated
    /// case-insensitively; unset where the slug is an opaque case-significant
    /// identifier that must round-trip verbatim.
    pub lower_cased: bool,
}

impl PlatformSlugFormat {
    /// The user-facing projection of this record for format help dialogs.
    pub fn guidance(&self) -> PlatformGuidance {
        PlatformGuidance {
            platform_key: self.platform_key,
            example_url: self.example_url,
            acceptable_formats: self.acceptable_formats.clone(),
        }
    }
}

/// Serializable guidance payload handed to callers when an input is not
/// recognized, so the surrounding UI can show the expected formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformGuidance {
    pub platform_key: &'static str,
    pub example_url: &'static str,
    pub acceptable_formats: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_pattern() {
        let pattern = SlugPattern::parse(r"^(\d+)$");
        assert_eq!(pattern.source, r"^(\d+)$");
        assert!(!pattern.case_insensitive);
    }

    #[test]
    fn parse_legacy_delimited_pattern() {
        let pattern = SlugPattern::parse(r"@^([a-z0-9-]+)$@i");
        assert_eq!(pattern.source, r"^([a-z0-9-]+)$");
        assert!(pattern.case_insensitive);
    }

    #[test]
    fn parse_legacy_delimiters_without_flags() {
        let pattern = SlugPattern::parse(r"@^([a-z0-9-]+)$@");
        assert_eq!(pattern.source, r"^([a-z0-9-]+)$");
        assert!(!pattern.case_insensitive);
    }

    #[test]
    fn guidance_projects_display_fields() {
        let format = PlatformSlugFormat {
            platform_key: "yelp",
            example_url: "https://www.yelp.com/biz/some-business",
            acceptable_formats: vec!["https://www.yelp.com/biz/some-business", "some-business"],
            patterns: vec![SlugPattern::parse(r"^([a-z-]+)$")],
            lower_cased: true,
        };
        let guidance = format.guidance();
        assert_eq!(guidance.platform_key, "yelp");
        assert_eq!(guidance.acceptable_formats.len(), 2);

        let json = serde_json::to_value(&guidance).unwrap();
        assert_eq!(json["platform_key"], "yelp");
        assert!(json["acceptable_formats"].is_array());
    }
}
