//! Canonical slug extraction.
//!
//! Patterns are tried in registry order and the first match wins; precedence
//! is ordinal, never regex alternation, so the most specific URL shape is
//! matched before a looser fallback. Each pattern is anchored to consume the
//! whole (trimmed) input.

use crate::errors::ExtractError;
use crate::registry::Registry;

/// Extract the canonical slug for `platform_key` from a user-supplied string.
///
/// `raw_input` may be a fully-qualified URL, a scheme-less fragment, or a bare
/// identifier; surrounding whitespace is trimmed before matching. On success
/// the slug is returned after the platform's `lower_cased` fold, if any.
///
/// Pure and deterministic: no I/O, no mutable state, safe to call from any
/// number of threads concurrently.
pub fn extract(
    registry: &Registry,
    platform_key: &str,
    raw_input: &str,
) -> Result<String, ExtractError> {
    let Some(platform) = registry.get(platform_key) else {
        return Err(ExtractError::UnknownPlatform {
            platform: platform_key.to_string(),
        });
    };

    let candidate = raw_input.trim();

    for (index, regex) in platform.regexes.iter().enumerate() {
        let Some(captures) = regex.captures(candidate) else {
            tracing::trace!(platform = platform_key, pattern = index, "pattern miss");
            continue;
        };

        // Registry validation guarantees exactly one capture group; an empty
        // capture is treated as a miss, same as no match at all.
        let slug = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        if slug.is_empty() {
            tracing::trace!(platform = platform_key, pattern = index, "empty capture");
            continue;
        }

        tracing::debug!(
            platform = platform_key,
            pattern = index,
            slug,
            "extracted canonical slug"
        );

        return Ok(if platform.format.lower_cased {
            slug.to_lowercase()
        } else {
            slug.to_string()
        });
    }

    Err(ExtractError::NoMatch {
        platform: platform_key.to_string(),
        input: raw_input.to_string(),
    })
}

/// [`extract`] over the builtin registry.
pub fn extract_slug(platform_key: &str, raw_input: &str) -> Result<String, ExtractError> {
    extract(Registry::builtin(), platform_key, raw_input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_cid_url() {
        let slug = extract_slug("google", "https://www.google.com/maps?cid=472717649119152494");
        assert_eq!(slug.unwrap(), "472717649119152494");
    }

    #[test]
    fn google_bare_place_id_preserves_case() {
        // 27-character place ID; the bare-ID pattern takes precedence and the
        // token must round-trip verbatim.
        let slug = extract_slug("google", "ChIJx0JMBTFV2YARbgnOgjJujwY");
        assert_eq!(slug.unwrap(), "ChIJx0JMBTFV2YARbgnOgjJujwY");
    }

    #[test]
    fn google_bare_cid() {
        let slug = extract_slug("google", "472717649119152494");
        assert_eq!(slug.unwrap(), "472717649119152494");
    }

    #[test]
    fn yelp_biz_url() {
        let slug = extract_slug(
            "yelp",
            "https://www.yelp.com/biz/the-cheesecake-factory-san-diego",
        );
        assert_eq!(slug.unwrap(), "the-cheesecake-factory-san-diego");
    }

    #[test]
    fn yelp_url_variants_collapse() {
        let variants = [
            "https://www.yelp.com/biz/the-cheesecake-factory-san-diego",
            "http://yelp.com/biz/the-cheesecake-factory-san-diego/",
            "yelp.com/biz/the-cheesecake-factory-san-diego?osq=cheesecake",
            "the-cheesecake-factory-san-diego",
        ];
        for variant in variants {
            assert_eq!(
                extract_slug("yelp", variant).unwrap(),
                "the-cheesecake-factory-san-diego",
                "variant: {variant}"
            );
        }
    }

    #[test]
    fn facebook_numeric_page_id() {
        let slug = extract_slug("facebook", "https://www.facebook.com/830214057037039");
        assert_eq!(slug.unwrap(), "830214057037039");
    }

    #[test]
    fn facebook_textual_slug_is_lowercased() {
        let slug = extract_slug("facebook", "PremiatoFornoCantoni");
        assert_eq!(slug.unwrap(), "premiatofornocantoni");

        let slug = extract_slug("facebook", "https://www.facebook.com/PremiatoFornoCantoni");
        assert_eq!(slug.unwrap(), "premiatofornocantoni");
    }

    #[test]
    fn facebook_pages_url_takes_numeric_id() {
        let slug = extract_slug(
            "facebook",
            "https://www.facebook.com/pages/Premiato-Forno-Cantoni/830214057037039",
        );
        assert_eq!(slug.unwrap(), "830214057037039");
    }

    #[test]
    fn facebook_profile_php_takes_id_over_generic_segment() {
        // profile.php must be matched by its own pattern, not captured as a
        // page slug by the generic one.
        let slug = extract_slug(
            "facebook",
            "https://www.facebook.com/profile.php?id=830214057037039",
        );
        assert_eq!(slug.unwrap(), "830214057037039");
    }

    #[test]
    fn carfax_legacy_case_insensitive_pattern() {
        // carfax matches case-insensitively via the legacy @...@i form but has
        // no lower_cased fold, so the captured case is preserved.
        let slug = extract_slug(
            "carfax",
            "https://www.carfax.com/dealer/Sunset-Motors-LLC",
        );
        assert_eq!(slug.unwrap(), "Sunset-Motors-LLC");

        let slug = extract_slug("carfax", "Sunset-Motors-LLC");
        assert_eq!(slug.unwrap(), "Sunset-Motors-LLC");
    }

    #[test]
    fn unknown_platform() {
        let err = extract_slug("not-a-real-platform", "anything").unwrap_err();
        assert_eq!(
            err,
            ExtractError::UnknownPlatform {
                platform: "not-a-real-platform".to_string()
            }
        );
    }

    #[test]
    fn platform_key_lookup_is_case_sensitive() {
        let err = extract_slug("Yelp", "the-cheesecake-factory-san-diego").unwrap_err();
        assert!(err.is_unknown_platform());
    }

    #[test]
    fn no_match_preserves_original_input() {
        let err = extract_slug("yelp", "hello world, this is not a url").unwrap_err();
        assert_eq!(
            err,
            ExtractError::NoMatch {
                platform: "yelp".to_string(),
                input: "hello world, this is not a url".to_string()
            }
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let slug = extract_slug("yelp", "  the-cheesecake-factory-san-diego \n");
        assert_eq!(slug.unwrap(), "the-cheesecake-factory-san-diego");
    }

    #[test]
    fn no_match_error_keeps_untrimmed_input() {
        let err = extract_slug("yelp", "  %%% ").unwrap_err();
        assert_eq!(
            err,
            ExtractError::NoMatch {
                platform: "yelp".to_string(),
                input: "  %%% ".to_string()
            }
        );
    }

    #[test]
    fn numeric_slug_not_fished_from_unrelated_url() {
        // Anchoring must prevent a bare-digits fallback from matching digits
        // embedded in an unrelated URL.
        let err = extract_slug("airbnb", "https://example.com:8080/listing?x=12345").unwrap_err();
        assert!(err.is_no_match());
    }

    #[test]
    fn deterministic_over_repeated_calls() {
        let input = "https://www.yelp.com/biz/the-cheesecake-factory-san-diego";
        let first = extract_slug("yelp", input);
        for _ in 0..10 {
            assert_eq!(extract_slug("yelp", input), first);
        }
    }
}
