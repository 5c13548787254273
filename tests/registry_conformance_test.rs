//! Registry-wide conformance sweep.
//!
//! Every documented acceptable format must extract, all format variants of a
//! platform must collapse to one canonical slug, and each platform's case
//! policy must hold. Run with: `cargo test --test registry_conformance_test`

use reviewdesk::services::extractor;
use reviewdesk::{ExtractError, Registry};

fn registry() -> &'static Registry {
    Registry::builtin()
}

#[test]
fn registry_has_expected_platform_count() {
    assert_eq!(registry().len(), 90);
}

#[test]
fn every_acceptable_format_extracts_a_nonempty_slug() {
    for key in registry().platform_keys() {
        let platform = registry().get(key).unwrap();
        for format in &platform.format.acceptable_formats {
            let slug = extractor::extract(registry(), key, format)
                .unwrap_or_else(|err| panic!("{key}: {format:?} failed: {err}"));
            assert!(!slug.is_empty(), "{key}: {format:?} extracted empty slug");
        }
    }
}

#[test]
fn format_variants_collapse_to_one_slug() {
    // Acceptable formats for a platform all describe the same listing, so
    // they must normalize to the same deduplication key.
    for key in registry().platform_keys() {
        let platform = registry().get(key).unwrap();
        let mut slugs: Vec<String> = platform
            .format
            .acceptable_formats
            .iter()
            .map(|format| extractor::extract(registry(), key, format).unwrap())
            .collect();
        slugs.dedup();
        assert_eq!(
            slugs.len(),
            1,
            "{key}: format variants disagree on canonical slug: {slugs:?}"
        );
    }
}

#[test]
fn extraction_is_idempotent_on_its_own_output() {
    for key in registry().platform_keys() {
        let platform = registry().get(key).unwrap();
        let format = platform.format.acceptable_formats[0];
        let slug = extractor::extract(registry(), key, format).unwrap();
        let again = extractor::extract(registry(), key, &slug)
            .unwrap_or_else(|err| panic!("{key}: re-extracting {slug:?} failed: {err}"));
        assert_eq!(again, slug, "{key}: re-extraction changed the slug");
    }
}

#[test]
fn lower_cased_platforms_fold_uppercase_input() {
    for key in registry().platform_keys() {
        let platform = registry().get(key).unwrap();
        if !platform.format.lower_cased {
            continue;
        }

        // The last acceptable format is the bare-slug shape; its uppercase
        // variant must still match and fold back to the same key.
        let bare = platform.format.acceptable_formats.last().unwrap();
        let expected = extractor::extract(registry(), key, bare).unwrap();
        assert_eq!(expected, expected.to_lowercase(), "{key}: slug not folded");

        let upper = bare.to_uppercase();
        let folded = extractor::extract(registry(), key, &upper)
            .unwrap_or_else(|err| panic!("{key}: uppercase {upper:?} failed: {err}"));
        assert_eq!(folded, expected, "{key}: uppercase variant diverged");
    }
}

#[test]
fn case_significant_platforms_preserve_captured_text() {
    for key in registry().platform_keys() {
        let platform = registry().get(key).unwrap();
        if platform.format.lower_cased {
            continue;
        }
        for format in &platform.format.acceptable_formats {
            let slug = extractor::extract(registry(), key, format).unwrap();
            assert!(
                format.contains(slug.as_str()),
                "{key}: slug {slug:?} is not verbatim in {format:?}"
            );
        }
    }
}

#[test]
fn garbage_input_never_matches_any_platform() {
    let garbage = "hello world, this is not a url";
    for key in registry().platform_keys() {
        let err = extractor::extract(registry(), key, garbage).unwrap_err();
        assert_eq!(
            err,
            ExtractError::NoMatch {
                platform: key.to_string(),
                input: garbage.to_string()
            },
            "{key}: garbage input did not report NoMatch"
        );
    }
}

#[test]
fn unknown_platform_is_distinct_from_no_match() {
    let err = extractor::extract(registry(), "not-a-real-platform", "anything").unwrap_err();
    assert!(err.is_unknown_platform());
    assert!(!err.is_no_match());
}

#[test]
fn example_urls_extract_for_every_platform() {
    // The display example is not consulted by matching, but it should itself
    // be a valid input.
    for key in registry().platform_keys() {
        let platform = registry().get(key).unwrap();
        let example = platform.format.example_url;
        extractor::extract(registry(), key, example)
            .unwrap_or_else(|err| panic!("{key}: example URL {example:?} failed: {err}"));
    }
}
