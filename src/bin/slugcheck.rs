//! Registry lint and ad-hoc extraction tool.
//!
//! Usage:
//!   `cargo run --bin slugcheck` sweeps every platform's acceptable formats
//!   through the extractor and reports any that fail (run after adding or
//!   editing a registry record).
//!   `cargo run --bin slugcheck <platform> <input>` extracts one slug; on a
//!   miss, prints the platform's format guidance as JSON.

use reviewdesk::services::extractor;
use reviewdesk::{ExtractError, Registry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "reviewdesk=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => sweep(),
        [platform, input] => extract_one(platform, input),
        _ => anyhow::bail!("usage: slugcheck [<platform> <input>]"),
    }
}

/// Run every acceptable format of every platform through the extractor.
fn sweep() -> anyhow::Result<()> {
    let registry = Registry::builtin();
    let mut checked = 0usize;
    let mut failures = 0usize;

    for key in registry.platform_keys() {
        let platform = registry
            .get(key)
            .ok_or_else(|| anyhow::anyhow!("registry listed unknown key {key}"))?;

        for format in &platform.format.acceptable_formats {
            checked += 1;
            match extractor::extract(registry, key, format) {
                Ok(slug) => {
                    tracing::debug!(platform = key, format, slug, "ok");
                }
                Err(err) => {
                    failures += 1;
                    println!("FAIL {key}: {format:?}: {err}");
                }
            }
        }
    }

    println!(
        "checked {checked} formats across {} platforms, {failures} failures",
        registry.len()
    );
    if failures > 0 {
        anyhow::bail!("{failures} acceptable formats failed to extract");
    }
    Ok(())
}

fn extract_one(platform: &str, input: &str) -> anyhow::Result<()> {
    match extractor::extract(Registry::builtin(), platform, input) {
        Ok(slug) => {
            println!("{slug}");
            Ok(())
        }
        Err(err @ ExtractError::NoMatch { .. }) => {
            eprintln!("{err}");
            if let Some(guidance) = Registry::builtin().guidance(platform) {
                eprintln!("{}", serde_json::to_string_pretty(&guidance)?);
            }
            anyhow::bail!("no match")
        }
        Err(err) => Err(err.into()),
    }
}
