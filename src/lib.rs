//! Platform-slug URL normalizer for review platform connections.
//!
//! Each supported review platform (Google, Yelp, TripAdvisor, ...) has its own
//! URL conventions for identifying a business listing. This crate holds a
//! static registry of per-platform slug grammars and a pure extraction
//! function that collapses whatever a user pastes (a full URL, a scheme-less
//! fragment, or a bare identifier) into one canonical slug per
//! (platform, business) pair, so connections can be deduplicated by that key.

pub mod errors;
pub mod models;
pub mod registry;
pub mod services;

pub use errors::{ExtractError, RegistryError};
pub use models::platform::{PlatformGuidance, PlatformSlugFormat, SlugPattern};
pub use registry::Registry;
pub use services::extractor::extract_slug;
