//! Registry record types and caller-facing DTOs.

pub mod platform;

pub use platform::{PlatformGuidance, PlatformSlugFormat, SlugPattern};
