//! Business logic over the platform registry.

pub mod extractor;
