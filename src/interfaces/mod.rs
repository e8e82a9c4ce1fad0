use crate::{engine::ParsedNumber, errors::EngineError};

/// Phone number parsing API the normalizer is built on, used to isolate the
/// underlying libphonenumber implementation and allow different
/// implementations to be swapped in easily.
///
/// Implementations are shared read-only between threads.
pub trait PhoneNumberEngine: Send + Sync {
    /// Parses `text` using `region_hint` (ISO 3166 alpha-2) as the default
    /// region for numbers written without a `+` country calling code.
    fn parse(&self, text: &str, region_hint: &str) -> Result<ParsedNumber, EngineError>;
}
