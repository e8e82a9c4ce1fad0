mod interfaces;
pub mod engine;
pub mod errors;
pub mod i18n;
mod normalizer;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

pub use engine::{LibPhoneNumberEngine, NumberPossibility, NumberType, ParsedNumber};
pub use interfaces::PhoneNumberEngine;
pub use normalizer::{mobile, records, validity, PhoneNormalizer};
pub use normalizer::records::{InputPhone, LimitedOutputPhone, NormalizedPhone, OutputPhone, PhoneResponse};
pub use normalizer::validity::{DetailedCode, ReducedCode, Validity};
pub use normalizer::mobile::PhoneType;

pub static PHONE_NORMALIZER: LazyLock<PhoneNormalizer<LibPhoneNumberEngine>> = LazyLock::new(|| {
    PhoneNormalizer::new(LibPhoneNumberEngine::new())
});
