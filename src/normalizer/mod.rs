pub(crate) mod helper_constants;
pub mod mobile;
pub mod normalizer;
pub mod records;
pub mod validity;

pub use normalizer::PhoneNormalizer;
