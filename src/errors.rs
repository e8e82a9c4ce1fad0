// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Reasons the parsing engine can refuse a raw phone number.
///
/// None of these reach the caller of
/// [`PhoneNormalizer::normalize`](crate::PhoneNormalizer::normalize): a failed
/// parse is recorded as "no parsed number" and classified from the input
/// text alone.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The default country hint is not a known region and the number does
    /// not carry its own `+` country calling code.
    #[error("Invalid country code hint: {0:?}")]
    InvalidRegionHint(String),

    #[error("Not a number")]
    NotANumber,

    #[error("{0}")]
    Parse(#[from] phonenumber::ParseError),
}

/// A code that does not belong to one of the closed validity tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownCodeError {
    #[error("Unknown detailed validity code: {0:?}")]
    Detailed(String),

    #[error("Unknown reduced validity code: {0}")]
    Reduced(u8),
}
