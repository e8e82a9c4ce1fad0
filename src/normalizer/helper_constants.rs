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

use std::sync::LazyLock;

use regex::Regex;

use crate::validity::ReducedCode;

pub const PLUS_CHARS: &'static str = "+\u{FF0B}";
pub const PLUS_SIGN: &'static str = "+";

/// Prefix put in front of the zonal prefix in every local representation.
pub const NATIONAL_PREFIX: &'static str = "0";

/// Belgian mobile zones, read from the first three digits of the national
/// number after prefixing a zero (`0456`..=`0499`).
pub const BELGIAN_MOBILE_ZONE_MIN: u16 = 456;
pub const BELGIAN_MOBILE_ZONE_MAX: u16 = 499;
pub const MOBILE_ZONE_DIGITS: usize = 3;

/// National numbers of nine digits or more are too long for a fixed line.
pub const MAX_FIXED_LINE_NATIONAL_NUMBER: u64 = 99_999_999;
/// National numbers below nine digits are too short for a mobile.
pub const MIN_MOBILE_NATIONAL_NUMBER: u64 = 100_000_000;

/// `zoneId = internationalPrefix * ZONE_ID_MULTIPLIER + zonalPrefix`
pub const ZONE_ID_MULTIPLIER: u32 = 10_000;

/// Countries whose mobile numbers carry a token in front of the area code.
pub const MOBILE_TOKEN_MAPPINGS: [(u16, &'static str); 1] = [(54, "9")];

/// Reduced codes for which only the validity and the phone type are shown.
pub const LIMITED_VIEW_CODES: [ReducedCode; 5] = [
    ReducedCode::InvalidLengthNational,
    ReducedCode::InvalidPrefix,
    ReducedCode::InvalidCharacters,
    ReducedCode::InvalidLengthZonal,
    ReducedCode::InvalidNumberZonal,
];

/// Reduced codes for which the mobile/fixed classification is meaningful.
pub const PHONE_TYPE_CODES: [ReducedCode; 2] = [ReducedCode::Ok, ReducedCode::AmbiguousCountry];

pub static NON_DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D+").expect("static pattern is valid"));

/// Unicode letters (`L*` categories), without letter numbers or marks.
pub static LETTERS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}").expect("static pattern is valid"));
