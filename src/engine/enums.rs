// Copyright (C) 2009 The Libphonenumber Authors
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

use strum::EnumIter;

/// Possible outcomes when testing if a parsed number has a plausible length
/// for its country calling code.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberPossibility {
    /// **The length is valid for a dialable number.**
    IsPossible,
    /// **The length is valid for a local-only number.**
    /// Too short for a full national number but matches a number that can
    /// be dialed within a specific local area.
    IsPossibleLocalOnly,
    /// The number is longer than all valid numbers for this region.
    TooLong,
    /// The number is shorter than all valid numbers for this region.
    TooShort,
    /// The number is longer than the shortest valid numbers for this region,
    /// shorter than the longest valid numbers for this region, and does not
    /// itself have a number length that matches valid numbers for this region.
    InvalidLength,
    /// The number has an invalid country calling code.
    InvalidCountryCode,
}

/// Categorizes phone numbers based on their primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// **Fixed-line numbers.**
    FixedLine,
    /// **Mobile numbers.**
    Mobile,
    /// **Fixed-line or mobile.**
    /// Used in regions (e.g., the USA) where it's impossible to distinguish between
    /// fixed-line and mobile numbers by looking at the phone number itself.
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    PersonalNumber,
    /// Any other service type known to the metadata (VoIP, pagers, UAN, voicemail...).
    Other,
    /// **Unknown type.**
    /// The number does not match any of the known patterns for its region.
    Unknown,
}

impl From<phonenumber::Type> for NumberType {
    fn from(value: phonenumber::Type) -> Self {
        match value {
            phonenumber::Type::FixedLine => Self::FixedLine,
            phonenumber::Type::Mobile => Self::Mobile,
            phonenumber::Type::FixedLineOrMobile => Self::FixedLineOrMobile,
            phonenumber::Type::TollFree => Self::TollFree,
            phonenumber::Type::PremiumRate => Self::PremiumRate,
            phonenumber::Type::SharedCost => Self::SharedCost,
            phonenumber::Type::PersonalNumber => Self::PersonalNumber,
            phonenumber::Type::Unknown => Self::Unknown,
            _ => Self::Other,
        }
    }
}
