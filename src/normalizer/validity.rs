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

use std::{fmt, str::FromStr};

use log::trace;
use serde::{Serialize, Serializer};
use strum::{EnumIter, IntoEnumIterator};

use super::{
    helper_constants::{
        LETTERS_PATTERN, LIMITED_VIEW_CODES, MAX_FIXED_LINE_NATIONAL_NUMBER, MIN_MOBILE_NATIONAL_NUMBER,
        PHONE_TYPE_CODES,
    },
    mobile::{is_mobile, PhoneType},
};
use crate::{
    engine::{NumberPossibility, ParsedNumber},
    errors::UnknownCodeError,
};

const UNKNOWN_VALIDITY_MESSAGE: &'static str = "Unknown validity flag";

/// Fine-grained reason a number is or isn't usable, rendered as a two digit
/// code. `03` and `06` have never been assigned.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailedCode {
    /// `00`
    PhoneOk,
    /// `01`
    OutputTooLong,
    /// `02`
    InvalidLengthNat,
    /// `04`
    NotLocalInAskedCountry,
    /// `05`
    TooShortForCcCountry,
    /// `07`
    UnknownIntPrefix,
    /// `08`
    BlankPhone,
    /// `09`, kept for callers of the table; the classifier never emits it.
    CountryCcNotFound,
    /// `10`
    InvalidCharacters,
    /// `99`, not evaluated.
    Unknown,
}

impl DetailedCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::PhoneOk => "00",
            Self::OutputTooLong => "01",
            Self::InvalidLengthNat => "02",
            Self::NotLocalInAskedCountry => "04",
            Self::TooShortForCcCountry => "05",
            Self::UnknownIntPrefix => "07",
            Self::BlankPhone => "08",
            Self::CountryCcNotFound => "09",
            Self::InvalidCharacters => "10",
            Self::Unknown => "99",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::PhoneOk => "PHONE_OK",
            Self::OutputTooLong => "ERROR_OUTPUT_TOO_LONG",
            Self::InvalidLengthNat => "ERROR_INVALID_LENGTH_NAT",
            Self::NotLocalInAskedCountry => "ERROR_NOT_LOCAL_IN_ASKED_COUNTRY",
            Self::TooShortForCcCountry => "ERROR_TOO_SHORT_FOR_CC_COUNTRY",
            Self::UnknownIntPrefix => "ERROR_UNKNOWN_INT_PREFIX",
            Self::BlankPhone => "ERROR_BLANK_PHONE",
            Self::CountryCcNotFound => "ERROR_COUNTRY_CC_NOT_FOUND",
            Self::InvalidCharacters => "ERROR_INVALID_CHARACTERS",
            Self::Unknown => UNKNOWN_VALIDITY_MESSAGE,
        }
    }

    pub fn reduced(&self) -> ReducedCode {
        match self {
            Self::PhoneOk => ReducedCode::Ok,
            Self::OutputTooLong | Self::TooShortForCcCountry => ReducedCode::InvalidLengthNational,
            Self::InvalidLengthNat => ReducedCode::InvalidLengthZonal,
            Self::NotLocalInAskedCountry => ReducedCode::InvalidNumberZonal,
            Self::UnknownIntPrefix => ReducedCode::InvalidPrefix,
            Self::BlankPhone => ReducedCode::BlankPhone,
            Self::CountryCcNotFound => ReducedCode::AmbiguousCountry,
            Self::InvalidCharacters => ReducedCode::InvalidCharacters,
            Self::Unknown => ReducedCode::Unknown,
        }
    }
}

impl Default for DetailedCode {
    fn default() -> Self {
        Self::Unknown
    }
}

impl FromStr for DetailedCode {
    type Err = UnknownCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|code| code.code() == s)
            .ok_or_else(|| UnknownCodeError::Detailed(s.to_owned()))
    }
}

impl fmt::Display for DetailedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for DetailedCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Coarse summary of a [`DetailedCode`].
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReducedCode {
    Ok,
    InvalidLengthNational,
    InvalidPrefix,
    InvalidCharacters,
    BlankPhone,
    InvalidLengthZonal,
    AmbiguousCountry,
    /// Never produced by the detailed table.
    DedupFormatTooShort,
    InvalidNumberZonal,
    Unknown,
}

impl ReducedCode {
    pub fn value(&self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::InvalidLengthNational => 1,
            Self::InvalidPrefix => 2,
            Self::InvalidCharacters => 3,
            Self::BlankPhone => 4,
            Self::InvalidLengthZonal => 5,
            Self::AmbiguousCountry => 6,
            Self::DedupFormatTooShort => 7,
            Self::InvalidNumberZonal => 8,
            Self::Unknown => 9,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Ok => "phone number OK",
            Self::InvalidLengthNational => "invalid length for National def",
            Self::InvalidPrefix => "invalid prefix",
            Self::InvalidCharacters => "invalid character (contains letters)",
            Self::BlankPhone => "Blank Phone",
            Self::InvalidLengthZonal => "invalid length for Zonal def",
            Self::AmbiguousCountry => "ambiguous country detection",
            Self::DedupFormatTooShort => "set to blank because specified dedup format too short",
            Self::InvalidNumberZonal => "invalid number for Zonal def",
            Self::Unknown => UNKNOWN_VALIDITY_MESSAGE,
        }
    }

    /// Numbers with these codes are unusable, only validity and phone type
    /// are shown for them.
    pub fn is_limited_view(&self) -> bool {
        LIMITED_VIEW_CODES.contains(self)
    }

    /// Mobile/fixed classification is only computed for these codes.
    pub fn allows_phone_type(&self) -> bool {
        PHONE_TYPE_CODES.contains(self)
    }
}

impl TryFrom<u8> for ReducedCode {
    type Error = UnknownCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|code| code.value() == value)
            .ok_or(UnknownCodeError::Reduced(value))
    }
}

impl fmt::Display for ReducedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = itoa::Buffer::new();
        f.write_str(buf.format(self.value()))
    }
}

impl Serialize for ReducedCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// Validity of a number: the reduced code and the detailed code with their
/// descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    pub reduced_code: ReducedCode,
    pub reduced_message: &'static str,
    pub detailed_code: DetailedCode,
    pub detailed_message: &'static str,
}

impl From<DetailedCode> for Validity {
    fn from(detailed_code: DetailedCode) -> Self {
        let reduced_code = detailed_code.reduced();
        Self {
            reduced_code,
            reduced_message: reduced_code.message(),
            detailed_code,
            detailed_message: detailed_code.message(),
        }
    }
}

/// Maps any detailed code text to its reduced code and description.
/// Codes outside the table reduce to [`ReducedCode::Unknown`].
pub fn reduce(detailed_code: &str) -> (ReducedCode, &'static str) {
    let reduced_code = detailed_code
        .parse::<DetailedCode>()
        .map(|code| code.reduced())
        .unwrap_or(ReducedCode::Unknown);
    (reduced_code, reduced_code.message())
}

/// Detailed validity of a raw phone number: the verdict of the parsing
/// engine when the number could be parsed, followed by the blank and letter
/// checks on the input text, which always win.
pub fn classify_detailed(parsed_number: Option<&ParsedNumber>, raw_phone: &str) -> DetailedCode {
    let mut detailed_code = parsed_number.map_or(DetailedCode::default(), classify_parsed);

    if raw_phone.trim().is_empty() {
        trace!("Phone {:?} is blank", raw_phone);
        detailed_code = DetailedCode::BlankPhone;
    }

    if LETTERS_PATTERN.is_match(raw_phone) {
        trace!("Phone {:?} contains letters", raw_phone);
        detailed_code = DetailedCode::InvalidCharacters;
    }

    detailed_code
}

fn classify_parsed(parsed_number: &ParsedNumber) -> DetailedCode {
    trace!(
        "Number {} possibility: {:?}, valid: {}",
        parsed_number.e164, parsed_number.possibility, parsed_number.is_valid
    );
    match parsed_number.possibility {
        NumberPossibility::IsPossible | NumberPossibility::IsPossibleLocalOnly => {
            classify_possible(parsed_number)
        }
        NumberPossibility::TooLong => DetailedCode::OutputTooLong,
        NumberPossibility::TooShort => DetailedCode::TooShortForCcCountry,
        NumberPossibility::InvalidLength => DetailedCode::InvalidLengthNat,
        NumberPossibility::InvalidCountryCode => DetailedCode::UnknownIntPrefix,
    }
}

/// Possible-length checks are looser than full validation: a possible but
/// invalid number is refined by the length expected for its phone type.
fn classify_possible(parsed_number: &ParsedNumber) -> DetailedCode {
    if parsed_number.is_valid {
        return DetailedCode::PhoneOk;
    }
    let national_number = parsed_number.national_number;
    match is_mobile(parsed_number) {
        Some(PhoneType::Fixed) if national_number > MAX_FIXED_LINE_NATIONAL_NUMBER => {
            DetailedCode::OutputTooLong
        }
        Some(PhoneType::Mobile) if national_number < MIN_MOBILE_NATIONAL_NUMBER => {
            DetailedCode::TooShortForCcCountry
        }
        _ => DetailedCode::NotLocalInAskedCountry,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{classify_detailed, reduce, DetailedCode, ReducedCode, Validity};

    #[test]
    fn reduce_follows_detailed_table() {
        let expected = [
            ("00", 0),
            ("01", 1),
            ("05", 1),
            ("02", 5),
            ("04", 8),
            ("07", 2),
            ("08", 4),
            ("09", 6),
            ("10", 3),
            ("99", 9),
        ];
        for (detailed, reduced) in expected {
            assert_eq!(reduced, reduce(detailed).0.value(), "detailed code {detailed}");
        }
    }

    #[test]
    fn unassigned_codes_reduce_to_unknown() {
        for detailed in ["03", "06", "11", "", "0", "abc"] {
            assert_eq!(
                (ReducedCode::Unknown, "Unknown validity flag"),
                reduce(detailed),
                "detailed code {detailed:?}"
            );
        }
    }

    #[test]
    fn reduce_is_deterministic() {
        for code in DetailedCode::iter() {
            assert_eq!(reduce(code.code()), reduce(code.code()));
            assert_eq!(code.reduced(), reduce(code.code()).0);
        }
    }

    #[test]
    fn detailed_codes_round_trip_through_text() {
        for code in DetailedCode::iter() {
            assert_eq!(Ok(code), code.code().parse::<DetailedCode>());
            assert_eq!(2, code.to_string().len());
        }
        assert!("03".parse::<DetailedCode>().is_err());
    }

    #[test]
    fn reduced_code_descriptions() {
        assert_eq!("phone number OK", ReducedCode::Ok.message());
        assert_eq!(
            "set to blank because specified dedup format too short",
            ReducedCode::try_from(7u8).unwrap().message()
        );
        assert_eq!("invalid number for Zonal def", ReducedCode::try_from(8u8).unwrap().message());
        assert!(ReducedCode::try_from(10u8).is_err());

        let values: Vec<u8> = ReducedCode::iter().map(|code| code.value()).collect();
        assert_eq!((0..=9).collect::<Vec<u8>>(), values);
    }

    #[test]
    fn dedup_format_code_is_unreachable_from_detailed_codes() {
        assert!(DetailedCode::iter().all(|code| code.reduced() != ReducedCode::DedupFormatTooShort));
    }

    #[test]
    fn limited_view_codes() {
        let limited: Vec<u8> = ReducedCode::iter()
            .filter(ReducedCode::is_limited_view)
            .map(|code| code.value())
            .collect();
        assert_eq!(vec![1, 2, 3, 5, 8], limited);
    }

    #[test]
    fn only_letter_categories_count_as_letters() {
        assert_eq!(DetailedCode::InvalidCharacters, classify_detailed(None, "02555abc19"));
        assert_eq!(DetailedCode::InvalidCharacters, classify_detailed(None, "025559719é"));
        // Roman numerals are letter numbers, combining marks are marks.
        assert_eq!(DetailedCode::Unknown, classify_detailed(None, "\u{216B}"));
        assert_eq!(DetailedCode::Unknown, classify_detailed(None, "02\u{0301}5559719"));
        assert_eq!(DetailedCode::BlankPhone, classify_detailed(None, ""));
    }

    #[test]
    fn validity_carries_both_levels() {
        let validity = Validity::from(DetailedCode::BlankPhone);
        assert_eq!(ReducedCode::BlankPhone, validity.reduced_code);
        assert_eq!("Blank Phone", validity.reduced_message);
        assert_eq!("ERROR_BLANK_PHONE", validity.detailed_message);
    }
}
