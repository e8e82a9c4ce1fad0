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

mod helper_functions;
pub mod enums;
pub mod lib_engine;

pub use enums::{NumberPossibility, NumberType};
pub use lib_engine::LibPhoneNumberEngine;

/// Everything the normalizer needs to know about one successfully parsed
/// number. Built fresh by the engine for every call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub country_calling_code: u16,
    /// National significant number as an integer. Leading zeros (italian
    /// style) are not part of it, see `leading_zeros`.
    pub national_number: u64,
    pub leading_zeros: u8,
    pub possibility: NumberPossibility,
    pub is_valid: bool,
    /// `None` when the engine has no metadata to classify the number with.
    pub number_type: Option<NumberType>,
    /// Main region of the country calling code, `ZZ` when unknown.
    pub region_code: String,
    pub national_destination_code_len: usize,
    /// `+3225559719`
    pub e164: String,
    /// `+32 2 555 97 19`
    pub international: String,
}

impl ParsedNumber {
    /// National significant number rendered as text, leading zeros included.
    pub fn national_significant_number(&self) -> String {
        Self::render_national_number(self.leading_zeros, self.national_number)
    }

    pub(crate) fn render_national_number(leading_zeros: u8, national_number: u64) -> String {
        let mut buf = itoa::Buffer::new();
        let zeros = "0".repeat(leading_zeros as usize);
        fast_cat::concat_str!(&zeros, buf.format(national_number))
    }

    /// Splits the national number into zonal prefix and local number at the
    /// national destination code boundary.
    pub fn split_national_number(&self) -> (String, String) {
        let mut nsn = self.national_significant_number();
        let split_at = self.national_destination_code_len.min(nsn.len());
        let local = nsn.split_off(split_at);
        (nsn, local)
    }
}
