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

use log::{debug, trace};
use phonenumber::{
    country,
    metadata::{Database, Metadata, DATABASE},
    Mode, PhoneNumber,
};

use super::{
    helper_functions::{national_destination_code_len, test_number_length},
    NumberPossibility, NumberType, ParsedNumber,
};
use crate::{
    errors::EngineError, i18n, interfaces::PhoneNumberEngine,
    normalizer::helper_constants::PLUS_CHARS,
};

/// Production engine backed by the `phonenumber` crate and its bundled
/// libphonenumber metadata. Immutable, so one instance serves every thread.
pub struct LibPhoneNumberEngine {
    database: &'static Database,
}

impl LibPhoneNumberEngine {
    pub fn new() -> Self {
        Self { database: &*DATABASE }
    }

    /// Metadata of the main region for a country calling code.
    fn metadata_for_country_code(&self, country_calling_code: u16) -> Option<&'static Metadata> {
        self.database
            .by_code(&country_calling_code)
            .and_then(|regions| regions.into_iter().next())
    }

    fn region_code_for_country_code(&self, country_calling_code: u16) -> String {
        self.metadata_for_country_code(country_calling_code)
            .map(|metadata| metadata.id().to_owned())
            .unwrap_or_else(|| i18n::RegionCode::get_unknown().to_owned())
    }

    fn possibility(&self, number: &PhoneNumber) -> NumberPossibility {
        let country_calling_code = number.code().value();
        let Some(metadata) = self.metadata_for_country_code(country_calling_code) else {
            trace!("Missing/invalid country calling code ({})", country_calling_code);
            return NumberPossibility::InvalidCountryCode;
        };
        let national_significant_number = ParsedNumber::render_national_number(
            number.national().zeros(),
            number.national().value(),
        );
        test_number_length(&national_significant_number, metadata)
    }

    fn number_type(&self, number: &PhoneNumber) -> Option<NumberType> {
        number.metadata(self.database)?;
        Some(number.number_type(self.database).into())
    }
}

impl Default for LibPhoneNumberEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberEngine for LibPhoneNumberEngine {
    fn parse(&self, text: &str, region_hint: &str) -> Result<ParsedNumber, EngineError> {
        if !text.chars().any(|c| c.is_numeric()) {
            return Err(EngineError::NotANumber);
        }

        let region = region_hint.parse::<country::Id>().ok();
        if region.is_none() {
            debug!("Region hint {:?} is not a known region", region_hint);
            if !text.starts_with(|c: char| PLUS_CHARS.contains(c)) {
                return Err(EngineError::InvalidRegionHint(region_hint.to_owned()));
            }
        }

        let number = phonenumber::parse(region, text)?;

        let country_calling_code = number.code().value();
        let number_type = self.number_type(&number);
        let international = phonenumber::format(&number).mode(Mode::International).to_string();
        let national_destination_code_len = national_destination_code_len(
            &international,
            country_calling_code,
            number_type == Some(NumberType::Mobile),
            number.extension().is_some(),
        );

        Ok(ParsedNumber {
            country_calling_code,
            national_number: number.national().value(),
            leading_zeros: number.national().zeros(),
            possibility: self.possibility(&number),
            is_valid: phonenumber::is_valid(&number),
            number_type,
            region_code: self.region_code_for_country_code(country_calling_code),
            national_destination_code_len,
            e164: phonenumber::format(&number).mode(Mode::E164).to_string(),
            international,
        })
    }
}
