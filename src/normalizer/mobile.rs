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

use log::trace;
use serde::{Serialize, Serializer};

use super::helper_constants::{
    BELGIAN_MOBILE_ZONE_MAX, BELGIAN_MOBILE_ZONE_MIN, MOBILE_ZONE_DIGITS, NATIONAL_PREFIX,
};
use crate::{
    engine::{NumberType, ParsedNumber},
    i18n::RegionCode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneType {
    Fixed,
    Mobile,
}

impl PhoneType {
    pub fn value(&self) -> u8 {
        match self {
            Self::Fixed => 0,
            Self::Mobile => 1,
        }
    }
}

impl Serialize for PhoneType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// Whether a parsed number is a mobile number.
///
/// libphonenumber misses Belgian mobiles of the wrong length, so for Belgium
/// the mobile zones are checked on the national number as well. Returns
/// `None` when the engine could not classify the number at all.
pub fn is_mobile(parsed_number: &ParsedNumber) -> Option<PhoneType> {
    let number_type = parsed_number.number_type?;
    if number_type == NumberType::Mobile {
        return Some(PhoneType::Mobile);
    }

    if parsed_number.region_code == RegionCode::be() {
        let national_significant_number = parsed_number.national_significant_number();
        if let Some(zone) = national_significant_number.get(..MOBILE_ZONE_DIGITS) {
            if is_between_belgian_mobile_zones(zone) {
                trace!("Number {} is in a Belgian mobile zone", parsed_number.e164);
                return Some(PhoneType::Mobile);
            }
        }
    }
    Some(PhoneType::Fixed)
}

/// Checks the first three digits of a Belgian national number against the
/// mobile zones `0456`..=`0499`.
pub fn is_between_belgian_mobile_zones(zone: &str) -> bool {
    fast_cat::concat_str!(NATIONAL_PREFIX, zone)
        .parse::<u16>()
        .is_ok_and(|zone| (BELGIAN_MOBILE_ZONE_MIN..=BELGIAN_MOBILE_ZONE_MAX).contains(&zone))
}
