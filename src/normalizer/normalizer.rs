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

use log::{trace, warn};

use super::{
    helper_constants::{NATIONAL_PREFIX, PLUS_SIGN, ZONE_ID_MULTIPLIER},
    mobile::is_mobile,
    records::{InputPhone, NormalizedPhone, OutputPhone, PhoneResponse},
    validity::{classify_detailed, Validity},
};
use crate::{engine::ParsedNumber, interfaces::PhoneNumberEngine};

/// Turns raw phone numbers into classified, normalized records.
///
/// Stateless apart from the engine, so a single instance can serve any
/// number of threads.
pub struct PhoneNormalizer<E: PhoneNumberEngine> {
    engine: E,
}

impl<E: PhoneNumberEngine> PhoneNormalizer<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Normalizes `raw_phone`, reading numbers without a `+` prefix as
    /// numbers of `country_hint`.
    ///
    /// Never fails: malformed input ends up as a validity code. For unusable
    /// numbers (reduced codes 1, 2, 3, 5 and 8) only the validity and the
    /// phone type are returned.
    pub fn normalize(&self, raw_phone: &str, country_hint: &str) -> NormalizedPhone {
        let phone = raw_phone.trim();
        let country_hint = country_hint.trim().to_uppercase();

        let parsed_number = match self.engine.parse(phone, &country_hint) {
            Ok(parsed_number) => Some(parsed_number),
            Err(err) => {
                warn!(
                    "Could not parse the given number {} with default country code {}: {}",
                    phone, country_hint, err
                );
                None
            }
        };

        let detailed_code = classify_detailed(parsed_number.as_ref(), phone);
        let validity = Validity::from(detailed_code);
        trace!(
            "Number {:?} classified as {} ({}), reduced {}",
            phone, detailed_code, validity.detailed_message, validity.reduced_code
        );

        let mut output = OutputPhone::new(validity);
        if let Some(parsed_number) = &parsed_number {
            self.fill_derived_fields(&mut output, parsed_number);
        }

        NormalizedPhone::shape(output)
    }

    /// Normalizes an inbound record and pairs it with its result.
    pub fn normalize_input(&self, input: &InputPhone) -> PhoneResponse {
        PhoneResponse {
            input_phone: input.clone(),
            output_phone: self.normalize(&input.phone, &input.default_country_hint),
        }
    }

    fn fill_derived_fields(&self, output: &mut OutputPhone, parsed_number: &ParsedNumber) {
        let international_prefix = parsed_number.country_calling_code;
        let (zonal_prefix, local_number) = parsed_number.split_national_number();

        let mut buf = itoa::Buffer::new();
        let international_prefix_str = buf.format(international_prefix);

        output.normalized_local =
            fast_cat::concat_str!(NATIONAL_PREFIX, &zonal_prefix, "/", &local_number);
        output.normalized_local_style = fast_cat::concat_str!(
            PLUS_SIGN,
            international_prefix_str,
            " (",
            NATIONAL_PREFIX,
            &zonal_prefix,
            ") ",
            &local_number
        );
        output.zone_id = zone_id(international_prefix, &zonal_prefix);

        if output.validity.reduced_code.allows_phone_type() {
            output.phone_type = is_mobile(parsed_number);
        }

        output.international_prefix = Some(international_prefix);
        output.dedup_key = Some(parsed_number.national_number);
        output.region_code = parsed_number.region_code.clone();
        output.normalized_e164 = parsed_number.e164.clone();
        output.normalized_international = parsed_number.international.clone();
        output.zonal_prefix = zonal_prefix;
        output.local_number = local_number;
    }
}

/// Combines the country calling code and the zonal prefix into one key,
/// e.g. `32` and `479` give `320479`. Undefined without a zonal prefix.
pub fn zone_id(international_prefix: u16, zonal_prefix: &str) -> Option<u32> {
    if zonal_prefix.trim().is_empty() {
        return None;
    }
    let zonal_prefix = zonal_prefix.parse::<u32>().ok()?;
    (international_prefix as u32)
        .checked_mul(ZONE_ID_MULTIPLIER)?
        .checked_add(zonal_prefix)
}

#[cfg(test)]
mod tests {
    use super::zone_id;

    #[test]
    fn zone_id_combines_prefixes() {
        assert_eq!(Some(320479), zone_id(32, "479"));
        assert_eq!(Some(320002), zone_id(32, "2"));
        assert_eq!(Some(10650), zone_id(1, "650"));
    }

    #[test]
    fn zone_id_requires_zonal_prefix() {
        assert_eq!(None, zone_id(32, ""));
        assert_eq!(None, zone_id(32, "  "));
    }
}
