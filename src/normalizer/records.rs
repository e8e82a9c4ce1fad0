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

use serde::{Deserialize, Serialize};

use super::{mobile::PhoneType, validity::Validity};
use crate::i18n::RegionCode;

fn default_country_hint() -> String {
    RegionCode::be().to_owned()
}

/// Phone number to normalize together with the region to assume for
/// numbers written without a `+` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputPhone {
    pub phone: String,
    #[serde(alias = "defaultCountryCode", default = "default_country_hint")]
    pub default_country_hint: String,
}

impl InputPhone {
    pub fn new(phone: impl Into<String>, default_country_hint: impl Into<String>) -> Self {
        Self { phone: phone.into(), default_country_hint: default_country_hint.into() }
    }
}

/// Full normalization result. Fields the number does not define are left
/// `None` (or empty) and are not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputPhone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international_prefix: Option<u16>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zonal_prefix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub local_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedup_key: Option<u64>,
    /// `02/5559719`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub normalized_local: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<u32>,
    pub validity: Validity,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<PhoneType>,
    /// `+3225559719`
    #[serde(rename = "normalizedE164", skip_serializing_if = "String::is_empty")]
    pub normalized_e164: String,
    /// `+32 2 555 97 19`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub normalized_international: String,
    /// `+32 (02) 5559719`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub normalized_local_style: String,
}

impl OutputPhone {
    pub fn new(validity: Validity) -> Self {
        Self {
            international_prefix: None,
            zonal_prefix: String::new(),
            local_number: String::new(),
            dedup_key: None,
            normalized_local: String::new(),
            zone_id: None,
            validity,
            region_code: String::new(),
            phone_type: None,
            normalized_e164: String::new(),
            normalized_international: String::new(),
            normalized_local_style: String::new(),
        }
    }
}

/// View of an unusable number: only its validity and phone type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitedOutputPhone {
    pub validity: Validity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<PhoneType>,
}

impl From<OutputPhone> for LimitedOutputPhone {
    fn from(output: OutputPhone) -> Self {
        Self { validity: output.validity, phone_type: output.phone_type }
    }
}

/// Normalization result shaped by its reduced validity code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NormalizedPhone {
    Full(OutputPhone),
    Limited(LimitedOutputPhone),
}

impl NormalizedPhone {
    /// Picks the view once, from the reduced code of the output.
    pub fn shape(output: OutputPhone) -> Self {
        if output.validity.reduced_code.is_limited_view() {
            Self::Limited(output.into())
        } else {
            Self::Full(output)
        }
    }

    pub fn validity(&self) -> &Validity {
        match self {
            Self::Full(output) => &output.validity,
            Self::Limited(output) => &output.validity,
        }
    }

    pub fn phone_type(&self) -> Option<PhoneType> {
        match self {
            Self::Full(output) => output.phone_type,
            Self::Limited(output) => output.phone_type,
        }
    }

    pub fn as_full(&self) -> Option<&OutputPhone> {
        match self {
            Self::Full(output) => Some(output),
            Self::Limited(_) => None,
        }
    }

    pub fn is_limited(&self) -> bool {
        matches!(self, Self::Limited(_))
    }
}

/// Request echoed together with its normalization result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneResponse {
    pub input_phone: InputPhone,
    pub output_phone: NormalizedPhone,
}
