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

use phonenumber::metadata::{Descriptor, Metadata};

use super::NumberPossibility;
use crate::normalizer::helper_constants::{MOBILE_TOKEN_MAPPINGS, NON_DIGITS_PATTERN};

/// Helper method to check a number against the possible lengths of its
/// region, and determine whether it matches, or is too short or too long.
pub(super) fn test_number_length(
    national_number: &str,
    metadata: &Metadata,
) -> NumberPossibility {
    let (possible_lengths, local_lengths) = possible_lengths_for_general_desc(metadata);
    test_length_against(national_number.len(), &possible_lengths, &local_lengths)
}

/// The bundled metadata leaves the general description without lengths, so
/// they are rebuilt as the union of every number type of the region.
pub(super) fn possible_lengths_for_general_desc(metadata: &Metadata) -> (Vec<u16>, Vec<u16>) {
    let descriptors = metadata.descriptors();
    let type_descs: Vec<&Descriptor> = [
        descriptors.fixed_line(),
        descriptors.mobile(),
        descriptors.toll_free(),
        descriptors.premium_rate(),
        descriptors.shared_cost(),
        descriptors.personal_number(),
        descriptors.voip(),
        descriptors.pager(),
        descriptors.uan(),
        descriptors.voicemail(),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut possible_lengths =
        merge_lengths(type_descs.iter().map(|desc| desc.possible_length()));
    let mut local_lengths =
        merge_lengths(type_descs.iter().map(|desc| desc.possible_local_length()));

    if possible_lengths.is_empty() {
        let general = descriptors.general();
        possible_lengths = general.possible_length().to_vec();
        local_lengths = general.possible_local_length().to_vec();
    }
    (possible_lengths, local_lengths)
}

/// Sorted, deduplicated union of length lists.
pub(super) fn merge_lengths<'a>(lengths: impl Iterator<Item = &'a [u16]>) -> Vec<u16> {
    let mut merged: Vec<u16> = lengths.flatten().copied().collect();
    merged.sort_unstable();
    merged.dedup();
    merged
}

pub(super) fn test_length_against(
    actual_length: usize,
    possible_lengths: &[u16],
    local_lengths: &[u16],
) -> NumberPossibility {
    // Type not supported at all.
    let (Some(&minimum_length), Some(&maximum_length)) =
        (possible_lengths.first(), possible_lengths.last())
    else {
        return NumberPossibility::InvalidLength;
    };

    let actual_length = actual_length as u16;
    // There is never an overlap between the possible lengths and the
    // local-only lengths.
    if local_lengths.contains(&actual_length) {
        return NumberPossibility::IsPossibleLocalOnly;
    }

    if minimum_length == actual_length {
        NumberPossibility::IsPossible
    } else if minimum_length > actual_length {
        NumberPossibility::TooShort
    } else if maximum_length < actual_length {
        NumberPossibility::TooLong
    } else if possible_lengths[1..].contains(&actual_length) {
        NumberPossibility::IsPossible
    } else {
        NumberPossibility::InvalidLength
    }
}

/// Returns the mobile token for the country calling code, or an empty
/// string when the country has none.
pub(super) fn country_mobile_token(country_calling_code: u16) -> &'static str {
    MOBILE_TOKEN_MAPPINGS
        .iter()
        .find(|(code, _)| *code == country_calling_code)
        .map(|(_, token)| *token)
        .unwrap_or("")
}

/// Derives the national destination code length from an internationally
/// formatted number (`+32 2 555 97 19`).
pub(super) fn national_destination_code_len(
    international: &str,
    country_calling_code: u16,
    is_mobile: bool,
    has_extension: bool,
) -> usize {
    // Groups are: country calling code, then the area code unless it is the
    // last group. An extension is always rendered as the trailing group.
    let mut number_groups: Vec<&str> = NON_DIGITS_PATTERN
        .split(international)
        .filter(|group| !group.is_empty())
        .collect();
    if has_extension {
        number_groups.pop();
    }
    if number_groups.len() <= 2 {
        return 0;
    }

    if is_mobile && !country_mobile_token(country_calling_code).is_empty() {
        // Mobile token (e.g. `9` in Argentina) comes first, the area code second.
        return number_groups[1].len() + number_groups[2].len();
    }
    number_groups[1].len()
}
