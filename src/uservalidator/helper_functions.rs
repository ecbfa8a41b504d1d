// Copyright (C) 2025 Kashin Vladislav
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

use std::ops::Range;

use chrono::NaiveDate;
use dec_from_char::DecimalExtended;

use super::{
    errors::NationalIdError, helper_constants::{
        FOREIGN_BORN_GOVERNORATE_CODE, MAX_GOVERNORATE_CODE, MIN_GOVERNORATE_CODE,
    }, enums::Century
};

/// Returns an ASCII copy of `value` if it consists of decimal digits only.
/// Digits of other scripts (e.g. Arabic-Indic) are converted to their ASCII
/// counterparts so that the result can be sliced by byte positions.
pub(super) fn normalize_digits(value: &str) -> Option<String> {
    if !value.chars().all(|c| c.is_decimal_utf8()) {
        return None;
    }
    let normalized: String = dec_from_char::normalize_decimals(value).into();
    // normalization must leave one ascii byte per digit
    if normalized.len() != value.chars().count() || !normalized.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(normalized)
}

/// Parses the two-digit field at `range` of an already normalized id.
pub(super) fn two_digit_field(digits: &str, range: Range<usize>) -> u8 {
    digits.as_bytes()[range]
        .iter()
        .fold(0, |acc, b| acc * 10 + (b - b'0'))
}

pub(super) fn birth_date(
    century: Century, year_offset: u8, month: u8, day: u8
) -> Result<NaiveDate, NationalIdError> {
    let year = century.base_year() + i32::from(year_offset);
    let (month, day) = (u32::from(month), u32::from(day));
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(NationalIdError::InvalidDate { year, month, day })
}

/// Codes 01 to 35 cover the governorates, 88 is used for people born abroad.
pub(super) fn is_valid_governorate_code(code: u8) -> bool {
    (MIN_GOVERNORATE_CODE..=MAX_GOVERNORATE_CODE).contains(&code)
        || code == FOREIGN_BORN_GOVERNORATE_CODE
}
