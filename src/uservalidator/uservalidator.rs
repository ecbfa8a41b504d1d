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

use log::trace;

use super::{
    enums::{Anchoring, Century, FieldKind},
    errors::NationalIdError,
    helper_constants::{
        CENTURY_POSITION, DAY_RANGE, EMAIL_PATTERN, GOVERNORATE_RANGE, MONTH_RANGE,
        NATIONAL_ID_LENGTH, PHONE_NUMBER_PATTERN, USERNAME_PATTERN, YEAR_RANGE,
    },
    helper_functions::{birth_date, is_valid_governorate_code, normalize_digits, two_digit_field},
    national_id::NationalId,
};
use crate::{input::FieldValue, interfaces::MatcherApi, regex_based_matcher::RegexBasedMatcher};

pub type Result<T> = std::result::Result<T, NationalIdError>;

/// Accept/reject checks for user supplied fields.
///
/// Every check is a pure function of its input: nothing is remembered
/// between calls apart from compiled patterns, so a single instance can be
/// shared between threads. [`USER_VALIDATOR`](super::USER_VALIDATOR) is the
/// process wide one.
pub struct UserValidator {
    /// An API for pattern matching.
    matcher_api: Box<dyn MatcherApi>,

    /// How the email pattern must cover the value.
    email_anchoring: Anchoring,
}

impl UserValidator {
    pub fn new() -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            email_anchoring: Anchoring::Full,
        }
    }

    /// With [`Anchoring::Start`] an email is accepted as soon as a valid
    /// address begins the value, e.g. `user@mail.com, other` passes.
    pub fn with_email_anchoring(mut self, anchoring: Anchoring) -> Self {
        self.email_anchoring = anchoring;
        self
    }

    pub fn email_anchoring(&self) -> Anchoring {
        self.email_anchoring
    }

    /// Dispatches to the check for `kind`.
    pub fn validate<'a>(&self, kind: FieldKind, value: impl Into<FieldValue<'a>>) -> bool {
        let value = value.into();
        match kind {
            FieldKind::Email => self.validate_email(value),
            FieldKind::Username => self.validate_username(value),
            FieldKind::PhoneNumber => self.validate_phone_number(value),
            FieldKind::NationalId => self.validate_national_id(value),
        }
    }

    /// Checks for a local part, `@`, a domain and a top level domain of two or
    /// more letters. Case is not normalized.
    pub fn validate_email<'a>(&self, value: impl Into<FieldValue<'a>>) -> bool {
        self.match_text(FieldKind::Email, value.into(), EMAIL_PATTERN, self.email_anchoring)
    }

    /// 3 to 20 ASCII letters, digits or underscores.
    pub fn validate_username<'a>(&self, value: impl Into<FieldValue<'a>>) -> bool {
        self.match_text(FieldKind::Username, value.into(), USERNAME_PATTERN, Anchoring::Full)
    }

    /// Egyptian mobile number, either national (`01[0125]` + 8 digits) or
    /// with the country code (`201[0125]` + 8 digits). No separators or
    /// leading `+` are accepted.
    pub fn validate_phone_number<'a>(&self, value: impl Into<FieldValue<'a>>) -> bool {
        self.match_text(FieldKind::PhoneNumber, value.into(), PHONE_NUMBER_PATTERN, Anchoring::Full)
    }

    pub fn validate_national_id<'a>(&self, value: impl Into<FieldValue<'a>>) -> bool {
        self.parse_national_id(value).is_ok()
    }

    /// Runs the national id checks in order and returns the first one that
    /// failed:
    ///
    /// 1. text of exactly 14 decimal digits;
    /// 2. century digit `2` (1900s) or `3` (2000s);
    /// 3. positions 1..7 hold a real `YYMMDD` birth date in that century;
    /// 4. positions 7..9 hold a governorate code in `01..=35` or `88`.
    ///
    /// The last five digits (sequence and check digit) are not verified.
    pub fn parse_national_id<'a>(&self, value: impl Into<FieldValue<'a>>) -> Result<NationalId> {
        let value = value.into();
        let Some(text) = value.as_text() else {
            trace!("Rejected {:?}: {} value", FieldKind::NationalId, value.kind_name());
            return Err(NationalIdError::NotText);
        };
        let result = Self::parse_national_id_text(text);
        if let Err(err) = &result {
            trace!("Rejected {:?}: {}", FieldKind::NationalId, err);
        }
        result
    }

    fn parse_national_id_text(text: &str) -> Result<NationalId> {
        let length = text.chars().count();
        if length != NATIONAL_ID_LENGTH {
            return Err(NationalIdError::InvalidLength(length));
        }
        let digits = normalize_digits(text).ok_or(NationalIdError::NonDigit)?;

        // Only the ASCII digits mark a century, the remaining fields take
        // any decimal digit.
        let century_digit = text.chars().nth(CENTURY_POSITION).unwrap_or_default();
        let century = Century::from_digit(century_digit)
            .ok_or(NationalIdError::InvalidCentury(century_digit))?;

        let birth_date = birth_date(
            century,
            two_digit_field(&digits, YEAR_RANGE),
            two_digit_field(&digits, MONTH_RANGE),
            two_digit_field(&digits, DAY_RANGE),
        )?;

        let governorate_code = two_digit_field(&digits, GOVERNORATE_RANGE);
        if !is_valid_governorate_code(governorate_code) {
            return Err(NationalIdError::InvalidGovernorate(governorate_code));
        }

        Ok(NationalId { digits, century, birth_date, governorate_code })
    }

    fn match_text(
        &self, kind: FieldKind, value: FieldValue<'_>,
        pattern: &'static str, anchoring: Anchoring
    ) -> bool {
        let Some(text) = value.as_text() else {
            trace!("Rejected {:?}: {} value", kind, value.kind_name());
            return false;
        };
        let matched = self.matcher_api.match_field(text, pattern, anchoring);
        if !matched {
            trace!("Rejected {:?}: no match for {} characters", kind, text.chars().count());
        }
        matched
    }
}

impl Default for UserValidator {
    fn default() -> Self {
        Self::new()
    }
}
