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

use chrono::NaiveDate;

use super::enums::{Century, Governorate};

/// A national id that passed every check of
/// [`UserValidator::parse_national_id`](super::UserValidator::parse_national_id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalId {
    pub(super) digits: String,
    pub(super) century: Century,
    pub(super) birth_date: NaiveDate,
    pub(super) governorate_code: u8,
}

impl NationalId {
    /// The 14 ASCII digits of the id.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn century(&self) -> Century {
        self.century
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn governorate_code(&self) -> u8 {
        self.governorate_code
    }

    /// Named governorate for the code, `None` for accepted codes that have no
    /// governorate assigned.
    pub fn governorate(&self) -> Option<Governorate> {
        Governorate::from_code(self.governorate_code)
    }

    /// Trailing digits after the governorate code. They are not validated.
    pub fn sequence(&self) -> &str {
        &self.digits[super::helper_constants::SEQUENCE_RANGE]
    }
}
