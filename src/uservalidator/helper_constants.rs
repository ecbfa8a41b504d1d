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

// Patterns are stored unanchored, the matcher decides how to anchor them.

/// Local part, `@`, domain labels and an alphabetic top level domain of at
/// least two letters.
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

pub const USERNAME_PATTERN: &str = r"[a-zA-Z0-9_]{3,20}";

// Egyptian mobile operators: 010 Vodafone, 011 Etisalat, 012 Orange, 015 WE.
// The second alternative is the same number written with the 20 country
// code and without the trunk zero.
pub const PHONE_NUMBER_PATTERN: &str = r"01[0125]\d{8}|201[0125]\d{8}";

pub const NATIONAL_ID_LENGTH: usize = 14;

// Character positions inside a national id.
pub const CENTURY_POSITION: usize = 0;
pub const YEAR_RANGE: Range<usize> = 1..3;
pub const MONTH_RANGE: Range<usize> = 3..5;
pub const DAY_RANGE: Range<usize> = 5..7;
pub const GOVERNORATE_RANGE: Range<usize> = 7..9;
pub const SEQUENCE_RANGE: Range<usize> = 9..14;

pub const CENTURY_1900_DIGIT: char = '2';
pub const CENTURY_2000_DIGIT: char = '3';

pub const MIN_GOVERNORATE_CODE: u8 = 1;
pub const MAX_GOVERNORATE_CODE: u8 = 35;
/// Citizens born outside of Egypt.
pub const FOREIGN_BORN_GOVERNORATE_CODE: u8 = 88;
