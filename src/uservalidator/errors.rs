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

use thiserror::Error;

/// The first check a national id failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NationalIdError {
    #[error("National id must be text")]
    NotText,
    #[error("National id must be 14 digits long, got {0} characters")]
    InvalidLength(usize),
    #[error("National id must contain only digits")]
    NonDigit,
    #[error("Invalid century digit: {0}")]
    InvalidCentury(char),
    #[error("Invalid birth date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Invalid governorate code: {0:02}")]
    InvalidGovernorate(u8),
}
