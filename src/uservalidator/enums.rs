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

use strum::EnumIter;

use super::helper_constants::{CENTURY_1900_DIGIT, CENTURY_2000_DIGIT};

/// How a pattern has to cover a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchoring {
    /// **Whole value.** Nothing may precede or follow the match.
    #[default]
    Full,
    /// **Prefix.** The match has to begin at the first character, anything
    /// may follow it.
    Start,
}

/// The kinds of fields a [`UserValidator`](super::UserValidator) knows.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Email,
    Username,
    PhoneNumber,
    NationalId,
}

/// Birth century encoded by the first digit of a national id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Century {
    /// Digit `2`, born 1900–1999.
    Nineteen,
    /// Digit `3`, born 2000–2099.
    Twenty,
}

impl Century {
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            CENTURY_1900_DIGIT => Some(Century::Nineteen),
            CENTURY_2000_DIGIT => Some(Century::Twenty),
            _ => None,
        }
    }

    pub fn base_year(self) -> i32 {
        match self {
            Century::Nineteen => 1900,
            Century::Twenty => 2000,
        }
    }
}

/// Governorates with an assigned national id code.
///
/// Informational only: acceptance of a national id uses the wider rule of
/// any code in `1..=35` or `88`, so codes such as `05` or `20` are accepted
/// without a named governorate.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Governorate {
    Cairo = 1,
    Alexandria = 2,
    PortSaid = 3,
    Suez = 4,
    Damietta = 11,
    Dakahlia = 12,
    Sharqia = 13,
    Qalyubia = 14,
    KafrElSheikh = 15,
    Gharbia = 16,
    Monufia = 17,
    Beheira = 18,
    Ismailia = 19,
    Giza = 21,
    BeniSuef = 22,
    Faiyum = 23,
    Minya = 24,
    Asyut = 25,
    Sohag = 26,
    Qena = 27,
    Aswan = 28,
    Luxor = 29,
    RedSea = 31,
    NewValley = 32,
    Matrouh = 33,
    NorthSinai = 34,
    SouthSinai = 35,
    /// Born abroad.
    Foreign = 88,
}

impl Governorate {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|governorate| governorate.code() == code)
    }
}
