// Copyright (C) 2026 The Phonefield Authors
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

use crate::i18n::CountryId;

/// Per-country entry rules for a phone field.
///
/// The table is compiled in and read-only. Dial codes are not unique across
/// entries (US and CA share `+1`); `id` is the unique key.
#[derive(Debug, PartialEq, Eq)]
pub struct CountryRule {
    pub id: CountryId,

    /// Display name, also used in validation messages.
    pub name: &'static str,

    /// International dial code including the leading `+`, e.g. `"+84"`.
    /// Used for display and as the matching prefix when parsing a canonical
    /// value.
    pub dial_code: &'static str,

    /// Exact digit count of a well-formed national number.
    pub national_length: usize,

    /// Unanchored pattern the national number must fully match. The digit
    /// count it accepts for the well-formed case equals `national_length`.
    pub national_pattern: &'static str,

    /// Digit string every national number must begin with, e.g. the trunk
    /// `"0"`. Empty when the country has no such convention.
    pub required_prefix: &'static str,

    /// Entry hint shown in an empty number input.
    pub placeholder: &'static str,

    /// Flag emoji for the selector option.
    pub flag: &'static str,
}

impl CountryRule {
    /// Text of the selector option for this rule, e.g. `"🇻🇳 +84"`.
    pub fn selector_label(&self) -> String {
        fast_cat::concat_str!(self.flag, " ", self.dial_code)
    }
}

/// Default selection for new fields and the parse fallback.
pub const DEFAULT_COUNTRY: CountryId = CountryId::Vn;

/// Example shown in the default country's generic pattern-mismatch message.
pub(super) const DEFAULT_COUNTRY_EXAMPLE: &str = "0912345678";

/// The selector table. Order is significant: canonical-value parsing scans
/// it top to bottom and the first dial-code prefix match wins, which is why
/// the US row precedes the CA row.
pub static COUNTRY_RULES: [CountryRule; 16] = [
    CountryRule {
        id: CountryId::Vn,
        name: "Vietnam",
        dial_code: "+84",
        national_length: 10,
        national_pattern: r"0\d{9}",
        required_prefix: "0",
        placeholder: "0XXXXXXXXX",
        flag: "🇻🇳",
    },
    CountryRule {
        id: CountryId::Us,
        name: "United States",
        dial_code: "+1",
        national_length: 10,
        national_pattern: r"\d{10}",
        required_prefix: "",
        placeholder: "XXXXXXXXXX",
        flag: "🇺🇸",
    },
    CountryRule {
        id: CountryId::Gb,
        name: "United Kingdom",
        dial_code: "+44",
        national_length: 10,
        national_pattern: r"[1-9]\d{9,10}",
        required_prefix: "7",
        placeholder: "7XXXXXXXXX",
        flag: "🇬🇧",
    },
    CountryRule {
        id: CountryId::Cn,
        name: "China",
        dial_code: "+86",
        national_length: 11,
        national_pattern: r"1[3-9]\d{9}",
        required_prefix: "1",
        placeholder: "1XXXXXXXXXX",
        flag: "🇨🇳",
    },
    CountryRule {
        id: CountryId::Jp,
        name: "Japan",
        dial_code: "+81",
        national_length: 11,
        national_pattern: r"[789]0\d{9}",
        required_prefix: "9",
        placeholder: "90XXXXXXXXX",
        flag: "🇯🇵",
    },
    CountryRule {
        id: CountryId::Kr,
        name: "South Korea",
        dial_code: "+82",
        national_length: 10,
        national_pattern: r"1[0-9]\d{7,8}",
        required_prefix: "1",
        placeholder: "10XXXXXXXX",
        flag: "🇰🇷",
    },
    CountryRule {
        id: CountryId::Th,
        name: "Thailand",
        dial_code: "+66",
        national_length: 9,
        national_pattern: r"[689]\d{8}",
        required_prefix: "8",
        placeholder: "8XXXXXXXX",
        flag: "🇹🇭",
    },
    CountryRule {
        id: CountryId::Sg,
        name: "Singapore",
        dial_code: "+65",
        national_length: 8,
        national_pattern: r"[689]\d{7}",
        required_prefix: "8",
        placeholder: "8XXXXXXX",
        flag: "🇸🇬",
    },
    CountryRule {
        id: CountryId::My,
        name: "Malaysia",
        dial_code: "+60",
        national_length: 10,
        national_pattern: r"1[0-9]\d{7,8}",
        required_prefix: "1",
        placeholder: "1XXXXXXXXX",
        flag: "🇲🇾",
    },
    CountryRule {
        id: CountryId::Id,
        name: "Indonesia",
        dial_code: "+62",
        national_length: 11,
        national_pattern: r"8\d{9,10}",
        required_prefix: "8",
        placeholder: "8XXXXXXXXXX",
        flag: "🇮🇩",
    },
    CountryRule {
        id: CountryId::Ph,
        name: "Philippines",
        dial_code: "+63",
        national_length: 10,
        national_pattern: r"9\d{9}",
        required_prefix: "9",
        placeholder: "9XXXXXXXXX",
        flag: "🇵🇭",
    },
    CountryRule {
        id: CountryId::Au,
        name: "Australia",
        dial_code: "+61",
        national_length: 9,
        national_pattern: r"4\d{8}",
        required_prefix: "4",
        placeholder: "4XXXXXXXX",
        flag: "🇦🇺",
    },
    CountryRule {
        id: CountryId::Ca,
        name: "Canada",
        dial_code: "+1",
        national_length: 10,
        national_pattern: r"\d{10}",
        required_prefix: "",
        placeholder: "XXXXXXXXXX",
        flag: "🇨🇦",
    },
    CountryRule {
        id: CountryId::Fr,
        name: "France",
        dial_code: "+33",
        national_length: 9,
        national_pattern: r"[67]\d{8}",
        required_prefix: "6",
        placeholder: "6XXXXXXXX",
        flag: "🇫🇷",
    },
    CountryRule {
        id: CountryId::De,
        name: "Germany",
        dial_code: "+49",
        national_length: 11,
        national_pattern: r"1[5-7]\d{8,9}",
        required_prefix: "15",
        placeholder: "15XXXXXXXXX",
        flag: "🇩🇪",
    },
    CountryRule {
        id: CountryId::In,
        name: "India",
        dial_code: "+91",
        national_length: 10,
        national_pattern: r"[6-9]\d{9}",
        required_prefix: "9",
        placeholder: "9XXXXXXXXX",
        flag: "🇮🇳",
    },
];
