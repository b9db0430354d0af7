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

use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::{country_rules::COUNTRY_RULES, helper_constants::DIGITS_PATTERN};

/// Holds the patterns the engine needs besides the per-country validation
/// rules, plus the cache those rules are compiled through.
pub(super) struct PhoneFieldRegExps {
    pub regexp_cache: RegexCache,

    /// Matches strings that already consist only of ASCII digits, so
    /// stripping can skip allocation for the common keystroke case.
    pub digits_pattern: Regex,
}

impl PhoneFieldRegExps {
    pub fn new() -> Self {
        Self {
            regexp_cache: RegexCache::with_capacity(COUNTRY_RULES.len()),
            digits_pattern: Regex::new(DIGITS_PATTERN).expect("Invalid constant pattern!"),
        }
    }
}
