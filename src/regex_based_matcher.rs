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

use log::error;

use crate::{
    interfaces,
    phonefield::CountryRule,
    regex_util::RegexFullMatch,
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self {
            cache: RegexCache::with_capacity(32),
        }
    }

    fn match_number(
        &self,
        phone_number: &str,
        number_pattern: &str,
    ) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(number_pattern)?;
        Ok(regexp.full_match(phone_number))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(&self, number: &str, rule: &CountryRule) -> bool {
        let national_number_pattern = rule.national_pattern;
        // Non-empty input against an empty pattern is not a match.
        if national_number_pattern.is_empty() {
            return false;
        }
        if let Ok(res) = self.match_number(number, national_number_pattern) {
            res
        } else {
            error!("Invalid regex! {}", national_number_pattern);
            false
        }
    }
}
