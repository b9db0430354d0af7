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

use std::{borrow::Cow, collections::HashMap};

use log::trace;
use strum::IntoEnumIterator;

use crate::{
    i18n::CountryId, interfaces::MatcherApi, regex_based_matcher::RegexBasedMatcher,
    regex_util::RegexFullMatch,
};

use super::{
    country_rules::{CountryRule, COUNTRY_RULES, DEFAULT_COUNTRY, DEFAULT_COUNTRY_EXAMPLE},
    errors::{PatternMismatch, ValidationFailure},
    helper_constants::PLUS_SIGN,
    helper_functions::{adjust_parsed_national, apply_required_prefix},
    phone_field_regexps::PhoneFieldRegExps,
};

/// The stateless engine behind every phone field: country lookup, digit
/// normalization, validation, and canonical-value round-tripping.
///
/// One process-wide instance lives behind [`super::PHONE_FIELD_UTIL`]; the
/// compiled-in country table is immutable, so the engine is freely shared.
pub struct PhoneFieldUtil {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper struct holding useful regular expressions and the pattern
    /// cache.
    reg_exps: PhoneFieldRegExps,

    /// A mapping from a country identifier to its table row. Lookup by id
    /// always succeeds; the constructor refuses a table that does not cover
    /// every identifier.
    id_to_rule_map: HashMap<CountryId, &'static CountryRule>,
}

impl PhoneFieldUtil {
    pub(super) fn new() -> Self {
        let instance = Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneFieldRegExps::new(),
            id_to_rule_map: COUNTRY_RULES.iter().map(|rule| (rule.id, rule)).collect(),
        };
        for id in CountryId::iter() {
            if !instance.id_to_rule_map.contains_key(&id) {
                let err_message = format!("Compiled-in country table has no row for {}", id);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
        for rule in COUNTRY_RULES.iter() {
            if let Err(err) = instance.reg_exps.regexp_cache.get_regex(rule.national_pattern) {
                let err_message =
                    format!("Compiled-in pattern for {} does not parse: {}", rule.id, err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
        instance
    }

    pub fn rule_for_id(&self, id: CountryId) -> &'static CountryRule {
        self.id_to_rule_map[&id]
    }

    pub fn default_rule(&self) -> &'static CountryRule {
        self.rule_for_id(DEFAULT_COUNTRY)
    }

    /// Strips a raw edit down to ASCII digits and applies the country's
    /// prefix and length policy.
    ///
    /// Best-effort by design: any text is accepted and reduced, never
    /// rejected. `Cow::Borrowed` is returned only when the input was already
    /// in normalized form.
    pub fn normalize_national<'a>(&self, rule: &CountryRule, raw: &'a str) -> Cow<'a, str> {
        let digits = self.strip_to_digits(raw);
        apply_required_prefix(rule, digits)
    }

    /// Checks a national number against its country rule.
    ///
    /// Does not mutate anything; the caller decides what to do with the
    /// failure (typically render its message into the field's error slot).
    pub fn validate_national(
        &self,
        rule: &CountryRule,
        digits: &str,
        required: bool,
    ) -> Result<(), ValidationFailure> {
        if digits.is_empty() {
            if required {
                return Err(ValidationFailure::EmptyRequired);
            }
            return Ok(());
        }
        if digits.len() != rule.national_length {
            return Err(ValidationFailure::WrongLength {
                country: rule.name,
                expected: rule.national_length,
            });
        }
        if !self.matcher_api.match_national_number(digits, rule) {
            return Err(self.pattern_failure_for(rule, digits).into());
        }
        Ok(())
    }

    /// Serializes a (country, national number) pair into the canonical
    /// value: `dial_code + digits`, or the empty string when no digits were
    /// entered.
    pub fn serialize(&self, rule: &CountryRule, national_digits: &str) -> String {
        if national_digits.is_empty() {
            return String::new();
        }
        fast_cat::concat_str!(rule.dial_code, national_digits)
    }

    /// Parses a canonical (or free-form) value back into a country rule and
    /// national digits.
    ///
    /// The first table row whose dial code prefixes the cleaned value wins;
    /// anything unmatched falls back to the default country with best-effort
    /// digit extraction. Never errors.
    pub fn parse(&self, raw: &str) -> (&'static CountryRule, String) {
        let cleaned = self.strip_for_parse(raw);
        for rule in COUNTRY_RULES.iter() {
            if let Some(rest) = cleaned.strip_prefix(rule.dial_code) {
                trace!("dial code {} matched rule {}", rule.dial_code, rule.id);
                return (rule, adjust_parsed_national(rule, rest));
            }
        }
        let rule = self.default_rule();
        trace!("no dial code matched; falling back to {}", rule.id);
        let digits = self.strip_to_digits(raw);
        let adjusted = adjust_parsed_national(rule, &digits);
        (rule, adjusted)
    }

    /// Reduces raw text to its ASCII digits. Unicode decimal forms collapse
    /// to their ASCII value before the strip.
    fn strip_to_digits<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.reg_exps.digits_pattern.full_match(raw) {
            return Cow::Borrowed(raw);
        }
        let normalized = dec_from_char::normalize_decimals(raw);
        let digits: String = normalized.chars().filter(|c| c.is_ascii_digit()).collect();
        Cow::Owned(digits)
    }

    /// Cleanup for canonical-value parsing: digits plus the leading plus
    /// sign, when one precedes the first digit.
    fn strip_for_parse(&self, raw: &str) -> String {
        let digits = self.strip_to_digits(raw);
        if raw.trim_start().starts_with(PLUS_SIGN) {
            fast_cat::concat_str!(PLUS_SIGN, digits.as_ref())
        } else {
            digits.into_owned()
        }
    }

    fn pattern_failure_for(&self, rule: &CountryRule, digits: &str) -> PatternMismatch {
        if rule.id != DEFAULT_COUNTRY {
            return PatternMismatch::InvalidForCountry { country: rule.name };
        }
        if !digits.starts_with(rule.required_prefix) {
            PatternMismatch::MissingTrunkPrefix {
                country: rule.name,
                prefix: rule.required_prefix,
            }
        } else if digits.len() != rule.national_length {
            // The length gate runs before the pattern, so this tier only
            // fires for callers validating un-gated digit strings.
            PatternMismatch::TruncatedNumber {
                country: rule.name,
                expected: rule.national_length,
            }
        } else {
            PatternMismatch::Invalid {
                country: rule.name,
                example: DEFAULT_COUNTRY_EXAMPLE,
            }
        }
    }
}
