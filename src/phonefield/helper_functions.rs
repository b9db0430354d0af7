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

use std::borrow::Cow;

use crate::string_util::{strip_cow_prefix, truncate_digits};

use super::country_rules::{CountryRule, DEFAULT_COUNTRY};

/// Applies the required-prefix policy and the length cap to a stripped digit
/// string.
///
/// After this call the result is empty, or starts with the rule's
/// `required_prefix` (when one exists) and is at most `national_length`
/// digits. `Cow::Borrowed` is returned only when the input needed no change.
pub(super) fn apply_required_prefix<'a>(
    rule: &CountryRule,
    mut digits: Cow<'a, str>,
) -> Cow<'a, str> {
    let prefix = rule.required_prefix;
    if prefix.is_empty() || digits.is_empty() {
        truncate_digits(&mut digits, rule.national_length);
        return digits;
    }
    if !digits.starts_with(prefix) {
        if prefix == "0" {
            // Trunk-zero countries keep every typed digit: prepend before
            // truncating so the cap can never eat the zero itself.
            digits = Cow::Owned(fast_cat::concat_str!("0", digits.as_ref()));
        } else if digits.len() < prefix.len() {
            // The user deleted into the prefix; it snaps back.
            digits = Cow::Owned(prefix.to_owned());
        } else {
            digits = Cow::Owned(fast_cat::concat_str!(prefix, &digits[prefix.len()..]));
        }
    }
    truncate_digits(&mut digits, rule.national_length);
    if prefix == "0" && !digits.starts_with(prefix) {
        // Legacy re-check; unreachable with prepend-before-truncate.
        let mut forced = digits.into_owned();
        forced.replace_range(0..1, "0");
        digits = Cow::Owned(forced);
    }
    digits
}

/// Adjusts the national-number candidate produced by canonical-value
/// parsing.
///
/// The default country's convention includes the trunk zero, so a missing
/// one is restored; every other country's canonical form omits it, so one
/// leading zero is dropped. Both cases cap at the national length.
pub(super) fn adjust_parsed_national(rule: &CountryRule, candidate: &str) -> String {
    let mut digits = Cow::Borrowed(candidate);
    if rule.id == DEFAULT_COUNTRY {
        if !digits.is_empty() && !digits.starts_with('0') {
            digits = Cow::Owned(fast_cat::concat_str!("0", digits.as_ref()));
        }
    } else {
        strip_cow_prefix(&mut digits, "0");
    }
    truncate_digits(&mut digits, rule.national_length);
    digits.into_owned()
}
