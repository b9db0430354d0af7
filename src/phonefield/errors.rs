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

use thiserror::Error;

/// Why the current national number fails validation.
///
/// Nothing here is fatal: failures surface as one inline message per field
/// (`Display` is that message) and are replaced on every validation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// The field is required and no digits were entered.
    #[error("Please enter a phone number")]
    EmptyRequired,
    /// The digit count differs from the country's exact national length.
    #[error("A {country} phone number must have {expected} digits")]
    WrongLength {
        country: &'static str,
        expected: usize,
    },
    /// Length matched but the country's national pattern rejected the
    /// number.
    #[error("{0}")]
    PatternMismatch(#[from] PatternMismatch),
}

/// Sub-reasons for a pattern rejection.
///
/// The default country gets tiered messages; every other country collapses
/// to the generic variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternMismatch {
    #[error("A {country} phone number must start with {prefix}")]
    MissingTrunkPrefix {
        country: &'static str,
        prefix: &'static str,
    },
    #[error("A {country} phone number must have all {expected} digits")]
    TruncatedNumber {
        country: &'static str,
        expected: usize,
    },
    #[error("Not a valid {country} phone number. Example: {example}")]
    Invalid {
        country: &'static str,
        example: &'static str,
    },
    #[error("Not a valid phone number for {country}")]
    InvalidForCountry { country: &'static str },
}
