mod interfaces;
mod phonefield;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub mod render_util;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Small named macros for `Cow` plumbing that would otherwise repeat as
/// boilerplate at every call site.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::{ErrorSlot, MessageSlot, TextSlot, ValueSlot};
pub use phonefield::{
    CountryRule, DeferredAction, PatternMismatch, PhoneField, PhoneFieldSet, PhoneFieldUtil,
    RawInput, ValidationFailure, COUNTRY_RULES, DEFAULT_COUNTRY, PHONE_FIELD_UTIL,
};
