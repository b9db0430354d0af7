mod helper_constants;
mod helper_functions;
pub mod country_rules;
pub mod enums;
pub mod errors;
pub mod field;
pub mod field_set;
pub mod phonefieldutil;
mod phone_field_regexps;

use std::sync::LazyLock;

pub use country_rules::{CountryRule, COUNTRY_RULES, DEFAULT_COUNTRY};
pub use enums::DeferredAction;
pub use errors::{PatternMismatch, ValidationFailure};
pub use field::PhoneField;
pub use field_set::{PhoneFieldSet, RawInput};
pub use phonefieldutil::PhoneFieldUtil;

pub static PHONE_FIELD_UTIL: LazyLock<PhoneFieldUtil> = LazyLock::new(|| PhoneFieldUtil::new());
