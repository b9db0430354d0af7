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

use std::{collections::VecDeque, sync::LazyLock};

use log::trace;

use crate::{
    i18n::CountryId,
    interfaces::{ErrorSlot, MessageSlot, TextSlot, ValueSlot},
    macros::owned_from_cow_or,
};

use super::{
    country_rules::CountryRule, enums::DeferredAction, errors::ValidationFailure,
    phonefieldutil::PhoneFieldUtil, PHONE_FIELD_UTIL,
};

/// State of one wrapped phone input: the selected country, the national
/// digits being edited, and the handles to the field's render artifacts.
///
/// The field exclusively owns its digits and country selection; the host
/// only ever reads the canonical value through the value slot (or
/// [`PhoneField::canonical_value`]) and feeds user events in. Fields are
/// fully isolated from each other.
pub struct PhoneField {
    util: &'static PhoneFieldUtil,
    country: &'static CountryRule,
    national_digits: String,
    validation_error: Option<ValidationFailure>,
    required: bool,
    value_slot: Box<dyn ValueSlot>,
    error_slot: Box<dyn ErrorSlot>,
    deferred: VecDeque<DeferredAction>,
}

impl PhoneField {
    /// Wraps a raw input value with in-memory render slots.
    pub fn wrap(raw_value: &str, required: bool) -> Self {
        Self::wrap_with_slots(
            raw_value,
            required,
            Box::new(TextSlot::default()),
            Box::new(MessageSlot::default()),
        )
    }

    /// Wraps a raw input value with host-owned render slots.
    ///
    /// The slots stand in for the hidden value input and the inline error
    /// element of the rendered widget; the field keeps them in sync on
    /// every transition.
    pub fn wrap_with_slots(
        raw_value: &str,
        required: bool,
        value_slot: Box<dyn ValueSlot>,
        error_slot: Box<dyn ErrorSlot>,
    ) -> Self {
        let util = LazyLock::force(&PHONE_FIELD_UTIL);
        let mut field = Self {
            util,
            country: util.default_rule(),
            national_digits: String::new(),
            validation_error: None,
            required,
            value_slot,
            error_slot,
            deferred: VecDeque::new(),
        };
        field.initialize(raw_value);
        field
    }

    /// Resets the field from a raw value: a previously serialized canonical
    /// value, free-form digits, or the empty string.
    ///
    /// An empty value selects the default country and pre-fills its
    /// required prefix as an entry convenience (validation does not depend
    /// on the pre-fill).
    pub fn initialize(&mut self, raw_value: &str) {
        if raw_value.is_empty() {
            self.country = self.util.default_rule();
            self.national_digits.clear();
            self.prefill_required_prefix();
        } else {
            let (rule, digits) = self.util.parse(raw_value);
            self.country = rule;
            self.national_digits = digits;
        }
        self.validation_error = None;
        self.error_slot.clear();
        self.sync_value_slot();
    }

    /// The user picked another country in the selector.
    ///
    /// Switching to a country without a fixed prefix discards whatever was
    /// typed for the previous country context; switching with an empty
    /// number pre-fills the new prefix. A non-empty number otherwise stays
    /// as typed until the next edit re-normalizes it.
    pub fn on_country_changed(&mut self, new_country: CountryId) {
        self.country = self.util.rule_for_id(new_country);
        trace!("country changed to {}", new_country);
        if self.country.required_prefix.is_empty() {
            self.national_digits.clear();
        } else if self.national_digits.is_empty() {
            self.prefill_required_prefix();
        }
        self.validation_error = None;
        self.error_slot.clear();
        self.sync_value_slot();
    }

    /// The number input's text changed.
    ///
    /// Best-effort normalization of whatever was typed or pasted: strips
    /// non-digits, enforces the country prefix, caps the length, then
    /// re-validates. Never a hard error.
    pub fn on_digits_edited(&mut self, raw_text: &str) {
        let normalized = self.util.normalize_national(self.country, raw_text);
        self.national_digits = owned_from_cow_or!(normalized, raw_text.to_owned());
        self.sync_value_slot();
        self.run_validation();
    }

    /// The number input gained focus; an empty field pre-fills the required
    /// prefix, mirroring the convenience at initialization.
    pub fn on_focus_gained(&mut self) {
        if self.national_digits.is_empty() && !self.country.required_prefix.is_empty() {
            self.prefill_required_prefix();
            self.sync_value_slot();
        }
    }

    /// The number input lost focus; validation runs against the committed
    /// digits.
    pub fn on_blur(&mut self) {
        self.run_validation();
    }

    /// Checks the current digits, replacing the displayed message: a fresh
    /// failure overwrites whatever was shown, success clears it.
    pub fn validate(&mut self, is_field_required: bool) -> Result<(), ValidationFailure> {
        let outcome =
            self.util
                .validate_national(self.country, &self.national_digits, is_field_required);
        self.error_slot.clear();
        match &outcome {
            Ok(()) => self.validation_error = None,
            Err(failure) => {
                self.error_slot.show(&failure.to_string());
                self.validation_error = Some(failure.clone());
            }
        }
        outcome
    }

    /// The canonical value: `dial_code + digits`, or empty when no digits
    /// were entered.
    pub fn canonical_value(&self) -> String {
        self.util.serialize(self.country, &self.national_digits)
    }

    /// Replaces the whole composite state from a serialized value.
    ///
    /// The empty string resets to the default country with empty digits;
    /// anything else goes through the canonical-value parser with its
    /// default-country fallback.
    pub fn set_canonical_value(&mut self, raw: &str) {
        if raw.is_empty() {
            self.country = self.util.default_rule();
            self.national_digits.clear();
        } else {
            let (rule, digits) = self.util.parse(raw);
            self.country = rule;
            self.national_digits = digits;
        }
        self.validation_error = None;
        self.error_slot.clear();
        self.sync_value_slot();
    }

    /// Whether a keypress belongs in the number input. The host's key
    /// handler uses this to filter typing down to digits; navigation and
    /// editing keys are the host's concern.
    pub fn accepts_keystroke(&self, key: char) -> bool {
        key.is_ascii_digit()
    }

    /// Drains the actions queued to run once the current update has
    /// committed (see [`DeferredAction`]).
    pub fn take_deferred_actions(&mut self) -> Vec<DeferredAction> {
        self.deferred.drain(..).collect()
    }

    pub fn country(&self) -> &'static CountryRule {
        self.country
    }

    pub fn national_digits(&self) -> &str {
        &self.national_digits
    }

    pub fn validation_error(&self) -> Option<&ValidationFailure> {
        self.validation_error.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Entry hint for the currently selected country.
    pub fn placeholder(&self) -> &'static str {
        self.country.placeholder
    }

    /// What the host form reads on submit.
    pub fn slot_value(&self) -> &str {
        self.value_slot.read()
    }

    /// The message currently rendered in the error slot, if any.
    pub fn displayed_error(&self) -> Option<&str> {
        self.error_slot.current()
    }

    fn prefill_required_prefix(&mut self) {
        let prefix = self.country.required_prefix;
        if self.national_digits.is_empty() && !prefix.is_empty() {
            self.national_digits.push_str(prefix);
            self.deferred
                .push_back(DeferredAction::PlaceCursor(prefix.len()));
        }
    }

    fn sync_value_slot(&mut self) {
        let value = self.util.serialize(self.country, &self.national_digits);
        self.value_slot.write(&value);
    }

    fn run_validation(&mut self) {
        let required = self.required;
        let _ = self.validate(required);
    }
}
