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

use std::collections::HashMap;

use log::{trace, warn};

use super::field::PhoneField;

/// A text input the host marked for phone handling, before wrapping.
#[derive(Debug, Clone)]
pub struct RawInput {
    /// Stable key the host addresses the field by (the input's name).
    pub key: String,
    /// Existing raw value: a previously serialized canonical value,
    /// free-form digits, or empty.
    pub value: String,
    /// Whether the host form requires the field to be filled.
    pub required: bool,
}

/// All wrapped phone fields of one page, addressed by key.
///
/// Wrapping is idempotent: a key is wrapped at most once, however many
/// times it appears across [`PhoneFieldSet::initialize_all`] calls or
/// within one batch, so re-running page initialization cannot produce
/// duplicate widgets.
#[derive(Default)]
pub struct PhoneFieldSet {
    fields: HashMap<String, PhoneField>,
}

impl PhoneFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps every input that is not already wrapped. Duplicate keys in the
    /// batch collapse to the first occurrence.
    pub fn initialize_all<I>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = RawInput>,
    {
        for input in inputs {
            if self.fields.contains_key(&input.key) {
                trace!("field {} already wrapped; skipping", input.key);
                continue;
            }
            let field = PhoneField::wrap(&input.value, input.required);
            self.fields.insert(input.key, field);
        }
    }

    /// The canonical value a form submit would read for the field. Unknown
    /// keys yield the empty string.
    pub fn get_value(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(field) => field.canonical_value(),
            None => {
                warn!("Unknown phone field ({}) requested.", key);
                String::new()
            }
        }
    }

    /// Programmatically replaces a field's composite value. Unknown keys
    /// are ignored.
    pub fn set_value(&mut self, key: &str, raw: &str) {
        match self.fields.get_mut(key) {
            Some(field) => field.set_canonical_value(raw),
            None => warn!("Unknown phone field ({}) cannot be set.", key),
        }
    }

    pub fn field(&self, key: &str) -> Option<&PhoneField> {
        self.fields.get(key)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut PhoneField> {
        self.fields.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
