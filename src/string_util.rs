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

/// Strips one leading occurrence of `prefix` in place. Returns `true` if the
/// prefix was found and stripped.
///
/// Calls `drain` if the string is owned and re-borrows a subslice if it is
/// borrowed.
pub fn strip_cow_prefix(cow: &mut Cow<'_, str>, prefix: &str) -> bool {
    match cow {
        Cow::Borrowed(s) => {
            if let Some(rest) = s.strip_prefix(prefix) {
                *cow = Cow::Borrowed(rest);
                return true;
            }
            false
        }
        Cow::Owned(s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return true;
            }
            false
        }
    }
}

/// Truncates an ASCII digit string to at most `max_len` bytes, in place.
///
/// A borrowed string that needs truncation is copied, so `Cow::Borrowed`
/// keeps meaning "the input was not modified" for callers that hand the
/// result to `owned_from_cow_or!`.
pub fn truncate_digits(cow: &mut Cow<'_, str>, max_len: usize) {
    if cow.len() <= max_len {
        return;
    }
    match cow {
        Cow::Borrowed(s) => *cow = Cow::Owned(s[..max_len].to_owned()),
        Cow::Owned(s) => s.truncate(max_len),
    }
}
