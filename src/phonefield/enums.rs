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

/// An action a field schedules to run after the current update commits.
///
/// Event handlers run to completion before the host applies render effects,
/// so anything that depends on the committed value (caret movement after a
/// prefix pre-fill) is queued here and drained by the host once the handler
/// returns. No timers are involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredAction {
    /// Place the caret at the given byte offset of the number input.
    PlaceCursor(usize),
}
