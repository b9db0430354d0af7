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

//! Stateless helpers for the host's rendering layer: thousands grouping
//! for money inputs, positive-integer clamping, and pagination windows.
//! Everything here is one-shot formatting; the widget state machinery
//! lives elsewhere in the crate.

/// Groups the digits of a money entry with thousands commas, dropping
/// every non-digit first. The stripped digit string (what a form would
/// submit) is the input to [`group_digits`] minus the commas; hosts that
/// need it can strip the commas back out or keep their own copy.
///
/// Empty input (or input with no digits at all) yields the empty string.
pub fn group_digits(raw: &str) -> String {
    let digits: Vec<u8> = raw.bytes().filter(|b| b.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let mut remaining = digits.len();
    for digit in digits {
        grouped.push(digit as char);
        remaining -= 1;
        if remaining > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
    }
    grouped
}

/// Clamps free-form text to a non-negative integer: strips non-digits and
/// redundant leading zeros. No digits at all yields the empty string; all
/// zeros yield `"0"`.
pub fn clamp_positive_integer(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return digits;
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0".to_owned();
    }
    trimmed.to_owned()
}

/// One entry of a pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageItem {
    Page {
        number: usize,
        label: String,
        current: bool,
    },
    /// A gap between the window and the first/last page anchor.
    Ellipsis,
}

/// The pagination control as data: the visible page window with anchors
/// and gaps, plus the prev/next button states. No markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub items: Vec<PageItem>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Computes the page window around `current`: two neighbors either side,
/// first/last anchors, and ellipses for the gaps. A single page (or none)
/// yields an empty window, matching a control that renders nothing.
pub fn page_window(current: usize, total: usize) -> PageWindow {
    if total <= 1 {
        return PageWindow::default();
    }
    let current = current.clamp(1, total);
    let start = current.saturating_sub(2).max(1);
    let end = (current + 2).min(total);

    let mut items = Vec::with_capacity(end - start + 5);
    if start > 1 {
        items.push(page_item(1, current));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    for number in start..=end {
        items.push(page_item(number, current));
    }
    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(page_item(total, current));
    }

    PageWindow {
        items,
        prev_enabled: current > 1,
        next_enabled: current < total,
    }
}

fn page_item(number: usize, current: usize) -> PageItem {
    let mut buf = itoa::Buffer::new();
    PageItem::Page {
        number,
        label: buf.format(number).to_owned(),
        current: number == current,
    }
}
