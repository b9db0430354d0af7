use crate::phonefield::CountryRule;

/// Internal national-number matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
///
/// Implementations are shared through the process-wide engine, hence the
/// thread-safety bounds.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only
    /// decimal digits) fully matches the national-number pattern of the
    /// given country rule.
    fn match_national_number(&self, number: &str, rule: &CountryRule) -> bool;
}

/// The logical slot a host form reads a field's canonical value from.
///
/// In the original widget this was a hidden `<input>` next to the visible
/// pair; a field owns its slot handle instead of re-deriving it by
/// structural search on every update.
pub trait ValueSlot {
    fn write(&mut self, value: &str);
    fn read(&self) -> &str;
}

/// The inline slot a field's validation message renders into.
///
/// `show` replaces whatever was displayed before; messages are never
/// stacked.
pub trait ErrorSlot {
    fn show(&mut self, message: &str);
    fn clear(&mut self);
    fn current(&self) -> Option<&str>;
}

/// A `ValueSlot` backed by a plain string, for hosts that mirror the value
/// into their own render tree and for tests.
#[derive(Debug, Default)]
pub struct TextSlot(String);

impl ValueSlot for TextSlot {
    fn write(&mut self, value: &str) {
        self.0.clear();
        self.0.push_str(value);
    }

    fn read(&self) -> &str {
        &self.0
    }
}

/// An `ErrorSlot` holding at most one message.
#[derive(Debug, Default)]
pub struct MessageSlot(Option<String>);

impl ErrorSlot for MessageSlot {
    fn show(&mut self, message: &str) {
        self.0 = Some(message.to_owned());
    }

    fn clear(&mut self) {
        self.0 = None;
    }

    fn current(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
