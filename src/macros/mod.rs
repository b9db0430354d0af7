/// Extracts the owned value from a `Cow`, falling back to `$default` when the
/// cow is borrowed.
///
/// The normalization routines return `Cow::Borrowed` only when the input came
/// through unchanged, so the caller can substitute a value it already owns
/// instead of copying the borrow.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
