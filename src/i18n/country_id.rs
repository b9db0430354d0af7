use std::fmt;

use strum::EnumIter;

/// Identifier of a country in the fixed selector table.
///
/// Unlike dial codes, identifiers are unique: the United States and Canada
/// both dial `+1` but remain distinct entries.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryId {
    Vn,
    Us,
    Gb,
    Cn,
    Jp,
    Kr,
    Th,
    Sg,
    My,
    Id,
    Ph,
    Au,
    Ca,
    Fr,
    De,
    In,
}

impl CountryId {
    /// The two-letter code used by host markup to tag selector options.
    pub fn as_code(&self) -> &'static str {
        match self {
            CountryId::Vn => "VN",
            CountryId::Us => "US",
            CountryId::Gb => "GB",
            CountryId::Cn => "CN",
            CountryId::Jp => "JP",
            CountryId::Kr => "KR",
            CountryId::Th => "TH",
            CountryId::Sg => "SG",
            CountryId::My => "MY",
            CountryId::Id => "ID",
            CountryId::Ph => "PH",
            CountryId::Au => "AU",
            CountryId::Ca => "CA",
            CountryId::Fr => "FR",
            CountryId::De => "DE",
            CountryId::In => "IN",
        }
    }

    /// Reverse of [`CountryId::as_code`]. Case-sensitive; unknown codes map
    /// to `None`.
    pub fn from_code(code: &str) -> Option<CountryId> {
        use strum::IntoEnumIterator;

        CountryId::iter().find(|id| id.as_code() == code)
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}
