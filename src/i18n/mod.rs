mod country_id;

pub use country_id::CountryId;
