mod field_tests;

use std::sync::{LazyLock, Once};

use crate::phonefield::{PhoneFieldUtil, PHONE_FIELD_UTIL};

static ONCE: Once = Once::new();

fn get_field_util() -> &'static PhoneFieldUtil {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    LazyLock::force(&PHONE_FIELD_UTIL)
}
