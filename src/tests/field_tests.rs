use crate::i18n::CountryId;
use crate::phonefield::{
    DeferredAction, PhoneField, PhoneFieldSet, RawInput, ValidationFailure, DEFAULT_COUNTRY,
};

use super::get_field_util;

#[test]
fn wrapping_an_empty_input_prefills_the_trunk_zero() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    assert_eq!(field.country().id, DEFAULT_COUNTRY);
    assert_eq!(field.national_digits(), "0");
    assert_eq!(field.slot_value(), "+840");
    assert_eq!(field.displayed_error(), None);
    // The caret lands after the prefix once the update commits.
    assert_eq!(
        field.take_deferred_actions(),
        vec![DeferredAction::PlaceCursor(1)]
    );
    assert!(field.take_deferred_actions().is_empty());
}

#[test]
fn wrapping_an_existing_value_restores_country_and_digits() {
    get_field_util();
    let field = PhoneField::wrap("+12025550123", true);
    assert_eq!(field.country().id, CountryId::Us);
    assert_eq!(field.national_digits(), "2025550123");
    assert_eq!(field.slot_value(), "+12025550123");
    assert!(field.is_required());
}

#[test]
fn typing_into_the_default_country_prepends_the_zero() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    // The user types 9, 1, 2 after the pre-filled zero was cleared by a
    // select-all overwrite; each input event carries the whole text.
    field.on_digits_edited("9");
    assert_eq!(field.national_digits(), "09");
    field.on_digits_edited("091");
    assert_eq!(field.national_digits(), "091");
    field.on_digits_edited("0912");
    assert_eq!(field.national_digits(), "0912");
    assert_eq!(field.slot_value(), "+840912");
}

#[test]
fn incomplete_number_shows_one_replaceable_error() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    field.on_digits_edited("0912");
    assert_eq!(
        field.displayed_error(),
        Some("A Vietnam phone number must have 10 digits")
    );
    assert!(matches!(
        field.validation_error(),
        Some(ValidationFailure::WrongLength { expected: 10, .. })
    ));

    // The next failing edit replaces the message instead of stacking.
    field.on_digits_edited("09123");
    assert_eq!(
        field.displayed_error(),
        Some("A Vietnam phone number must have 10 digits")
    );

    // A completing edit clears it.
    field.on_digits_edited("0912345678");
    assert_eq!(field.displayed_error(), None);
    assert_eq!(field.validation_error(), None);
    assert_eq!(field.slot_value(), "+840912345678");
}

#[test]
fn switching_to_a_no_prefix_country_discards_digits() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    field.on_digits_edited("0912");
    assert!(field.displayed_error().is_some());

    field.on_country_changed(CountryId::Us);
    assert_eq!(field.country().id, CountryId::Us);
    assert_eq!(field.national_digits(), "");
    assert_eq!(field.slot_value(), "");
    // The stale error is gone with the digits.
    assert_eq!(field.displayed_error(), None);
    assert_eq!(field.validation_error(), None);
}

#[test]
fn switching_to_a_prefixed_country_with_empty_digits_prefills() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    field.on_digits_edited("");
    field.take_deferred_actions();

    field.on_country_changed(CountryId::De);
    assert_eq!(field.national_digits(), "15");
    assert_eq!(field.slot_value(), "+4915");
    assert_eq!(
        field.take_deferred_actions(),
        vec![DeferredAction::PlaceCursor(2)]
    );
}

#[test]
fn switching_with_digits_keeps_them_until_the_next_edit() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    field.on_digits_edited("0912345678");

    field.on_country_changed(CountryId::Gb);
    assert_eq!(field.national_digits(), "0912345678");
    assert_eq!(field.slot_value(), "+440912345678");

    // The first edit under the new country re-normalizes.
    field.on_digits_edited("0912345678");
    assert_eq!(field.national_digits(), "7912345678");
}

#[test]
fn focus_prefills_an_empty_prefixed_field() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    field.on_digits_edited("");
    field.take_deferred_actions();
    assert_eq!(field.national_digits(), "");

    field.on_focus_gained();
    assert_eq!(field.national_digits(), "0");
    assert_eq!(field.slot_value(), "+840");
    assert_eq!(
        field.take_deferred_actions(),
        vec![DeferredAction::PlaceCursor(1)]
    );

    // A non-empty field is left alone.
    field.on_focus_gained();
    assert_eq!(field.national_digits(), "0");
    assert!(field.take_deferred_actions().is_empty());
}

#[test]
fn focus_does_nothing_for_a_no_prefix_country() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    field.on_country_changed(CountryId::Us);
    field.take_deferred_actions();

    field.on_focus_gained();
    assert_eq!(field.national_digits(), "");
    assert!(field.take_deferred_actions().is_empty());
}

#[test]
fn empty_field_validation_depends_on_required() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    field.on_digits_edited("");
    assert_eq!(field.displayed_error(), None);

    assert_eq!(field.validate(false), Ok(()));
    assert_eq!(field.validate(true), Err(ValidationFailure::EmptyRequired));
    assert_eq!(field.displayed_error(), Some("Please enter a phone number"));

    // Success replaces the failure.
    assert_eq!(field.validate(false), Ok(()));
    assert_eq!(field.displayed_error(), None);
}

#[test]
fn required_field_reports_empty_on_edit() {
    get_field_util();
    let mut field = PhoneField::wrap("", true);
    field.on_digits_edited("0912");
    field.on_digits_edited("");
    assert_eq!(field.national_digits(), "");
    assert_eq!(field.displayed_error(), Some("Please enter a phone number"));
}

#[test]
fn blur_runs_validation() {
    get_field_util();
    let mut field = PhoneField::wrap("0912", false);
    assert_eq!(field.displayed_error(), None);
    field.on_blur();
    assert_eq!(
        field.displayed_error(),
        Some("A Vietnam phone number must have 10 digits")
    );
}

#[test]
fn set_canonical_value_round_trips() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    field.set_canonical_value("+12025550123");
    assert_eq!(field.country().id, CountryId::Us);
    assert_eq!(field.national_digits(), "2025550123");
    assert_eq!(field.canonical_value(), "+12025550123");
    assert_eq!(field.slot_value(), "+12025550123");
}

#[test]
fn clearing_the_value_resets_to_the_default_country() {
    get_field_util();
    let mut field = PhoneField::wrap("+12025550123", false);
    field.set_canonical_value("");
    assert_eq!(field.country().id, DEFAULT_COUNTRY);
    assert_eq!(field.national_digits(), "");
    assert_eq!(field.canonical_value(), "");
    assert_eq!(field.slot_value(), "");
    assert_eq!(field.displayed_error(), None);
}

#[test]
fn keystroke_filter_accepts_digits_only() {
    get_field_util();
    let field = PhoneField::wrap("", false);
    assert!(field.accepts_keystroke('5'));
    assert!(!field.accepts_keystroke('a'));
    assert!(!field.accepts_keystroke('+'));
    assert!(!field.accepts_keystroke(' '));
}

#[test]
fn placeholder_follows_the_selected_country() {
    get_field_util();
    let mut field = PhoneField::wrap("", false);
    assert_eq!(field.placeholder(), "0XXXXXXXXX");
    field.on_country_changed(CountryId::Sg);
    assert_eq!(field.placeholder(), "8XXXXXXX");
}

#[test]
fn field_set_wrapping_is_idempotent() {
    get_field_util();
    let mut set = PhoneFieldSet::new();
    set.initialize_all([
        RawInput {
            key: "customer_phone".to_owned(),
            value: "+840912345678".to_owned(),
            required: true,
        },
        // A duplicate in the same batch collapses to the first.
        RawInput {
            key: "customer_phone".to_owned(),
            value: String::new(),
            required: false,
        },
    ]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.get_value("customer_phone"), "+840912345678");

    // Re-running page initialization must not re-wrap.
    set.initialize_all([RawInput {
        key: "customer_phone".to_owned(),
        value: String::new(),
        required: false,
    }]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.get_value("customer_phone"), "+840912345678");
}

#[test]
fn field_set_value_access() {
    get_field_util();
    let mut set = PhoneFieldSet::new();
    set.initialize_all([RawInput {
        key: "contact".to_owned(),
        value: String::new(),
        required: false,
    }]);

    set.set_value("contact", "+6581234567");
    assert_eq!(set.get_value("contact"), "+6581234567");
    let field = set.field("contact").expect("field should exist");
    assert_eq!(field.country().id, CountryId::Sg);

    set.set_value("contact", "");
    assert_eq!(set.get_value("contact"), "");
    let field = set.field("contact").expect("field should exist");
    assert_eq!(field.country().id, DEFAULT_COUNTRY);

    // Unknown keys degrade to the empty string and a no-op.
    assert_eq!(set.get_value("missing"), "");
    set.set_value("missing", "+840912345678");
    assert!(set.field("missing").is_none());
}

#[test]
fn fields_are_isolated_from_each_other() {
    get_field_util();
    let mut set = PhoneFieldSet::new();
    set.initialize_all([
        RawInput {
            key: "home".to_owned(),
            value: String::new(),
            required: false,
        },
        RawInput {
            key: "work".to_owned(),
            value: String::new(),
            required: false,
        },
    ]);

    set.field_mut("home")
        .expect("field should exist")
        .on_digits_edited("0912345678");
    set.field_mut("work")
        .expect("field should exist")
        .on_country_changed(CountryId::Us);

    assert_eq!(set.get_value("home"), "+840912345678");
    assert_eq!(set.get_value("work"), "");
    assert_eq!(
        set.field("home").expect("field should exist").country().id,
        DEFAULT_COUNTRY
    );
}
