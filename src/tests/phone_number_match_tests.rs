use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::{PhoneNumber, PhoneNumberMatch, PhoneNumberMatchError};

fn number(country_code: i32, national_number: u64) -> PhoneNumber {
    let mut number = PhoneNumber::new();
    number.set_country_code(country_code);
    number.set_national_number(national_number);
    number
}

fn hash_of(value: &PhoneNumberMatch) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn matches_built_from_equal_parts_are_interchangeable() {
    let first = PhoneNumberMatch::new(10, "1 800 234 45 67", number(1, 8002344567)).unwrap();
    let second = PhoneNumberMatch::new(10, "1 800 234 45 67", number(1, 8002344567)).unwrap();

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[test]
fn any_differing_field_breaks_equality() {
    let base = PhoneNumberMatch::new(10, "1 800 234 45 67", number(1, 8002344567)).unwrap();

    let other_start = PhoneNumberMatch::new(11, "1 800 234 45 67", number(1, 8002344567)).unwrap();
    let other_text = PhoneNumberMatch::new(10, "18002344567", number(1, 8002344567)).unwrap();
    let other_number = PhoneNumberMatch::new(10, "1 800 234 45 67", number(64, 33316005)).unwrap();

    assert_ne!(base, other_start);
    assert_ne!(base, other_text);
    assert_ne!(base, other_number);
}

#[test]
fn offsets_cover_the_raw_string() {
    let matched = PhoneNumberMatch::new(10, "033316005", number(64, 33316005)).unwrap();

    assert_eq!(10, matched.start());
    assert_eq!(19, matched.end());
    assert_eq!("033316005", matched.raw_string());
    assert_eq!(64, matched.number().country_code());
}

#[test]
fn negative_start_is_rejected() {
    let err = PhoneNumberMatch::new(-110, "1 800 234 45 67", number(1, 8002344567)).unwrap_err();
    assert_eq!(PhoneNumberMatchError::InvalidStartIndex(-110), err);
}

#[test]
fn empty_raw_string_is_rejected() {
    let err = PhoneNumberMatch::new(10, "", number(1, 8002344567)).unwrap_err();
    assert_eq!(PhoneNumberMatchError::EmptyRawString, err);
}

#[test]
fn display_names_the_covered_range() {
    let matched = PhoneNumberMatch::new(10, "033316005", number(64, 33316005)).unwrap();
    assert_eq!("PhoneNumberMatch [10,19) 033316005", matched.to_string());
}
