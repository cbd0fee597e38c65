mod test_util;

mod phone_number_match_tests;
