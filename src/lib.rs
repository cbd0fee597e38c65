mod interfaces;
/// Metadata data model, the wire-format reader and the lazy multi-file source.
mod metadata;
mod phone_number;
mod phone_number_match;
mod regex_based_matcher;
mod regexp_cache;
pub mod i18n;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use interfaces::{MatcherApi, MetadataLoader};
pub use metadata::{
    alternate_formats_country_codes, country_code_to_region_code_map, parse_metadata_collection,
    short_numbers_region_codes, MetadataError, MultiFileMetadataSource, NumberFormat,
    PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc, WireError,
};
pub use phone_number::PhoneNumber;
pub use phone_number_match::{PhoneNumberMatch, PhoneNumberMatchError};
pub use regex_based_matcher::{MatchResult, RegexBasedMatcher};
pub use regexp_cache::{InvalidRegexError, RegexCache};
