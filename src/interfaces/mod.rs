use std::io::Read;

use crate::metadata::PhoneNumberDesc;
use crate::regexp_cache::InvalidRegexError;

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub trait MatcherApi {
    /// Returns whether the given national number (a string containing only decimal
    /// digits) matches the national number pattern defined in the given
    /// PhoneNumberDesc message.
    ///
    /// A descriptor that carries no pattern never matches. A pattern that cannot
    /// be compiled is a metadata defect and is returned as an error rather than
    /// being folded into "no match".
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError>;
}

/// Abstraction over where serialized metadata bytes come from: bundled
/// resources, files on disk, or assets shipped by the embedding application.
///
/// The source only concatenates resource names; the loader owns the mapping
/// from a name to actual storage.
pub trait MetadataLoader: Send + Sync {
    /// Opens the resource with the given name, or returns `None` if the
    /// resource does not exist.
    fn load_metadata(&self, metadata_file_name: &str) -> Option<Box<dyn Read>>;
}
