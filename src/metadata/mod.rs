mod code_sets;
mod errors;
mod source;
mod types;
mod wire;

pub use code_sets::{
    alternate_formats_country_codes, country_code_to_region_code_map, short_numbers_region_codes,
};
pub use errors::MetadataError;
pub use source::MultiFileMetadataSource;
pub use types::{NumberFormat, PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc};
pub use wire::{parse_metadata_collection, WireError};
