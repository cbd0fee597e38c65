// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reader for the serialized metadata collection format.
//!
//! The schema is owned by the metadata generation pipeline; this module only
//! consumes it. Recognised fields are decoded into the crate's types, every
//! other field is skipped by wire type, so newer resources with additional
//! fields keep loading.

use protobuf::CodedInputStream;
use thiserror::Error;

use super::types::{NumberFormat, PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc};

#[derive(Debug, Error)]
pub enum WireError {
    #[error("{0}")]
    Decode(#[from] protobuf::Error),
    #[error("Unsupported wire type {wire_type} for field {field}")]
    UnsupportedWireType { field: u32, wire_type: u32 },
}

const WIRE_TYPE_VARINT: u32 = 0;
const WIRE_TYPE_FIXED64: u32 = 1;
const WIRE_TYPE_LENGTH_DELIMITED: u32 = 2;
const WIRE_TYPE_FIXED32: u32 = 5;

const fn tag(field: u32, wire_type: u32) -> u32 {
    (field << 3) | wire_type
}

// PhoneMetadataCollection
const COLLECTION_METADATA: u32 = tag(1, WIRE_TYPE_LENGTH_DELIMITED);

// PhoneMetadata
const METADATA_GENERAL_DESC: u32 = tag(1, WIRE_TYPE_LENGTH_DELIMITED);
const METADATA_FIXED_LINE: u32 = tag(2, WIRE_TYPE_LENGTH_DELIMITED);
const METADATA_MOBILE: u32 = tag(3, WIRE_TYPE_LENGTH_DELIMITED);
const METADATA_TOLL_FREE: u32 = tag(4, WIRE_TYPE_LENGTH_DELIMITED);
const METADATA_ID: u32 = tag(9, WIRE_TYPE_LENGTH_DELIMITED);
const METADATA_COUNTRY_CODE: u32 = tag(10, WIRE_TYPE_VARINT);
const METADATA_NATIONAL_PREFIX: u32 = tag(12, WIRE_TYPE_LENGTH_DELIMITED);
const METADATA_NUMBER_FORMAT: u32 = tag(19, WIRE_TYPE_LENGTH_DELIMITED);
const METADATA_MAIN_COUNTRY_FOR_CODE: u32 = tag(22, WIRE_TYPE_VARINT);
const METADATA_LEADING_DIGITS: u32 = tag(23, WIRE_TYPE_LENGTH_DELIMITED);
const METADATA_SHORT_CODE: u32 = tag(29, WIRE_TYPE_LENGTH_DELIMITED);

// PhoneNumberDesc
const DESC_NATIONAL_NUMBER_PATTERN: u32 = tag(2, WIRE_TYPE_LENGTH_DELIMITED);
const DESC_EXAMPLE_NUMBER: u32 = tag(6, WIRE_TYPE_LENGTH_DELIMITED);
const DESC_POSSIBLE_LENGTH: u32 = tag(9, WIRE_TYPE_VARINT);
const DESC_POSSIBLE_LENGTH_PACKED: u32 = tag(9, WIRE_TYPE_LENGTH_DELIMITED);
const DESC_POSSIBLE_LENGTH_LOCAL_ONLY: u32 = tag(10, WIRE_TYPE_VARINT);
const DESC_POSSIBLE_LENGTH_LOCAL_ONLY_PACKED: u32 = tag(10, WIRE_TYPE_LENGTH_DELIMITED);

// NumberFormat
const FORMAT_PATTERN: u32 = tag(1, WIRE_TYPE_LENGTH_DELIMITED);
const FORMAT_FORMAT: u32 = tag(2, WIRE_TYPE_LENGTH_DELIMITED);
const FORMAT_LEADING_DIGITS_PATTERN: u32 = tag(3, WIRE_TYPE_LENGTH_DELIMITED);
const FORMAT_NATIONAL_PREFIX_FORMATTING_RULE: u32 = tag(4, WIRE_TYPE_LENGTH_DELIMITED);

/// Deserializes one resource into its collection of records. Zero records is
/// a valid outcome here; the caller decides whether that is acceptable.
pub fn parse_metadata_collection(bytes: &[u8]) -> Result<PhoneMetadataCollection, WireError> {
    let mut input = CodedInputStream::from_bytes(bytes);
    let mut collection = PhoneMetadataCollection::default();
    while let Some(tag) = input.read_raw_tag_or_eof()? {
        match tag {
            COLLECTION_METADATA => {
                let metadata = read_delimited(&mut input, read_phone_metadata)?;
                collection.metadata.push(metadata);
            }
            other => skip_field(&mut input, other)?,
        }
    }
    Ok(collection)
}

fn read_phone_metadata(input: &mut CodedInputStream) -> Result<PhoneMetadata, WireError> {
    let mut metadata = PhoneMetadata::new();
    while let Some(tag) = input.read_raw_tag_or_eof()? {
        match tag {
            METADATA_GENERAL_DESC => {
                metadata.set_general_desc(read_delimited(input, read_phone_number_desc)?)
            }
            METADATA_FIXED_LINE => {
                metadata.set_fixed_line(read_delimited(input, read_phone_number_desc)?)
            }
            METADATA_MOBILE => {
                metadata.set_mobile(read_delimited(input, read_phone_number_desc)?)
            }
            METADATA_TOLL_FREE => {
                metadata.set_toll_free(read_delimited(input, read_phone_number_desc)?)
            }
            METADATA_SHORT_CODE => {
                metadata.set_short_code(read_delimited(input, read_phone_number_desc)?)
            }
            METADATA_ID => metadata.set_id(input.read_string()?),
            METADATA_COUNTRY_CODE => metadata.set_country_code(input.read_int32()?),
            METADATA_NATIONAL_PREFIX => metadata.set_national_prefix(input.read_string()?),
            METADATA_NUMBER_FORMAT => {
                let format = read_delimited(input, read_number_format)?;
                metadata.mut_number_format().push(format);
            }
            METADATA_MAIN_COUNTRY_FOR_CODE => {
                metadata.set_main_country_for_code(input.read_bool()?)
            }
            METADATA_LEADING_DIGITS => metadata.set_leading_digits(input.read_string()?),
            other => skip_field(input, other)?,
        }
    }
    Ok(metadata)
}

fn read_phone_number_desc(input: &mut CodedInputStream) -> Result<PhoneNumberDesc, WireError> {
    let mut desc = PhoneNumberDesc::new();
    while let Some(tag) = input.read_raw_tag_or_eof()? {
        match tag {
            DESC_NATIONAL_NUMBER_PATTERN => {
                desc.set_national_number_pattern(input.read_string()?)
            }
            DESC_EXAMPLE_NUMBER => desc.set_example_number(input.read_string()?),
            DESC_POSSIBLE_LENGTH => desc.mut_possible_length().push(input.read_int32()?),
            DESC_POSSIBLE_LENGTH_PACKED => {
                read_packed_int32(input, desc.mut_possible_length())?
            }
            DESC_POSSIBLE_LENGTH_LOCAL_ONLY => {
                desc.mut_possible_length_local_only().push(input.read_int32()?)
            }
            DESC_POSSIBLE_LENGTH_LOCAL_ONLY_PACKED => {
                read_packed_int32(input, desc.mut_possible_length_local_only())?
            }
            other => skip_field(input, other)?,
        }
    }
    Ok(desc)
}

fn read_number_format(input: &mut CodedInputStream) -> Result<NumberFormat, WireError> {
    let mut format = NumberFormat::new();
    while let Some(tag) = input.read_raw_tag_or_eof()? {
        match tag {
            FORMAT_PATTERN => format.set_pattern(input.read_string()?),
            FORMAT_FORMAT => format.set_format(input.read_string()?),
            FORMAT_LEADING_DIGITS_PATTERN => {
                format.mut_leading_digits_pattern().push(input.read_string()?)
            }
            FORMAT_NATIONAL_PREFIX_FORMATTING_RULE => {
                format.set_national_prefix_formatting_rule(input.read_string()?)
            }
            other => skip_field(input, other)?,
        }
    }
    Ok(format)
}

/// Reads one length-delimited message with `read`, scoped to the length
/// prefix so the inner tag loop stops at the message boundary.
fn read_delimited<T>(
    input: &mut CodedInputStream,
    read: impl FnOnce(&mut CodedInputStream) -> Result<T, WireError>,
) -> Result<T, WireError> {
    let len = input.read_raw_varint64()?;
    let old_limit = input.push_limit(len)?;
    let message = read(input)?;
    input.pop_limit(old_limit);
    Ok(message)
}

// Repeated int32 fields arrive unpacked from the current generation pipeline,
// but packed encoding is equally valid for them on the wire.
fn read_packed_int32(input: &mut CodedInputStream, out: &mut Vec<i32>) -> Result<(), WireError> {
    let len = input.read_raw_varint64()?;
    let old_limit = input.push_limit(len)?;
    while !input.eof()? {
        out.push(input.read_int32()?);
    }
    input.pop_limit(old_limit);
    Ok(())
}

fn skip_field(input: &mut CodedInputStream, tag: u32) -> Result<(), WireError> {
    let field = tag >> 3;
    match tag & 0x7 {
        WIRE_TYPE_VARINT => {
            input.read_raw_varint64()?;
        }
        WIRE_TYPE_FIXED64 => {
            input.read_fixed64()?;
        }
        WIRE_TYPE_LENGTH_DELIMITED => {
            let len = input.read_raw_varint32()?;
            input.skip_raw_bytes(len)?;
        }
        WIRE_TYPE_FIXED32 => {
            input.read_fixed32()?;
        }
        wire_type => return Err(WireError::UnsupportedWireType { field, wire_type }),
    }
    Ok(())
}
