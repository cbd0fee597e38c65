// Copyright (C) 2015 The Libphonenumber Authors
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

use std::io::Read;
use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;
use log::{error, warn};

use crate::i18n::RegionCode;
use crate::interfaces::MetadataLoader;

use super::code_sets;
use super::errors::MetadataError;
use super::types::{PhoneMetadata, PhoneMetadataCollection};
use super::wire;

// The prefixes of the resources the default constructor reads from; the
// loader owns what they resolve to.
const METADATA_FILE_PREFIX: &str = "metadata/PhoneNumberMetadataProto";
const ALTERNATE_FORMATS_FILE_PREFIX: &str = "metadata/PhoneNumberAlternateFormatsProto";
const SHORT_NUMBER_METADATA_FILE_PREFIX: &str = "metadata/ShortNumberMetadataProto";

/// Metadata source that reads from multiple resource files, one per region
/// or country calling code, loading each lazily on first use.
///
/// Entries are loaded at most once and never replaced afterwards; a failed
/// load leaves its key absent, so the next lookup retries instead of
/// observing a stale negative result. Lookups that hit the cache never touch
/// the byte source or any lock-protected section.
pub struct MultiFileMetadataSource {
    /// A mapping from a region code to the PhoneMetadata for that region.
    region_to_metadata: DashMap<String, Arc<PhoneMetadata>>,

    /// A mapping from a country calling code for a non-geographical entity
    /// to the PhoneMetadata for that country calling code. Examples of the
    /// country calling codes include 800 (International Toll Free Service)
    /// and 808 (International Shared Cost Service).
    country_code_to_non_geographical_metadata: DashMap<i32, Arc<PhoneMetadata>>,

    calling_code_to_alternate_formats: DashMap<i32, Arc<PhoneMetadata>>,
    region_code_to_short_number_metadata: DashMap<String, Arc<PhoneMetadata>>,

    // One alternate-formats or short-number resource carries several records,
    // so those loads populate their map outside a single-key insert. These
    // sections scope the check-then-load window per key space.
    alternate_formats_load_section: Mutex<()>,
    short_number_load_section: Mutex<()>,

    // The prefix of the metadata files from which region data is loaded.
    file_prefix: String,
    // The prefix of the metadata files from which alternate format data is loaded.
    alternate_formats_file_prefix: String,
    // The prefix of the metadata files from which short number data is loaded.
    short_number_file_prefix: String,

    // The metadata loader used to inject alternative metadata sources.
    metadata_loader: Box<dyn MetadataLoader>,
}

impl MultiFileMetadataSource {
    pub fn new(metadata_loader: Box<dyn MetadataLoader>) -> Self {
        Self::with_file_prefixes(
            METADATA_FILE_PREFIX.to_owned(),
            ALTERNATE_FORMATS_FILE_PREFIX.to_owned(),
            SHORT_NUMBER_METADATA_FILE_PREFIX.to_owned(),
            metadata_loader,
        )
    }

    pub fn with_file_prefixes(
        file_prefix: String,
        alternate_formats_file_prefix: String,
        short_number_file_prefix: String,
        metadata_loader: Box<dyn MetadataLoader>,
    ) -> Self {
        Self {
            region_to_metadata: DashMap::new(),
            country_code_to_non_geographical_metadata: DashMap::new(),
            calling_code_to_alternate_formats: DashMap::new(),
            region_code_to_short_number_metadata: DashMap::new(),
            alternate_formats_load_section: Mutex::new(()),
            short_number_load_section: Mutex::new(()),
            file_prefix,
            alternate_formats_file_prefix,
            short_number_file_prefix,
            metadata_loader,
        }
    }

    /// Returns the metadata for the given region, loading its resource on
    /// first use. Region metadata is a prerequisite for validation, so a
    /// missing or unreadable resource is an error, never "no data".
    pub fn metadata_for_region(
        &self,
        region_code: &str,
    ) -> Result<Arc<PhoneMetadata>, MetadataError> {
        if let Some(metadata) = self.region_to_metadata.get(region_code) {
            return Ok(metadata.value().clone());
        }
        // The region code here will be valid and won't be "001", so we don't
        // need to worry about what to pass in for the country calling code.
        let entry = self
            .region_to_metadata
            .entry(region_code.to_owned())
            .or_try_insert_with(|| self.load_metadata_from_file(region_code, 0))?;
        Ok(entry.value().clone())
    }

    /// Returns the metadata for a non-geographical entity, or `None` when the
    /// calling code does not denote one. Load failures for a genuine
    /// non-geographical code are errors, like the region path.
    pub fn metadata_for_non_geographical_region(
        &self,
        country_calling_code: i32,
    ) -> Result<Option<Arc<PhoneMetadata>>, MetadataError> {
        if let Some(metadata) = self
            .country_code_to_non_geographical_metadata
            .get(&country_calling_code)
        {
            return Ok(Some(metadata.value().clone()));
        }
        // We can assume that if the country calling code maps to the non-geo
        // entity region code then that's the only region code it maps to. The
        // check caches nothing, so a caller passing a geographical code is
        // re-evaluated here every time.
        let region_codes = code_sets::country_code_to_region_code_map().get(&country_calling_code);
        let is_non_geo_code = region_codes
            .is_some_and(|codes| codes.len() == 1 && codes[0] == RegionCode::un001());
        if !is_non_geo_code {
            return Ok(None);
        }
        let entry = self
            .country_code_to_non_geographical_metadata
            .entry(country_calling_code)
            .or_try_insert_with(|| {
                self.load_metadata_from_file(RegionCode::un001(), country_calling_code)
            })?;
        Ok(Some(entry.value().clone()))
    }

    /// Returns the alternate formats for the given country calling code, or
    /// `None` when there is no data. Alternate formats are an enhancement, so
    /// any failure degrades to absence and will be retried on a later call.
    pub fn alternate_formats_for_country(
        &self,
        country_calling_code: i32,
    ) -> Option<Arc<PhoneMetadata>> {
        if !code_sets::alternate_formats_country_codes().contains(&country_calling_code) {
            return None;
        }
        if let Some(metadata) = self
            .calling_code_to_alternate_formats
            .get(&country_calling_code)
        {
            return Some(metadata.value().clone());
        }
        let _section = self
            .alternate_formats_load_section
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !self
            .calling_code_to_alternate_formats
            .contains_key(&country_calling_code)
        {
            self.load_alternate_formats_metadata_from_file(country_calling_code);
        }
        self.calling_code_to_alternate_formats
            .get(&country_calling_code)
            .map(|metadata| metadata.value().clone())
    }

    /// Returns the short number metadata for the given region, or `None` when
    /// there is no data. Same criticality policy as alternate formats.
    pub fn short_number_metadata_for_region(
        &self,
        region_code: &str,
    ) -> Option<Arc<PhoneMetadata>> {
        if !code_sets::short_numbers_region_codes().contains(region_code) {
            return None;
        }
        if let Some(metadata) = self.region_code_to_short_number_metadata.get(region_code) {
            return Some(metadata.value().clone());
        }
        let _section = self
            .short_number_load_section
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !self
            .region_code_to_short_number_metadata
            .contains_key(region_code)
        {
            self.load_short_number_metadata_from_file(region_code);
        }
        self.region_code_to_short_number_metadata
            .get(region_code)
            .map(|metadata| metadata.value().clone())
    }

    fn load_metadata_from_file(
        &self,
        region_code: &str,
        country_calling_code: i32,
    ) -> Result<Arc<PhoneMetadata>, MetadataError> {
        let is_non_geo_region = RegionCode::un001() == region_code;
        let file_name = if is_non_geo_region {
            let mut buf = itoa::Buffer::new();
            let country_calling_code_str = buf.format(country_calling_code);
            fast_cat::concat_str!(&self.file_prefix, "_", country_calling_code_str)
        } else {
            fast_cat::concat_str!(&self.file_prefix, "_", region_code)
        };
        let metadata_collection = self.read_metadata_collection(&file_name)?;
        let mut metadata_list = metadata_collection.metadata;
        if metadata_list.is_empty() {
            error!("empty metadata: {}", file_name);
            return Err(MetadataError::EmptyMetadata(file_name));
        }
        if metadata_list.len() > 1 {
            warn!("invalid metadata (too many entries): {}", file_name);
        }
        // Keep the first record in deserializer order; the resource is
        // supposed to hold exactly one.
        Ok(Arc::new(metadata_list.swap_remove(0)))
    }

    fn load_alternate_formats_metadata_from_file(&self, country_calling_code: i32) {
        let mut buf = itoa::Buffer::new();
        let country_calling_code_str = buf.format(country_calling_code);
        let file_name = fast_cat::concat_str!(
            &self.alternate_formats_file_prefix,
            "_",
            country_calling_code_str
        );
        match self.read_metadata_collection(&file_name) {
            Ok(alternate_formats) => {
                for metadata in alternate_formats.metadata {
                    let calling_code = metadata.country_code();
                    self.calling_code_to_alternate_formats
                        .entry(calling_code)
                        .or_insert_with(|| Arc::new(metadata));
                }
            }
            Err(err) => warn!("{}", err),
        }
    }

    fn load_short_number_metadata_from_file(&self, region_code: &str) {
        let file_name =
            fast_cat::concat_str!(&self.short_number_file_prefix, "_", region_code);
        match self.read_metadata_collection(&file_name) {
            Ok(short_number_metadata) => {
                for metadata in short_number_metadata.metadata {
                    let id = metadata.id().to_owned();
                    self.region_code_to_short_number_metadata
                        .entry(id)
                        .or_insert_with(|| Arc::new(metadata));
                }
            }
            Err(err) => warn!("{}", err),
        }
    }

    fn read_metadata_collection(
        &self,
        file_name: &str,
    ) -> Result<PhoneMetadataCollection, MetadataError> {
        let Some(mut source) = self.metadata_loader.load_metadata(file_name) else {
            error!("missing metadata: {}", file_name);
            return Err(MetadataError::MissingMetadata(file_name.to_owned()));
        };
        let mut buffer = Vec::new();
        source
            .read_to_end(&mut buffer)
            .map_err(|source| MetadataError::Io {
                file_name: file_name.to_owned(),
                source,
            })?;
        wire::parse_metadata_collection(&buffer).map_err(|source| MetadataError::CannotParse {
            file_name: file_name.to_owned(),
            source,
        })
    }
}
