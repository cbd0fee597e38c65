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

/// Rule-set describing one class of numbers: the national number pattern the
/// matcher applies plus the auxiliary length and example data the serialized
/// records carry.
///
/// `national_number_pattern` is an explicit `Option` because an absent
/// pattern ("no matcher data for this class") and a present empty pattern
/// are different states and must never collapse into one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneNumberDesc {
    national_number_pattern: Option<String>,
    possible_length: Vec<i32>,
    possible_length_local_only: Vec<i32>,
    example_number: Option<String>,
}

impl PhoneNumberDesc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn national_number_pattern(&self) -> Option<&str> {
        self.national_number_pattern.as_deref()
    }

    pub fn has_national_number_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }

    pub fn set_national_number_pattern(&mut self, pattern: impl Into<String>) {
        self.national_number_pattern = Some(pattern.into());
    }

    /// Lengths a complete national number of this class may have, in digits.
    pub fn possible_length(&self) -> &[i32] {
        &self.possible_length
    }

    pub fn mut_possible_length(&mut self) -> &mut Vec<i32> {
        &mut self.possible_length
    }

    /// Lengths valid only when dialled locally, e.g. without an area code.
    pub fn possible_length_local_only(&self) -> &[i32] {
        &self.possible_length_local_only
    }

    pub fn mut_possible_length_local_only(&mut self) -> &mut Vec<i32> {
        &mut self.possible_length_local_only
    }

    pub fn example_number(&self) -> Option<&str> {
        self.example_number.as_deref()
    }

    pub fn set_example_number(&mut self, example_number: impl Into<String>) {
        self.example_number = Some(example_number.into());
    }
}

/// One way of formatting a national number, as carried by alternate-format
/// rule-sets: a capturing pattern plus the replacement format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberFormat {
    pattern: Option<String>,
    format: Option<String>,
    leading_digits_pattern: Vec<String>,
    national_prefix_formatting_rule: Option<String>,
}

impl NumberFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or_default()
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = Some(pattern.into());
    }

    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or_default()
    }

    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = Some(format.into());
    }

    pub fn leading_digits_pattern(&self) -> &[String] {
        &self.leading_digits_pattern
    }

    pub fn mut_leading_digits_pattern(&mut self) -> &mut Vec<String> {
        &mut self.leading_digits_pattern
    }

    pub fn national_prefix_formatting_rule(&self) -> &str {
        self.national_prefix_formatting_rule.as_deref().unwrap_or_default()
    }

    pub fn has_national_prefix_formatting_rule(&self) -> bool {
        self.national_prefix_formatting_rule.is_some()
    }

    pub fn set_national_prefix_formatting_rule(&mut self, rule: impl Into<String>) {
        self.national_prefix_formatting_rule = Some(rule.into());
    }
}

/// The rule-set record for one region, non-geographical entity, alternate
/// format file or short number file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneMetadata {
    general_desc: Option<PhoneNumberDesc>,
    fixed_line: Option<PhoneNumberDesc>,
    mobile: Option<PhoneNumberDesc>,
    toll_free: Option<PhoneNumberDesc>,
    short_code: Option<PhoneNumberDesc>,
    id: String,
    country_code: i32,
    national_prefix: Option<String>,
    number_format: Vec<NumberFormat>,
    main_country_for_code: bool,
    leading_digits: Option<String>,
}

impl PhoneMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor every valid number of the region satisfies, regardless of
    /// its type. This is the pattern the primary validation path matches
    /// against.
    pub fn general_desc(&self) -> Option<&PhoneNumberDesc> {
        self.general_desc.as_ref()
    }

    pub fn set_general_desc(&mut self, desc: PhoneNumberDesc) {
        self.general_desc = Some(desc);
    }

    pub fn fixed_line(&self) -> Option<&PhoneNumberDesc> {
        self.fixed_line.as_ref()
    }

    pub fn set_fixed_line(&mut self, desc: PhoneNumberDesc) {
        self.fixed_line = Some(desc);
    }

    pub fn mobile(&self) -> Option<&PhoneNumberDesc> {
        self.mobile.as_ref()
    }

    pub fn set_mobile(&mut self, desc: PhoneNumberDesc) {
        self.mobile = Some(desc);
    }

    pub fn toll_free(&self) -> Option<&PhoneNumberDesc> {
        self.toll_free.as_ref()
    }

    pub fn set_toll_free(&mut self, desc: PhoneNumberDesc) {
        self.toll_free = Some(desc);
    }

    pub fn short_code(&self) -> Option<&PhoneNumberDesc> {
        self.short_code.as_ref()
    }

    pub fn set_short_code(&mut self, desc: PhoneNumberDesc) {
        self.short_code = Some(desc);
    }

    /// Region code of the record, e.g. "SE", or "001" for a non-geographical
    /// entity. Alternate-format records leave it empty.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn set_country_code(&mut self, country_code: i32) {
        self.country_code = country_code;
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or_default()
    }

    pub fn has_national_prefix(&self) -> bool {
        self.national_prefix.is_some()
    }

    pub fn set_national_prefix(&mut self, national_prefix: impl Into<String>) {
        self.national_prefix = Some(national_prefix.into());
    }

    pub fn number_format(&self) -> &[NumberFormat] {
        &self.number_format
    }

    pub fn mut_number_format(&mut self) -> &mut Vec<NumberFormat> {
        &mut self.number_format
    }

    /// Whether this region is the main one among those sharing its calling
    /// code, like US for calling code 1.
    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn set_main_country_for_code(&mut self, main_country_for_code: bool) {
        self.main_country_for_code = main_country_for_code;
    }

    pub fn leading_digits(&self) -> &str {
        self.leading_digits.as_deref().unwrap_or_default()
    }

    pub fn has_leading_digits(&self) -> bool {
        self.leading_digits.is_some()
    }

    pub fn set_leading_digits(&mut self, leading_digits: impl Into<String>) {
        self.leading_digits = Some(leading_digits.into());
    }
}

/// Zero or more records, as one serialized resource deserializes to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneMetadataCollection {
    pub metadata: Vec<PhoneMetadata>,
}
