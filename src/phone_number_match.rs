// Copyright (C) 2011 The Libphonenumber Authors
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

use std::fmt;

use thiserror::Error;

use crate::phone_number::PhoneNumber;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhoneNumberMatchError {
    #[error("Start index can't be negative: {0}")]
    InvalidStartIndex(i64),
    #[error("Matched substring can't be empty")]
    EmptyRawString,
}

/// One phone number occurrence located in a piece of text: where it starts,
/// the substring exactly as it appeared, and the number parsed from it.
///
/// Matches compare structurally over all three fields, so two matches built
/// from equal parts are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumberMatch {
    start: usize,
    raw_string: String,
    number: PhoneNumber,
}

impl PhoneNumberMatch {
    /// Builds a match. The offset is accepted as a signed value so that
    /// callers computing offsets with signed arithmetic get a descriptive
    /// error instead of a silent wrap; an empty raw string is rejected
    /// because a match must cover at least one character of source text.
    pub fn new(
        start: i64,
        raw_string: impl Into<String>,
        number: PhoneNumber,
    ) -> Result<Self, PhoneNumberMatchError> {
        if start < 0 {
            return Err(PhoneNumberMatchError::InvalidStartIndex(start));
        }
        let raw_string = raw_string.into();
        if raw_string.is_empty() {
            return Err(PhoneNumberMatchError::EmptyRawString);
        }
        Ok(Self {
            start: start as usize,
            raw_string,
            number,
        })
    }

    /// Byte offset of the match within the searched text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset of the match within the searched text.
    pub fn end(&self) -> usize {
        self.start + self.raw_string.len()
    }

    /// The matched substring, exactly as found.
    pub fn raw_string(&self) -> &str {
        &self.raw_string
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }
}

impl fmt::Display for PhoneNumberMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PhoneNumberMatch [{},{}) {}",
            self.start(),
            self.end(),
            self.raw_string
        )
    }
}
