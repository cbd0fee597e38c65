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

use crate::regex_util::{RegexConsume, RegexFullMatch};

use crate::{
    interfaces,
    metadata::PhoneNumberDesc,
    regexp_cache::{InvalidRegexError, RegexCache},
};

/// Outcome of evaluating a candidate digit string against a national number
/// pattern, before it is collapsed to a boolean by [`crate::MatcherApi`].
///
/// `TooLong` means the pattern matched a strict prefix of the candidate: the
/// candidate is not a valid number itself, but carries one as its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    NoMatch,
    TooLong,
    Match,
}

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(128) }
    }

    /// Evaluates `number` against the descriptor's national number pattern.
    ///
    /// A strict whole-input match is attempted first; only when it fails and
    /// `allow_prefix_match` is set does the engine fall back to matching at
    /// the start of the input. A prefix match shorter than the candidate is
    /// reported as [`MatchResult::TooLong`].
    pub fn match_result(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
        allow_prefix_match: bool,
    ) -> Result<MatchResult, InvalidRegexError> {
        let Some(national_number_pattern) = number_desc.national_number_pattern() else {
            return Ok(MatchResult::NoMatch);
        };
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        if national_number_pattern.is_empty() {
            return Ok(MatchResult::NoMatch);
        }
        self.match_number(number, national_number_pattern, allow_prefix_match)
    }

    fn match_number(
        &self,
        phone_number: &str,
        number_pattern: &str,
        allow_prefix_match: bool,
    ) -> Result<MatchResult, InvalidRegexError> {
        let regexp = self.cache.get_regex(number_pattern)?;

        if regexp.full_match(phone_number) {
            return Ok(MatchResult::Match);
        }
        if !allow_prefix_match {
            return Ok(MatchResult::NoMatch);
        }
        match regexp.find_start(phone_number) {
            // A prefix that consumes the whole candidate is a full match that
            // the first check already ruled out; report it as one anyway.
            Some(found) if found.end() == phone_number.len() => Ok(MatchResult::Match),
            Some(_) => Ok(MatchResult::TooLong),
            None => Ok(MatchResult::NoMatch),
        }
    }
}

impl Default for RegexBasedMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError> {
        let result = self.match_result(number, number_desc, allow_prefix_match)?;
        Ok(match result {
            MatchResult::Match => true,
            MatchResult::TooLong => allow_prefix_match,
            MatchResult::NoMatch => false,
        })
    }
}
