// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use regex::{Match, Regex};

pub trait RegexFullMatch {
    /// Eq of C fullMatch
    fn full_match(&self, s: &str) -> bool;
}

pub trait RegexConsume {
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

/// A pattern compiled in the two anchored forms number matching needs:
/// `\A(?:pattern)\z` for whole-input matching and `\A(?:pattern)` for
/// matching at the start of the input.
///
/// Whole-input matching cannot be derived from an unanchored `find`: the
/// engine reports the leftmost-first alternative, so `2|20` would report a
/// one-character match on "20" even though the second alternative covers the
/// whole input. The `\z`-anchored form makes the engine discard such short
/// paths itself.
pub struct AnchoredRegex {
    full: Regex,
    prefix: Regex,
}

impl AnchoredRegex {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let full = Regex::new(&fast_cat::concat_str!(r"\A(?:", pattern, r")\z"))?;
        let prefix = Regex::new(&fast_cat::concat_str!(r"\A(?:", pattern, ")"))?;
        Ok(Self { full, prefix })
    }
}

impl RegexFullMatch for AnchoredRegex {
    fn full_match(&self, s: &str) -> bool {
        self.full.is_match(s)
    }
}

impl RegexConsume for AnchoredRegex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        self.prefix.find(s)
    }
}
