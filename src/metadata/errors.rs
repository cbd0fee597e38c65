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

use std::io;

use thiserror::Error;

use super::wire::WireError;

/// Failure of a primary-path metadata load. Region metadata is a prerequisite
/// for validation, so none of these are downgraded to "no data"; auxiliary
/// paths absorb them instead of returning them.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The byte source has no resource under the derived name. For region
    /// metadata this signals broken packaging, not an unknown region.
    #[error("missing metadata: {0}")]
    MissingMetadata(String),

    /// The resource deserialized to zero records where exactly one was
    /// required.
    #[error("empty metadata: {0}")]
    EmptyMetadata(String),

    #[error("cannot read metadata: {file_name}: {source}")]
    Io {
        file_name: String,
        source: io::Error,
    },

    #[error("cannot load/parse metadata: {file_name}: {source}")]
    CannotParse {
        file_name: String,
        source: WireError,
    },
}
