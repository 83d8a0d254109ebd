// Dweve CrumbCSV - Bread-crumb XML to CSV flattener
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the streaming XML walk.

use thiserror::Error;

/// Errors raised while walking an XML document.
///
/// None of these are recoverable: the walk stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// The document is not well-formed.
    ///
    /// # Example
    ///
    /// ```text
    /// XML parse error at position 42: expecting </b> found </c>
    /// ```
    #[error("XML parse error at position {pos}: {message}")]
    Parse {
        /// Byte offset in the input where the error was detected.
        pos: usize,
        /// Parser diagnostic.
        message: String,
    },

    /// Element nesting went deeper than [`ParseConfig::max_depth`](crate::ParseConfig::max_depth).
    ///
    /// # Example
    ///
    /// ```text
    /// XML nesting depth exceeded (max: 1024, found: 1025)
    /// ```
    #[error("XML nesting depth exceeded (max: {max}, found: {current})")]
    DepthLimitExceeded {
        /// Configured limit.
        max: usize,
        /// Depth that was reached.
        current: usize,
    },

    /// A name or attribute value is malformed in the document's encoding
    /// (UTF-8 unless the declaration names another).
    #[error("Decoding error at position {pos}: {message}")]
    Utf8 {
        /// Byte offset of the enclosing event.
        pos: usize,
        /// Decoder diagnostic.
        message: String,
    },

    /// Reading the underlying input failed.
    #[error("I/O error while reading XML: {message}")]
    Io {
        /// Description of the failure.
        message: String,
    },

    /// A [`CrumbHandler`](crate::CrumbHandler) callback rejected an event.
    #[error("Handler error at '{crumb}': {message}")]
    Handler {
        /// The crumb being processed when the handler failed.
        crumb: String,
        /// Handler diagnostic.
        message: String,
    },
}

impl XmlError {
    /// Build a [`XmlError::Parse`].
    pub fn parse(pos: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            pos,
            message: message.into(),
        }
    }

    /// Build a [`XmlError::Handler`].
    pub fn handler(crumb: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            crumb: crumb.into(),
            message: message.into(),
        }
    }

    /// Translate a `quick-xml` error, keeping I/O failures distinct from
    /// malformed input.
    pub(crate) fn from_quick_xml(pos: usize, err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(io) => Self::Io {
                message: io.to_string(),
            },
            other => Self::parse(pos, other.to_string()),
        }
    }
}

/// Result type for XML walking.
pub type XmlResult<T> = Result<T, XmlError>;
