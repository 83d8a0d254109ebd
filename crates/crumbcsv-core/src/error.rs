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

//! Error types for the CrumbCSV data model and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building patterns or validating a flatten configuration.
///
/// All of these are detected before any XML is read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No XML file was supplied.
    #[error("XML file name has not been specified")]
    MissingXmlFile,

    /// The XML file does not exist.
    #[error("{path} was not found")]
    XmlFileNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The XML path exists but cannot be opened for reading.
    #[error("{path} could not be read: {message}")]
    XmlFileUnreadable {
        /// The path that failed.
        path: PathBuf,
        /// Description of the failure.
        message: String,
    },

    /// A bread crumb pattern is empty or contains an empty segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbcsv_core::CoreError;
    ///
    /// let err = CoreError::InvalidPattern {
    ///     pattern: "a..b".to_string(),
    ///     reason: "empty segment at position 1".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid bread crumb 'a..b': empty segment at position 1"
    /// );
    /// ```
    #[error("Invalid bread crumb '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern text.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A match mode name was not recognized.
    #[error("Unknown match mode '{0}' (expected one of: exact, beginsWith, contains, endsWith)")]
    UnknownMatchMode(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_xml_file_display() {
        assert_eq!(
            CoreError::MissingXmlFile.to_string(),
            "XML file name has not been specified"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = CoreError::XmlFileNotFound {
            path: PathBuf::from("/tmp/nope.xml"),
        };
        assert_eq!(err.to_string(), "/tmp/nope.xml was not found");
    }

    #[test]
    fn test_unknown_match_mode_lists_choices() {
        let msg = CoreError::UnknownMatchMode("fuzzy".to_string()).to_string();
        assert!(msg.contains("'fuzzy'"));
        assert!(msg.contains("beginsWith"));
        assert!(msg.contains("endsWith"));
    }
}
