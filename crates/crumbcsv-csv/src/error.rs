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

//! Error types for CSV serialization.

use thiserror::Error;

/// CSV output error types.
///
/// # Examples
///
/// ```
/// use crumbcsv_csv::CsvError;
///
/// let err = CsvError::InvalidDelimiter('€');
/// assert_eq!(
///     err.to_string(),
///     "Invalid delimiter '€': must be a single ASCII character other than '\"', CR or LF"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// Writing to the sink failed.
    ///
    /// Bytes already handed to the sink are not rolled back.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(csv::Error),

    /// The requested delimiter cannot be used.
    #[error("Invalid delimiter '{0}': must be a single ASCII character other than '\"', CR or LF")]
    InvalidDelimiter(char),

    /// Output could not be decoded as UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being decoded.
        context: String,
    },

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return Self::CsvLib(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            other => Self::Other(format!("{:?}", other)),
        }
    }
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;
