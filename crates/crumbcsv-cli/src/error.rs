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

//! Error types for the xml-to-csv binary.

use crumbcsv::csv::CsvError;
use crumbcsv::xml::XmlError;
use crumbcsv::FlattenError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit status for a rejected configuration. Matches clap's usage errors.
pub const EXIT_CONFIG: u8 = 2;
/// Exit status for a malformed XML document.
pub const EXIT_PARSE: u8 = 3;
/// Exit status for a read or write failure.
pub const EXIT_IO: u8 = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Arguments were rejected before any XML was read.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The XML document is malformed or too deep.
    #[error("{0}")]
    Parse(String),

    /// Reading the document or opening the output failed.
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Writing CSV failed. Output already written is left in place.
    #[error("Failed to write output: {0}")]
    Output(String),

    /// Anything the pipeline should never report from a fresh run.
    #[error("{0}")]
    Internal(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use crumbcsv_cli::error::CliError;
    /// use std::fs::File;
    ///
    /// let result = File::create("out.csv").map_err(|e| CliError::io_error("out.csv", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Invalid arguments, reported before any output is created.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_CONFIG,
            Self::Parse(_) => EXIT_PARSE,
            Self::Io { .. } | Self::Output(_) => EXIT_IO,
            Self::Internal(_) => 1,
        }
    }

    /// Classify a pipeline failure; `input` names the document for read errors.
    pub fn from_flatten(err: FlattenError, input: &Path) -> Self {
        match err {
            FlattenError::Config(e) => Self::Config(e.to_string()),
            FlattenError::Open { path, source } => Self::io_error(path, source),
            FlattenError::Xml(XmlError::Io { message }) => Self::Io {
                path: input.to_path_buf(),
                message,
            },
            FlattenError::Xml(e) => Self::Parse(e.to_string()),
            FlattenError::Csv(CsvError::InvalidDelimiter(c)) => {
                Self::Config(CsvError::InvalidDelimiter(c).to_string())
            }
            FlattenError::Csv(e) => Self::Output(e.to_string()),
            other @ FlattenError::AlreadyRun => Self::Internal(other.to_string()),
        }
    }
}
