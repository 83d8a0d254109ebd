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

//! Unified error type for the flatten pipeline.

use crumbcsv_core::CoreError;
use crumbcsv_csv::CsvError;
use crumbcsv_xml::XmlError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure of a flatten run.
#[derive(Debug, Error)]
pub enum FlattenError {
    /// The configuration was rejected before parsing.
    #[error(transparent)]
    Config(#[from] CoreError),

    /// The document could not be walked.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// CSV output failed. Bytes already written stay written.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// The XML file passed validation but could not be opened for reading.
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// [`Flattener::run`](crate::Flattener::run) or
    /// [`Flattener::parse`](crate::Flattener::parse) called a second time.
    #[error("Flattener has already run")]
    AlreadyRun,
}

impl FlattenError {
    /// The input document could not be opened.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// True when the failure came from reading or writing bytes rather than
    /// from the configuration or the document itself.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Open { .. } | Self::Xml(XmlError::Io { .. }) | Self::Csv(CsvError::Io(_))
        )
    }
}

/// Result type for flatten operations.
pub type FlattenResult<T> = std::result::Result<T, FlattenError>;
