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

//! Typed flatten configuration.
//!
//! A [`FlattenConfig`] names exactly three things: the XML file, the bread
//! crumb patterns, and the match mode. It is validated when it is built, so a
//! configured flattener never discovers a missing file halfway through.

use crate::error::{CoreError, CoreResult};
use crate::matcher::{MatchMode, MatchPattern};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Validated configuration for one flatten run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    xml_file: PathBuf,
    patterns: Vec<MatchPattern>,
    match_mode: MatchMode,
}

impl FlattenConfig {
    /// Validate and build a configuration.
    ///
    /// Crumbs are kept as given, duplicates included.
    ///
    /// # Errors
    ///
    /// - [`CoreError::MissingXmlFile`] if `xml_file` is empty
    /// - [`CoreError::XmlFileNotFound`] if it does not exist
    /// - [`CoreError::XmlFileUnreadable`] if it is a directory or cannot be opened
    /// - [`CoreError::InvalidPattern`] for an empty crumb or empty segment
    pub fn new<P, I, S>(xml_file: P, crumbs: I, match_mode: MatchMode) -> CoreResult<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let xml_file = validate_xml_file(xml_file.as_ref())?;
        let patterns = crumbs
            .into_iter()
            .map(|crumb| MatchPattern::new(crumb, match_mode))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self {
            xml_file,
            patterns,
            match_mode,
        })
    }

    /// Start a builder.
    pub fn builder() -> FlattenConfigBuilder {
        FlattenConfigBuilder::default()
    }

    /// The XML document to read.
    pub fn xml_file(&self) -> &Path {
        &self.xml_file
    }

    /// Configured patterns in the order they were given.
    pub fn patterns(&self) -> &[MatchPattern] {
        &self.patterns
    }

    /// The mode shared by every pattern.
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }
}

/// Incremental builder for [`FlattenConfig`].
///
/// [`add_crumb`](Self::add_crumb) skips a crumb that is already present;
/// [`crumbs`](Self::crumbs) replaces the list wholesale and keeps duplicates.
///
/// # Examples
///
/// ```no_run
/// use crumbcsv_core::{FlattenConfig, MatchMode};
///
/// let config = FlattenConfig::builder()
///     .xml_file("export.xml")
///     .add_crumb("objects.Identity")
///     .add_crumb("objects.Identity")
///     .match_mode(MatchMode::BeginsWith)
///     .build()
///     .unwrap();
/// assert_eq!(config.patterns().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlattenConfigBuilder {
    xml_file: Option<PathBuf>,
    crumbs: Vec<String>,
    match_mode: MatchMode,
}

impl FlattenConfigBuilder {
    /// Set the XML document path.
    pub fn xml_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.xml_file = Some(path.into());
        self
    }

    /// Replace the crumb list.
    pub fn crumbs<I, S>(mut self, crumbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.crumbs = crumbs.into_iter().map(Into::into).collect();
        self
    }

    /// Add one crumb unless it is already configured.
    pub fn add_crumb(mut self, crumb: impl Into<String>) -> Self {
        let crumb = crumb.into();
        if !self.crumbs.contains(&crumb) {
            self.crumbs.push(crumb);
        }
        self
    }

    /// Set the match mode (default: exact).
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Parse and set the match mode from its command-line name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownMatchMode`] for names other than
    /// `exact`, `beginsWith`, `contains` and `endsWith`.
    pub fn match_mode_str(self, name: &str) -> CoreResult<Self> {
        let mode = name.parse()?;
        Ok(self.match_mode(mode))
    }

    /// Validate and build.
    pub fn build(self) -> CoreResult<FlattenConfig> {
        let xml_file = self.xml_file.ok_or(CoreError::MissingXmlFile)?;
        FlattenConfig::new(xml_file, self.crumbs, self.match_mode)
    }
}

fn validate_xml_file(path: &Path) -> CoreResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(CoreError::MissingXmlFile);
    }

    let metadata = match path.metadata() {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CoreError::XmlFileNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(CoreError::XmlFileUnreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    if metadata.is_dir() {
        return Err(CoreError::XmlFileUnreadable {
            path: path.to_path_buf(),
            message: "is a directory".to_string(),
        });
    }

    File::open(path).map_err(|e| CoreError::XmlFileUnreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(path.to_path_buf())
}
