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

//! The parse-then-report pipeline.

use crate::error::{FlattenError, FlattenResult};
use crumbcsv_core::{FlattenConfig, MatchMode, MatchPattern, RecordSet};
use crumbcsv_csv::{to_csv_writer_with_config, ToCsvConfig};
use crumbcsv_xml::{collect_records, ParseConfig};
use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Where a [`Flattener`] is in its single run.
///
/// Transitions are linear: `Unconfigured → Parsing → Reporting → Done`.
/// A failed run stays in the phase it failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Constructed, nothing read yet.
    #[default]
    Unconfigured,
    /// Walking the XML document.
    Parsing,
    /// Writing CSV.
    Reporting,
    /// Finished successfully.
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Unconfigured => "unconfigured",
            Phase::Parsing => "parsing",
            Phase::Reporting => "reporting",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

/// One-shot flattener for a validated [`FlattenConfig`].
///
/// # Examples
///
/// ```no_run
/// use crumbcsv::{FlattenConfig, Flattener, MatchMode};
///
/// let config = FlattenConfig::new("export.xml", ["sailpoint.Identity"], MatchMode::Exact)?;
/// let mut flattener = Flattener::new(config);
/// let rows = flattener.run(std::io::stdout().lock())?;
/// eprintln!("{} rows", rows);
/// # Ok::<(), crumbcsv::FlattenError>(())
/// ```
#[derive(Debug)]
pub struct Flattener {
    config: FlattenConfig,
    parse_config: ParseConfig,
    csv_config: ToCsvConfig,
    phase: Phase,
}

impl Flattener {
    /// Unstarted flattener with default parse and CSV settings.
    pub fn new(config: FlattenConfig) -> Self {
        Self {
            config,
            parse_config: ParseConfig::default(),
            csv_config: ToCsvConfig::default(),
            phase: Phase::Unconfigured,
        }
    }

    /// Override buffer size and depth limit.
    pub fn with_parse_config(mut self, parse_config: ParseConfig) -> Self {
        self.parse_config = parse_config;
        self
    }

    /// Override delimiter, header and quoting.
    pub fn with_csv_config(mut self, csv_config: ToCsvConfig) -> Self {
        self.csv_config = csv_config;
        self
    }

    /// Validated run configuration.
    pub fn config(&self) -> &FlattenConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Parse the document and write CSV to `sink`, returning the number of
    /// data rows written.
    ///
    /// # Errors
    ///
    /// [`FlattenError::AlreadyRun`] on a second call; otherwise whatever the
    /// parse or the write reports. Output already written is left in `sink`.
    pub fn run<W: Write>(&mut self, sink: W) -> FlattenResult<usize> {
        let records = self.parse_records()?;

        self.transition(Phase::Reporting);
        to_csv_writer_with_config(&records, sink, self.csv_config.clone())?;

        self.transition(Phase::Done);
        info!(
            rows = records.len(),
            columns = records.columns().len(),
            "flatten complete"
        );
        Ok(records.len())
    }

    /// Parse the document and return the collected rows without writing CSV.
    ///
    /// Counts as the flattener's one run.
    pub fn parse(&mut self) -> FlattenResult<RecordSet> {
        let records = self.parse_records()?;
        self.transition(Phase::Done);
        Ok(records)
    }

    fn parse_records(&mut self) -> FlattenResult<RecordSet> {
        if self.phase != Phase::Unconfigured {
            return Err(FlattenError::AlreadyRun);
        }
        self.transition(Phase::Parsing);

        let path = self.config.xml_file();
        let file = File::open(path).map_err(|e| FlattenError::open(path, e))?;
        let records = collect_records(
            file,
            self.config.patterns().to_vec(),
            &self.parse_config,
        )?;

        debug!(
            file = %path.display(),
            rows = records.len(),
            "parsed document"
        );
        Ok(records)
    }

    fn transition(&mut self, next: Phase) {
        debug!(from = %self.phase, to = %next, "phase");
        self.phase = next;
    }
}

/// Flatten a file in one call, validating the arguments first.
///
/// # Examples
///
/// ```no_run
/// use crumbcsv::{flatten_file, MatchMode};
///
/// let mut out = Vec::new();
/// flatten_file("export.xml", ["Map.entry"], MatchMode::Contains, &mut out)?;
/// # Ok::<(), crumbcsv::FlattenError>(())
/// ```
pub fn flatten_file<P, I, S, W>(
    xml_file: P,
    crumbs: I,
    match_mode: MatchMode,
    sink: W,
) -> FlattenResult<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
    W: Write,
{
    let config = FlattenConfig::new(xml_file, crumbs, match_mode)?;
    Flattener::new(config).run(sink)
}

/// Flatten an already-open document with default parse and CSV settings.
///
/// # Examples
///
/// ```
/// use crumbcsv::{flatten_reader, MatchMode};
///
/// let xml = r#"<a><b x="1"/><b x="2" y="3"/></a>"#;
/// let mut out = Vec::new();
/// let rows = flatten_reader(xml.as_bytes(), ["a.b"], MatchMode::Exact, &mut out).unwrap();
///
/// assert_eq!(rows, 2);
/// assert_eq!(String::from_utf8(out).unwrap(), "Element,x,y\na.b,1,\na.b,2,3\n");
/// ```
pub fn flatten_reader<R, I, S, W>(
    reader: R,
    crumbs: I,
    match_mode: MatchMode,
    sink: W,
) -> FlattenResult<usize>
where
    R: Read,
    I: IntoIterator<Item = S>,
    S: Into<String>,
    W: Write,
{
    let patterns = crumbs
        .into_iter()
        .map(|crumb| MatchPattern::new(crumb, match_mode))
        .collect::<Result<Vec<_>, _>>()?;

    let records = collect_records(reader, patterns, &ParseConfig::default())?;
    to_csv_writer_with_config(&records, sink, ToCsvConfig::default())?;
    Ok(records.len())
}
