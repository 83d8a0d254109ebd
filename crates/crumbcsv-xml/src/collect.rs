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

//! Turns matched elements into rows.

use crate::error::XmlResult;
use crate::handler::{CrumbHandler, XmlAttribute};
use crate::walker::{walk_str, walk_xml, ParseConfig, WalkStats};
use crumbcsv_core::{BreadCrumb, MatchPattern, RecordSet, Row};
use std::io::Read;
use tracing::{debug, trace};

/// Handler that emits one [`Row`] per (element, matching pattern) pair.
///
/// An element matching two patterns yields two identical rows. The record
/// set is created on the first match; [`finish`](Self::finish) returns an
/// empty one when nothing matched.
#[derive(Debug, Clone)]
pub struct RecordCollector {
    patterns: Vec<MatchPattern>,
    records: Option<RecordSet>,
}

impl RecordCollector {
    /// Collector emitting one row per element and matching pattern.
    pub fn new(patterns: Vec<MatchPattern>) -> Self {
        Self {
            patterns,
            records: None,
        }
    }

    /// Configured patterns.
    pub fn patterns(&self) -> &[MatchPattern] {
        &self.patterns
    }

    /// Rows collected so far.
    pub fn row_count(&self) -> usize {
        self.records.as_ref().map_or(0, RecordSet::len)
    }

    /// Hand over the accumulated records.
    pub fn finish(self) -> RecordSet {
        self.records.unwrap_or_default()
    }
}

impl CrumbHandler for RecordCollector {
    fn start_element(&mut self, crumb: &BreadCrumb, attributes: &[XmlAttribute]) -> XmlResult<()> {
        for pattern in &self.patterns {
            if !pattern.matches_crumb(crumb) {
                continue;
            }
            trace!(crumb = %crumb, pattern = %pattern, "match");
            let row = Row::with_attributes(
                crumb.render(),
                attributes.iter().map(|a| (a.name.as_str(), a.value.as_str())),
            );
            self.records.get_or_insert_with(RecordSet::new).add_row(row);
        }
        Ok(())
    }
}

/// Walk `reader` and collect the rows selected by `patterns`.
///
/// # Examples
///
/// ```
/// use crumbcsv_core::{MatchMode, MatchPattern};
/// use crumbcsv_xml::{collect_records, ParseConfig};
///
/// let xml = r#"<a><b x="1"/><b x="2" y="3"/></a>"#;
/// let patterns = vec![MatchPattern::new("a.b", MatchMode::Exact).unwrap()];
/// let records = collect_records(xml.as_bytes(), patterns, &ParseConfig::default()).unwrap();
///
/// assert_eq!(records.columns(), &["Element", "x", "y"]);
/// assert_eq!(records.len(), 2);
/// ```
pub fn collect_records<R: Read>(
    reader: R,
    patterns: Vec<MatchPattern>,
    config: &ParseConfig,
) -> XmlResult<RecordSet> {
    let mut collector = RecordCollector::new(patterns);
    let stats = walk_xml(reader, &mut collector, config)?;
    log_summary(&collector, &stats);
    Ok(collector.finish())
}

/// [`collect_records`] over an in-memory string.
pub fn collect_records_from_str(
    xml: &str,
    patterns: Vec<MatchPattern>,
    config: &ParseConfig,
) -> XmlResult<RecordSet> {
    let mut collector = RecordCollector::new(patterns);
    let stats = walk_str(xml, &mut collector, config)?;
    log_summary(&collector, &stats);
    Ok(collector.finish())
}

fn log_summary(collector: &RecordCollector, stats: &WalkStats) {
    debug!(
        elements = stats.elements,
        patterns = collector.patterns().len(),
        rows = collector.row_count(),
        "collected rows"
    );
}
