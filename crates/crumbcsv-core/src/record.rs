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

//! Rows and the record set they accumulate into.

use std::collections::HashSet;

/// Name of the column holding the matched bread crumb. Always column 0.
pub const ELEMENT_COLUMN: &str = "Element";

/// One output line: the matched crumb plus the element's attributes.
///
/// Keys keep insertion order. Setting a key that is already present replaces
/// its value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Start a row for the element at `crumb`.
    pub fn new(crumb: impl Into<String>) -> Self {
        Self {
            fields: vec![(ELEMENT_COLUMN.to_string(), crumb.into())],
        }
    }

    /// Build a row from a crumb and `(name, value)` attribute pairs.
    pub fn with_attributes<I, K, V>(crumb: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new(crumb);
        for (key, value) in attributes {
            row.set(key, value);
        }
        row
    }

    /// Set a column value, replacing any earlier value for the same column.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Look up a column value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The matched crumb.
    pub fn element(&self) -> &str {
        self.get(ELEMENT_COLUMN).unwrap_or_default()
    }

    /// Column names in insertion order, `Element` first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of columns defined by this row, `Element` included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false`: a row carries at least the `Element` column.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered rows plus the union of every column name seen so far.
///
/// Columns keep first-seen order with `Element` pinned first. Rows are never
/// rewritten and nothing is deduplicated.
///
/// # Examples
///
/// ```
/// use crumbcsv_core::{RecordSet, Row};
///
/// let mut records = RecordSet::new();
/// records.add_row(Row::with_attributes("a.b", [("x", "1")]));
/// records.add_row(Row::with_attributes("a.b", [("x", "2"), ("y", "3")]));
///
/// assert_eq!(records.columns(), &["Element", "x", "y"]);
/// let padded: Vec<Vec<&str>> = records.padded_records().collect();
/// assert_eq!(padded[0], vec!["a.b", "1", ""]);
/// assert_eq!(padded[1], vec!["a.b", "2", "3"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    rows: Vec<Row>,
    columns: Vec<String>,
    seen: HashSet<String>,
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSet {
    /// Create an empty record set whose only column is `Element`.
    pub fn new() -> Self {
        let mut seen = HashSet::new();
        seen.insert(ELEMENT_COLUMN.to_string());
        Self {
            rows: Vec::new(),
            columns: vec![ELEMENT_COLUMN.to_string()],
            seen,
        }
    }

    /// Append a row and union its keys into the column list.
    pub fn add_row(&mut self, row: Row) {
        for key in row.keys() {
            if !self.seen.contains(key) {
                self.seen.insert(key.to_string());
                self.columns.push(key.to_string());
            }
        }
        self.rows.push(row);
    }

    /// Accumulated column names, `Element` first.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in accumulation order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterate rows in accumulation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when no row has been added.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Each row laid out against the full column list, with `""` for columns
    /// the row does not define.
    pub fn padded_records(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.rows.iter().map(move |row| {
            self.columns
                .iter()
                .map(|column| row.get(column).unwrap_or(""))
                .collect()
        })
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl Extend<Row> for RecordSet {
    fn extend<I: IntoIterator<Item = Row>>(&mut self, iter: I) {
        for row in iter {
            self.add_row(row);
        }
    }
}

impl FromIterator<Row> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        let mut records = RecordSet::new();
        records.extend(iter);
        records
    }
}
