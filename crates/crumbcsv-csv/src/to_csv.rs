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

//! Serialize a [`RecordSet`] as CSV.

use crate::error::{CsvError, Result};
use crumbcsv_core::RecordSet;
use std::io::Write;
use tracing::debug;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

impl ToCsvConfig {
    /// Default configuration with a different delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::InvalidDelimiter`] unless `delimiter` is a single
    /// ASCII character other than `"`, CR or LF.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbcsv_csv::ToCsvConfig;
    ///
    /// assert_eq!(ToCsvConfig::with_delimiter('\t').unwrap().delimiter, b'\t');
    /// assert!(ToCsvConfig::with_delimiter('"').is_err());
    /// ```
    pub fn with_delimiter(delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() || matches!(delimiter, '"' | '\r' | '\n') {
            return Err(CsvError::InvalidDelimiter(delimiter));
        }
        Ok(Self {
            delimiter: delimiter as u8,
            ..Self::default()
        })
    }
}

/// Convert a record set to a CSV string.
///
/// # Example
/// ```
/// use crumbcsv_core::{RecordSet, Row};
/// use crumbcsv_csv::to_csv;
///
/// let mut records = RecordSet::new();
/// records.add_row(Row::with_attributes("a.b", [("x", "1")]));
/// records.add_row(Row::with_attributes("a.b", [("x", "2"), ("y", "3")]));
///
/// assert_eq!(to_csv(&records).unwrap(), "Element,x,y\na.b,1,\na.b,2,3\n");
/// ```
pub fn to_csv(records: &RecordSet) -> Result<String> {
    to_csv_with_config(records, ToCsvConfig::default())
}

/// Convert a record set to a CSV string with custom configuration.
pub fn to_csv_with_config(records: &RecordSet, config: ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(estimate_csv_size(records));
    to_csv_writer_with_config(records, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a record set as CSV to `writer`.
///
/// # Example
/// ```no_run
/// use crumbcsv_core::RecordSet;
/// use crumbcsv_csv::to_csv_writer;
/// use std::fs::File;
///
/// let records = RecordSet::new();
/// let file = File::create("output.csv").unwrap();
/// to_csv_writer(&records, file).unwrap();
/// ```
pub fn to_csv_writer<W: Write>(records: &RecordSet, writer: W) -> Result<()> {
    to_csv_writer_with_config(records, writer, ToCsvConfig::default())
}

/// Write a record set as CSV with custom configuration.
///
/// Every row is padded to the full column list; a column the row does not
/// define is written as an empty field. The writer is flushed before
/// returning.
pub fn to_csv_writer_with_config<W: Write>(
    records: &RecordSet,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(records.columns())?;
    }

    for (index, record) in records.padded_records().enumerate() {
        wtr.write_record(&record).map_err(|e| match CsvError::from(e) {
            CsvError::CsvLib(e) => {
                CsvError::Other(format!("Failed to write CSV record {}: {}", index + 1, e))
            }
            other => other,
        })?;
    }

    wtr.flush()?;

    debug!(
        rows = records.len(),
        columns = records.columns().len(),
        "wrote CSV"
    );
    Ok(())
}

/// Estimate CSV output size for pre-allocation: header plus a conservative
/// 16 bytes per cell.
fn estimate_csv_size(records: &RecordSet) -> usize {
    let header_size = records.columns().iter().map(|c| c.len() + 1).sum::<usize>();
    let data_size = records.len() * records.columns().len() * 16;
    (header_size + data_size).max(1024)
}
