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

//! Re-reading written CSV with the `csv` crate.
//!
//! # Properties Tested
//!
//! 1. **Row count**: the reader sees exactly one record per row
//! 2. **Values**: every non-empty value comes back unchanged, including
//!    values with commas, quotes and line breaks
//! 3. **Width**: every record is as wide as the header

use crumbcsv_core::{RecordSet, Row};
use crumbcsv_csv::{to_csv, to_csv_writer, CsvError, ToCsvConfig};
use proptest::prelude::*;
use std::io::{self, Write};

fn read_back(csv_text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[test]
fn test_round_trip_special_characters() {
    let mut records = RecordSet::new();
    records.add_row(Row::with_attributes(
        "doc.entry",
        [("key", "a,b"), ("value", "she said \"no\"")],
    ));
    records.add_row(Row::with_attributes("doc.entry", [("note", "line1\nline2\r\nline3")]));

    let text = to_csv(&records).unwrap();
    let (headers, rows) = read_back(&text);

    assert_eq!(headers, vec!["Element", "key", "value", "note"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["doc.entry", "a,b", "she said \"no\"", ""]);
    assert_eq!(rows[1], vec!["doc.entry", "", "", "line1\nline2\r\nline3"]);
}

#[test]
fn test_write_failure_surfaces() {
    struct FullDisk;
    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "No space left on device"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut records = RecordSet::new();
    records.add_row(Row::with_attributes("a", [("x", "1")]));

    let err = to_csv_writer(&records, FullDisk).unwrap_err();
    assert!(matches!(err, CsvError::Io(_)), "got {:?}", err);
    assert!(err.to_string().contains("No space left"));
}

#[test]
fn test_partial_output_not_rolled_back() {
    struct Limited {
        written: Vec<u8>,
        budget: usize,
    }
    impl Write for Limited {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "closed"));
            }
            let n = buf.len().min(self.budget);
            self.written.extend_from_slice(&buf[..n]);
            self.budget -= n;
            Ok(n)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut records = RecordSet::new();
    for i in 0..100 {
        records.add_row(Row::with_attributes("a", [("i", i.to_string())]));
    }

    let mut sink = Limited {
        written: Vec::new(),
        budget: 10,
    };
    assert!(to_csv_writer(&records, &mut sink).is_err());
    assert_eq!(sink.written, b"Element,i\n");
}

#[test]
fn test_tab_delimited_round_trip() {
    let mut records = RecordSet::new();
    records.add_row(Row::with_attributes("t", [("v", "has\ttab")]));
    let config = ToCsvConfig::with_delimiter('\t').unwrap();
    let text = crumbcsv_csv::to_csv_with_config(&records, config).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(text.as_bytes());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[1], "has\ttab");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: written CSV reads back with the same rows and non-empty values
    #[test]
    fn prop_csv_round_trip(rows in prop::collection::vec(
        prop::collection::vec(("[a-d]", "[ -~\n\r\t]{0,12}"), 0..4),
        0..10,
    )) {
        let mut records = RecordSet::new();
        for attrs in &rows {
            records.add_row(Row::with_attributes(
                "root.item",
                attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            ));
        }

        let text = to_csv(&records).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let (headers, read) = read_back(&text);

        prop_assert_eq!(&headers, records.columns());
        prop_assert_eq!(read.len(), records.len());

        for (written, fields) in records.iter().zip(&read) {
            prop_assert_eq!(fields.len(), headers.len());
            for (column, value) in headers.iter().zip(fields) {
                match written.get(column) {
                    Some(expected) => prop_assert_eq!(value.as_str(), expected),
                    None => prop_assert_eq!(value.as_str(), ""),
                }
            }
        }
    }
}
