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

//! CSV output for CrumbCSV record sets.
//!
//! Writes a header line of accumulated column names (`Element` first), then
//! one line per row, padding absent columns with empty fields. Quoting is
//! RFC 4180: a field containing the delimiter, a quote, CR or LF is wrapped
//! in quotes with inner quotes doubled.
//!
//! # Examples
//!
//! ```
//! use crumbcsv_core::{RecordSet, Row};
//! use crumbcsv_csv::{to_csv_with_config, ToCsvConfig};
//!
//! let mut records = RecordSet::new();
//! records.add_row(Row::with_attributes("root.item", [("id", "1"), ("label", "a, b")]));
//!
//! let csv = to_csv_with_config(&records, ToCsvConfig::default()).unwrap();
//! assert_eq!(csv, "Element,id,label\nroot.item,1,\"a, b\"\n");
//! ```

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, ToCsvConfig};
