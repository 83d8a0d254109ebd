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

//! # CrumbCSV
//!
//! Flatten selected elements of an XML document into CSV. Elements are
//! selected by *bread crumb*: the dot-joined path of element names from the
//! root, compared against configured patterns under one of four match modes.
//! Every selected element becomes a row whose columns are `Element` (its
//! crumb) followed by its attributes; columns are the union of every
//! attribute name seen, in first-seen order.
//!
//! ## Quick Start
//!
//! ```
//! use crumbcsv::{flatten_reader, MatchMode};
//!
//! let xml = r#"<sailpoint>
//!   <Identity name="alice"/>
//!   <Identity name="bob" manager="alice"/>
//! </sailpoint>"#;
//! let mut csv = Vec::new();
//! flatten_reader(xml.as_bytes(), ["sailpoint.Identity"], MatchMode::Exact, &mut csv).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(csv).unwrap(),
//!     "Element,name,manager\nsailpoint.Identity,alice,\nsailpoint.Identity,bob,alice\n"
//! );
//! ```
//!
//! ## Match modes
//!
//! Matching is segment-wise, never substring-wise: `a.bc` does not contain
//! `b`.
//!
//! | Mode         | `a.b.c` matches            |
//! |--------------|----------------------------|
//! | `exact`      | `a.b.c`                    |
//! | `beginsWith` | `a`, `a.b`, `a.b.c`        |
//! | `endsWith`   | `c`, `b.c`, `a.b.c`        |
//! | `contains`   | any contiguous run, `b` included |
//!
//! ## Crates
//!
//! - `crumbcsv-core`: crumbs, matching, rows and configuration
//! - `crumbcsv-xml`: the streaming walk
//! - `crumbcsv-csv`: CSV output

mod error;
mod flattener;

pub use error::{FlattenError, FlattenResult};
pub use flattener::{flatten_file, flatten_reader, Flattener, Phase};

// Re-export the pieces a caller needs to configure a run.
pub use crumbcsv_core::{
    matches, BreadCrumb, CoreError, FlattenConfig, FlattenConfigBuilder, MatchMode, MatchPattern,
    RecordSet, Row, CRUMB_SEPARATOR, ELEMENT_COLUMN,
};

pub mod xml {
    //! Streaming walk and handler trait
    pub use crumbcsv_xml::{
        collect_records, collect_records_from_str, walk_str, walk_xml, CrumbHandler, CrumbTracker,
        ParseConfig, RecordCollector, WalkStats, XmlAttribute, XmlError, XmlResult,
    };
}

pub mod csv {
    //! CSV serialization
    pub use crumbcsv_csv::{
        to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, CsvError,
        ToCsvConfig,
    };
}
