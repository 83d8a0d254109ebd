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

//! Streaming bread crumb walker for CrumbCSV.
//!
//! Drives a forward-only `quick-xml` parse, keeps the current
//! [`BreadCrumb`](crumbcsv_core::BreadCrumb) in an owned [`CrumbTracker`],
//! and reports every element to a [`CrumbHandler`]. [`RecordCollector`] is
//! the handler that turns matching elements into rows.
//!
//! # Examples
//!
//! ```
//! use crumbcsv_core::{MatchMode, MatchPattern};
//! use crumbcsv_xml::{collect_records, ParseConfig};
//!
//! let xml = r#"<objects>
//!   <Identity name="alice"/>
//!   <Identity name="bob" manager="alice"/>
//! </objects>"#;
//! let patterns = vec![MatchPattern::new("Identity", MatchMode::EndsWith).unwrap()];
//! let records = collect_records(xml.as_bytes(), patterns, &ParseConfig::default()).unwrap();
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records.columns(), &["Element", "name", "manager"]);
//! ```
//!
//! # Security
//!
//! - No DTD or external entity is ever loaded
//! - Nesting depth is bounded by [`ParseConfig::max_depth`]
//! - Input is read through a fixed-size buffer

mod collect;
mod error;
mod handler;
mod walker;

pub use collect::{collect_records, collect_records_from_str, RecordCollector};
pub use error::{XmlError, XmlResult};
pub use handler::{CrumbHandler, CrumbTracker, XmlAttribute};
pub use walker::{walk_str, walk_xml, ParseConfig, WalkStats};
