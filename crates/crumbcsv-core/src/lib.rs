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

//! Core data model for CrumbCSV.
//!
//! CrumbCSV flattens XML into CSV: every element whose ancestor chain (its
//! *bread crumb*, e.g. `root.sub.leaf`) satisfies a configured pattern
//! becomes one row holding the element's attributes.
//!
//! This crate holds the I/O-free pieces:
//!
//! - [`BreadCrumb`]: the ancestor chain at the parser cursor
//! - [`MatchMode`], [`MatchPattern`] and [`matches`]: segment-wise crumb matching
//! - [`Row`] and [`RecordSet`]: rows with a first-seen column union
//! - [`FlattenConfig`]: eagerly validated run configuration
//!
//! # Examples
//!
//! ```
//! use crumbcsv_core::{BreadCrumb, MatchMode, MatchPattern, RecordSet, Row};
//!
//! let pattern = MatchPattern::new("a.b", MatchMode::Exact).unwrap();
//! let mut crumb = BreadCrumb::new();
//! crumb.push("a");
//! crumb.push("b");
//!
//! let mut records = RecordSet::new();
//! if pattern.matches_crumb(&crumb) {
//!     records.add_row(Row::with_attributes(crumb.render(), [("x", "1")]));
//! }
//! assert_eq!(records.len(), 1);
//! assert_eq!(records.columns(), &["Element", "x"]);
//! ```

mod config;
mod crumb;
mod error;
mod matcher;
mod record;

pub use config::{FlattenConfig, FlattenConfigBuilder};
pub use crumb::{BreadCrumb, CRUMB_SEPARATOR};
pub use error::{CoreError, CoreResult};
pub use matcher::{matches, MatchMode, MatchPattern};
pub use record::{RecordSet, Row, ELEMENT_COLUMN};
