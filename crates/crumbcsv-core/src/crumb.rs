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

//! The bread crumb: the chain of element names from the document root to the
//! element currently under the parser cursor.
//!
//! Given
//!
//! ```xml
//! <root>
//!   <sub>
//!     <sub2>text here</sub2>
//!   </sub>
//! </root>
//! ```
//!
//! the crumb at `sub2` reads `root.sub.sub2`.

use std::fmt;

/// Separator placed between segments when a crumb is rendered.
pub const CRUMB_SEPARATOR: char = '.';

/// Ordered ancestor chain of element names.
///
/// Mutated by [`push`](BreadCrumb::push) on element start and
/// [`pop`](BreadCrumb::pop) on element end; lives for one parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BreadCrumb {
    segments: Vec<String>,
}

impl BreadCrumb {
    /// Create an empty crumb (cursor outside the root element).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a crumb from a dotted string such as `root.sub.leaf`.
    ///
    /// An empty string yields an empty crumb.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbcsv_core::BreadCrumb;
    ///
    /// let crumb = BreadCrumb::parse("root.sub.leaf");
    /// assert_eq!(crumb.depth(), 3);
    /// assert_eq!(crumb.to_string(), "root.sub.leaf");
    /// ```
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::new();
        }
        Self {
            segments: dotted.split(CRUMB_SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Append an element name.
    pub fn push(&mut self, name: impl Into<String>) {
        self.segments.push(name.into());
    }

    /// Remove and return the innermost element name.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Number of segments, i.e. the nesting depth of the cursor.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// `true` when the cursor is outside any element.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Innermost element name, if any.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Borrow the segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Render with `.` between segments.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BreadCrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", CRUMB_SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for BreadCrumb {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}
