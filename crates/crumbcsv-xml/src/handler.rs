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

//! Visitor interface and the crumb stack it observes.
//!
//! The walker owns a [`CrumbTracker`] and calls a [`CrumbHandler`] with a
//! shared reference to the current [`BreadCrumb`]. Handlers never push or pop
//! themselves: on `start_element` the crumb already ends with the new
//! element, and on `end_element` it still does.

use crate::error::{XmlError, XmlResult};
use crumbcsv_core::BreadCrumb;

/// One attribute as reported to a handler: local name and unescaped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// Local name, namespace prefix removed.
    pub name: String,
    /// Unescaped, whitespace-normalized value.
    pub value: String,
}

impl XmlAttribute {
    /// Attribute with a local name and its unescaped value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Callbacks invoked during a streaming walk.
pub trait CrumbHandler {
    /// An element was opened. `crumb` ends with its local name.
    fn start_element(&mut self, crumb: &BreadCrumb, attributes: &[XmlAttribute]) -> XmlResult<()>;

    /// An element is about to be closed. `crumb` still ends with its name.
    fn end_element(&mut self, _crumb: &BreadCrumb) -> XmlResult<()> {
        Ok(())
    }
}

impl<H: CrumbHandler + ?Sized> CrumbHandler for &mut H {
    fn start_element(&mut self, crumb: &BreadCrumb, attributes: &[XmlAttribute]) -> XmlResult<()> {
        (**self).start_element(crumb, attributes)
    }

    fn end_element(&mut self, crumb: &BreadCrumb) -> XmlResult<()> {
        (**self).end_element(crumb)
    }
}

/// Owned crumb stack plus the document-level state needed to reject a
/// missing, unclosed or repeated root element.
#[derive(Debug, Clone)]
pub struct CrumbTracker {
    crumb: BreadCrumb,
    max_depth: usize,
    root_seen: bool,
}

impl CrumbTracker {
    /// Create a tracker that refuses nesting deeper than `max_depth`.
    pub fn new(max_depth: usize) -> Self {
        Self {
            crumb: BreadCrumb::new(),
            max_depth,
            root_seen: false,
        }
    }

    /// The crumb at the cursor.
    pub fn crumb(&self) -> &BreadCrumb {
        &self.crumb
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.crumb.depth()
    }

    /// `true` once the root element has been opened.
    pub fn root_seen(&self) -> bool {
        self.root_seen
    }

    /// `true` when the cursor sits outside the root element.
    pub fn at_top_level(&self) -> bool {
        self.crumb.is_empty()
    }

    /// Enter an element.
    ///
    /// `pos` is only used for diagnostics.
    pub fn enter(&mut self, name: &str, pos: usize) -> XmlResult<()> {
        if self.crumb.is_empty() && self.root_seen {
            return Err(XmlError::parse(
                pos,
                format!("element <{}> found after the root element was closed", name),
            ));
        }

        let depth = self.crumb.depth() + 1;
        if depth > self.max_depth {
            return Err(XmlError::DepthLimitExceeded {
                max: self.max_depth,
                current: depth,
            });
        }

        self.root_seen = true;
        self.crumb.push(name);
        Ok(())
    }

    /// Leave the innermost element, checking that `name` closes it.
    pub fn leave(&mut self, name: &str, pos: usize) -> XmlResult<()> {
        if self.crumb.last() == Some(name) {
            self.crumb.pop();
            return Ok(());
        }
        match self.crumb.last() {
            Some(open) => Err(XmlError::parse(
                pos,
                format!("expecting </{}> found </{}>", open, name),
            )),
            None => Err(XmlError::parse(
                pos,
                format!("unexpected closing tag </{}>", name),
            )),
        }
    }

    /// Check the document ended cleanly.
    pub fn finish(&self, pos: usize) -> XmlResult<()> {
        if !self.root_seen {
            return Err(XmlError::parse(pos, "document has no root element"));
        }
        if let Some(open) = self.crumb.last() {
            return Err(XmlError::parse(
                pos,
                format!(
                    "unexpected end of document inside <{}> (open: {})",
                    open, self.crumb
                ),
            ));
        }
        Ok(())
    }
}
