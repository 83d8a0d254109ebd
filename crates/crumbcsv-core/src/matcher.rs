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

//! Bread crumb matching.
//!
//! Matching is segment-wise: `a.bc` does not begin with `a.b`, and `x.ab`
//! does not end with `b`. A configured [`MatchPattern`] pairs a dotted crumb
//! with the [`MatchMode`] used to test it against the crumb at the parser
//! cursor.

use crate::crumb::{BreadCrumb, CRUMB_SEPARATOR};
use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// How a pattern is compared with the current crumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Same segments, same length.
    #[default]
    Exact,
    /// Pattern is a prefix of the crumb.
    BeginsWith,
    /// Pattern appears as a contiguous run anywhere in the crumb.
    Contains,
    /// Pattern is a suffix of the crumb.
    EndsWith,
}

impl MatchMode {
    /// All modes, in the order they are listed in help text.
    pub const ALL: [MatchMode; 4] = [
        MatchMode::Exact,
        MatchMode::BeginsWith,
        MatchMode::Contains,
        MatchMode::EndsWith,
    ];

    /// The name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::BeginsWith => "beginsWith",
            MatchMode::Contains => "contains",
            MatchMode::EndsWith => "endsWith",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| CoreError::UnknownMatchMode(s.to_string()))
    }
}

/// Test `current` against `pattern` under `mode`.
///
/// # Examples
///
/// ```
/// use crumbcsv_core::{matches, MatchMode};
///
/// let crumb = ["a", "b", "c", "d"];
/// assert!(matches(&crumb, &["b", "c"], MatchMode::Contains));
/// assert!(!matches(&crumb, &["c", "b"], MatchMode::Contains));
/// assert!(matches(&crumb[..3], &["a", "b"], MatchMode::BeginsWith));
/// assert!(!matches(&crumb[..3], &["a", "b", "c", "d"], MatchMode::BeginsWith));
/// ```
pub fn matches<A, B>(current: &[A], pattern: &[B], mode: MatchMode) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    match mode {
        MatchMode::Exact => current.len() == pattern.len() && segments_eq(current, pattern),
        MatchMode::BeginsWith => {
            pattern.len() <= current.len() && segments_eq(&current[..pattern.len()], pattern)
        }
        MatchMode::EndsWith => {
            pattern.len() <= current.len()
                && segments_eq(&current[current.len() - pattern.len()..], pattern)
        }
        MatchMode::Contains => {
            if pattern.is_empty() {
                return true;
            }
            pattern.len() <= current.len()
                && current
                    .windows(pattern.len())
                    .any(|window| segments_eq(window, pattern))
        }
    }
}

fn segments_eq<A: AsRef<str>, B: AsRef<str>>(left: &[A], right: &[B]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| l.as_ref() == r.as_ref())
}

/// A configured bread crumb plus the mode it is matched with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchPattern {
    crumb: String,
    segments: Vec<String>,
    mode: MatchMode,
}

impl MatchPattern {
    /// Parse a dotted crumb into a pattern.
    ///
    /// The crumb must be non-empty and every segment must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPattern`] for `""`, `"."`, `"a..b"`,
    /// `".a"` and the like.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbcsv_core::{MatchMode, MatchPattern};
    ///
    /// let pattern = MatchPattern::new("root.sub", MatchMode::BeginsWith).unwrap();
    /// assert!(pattern.matches(&["root", "sub", "leaf"]));
    /// assert!(MatchPattern::new("root..sub", MatchMode::Exact).is_err());
    /// ```
    pub fn new(crumb: impl Into<String>, mode: MatchMode) -> CoreResult<Self> {
        let crumb = crumb.into();
        if crumb.trim().is_empty() {
            return Err(CoreError::InvalidPattern {
                pattern: crumb,
                reason: "pattern is empty".to_string(),
            });
        }

        let segments: Vec<String> = crumb.split(CRUMB_SEPARATOR).map(str::to_string).collect();
        if let Some(position) = segments.iter().position(|s| s.is_empty()) {
            return Err(CoreError::InvalidPattern {
                pattern: crumb,
                reason: format!("empty segment at position {}", position),
            });
        }

        Ok(Self {
            crumb,
            segments,
            mode,
        })
    }

    /// The pattern as configured, e.g. `root.sub`.
    pub fn crumb(&self) -> &str {
        &self.crumb
    }

    /// Pattern segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The mode this pattern is tested with.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Test a sequence of element names.
    pub fn matches<S: AsRef<str>>(&self, current: &[S]) -> bool {
        matches(current, &self.segments, self.mode)
    }

    /// Test a [`BreadCrumb`].
    pub fn matches_crumb(&self, crumb: &BreadCrumb) -> bool {
        self.matches(crumb.segments())
    }
}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.crumb, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumb(s: &str) -> Vec<&str> {
        s.split('.').collect()
    }

    #[test]
    fn test_exact() {
        assert!(matches(&crumb("a.b"), &crumb("a.b"), MatchMode::Exact));
        assert!(!matches(&crumb("a.b.c"), &crumb("a.b"), MatchMode::Exact));
        assert!(!matches(&crumb("a"), &crumb("a.b"), MatchMode::Exact));
        assert!(!matches(&crumb("a.c"), &crumb("a.b"), MatchMode::Exact));
    }

    #[test]
    fn test_begins_with() {
        assert!(matches(&crumb("a.b.c"), &crumb("a.b"), MatchMode::BeginsWith));
        assert!(matches(&crumb("a.b"), &crumb("a.b"), MatchMode::BeginsWith));
        assert!(!matches(&crumb("a.b.c"), &crumb("a.b.c.d"), MatchMode::BeginsWith));
        assert!(!matches(&crumb("x.a.b"), &crumb("a.b"), MatchMode::BeginsWith));
    }

    #[test]
    fn test_begins_with_is_segment_aligned() {
        assert!(!matches(&crumb("a.bc"), &crumb("a.b"), MatchMode::BeginsWith));
    }

    #[test]
    fn test_contains() {
        let current = crumb("a.b.c.d");
        assert!(matches(&current, &crumb("b.c"), MatchMode::Contains));
        assert!(matches(&current, &crumb("a"), MatchMode::Contains));
        assert!(matches(&current, &crumb("d"), MatchMode::Contains));
        assert!(matches(&current, &crumb("a.b.c.d"), MatchMode::Contains));
        assert!(!matches(&current, &crumb("c.b"), MatchMode::Contains));
        assert!(!matches(&current, &crumb("b.d"), MatchMode::Contains));
        assert!(!matches(&current, &crumb("a.b.c.d.e"), MatchMode::Contains));
    }

    #[test]
    fn test_contains_is_segment_aligned() {
        assert!(!matches(&crumb("ab.cd"), &crumb("b.c"), MatchMode::Contains));
    }

    #[test]
    fn test_ends_with() {
        assert!(matches(&crumb("a.b.c"), &crumb("b.c"), MatchMode::EndsWith));
        assert!(matches(&crumb("a.b.c"), &crumb("c"), MatchMode::EndsWith));
        assert!(!matches(&crumb("a.b.c"), &crumb("a.b"), MatchMode::EndsWith));
        assert!(!matches(&crumb("x.ab"), &crumb("b"), MatchMode::EndsWith));
    }

    #[test]
    fn test_empty_pattern() {
        let empty: [&str; 0] = [];
        assert!(matches(&crumb("a"), &empty, MatchMode::Contains));
        assert!(matches(&crumb("a"), &empty, MatchMode::BeginsWith));
        assert!(!matches(&crumb("a"), &empty, MatchMode::Exact));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("exact".parse::<MatchMode>(), Ok(MatchMode::Exact));
        assert_eq!("beginsWith".parse::<MatchMode>(), Ok(MatchMode::BeginsWith));
        assert_eq!("contains".parse::<MatchMode>(), Ok(MatchMode::Contains));
        assert_eq!("endsWith".parse::<MatchMode>(), Ok(MatchMode::EndsWith));
        assert_eq!(
            "begins_with".parse::<MatchMode>(),
            Err(CoreError::UnknownMatchMode("begins_with".to_string()))
        );
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in MatchMode::ALL {
            assert_eq!(mode.to_string().parse::<MatchMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_default_mode_is_exact() {
        assert_eq!(MatchMode::default(), MatchMode::Exact);
    }

    #[test]
    fn test_pattern_rejects_empty_segments() {
        for bad in ["", "  ", ".", "a..b", ".a", "a."] {
            let err = MatchPattern::new(bad, MatchMode::Exact).unwrap_err();
            assert!(matches!(err, CoreError::InvalidPattern { .. }), "{bad:?}");
        }
    }

    #[test]
    fn test_pattern_matches_crumb() {
        let pattern = MatchPattern::new("sub.leaf", MatchMode::EndsWith).unwrap();
        assert_eq!(pattern.segments(), &["sub", "leaf"]);
        assert_eq!(pattern.crumb(), "sub.leaf");
        assert!(pattern.matches_crumb(&BreadCrumb::parse("root.sub.leaf")));
        assert!(!pattern.matches_crumb(&BreadCrumb::parse("root.sub")));
    }

    #[test]
    fn test_pattern_display() {
        let pattern = MatchPattern::new("a.b", MatchMode::Contains).unwrap();
        assert_eq!(pattern.to_string(), "a.b (contains)");
    }
}
