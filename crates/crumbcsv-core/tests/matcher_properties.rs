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

//! Property-based tests for bread crumb matching and record accumulation.
//!
//! # Properties Tested
//!
//! 1. **Exact**: a crumb matches iff it is segment-wise identical
//! 2. **Prefix/Suffix**: every prefix (suffix) of a crumb matches under
//!    beginsWith (endsWith)
//! 3. **Contains**: every contiguous window matches; it implies the other modes
//! 4. **Columns**: the column union is `Element` plus first-seen attribute names

use crumbcsv_core::{matches, MatchMode, RecordSet, Row};
use proptest::prelude::*;

fn crumb_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c]{1,2}", 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: exact matching is segment-wise equality
    #[test]
    fn prop_exact_iff_equal(current in crumb_strategy(), pattern in crumb_strategy()) {
        prop_assert_eq!(
            matches(&current, &pattern, MatchMode::Exact),
            current == pattern
        );
    }

    /// Property: every non-empty prefix matches under beginsWith
    #[test]
    fn prop_every_prefix_begins(current in crumb_strategy()) {
        for len in 1..=current.len() {
            prop_assert!(matches(&current, &current[..len], MatchMode::BeginsWith));
        }
    }

    /// Property: every non-empty suffix matches under endsWith
    #[test]
    fn prop_every_suffix_ends(current in crumb_strategy()) {
        for start in 0..current.len() {
            prop_assert!(matches(&current, &current[start..], MatchMode::EndsWith));
        }
    }

    /// Property: every window is contained
    #[test]
    fn prop_every_window_contained(current in crumb_strategy(), a in 0usize..6, b in 0usize..6) {
        let (lo, hi) = (a.min(b).min(current.len() - 1), a.max(b).min(current.len() - 1));
        prop_assert!(matches(&current, &current[lo..=hi], MatchMode::Contains));
    }

    /// Property: a pattern longer than the crumb never matches
    #[test]
    fn prop_longer_pattern_never_matches(current in crumb_strategy(), extra in "[a-c]{1,2}") {
        let mut pattern = current.clone();
        pattern.push(extra);
        for mode in MatchMode::ALL {
            prop_assert!(!matches(&current, &pattern, mode));
        }
    }

    /// Property: exact, beginsWith and endsWith each imply contains
    #[test]
    fn prop_modes_imply_contains(current in crumb_strategy(), pattern in crumb_strategy()) {
        let contained = matches(&current, &pattern, MatchMode::Contains);
        for mode in [MatchMode::Exact, MatchMode::BeginsWith, MatchMode::EndsWith] {
            if matches(&current, &pattern, mode) {
                prop_assert!(contained);
            }
        }
    }

    /// Property: columns are Element plus first-seen names, each exactly once
    #[test]
    fn prop_columns_first_seen(rows in prop::collection::vec(
        prop::collection::vec("[a-e]", 0..4), 0..8
    )) {
        let mut records = RecordSet::new();
        let mut expected = vec!["Element".to_string()];
        for names in &rows {
            let row = Row::with_attributes("r", names.iter().map(|n| (n.as_str(), "v")));
            for name in names {
                if !expected.contains(name) {
                    expected.push(name.clone());
                }
            }
            records.add_row(row);
        }
        prop_assert_eq!(records.columns(), expected.as_slice());
        prop_assert_eq!(records.len(), rows.len());
        for padded in records.padded_records() {
            prop_assert_eq!(padded.len(), expected.len());
        }
    }
}
