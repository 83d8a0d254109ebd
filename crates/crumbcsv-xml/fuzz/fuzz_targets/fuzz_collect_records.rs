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

#![no_main]

use crumbcsv_core::{MatchMode, MatchPattern};
use crumbcsv_xml::{collect_records, ParseConfig};
use libfuzzer_sys::fuzz_target;

/// Fuzz target for the streaming walk.
///
/// Feeds arbitrary bytes through the walker with a single-segment `contains`
/// pattern so that any `<a>` reaches the row builder. The walk must end in `Ok` or a
/// structured `XmlError`, never a panic.
///
/// # Running the Fuzzer
///
/// ```bash
/// cargo install cargo-fuzz
///
/// # From the crumbcsv-xml directory
/// cargo fuzz run fuzz_collect_records -- -max_len=65536
/// ```
fuzz_target!(|data: &[u8]| {
    let config = ParseConfig {
        max_depth: 64,
        ..Default::default()
    };
    let patterns = MatchPattern::new("a", MatchMode::Contains)
        .into_iter()
        .collect();

    if let Ok(records) = collect_records(data, patterns, &config) {
        for padded in records.padded_records() {
            assert_eq!(padded.len(), records.columns().len());
        }
    }
});
