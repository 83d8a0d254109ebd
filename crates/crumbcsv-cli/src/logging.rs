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

//! stderr logging for the binary.
//!
//! stdout carries CSV, so every log line goes to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `crumbcsv=trace`.
pub const LOG_ENV: &str = "CRUMBCSV_LOG";

/// Filter directive used when [`LOG_ENV`] is unset or invalid.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "crumbcsv=error"
    } else if verbose {
        "crumbcsv=debug"
    } else {
        "crumbcsv=warn"
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, false), "crumbcsv=warn");
        assert_eq!(default_directive(true, false), "crumbcsv=debug");
        assert_eq!(default_directive(false, true), "crumbcsv=error");
    }

    #[test]
    fn test_directives_parse() {
        for (v, q) in [(false, false), (true, false), (false, true)] {
            let directive = default_directive(v, q);
            assert!(directive.parse::<tracing_subscriber::filter::Directive>().is_ok());
        }
    }
}
