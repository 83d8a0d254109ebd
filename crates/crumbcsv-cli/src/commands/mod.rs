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

//! Command implementations.

mod flatten;

pub use flatten::flatten;

use crate::error::CliError;
use crumbcsv::xml::ParseConfig;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::warn;

/// Environment variable overriding the XML nesting depth limit.
pub const MAX_DEPTH_ENV: &str = "CRUMBCSV_MAX_DEPTH";

/// Parse configuration with the depth limit taken from [`MAX_DEPTH_ENV`]
/// when it holds a positive integer.
pub fn parse_config_from_env() -> ParseConfig {
    parse_config_with_depth(std::env::var(MAX_DEPTH_ENV).ok().as_deref())
}

fn parse_config_with_depth(value: Option<&str>) -> ParseConfig {
    let mut config = ParseConfig::default();
    match value.map(|v| v.trim().parse::<usize>()) {
        Some(Ok(depth)) if depth > 0 => config.max_depth = depth,
        Some(_) => warn!(
            value = value.unwrap_or_default(),
            default = config.max_depth,
            "ignoring invalid {}",
            MAX_DEPTH_ENV
        ),
        None => {}
    }
    config
}

/// Open the CSV sink: the given file, or stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, CliError> {
    match path {
        Some(p) => {
            let file = File::create(p).map_err(|e| CliError::io_error(p, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
