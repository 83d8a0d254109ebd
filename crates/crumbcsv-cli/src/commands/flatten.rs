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

//! The flatten command.

use crate::cli::Cli;
use crate::commands::{open_output, parse_config_from_env};
use crate::error::CliError;
use crumbcsv::csv::ToCsvConfig;
use crumbcsv::{FlattenConfig, Flattener, MatchMode};
use tracing::info;

/// Validate the arguments, flatten the document and write CSV.
///
/// Returns the number of data rows written.
///
/// # Errors
///
/// Configuration problems are reported before the output file is created.
pub fn flatten(cli: &Cli) -> Result<usize, CliError> {
    let mode = MatchMode::from(cli.match_mode);
    let config = FlattenConfig::new(&cli.xml_file, cli.element.iter().cloned(), mode)
        .map_err(|e| CliError::config(e.to_string()))?;
    let csv_config =
        ToCsvConfig::with_delimiter(cli.delimiter).map_err(|e| CliError::config(e.to_string()))?;

    info!(
        file = %cli.xml_file.display(),
        crumbs = config.patterns().len(),
        mode = %mode,
        "flattening"
    );

    let mut flattener = Flattener::new(config)
        .with_parse_config(parse_config_from_env())
        .with_csv_config(csv_config);

    let sink = open_output(cli.output.as_deref())?;
    flattener
        .run(sink)
        .map_err(|e| CliError::from_flatten(e, &cli.xml_file))
}
