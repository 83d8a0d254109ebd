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

//! Command-line argument surface.

use clap::{Parser, ValueEnum};
use crumbcsv::MatchMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "xml-to-csv")]
#[command(author, version, long_about = None)]
#[command(about = "Flatten XML elements selected by bread crumb into CSV")]
pub struct Cli {
    /// XML document to read
    #[arg(long = "xmlFile", visible_alias = "xml-file", value_name = "PATH")]
    pub xml_file: PathBuf,

    /// Bread crumb to select, e.g. `sailpoint.Identity` (repeatable)
    #[arg(long = "element", visible_alias = "crumb", value_name = "CRUMB")]
    pub element: Vec<String>,

    /// How crumbs are compared with element paths
    #[arg(
        long = "matchMode",
        visible_alias = "match-mode",
        value_enum,
        default_value_t = ModeArg::Exact
    )]
    pub match_mode: ModeArg,

    /// Output file path (defaults to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field delimiter, a single ASCII character
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Log progress to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Element path equals the crumb
    #[value(name = "exact")]
    Exact,
    /// Element path starts with the crumb
    #[value(name = "beginsWith")]
    BeginsWith,
    /// Crumb appears as a contiguous run of the element path
    #[value(name = "contains")]
    Contains,
    /// Element path ends with the crumb
    #[value(name = "endsWith")]
    EndsWith,
}

impl From<ModeArg> for MatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exact => MatchMode::Exact,
            ModeArg::BeginsWith => MatchMode::BeginsWith,
            ModeArg::Contains => MatchMode::Contains,
            ModeArg::EndsWith => MatchMode::EndsWith,
        }
    }
}
