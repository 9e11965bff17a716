// Bench Tables - parser benchmark comparison reports
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

//! Command-line front end for bench-tables.
//!
//! Reads benchmark console output from standard input and prints comparison
//! tables to standard output. With no flags it reports lexing and parsing,
//! with `solc`'s startup overhead (its `empty` benchmark time) removed.
//!
//! ```bash
//! cargo bench -p solar-bench --bench criterion 2>&1 | tee bench.log
//! bench-tables < bench.log > tables.md
//! bench-tables --kinds lex,parse,lower --no-baseline < bench.log
//! ```

pub mod error;

use bench_tables::config::{
    DEFAULT_BASELINE_BENCHMARK, DEFAULT_BASELINE_FLOOR_NS, DEFAULT_BASELINE_PARSER,
};
use bench_tables::{generate_report, BaselineConfig, OperationKind, ReportConfig};
use clap::{Parser, ValueEnum};
use error::CliError;
use std::io::{Read, Write};
use tracing::info;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Markdown sections with pipe tables
    #[default]
    Markdown,
    /// Pretty-printed JSON document
    Json,
}

/// Turn parser benchmark output into comparison tables
#[derive(Parser, Debug)]
#[command(name = "bench-tables")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Parser whose fixed startup overhead is subtracted
    #[arg(long, value_name = "NAME", default_value = DEFAULT_BASELINE_PARSER)]
    pub baseline_parser: String,

    /// Benchmark measuring only that overhead
    #[arg(long, value_name = "NAME", default_value = DEFAULT_BASELINE_BENCHMARK)]
    pub baseline_benchmark: String,

    /// Nanoseconds left on the baseline measurement after correction
    #[arg(long, value_name = "NS", default_value_t = DEFAULT_BASELINE_FLOOR_NS)]
    pub baseline_floor_ns: i64,

    /// Report raw measurements without overhead correction
    #[arg(long, conflicts_with_all = ["baseline_parser", "baseline_benchmark", "baseline_floor_ns"])]
    pub no_baseline: bool,

    /// Operation kinds to tabulate, in output order
    #[arg(long, value_name = "KIND", value_delimiter = ',', default_values = ["lex", "parse"])]
    pub kinds: Vec<OperationKind>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,
}

impl Cli {
    /// Report configuration selected by the flags.
    pub fn report_config(&self) -> ReportConfig {
        let config = ReportConfig::default().with_kinds(self.kinds.iter().cloned());
        if self.no_baseline {
            config.without_baseline()
        } else {
            config.with_baseline(
                BaselineConfig::default()
                    .with_parser(&self.baseline_parser)
                    .with_benchmark(&self.baseline_benchmark)
                    .with_floor_ns(self.baseline_floor_ns),
            )
        }
    }

    /// Renders the report for `input` in the selected format.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be turned into a report.
    pub fn render(&self, input: &str) -> Result<String, CliError> {
        let report = generate_report(input, &self.report_config())?;
        info!(benchmarks = report.benchmarks.len(), "generated comparison report");

        match self.format {
            OutputFormat::Markdown => Ok(report.to_markdown()),
            OutputFormat::Json => {
                let mut json = report.to_json()?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Reads all of `input`, renders the report, and writes it to `output`.
    ///
    /// Nothing is written unless the whole report renders.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or if report generation fails.
    pub fn run<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<(), CliError> {
        let mut text = String::new();
        input.read_to_string(&mut text).map_err(CliError::Input)?;

        let rendered = self.render(&text)?;

        output.write_all(rendered.as_bytes()).map_err(CliError::Output)?;
        output.flush().map_err(CliError::Output)
    }
}
