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

//! Comparison report assembly and rendering.
//!
//! A report has one section per benchmark header, in input order. Each
//! section has one table per configured operation kind with a row for every
//! parser seen anywhere in the input, so all tables share the same rows.

use crate::baseline::apply_baseline;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::header::{extract_headers, BenchmarkHeader};
use crate::table::Table;
use crate::throughput::{format_throughput, NOT_AVAILABLE};
use crate::timing::{extract_timings, parser_set, OperationKind, TimingRecord};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Column headers of every comparison table.
pub const TABLE_HEADERS: [&str; 4] = ["Parser", "Time", "LoC/s", "Bytes/s"];

/// One parser's figures in a comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// Parser name.
    pub parser: String,
    /// Formatted time, or `N/A`.
    pub time: String,
    /// Lines of code per second.
    pub loc_per_sec: String,
    /// Bytes per second.
    pub bytes_per_sec: String,
}

impl ComparisonRow {
    /// A row for a parser with no measurement.
    pub fn not_available(parser: impl Into<String>) -> Self {
        Self {
            parser: parser.into(),
            time: NOT_AVAILABLE.to_string(),
            loc_per_sec: NOT_AVAILABLE.to_string(),
            bytes_per_sec: NOT_AVAILABLE.to_string(),
        }
    }

    /// A row computed from a measurement on the given benchmark.
    pub fn from_record(record: &TimingRecord, header: &BenchmarkHeader) -> Self {
        Self {
            parser: record.parser.clone(),
            time: record.time_text.clone(),
            loc_per_sec: format_throughput(header.loc, record.nanoseconds),
            bytes_per_sec: format_throughput(header.bytes, record.nanoseconds),
        }
    }

    /// Whether any figure is available.
    pub fn is_available(&self) -> bool {
        self.time != NOT_AVAILABLE
    }
}

/// Comparison of all parsers for one operation kind on one benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindTable {
    /// Operation kind the table compares.
    pub kind: OperationKind,
    /// One row per parser, sorted by name.
    pub rows: Vec<ComparisonRow>,
}

impl KindTable {
    /// Builds the table for `kind` on `header`, one row per entry of `parsers`.
    ///
    /// When a parser has several records for the same benchmark and kind the
    /// first one is used.
    pub fn build(
        header: &BenchmarkHeader,
        kind: &OperationKind,
        parsers: &[String],
        records: &[TimingRecord],
    ) -> Self {
        let rows = parsers
            .iter()
            .map(|parser| {
                records
                    .iter()
                    .find(|r| r.benchmark == header.name && &r.parser == parser && &r.kind == kind)
                    .map(|r| ComparisonRow::from_record(r, header))
                    .unwrap_or_else(|| ComparisonRow::not_available(parser))
            })
            .collect();

        Self {
            kind: kind.clone(),
            rows,
        }
    }

    /// The table as rendered text cells.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(TABLE_HEADERS);
        for row in &self.rows {
            table.push_row([
                row.parser.as_str(),
                row.time.as_str(),
                row.loc_per_sec.as_str(),
                row.bytes_per_sec.as_str(),
            ]);
        }
        table
    }
}

/// All tables for one benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkSection {
    /// Benchmark name and corpus size.
    #[serde(flatten)]
    pub header: BenchmarkHeader,
    /// One table per configured operation kind.
    pub tables: Vec<KindTable>,
}

impl fmt::Display for BenchmarkSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({} LoC, {} bytes)",
            self.header.name, self.header.loc, self.header.bytes
        )?;
        writeln!(f)?;

        for table in &self.tables {
            writeln!(f, "#### {}", table.kind.title())?;
            write!(f, "{}", table.to_table())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The full comparison report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    /// Sections in header order.
    pub benchmarks: Vec<BenchmarkSection>,
}

impl ComparisonReport {
    /// Builds the report from headers and (already corrected) timing records.
    pub fn build(headers: &[BenchmarkHeader], records: &[TimingRecord], kinds: &[OperationKind]) -> Self {
        let parsers = parser_set(records);
        debug!(parsers = ?parsers, "building comparison tables");

        for record in records {
            if !headers.iter().any(|h| h.name == record.benchmark) {
                warn!(
                    benchmark = %record.benchmark,
                    parser = %record.parser,
                    "timing record for a benchmark with no size header"
                );
            }
        }
        for kind in kinds {
            if !records.iter().any(|r| &r.kind == kind) {
                warn!(%kind, "no measurements for operation kind");
            }
        }

        let benchmarks = headers
            .iter()
            .map(|header| BenchmarkSection {
                header: header.clone(),
                tables: kinds
                    .iter()
                    .map(|kind| KindTable::build(header, kind, &parsers, records))
                    .collect(),
            })
            .collect();

        Self { benchmarks }
    }

    /// Renders the report as markdown sections.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.benchmarks {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

/// Turns raw benchmark tool output into a comparison report.
///
/// Runs the whole pipeline: header extraction, timing extraction, bias
/// correction (when configured) and table construction. Nothing is rendered
/// until every step has succeeded.
///
/// # Errors
///
/// Fails on a malformed time value or, with bias correction enabled, a
/// missing baseline measurement.
///
/// # Examples
///
/// ```
/// use bench_tables::{generate_report, ReportConfig};
///
/// let input = "\
/// empty: 0 LoC, 0 bytes
/// foo: 100 LoC, 200 bytes
///
/// parser/empty/solc/lex time: [1.0 ms 1.0 ms 1.0 ms]
/// parser/foo/solc/lex time: [3.0 ms 3.0 ms 3.0 ms]
/// ";
///
/// let report = generate_report(input, &ReportConfig::default()).unwrap();
/// let markdown = report.to_markdown();
/// assert!(markdown.contains("### foo (100 LoC, 200 bytes)"));
/// assert!(markdown.contains("| solc     | 2.0010 ms | 49.98K  | 99.95K    |"));
/// ```
pub fn generate_report(input: &str, config: &ReportConfig) -> Result<ComparisonReport> {
    let headers = extract_headers(input.lines());
    let mut records = extract_timings(input)?;

    if let Some(baseline) = &config.baseline {
        apply_baseline(&mut records, baseline)?;
    }

    Ok(ComparisonReport::build(&headers, &records, &config.kinds))
}
