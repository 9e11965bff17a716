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

//! Bench Tables
//!
//! Turns the console output of the parser benchmark suite into markdown
//! comparison tables: point-estimate time, lines of code per second, and bytes
//! per second for every parser on every benchmark corpus.
//!
//! ## Pipeline
//!
//! 1. [`header`]: corpus sizes from the leading `name: N LoC, N bytes` lines
//! 2. [`timing`]: `parser/<benchmark>/<parser>/<kind> time: [lo mid hi]` blocks
//! 3. [`units`]: time values to integer nanoseconds and back to labels
//! 4. [`baseline`]: subtracts the reference parser's startup overhead
//! 5. [`report`]: per-benchmark, per-kind tables rendered via [`table`]
//!
//! ## Usage
//!
//! ```bash
//! cargo bench -p solar-bench --bench criterion 2>&1 | bench-tables > tables.md
//! ```
//!
//! From Rust:
//!
//! ```
//! use bench_tables::{generate_report, ReportConfig};
//!
//! let input = "\
//! empty: 0 LoC, 0 bytes
//!
//! parser/empty/solar/parse time: [310.1 ns 312.4 ns 315.0 ns]
//! ";
//! let config = ReportConfig::default().without_baseline();
//! let report = generate_report(input, &config).unwrap();
//! assert!(report.to_markdown().starts_with("### empty (0 LoC, 0 bytes)"));
//! ```

pub mod baseline;
pub mod config;
pub mod error;
pub mod header;
pub mod report;
pub mod table;
pub mod throughput;
pub mod timing;
pub mod units;

pub use baseline::apply_baseline;
pub use config::{BaselineConfig, ReportConfig};
pub use error::{ReportError, Result};
pub use header::{extract_headers, BenchmarkHeader};
pub use report::{generate_report, BenchmarkSection, ComparisonReport, ComparisonRow, KindTable};
pub use table::{Alignment, Table};
pub use throughput::format_throughput;
pub use timing::{extract_timings, parser_set, OperationKind, TimingRecord};
pub use units::{format_time, normalize};
