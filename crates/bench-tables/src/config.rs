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

//! Report configuration.
//!
//! The defaults reproduce the standard comparison report: `solc` is the
//! reference parser, its `empty` benchmark measurement is its fixed startup
//! overhead, and tables are produced for lexing and parsing.

use crate::timing::OperationKind;

/// Parser whose fixed per-invocation overhead is subtracted.
pub const DEFAULT_BASELINE_PARSER: &str = "solc";

/// Benchmark whose measurement is treated as pure overhead.
pub const DEFAULT_BASELINE_BENCHMARK: &str = "empty";

/// Time left on the baseline measurement after correction, in nanoseconds.
pub const DEFAULT_BASELINE_FLOOR_NS: i64 = 1_000;

/// Operation kinds that get a table by default, in output order.
pub const DEFAULT_KINDS: &[OperationKind] = &[OperationKind::Lex, OperationKind::Parse];

/// Identifies the fixed-overhead series to strip from the reference parser.
///
/// # Example
///
/// ```
/// use bench_tables::config::BaselineConfig;
///
/// let baseline = BaselineConfig::default().with_parser("solang");
/// assert_eq!(baseline.parser, "solang");
/// assert_eq!(baseline.benchmark, "empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineConfig {
    /// Reference parser name.
    pub parser: String,
    /// Benchmark measuring the reference parser's overhead only.
    pub benchmark: String,
    /// Nanoseconds kept on the baseline measurement itself.
    pub floor_ns: i64,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            parser: DEFAULT_BASELINE_PARSER.to_string(),
            benchmark: DEFAULT_BASELINE_BENCHMARK.to_string(),
            floor_ns: DEFAULT_BASELINE_FLOOR_NS,
        }
    }
}

impl BaselineConfig {
    /// Sets the reference parser.
    pub fn with_parser(mut self, parser: impl Into<String>) -> Self {
        self.parser = parser.into();
        self
    }

    /// Sets the baseline benchmark.
    pub fn with_benchmark(mut self, benchmark: impl Into<String>) -> Self {
        self.benchmark = benchmark.into();
        self
    }

    /// Sets the floor kept on the baseline measurement.
    pub fn with_floor_ns(mut self, floor_ns: i64) -> Self {
        self.floor_ns = floor_ns;
        self
    }
}

/// Configuration for a full report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Bias correction settings, or `None` to report raw measurements.
    pub baseline: Option<BaselineConfig>,
    /// Operation kinds to tabulate, in output order.
    pub kinds: Vec<OperationKind>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            baseline: Some(BaselineConfig::default()),
            kinds: DEFAULT_KINDS.to_vec(),
        }
    }
}

impl ReportConfig {
    /// Replaces the bias correction settings.
    pub fn with_baseline(mut self, baseline: BaselineConfig) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Disables bias correction.
    pub fn without_baseline(mut self) -> Self {
        self.baseline = None;
        self
    }

    /// Replaces the tabulated operation kinds.
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = OperationKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }
}
