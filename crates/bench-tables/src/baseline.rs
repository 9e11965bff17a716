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

//! Reference parser bias correction.
//!
//! The reference parser runs as a separate process per measurement, so every
//! one of its timings includes a large fixed startup cost. Its measurement on
//! the empty benchmark is that cost alone; subtracting it (less a small
//! floor) leaves only the work proportional to the input.

use crate::config::BaselineConfig;
use crate::error::{ReportError, Result};
use crate::timing::TimingRecord;
use crate::units::format_time;
use tracing::debug;

/// Subtracts the reference parser's fixed overhead from its measurements.
///
/// The overhead is the first reference-parser record on the baseline
/// benchmark, minus `floor_ns`, so the baseline record itself ends at exactly
/// `floor_ns`. Display text of every corrected record is regenerated. Records
/// of other parsers are left untouched.
///
/// Returns the subtracted overhead in nanoseconds.
///
/// # Errors
///
/// Returns [`ReportError::MissingBaseline`] when there is no reference-parser
/// record on the baseline benchmark; no record is modified in that case.
///
/// # Examples
///
/// ```
/// use bench_tables::baseline::apply_baseline;
/// use bench_tables::config::BaselineConfig;
/// use bench_tables::timing::extract_timings;
///
/// let mut records = extract_timings(
///     "parser/empty/solc/parse time: [5 us 5 us 5 us]\n\
///      parser/big/solc/parse time: [9 us 9 us 9 us]",
/// )
/// .unwrap();
///
/// let overhead = apply_baseline(&mut records, &BaselineConfig::default()).unwrap();
/// assert_eq!(overhead, 4_000);
/// assert_eq!(records[0].nanoseconds, 1_000);
/// assert_eq!(records[1].nanoseconds, 5_000);
/// ```
pub fn apply_baseline(records: &mut [TimingRecord], baseline: &BaselineConfig) -> Result<i64> {
    let base_ns = records
        .iter()
        .find(|r| r.benchmark == baseline.benchmark && r.parser == baseline.parser)
        .map(|r| r.nanoseconds)
        .ok_or_else(|| ReportError::missing_baseline(&baseline.parser, &baseline.benchmark))?;

    let overhead = base_ns.saturating_sub(baseline.floor_ns);
    debug!(
        parser = %baseline.parser,
        benchmark = %baseline.benchmark,
        base_ns,
        overhead,
        "subtracting reference parser overhead"
    );

    for record in records.iter_mut().filter(|r| r.parser == baseline.parser) {
        record.nanoseconds = record.nanoseconds.saturating_sub(overhead);
        record.time_text = format_time(record.nanoseconds);
    }

    Ok(overhead)
}
