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

//! Time unit conversion.
//!
//! Benchmark tools print point estimates as `<number> <unit>`. These are
//! normalized to integer nanoseconds for arithmetic and rendered back to a
//! human-readable label with [`format_time`].

use crate::error::{ReportError, Result};

const NS_PER_US: f64 = 1_000.0;
const NS_PER_MS: f64 = 1_000_000.0;
const NS_PER_S: f64 = 1_000_000_000.0;

/// Micro sign as written in rendered times.
pub const MICRO_LABEL: &str = "µs";

/// Width the rendered numeral is cut to.
const TIME_NUMERAL_WIDTH: usize = 6;

/// Nanoseconds per unit label, or `None` for an unrecognized label.
///
/// Besides the micro sign, `us`, the Greek mu and the UTF-8 micro sign read
/// back as Latin-1 (`Âµs`) all mean microseconds.
pub fn unit_multiplier(unit: &str) -> Option<f64> {
    match unit {
        "s" => Some(NS_PER_S),
        "ms" => Some(NS_PER_MS),
        "us" | "µs" | "μs" | "Âµs" => Some(NS_PER_US),
        "ns" => Some(1.0),
        _ => None,
    }
}

/// Converts `value` expressed in `unit` to whole nanoseconds, truncating.
///
/// # Errors
///
/// Returns [`ReportError::UnknownUnit`] for a label outside the recognized set.
///
/// # Examples
///
/// ```
/// use bench_tables::units::normalize;
///
/// assert_eq!(normalize(1.0, "ms").unwrap(), 1_000_000);
/// assert_eq!(normalize(2.5, "µs").unwrap(), 2_500);
/// assert!(normalize(1.0, "min").is_err());
/// ```
pub fn normalize(value: f64, unit: &str) -> Result<i64> {
    let multiplier = unit_multiplier(unit)
        .ok_or_else(|| ReportError::unknown_unit(unit, format!("{value} {unit}")))?;
    Ok((value * multiplier) as i64)
}

/// Parses a `<number> <unit>` time value into nanoseconds.
///
/// Surrounding whitespace is ignored. The numeral and the unit are separated
/// by a single space.
///
/// # Errors
///
/// Returns [`ReportError::InvalidNumber`] when the numeral does not parse, or
/// [`ReportError::UnknownUnit`] when the unit is missing or unrecognized.
pub fn parse_time(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let (value, unit) = trimmed
        .split_once(' ')
        .ok_or_else(|| ReportError::unknown_unit("", trimmed))?;

    let number: f64 = value
        .parse()
        .map_err(|_| ReportError::invalid_number(value, trimmed))?;

    match unit_multiplier(unit) {
        Some(multiplier) => Ok((number * multiplier) as i64),
        None => Err(ReportError::unknown_unit(unit, trimmed)),
    }
}

/// Renders a nanosecond duration with the largest unit it reaches.
///
/// The value is printed with six decimals and the numeral is then cut to six
/// characters, so `1_234_567` ns renders as `1.2345 ms` and `123_456_789` ns
/// as `123.45 ms`.
///
/// # Examples
///
/// ```
/// use bench_tables::units::format_time;
///
/// assert_eq!(format_time(1_000), "1.0000 µs");
/// assert_eq!(format_time(500), "500.00 ns");
/// ```
pub fn format_time(ns: i64) -> String {
    let (value, label) = if ns >= 1_000_000_000 {
        (ns as f64 / NS_PER_S, "s")
    } else if ns >= 1_000_000 {
        (ns as f64 / NS_PER_MS, "ms")
    } else if ns >= 1_000 {
        (ns as f64 / NS_PER_US, MICRO_LABEL)
    } else {
        (ns as f64, "ns")
    };

    let mut numeral = format!("{value:.6}");
    numeral.truncate(TIME_NUMERAL_WIDTH);
    format!("{numeral} {label}")
}
