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

//! Throughput formatting.

/// Placeholder for values that cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Duration sentinel meaning "no measurement".
pub const NO_DURATION: i64 = -1;

/// Formats `count` items processed in `ns` nanoseconds as a per-second rate.
///
/// Returns [`NOT_AVAILABLE`] when there is nothing to count, when the
/// duration is the [`NO_DURATION`] sentinel, or when it is zero. A negative
/// duration, left by bias correction on a run within noise of the baseline,
/// gives a negative rate.
///
/// # Examples
///
/// ```
/// use bench_tables::throughput::format_throughput;
///
/// assert_eq!(format_throughput(100, 1_000_000), "100.00K");
/// assert_eq!(format_throughput(0, 1_000_000), "N/A");
/// ```
pub fn format_throughput(count: u64, ns: i64) -> String {
    if count == 0 || ns == NO_DURATION || ns == 0 {
        return NOT_AVAILABLE.to_string();
    }

    let seconds = ns as f64 / 1_000_000_000.0;
    format_number(count as f64 / seconds)
}

/// Formats a number with two decimals and a `K`/`M`/`B` magnitude suffix.
pub fn format_number(n: f64) -> String {
    let (value, suffix) = if n >= 1_000_000_000.0 {
        (n / 1_000_000_000.0, "B")
    } else if n >= 1_000_000.0 {
        (n / 1_000_000.0, "M")
    } else if n >= 1_000.0 {
        (n / 1_000.0, "K")
    } else {
        (n, "")
    };
    format!("{value:.2}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_suffixes() {
        assert_eq!(format_number(999.0), "999.00");
        assert_eq!(format_number(1_000.0), "1.00K");
        assert_eq!(format_number(2_500_000.0), "2.50M");
        assert_eq!(format_number(7_250_000_000.0), "7.25B");
        assert_eq!(format_number(12.0), "12.00");
    }

    #[test]
    fn test_format_throughput() {
        // 200 bytes in 1 ms
        assert_eq!(format_throughput(200, 1_000_000), "200.00K");
        // 100 lines in 1 µs
        assert_eq!(format_throughput(100, 1_000), "100.00M");
        // 3 lines in 1 s
        assert_eq!(format_throughput(3, 1_000_000_000), "3.00");
    }

    #[test]
    fn test_format_throughput_not_available() {
        assert_eq!(format_throughput(0, 1_000), NOT_AVAILABLE);
        assert_eq!(format_throughput(10, NO_DURATION), NOT_AVAILABLE);
        assert_eq!(format_throughput(10, 0), NOT_AVAILABLE);
    }

    #[test]
    fn test_format_throughput_negative_duration() {
        assert_eq!(format_throughput(100, -1_999_000), "-50025.01");
        assert_eq!(format_throughput(10, -2), "-5000000000.00");
    }
}
