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

//! Benchmark header extraction.
//!
//! Before running, the benchmark harness prints the size of every input
//! corpus, one per line, followed by a blank line:
//!
//! ```text
//! empty: 0 LoC, 0 bytes
//! Counter: 14 LoC, 258 bytes
//!
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>\w+): (?P<loc>\d+) LoC, (?P<bytes>\d+) bytes")
        .expect("header pattern is valid")
});

/// Size of one benchmark input corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkHeader {
    /// Benchmark name, matching the second segment of timing ids.
    pub name: String,
    /// Lines of code in the corpus.
    pub loc: u64,
    /// Size of the corpus in bytes.
    pub bytes: u64,
}

impl BenchmarkHeader {
    /// Creates a header.
    pub fn new(name: impl Into<String>, loc: u64, bytes: u64) -> Self {
        Self {
            name: name.into(),
            loc,
            bytes,
        }
    }

    /// Parses a single `name: <n> LoC, <n> bytes` line.
    ///
    /// The pattern must match at the start of the line; trailing text is
    /// ignored. Returns `None` for anything else, including counts that do
    /// not fit in a `u64`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let caps = HEADER_RE.captures(line)?;
        match (caps["loc"].parse(), caps["bytes"].parse()) {
            (Ok(loc), Ok(bytes)) => Some(Self::new(&caps["name"], loc, bytes)),
            _ => {
                warn!(line, "skipping benchmark header with out-of-range counts");
                None
            }
        }
    }
}

/// Collects benchmark headers from the leading lines of the input.
///
/// Scanning stops at the first empty or whitespace-only line. Lines that do
/// not match the header shape are skipped. Order of first appearance is
/// preserved; a repeated name keeps its first sizes.
///
/// # Examples
///
/// ```
/// use bench_tables::header::extract_headers;
///
/// let text = "Counter: 14 LoC, 258 bytes\n\nlater: 1 LoC, 1 bytes\n";
/// let headers = extract_headers(text.lines());
/// assert_eq!(headers.len(), 1);
/// assert_eq!(headers[0].name, "Counter");
/// ```
pub fn extract_headers<'a, I>(lines: I) -> Vec<BenchmarkHeader>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut headers: Vec<BenchmarkHeader> = Vec::new();

    for header in lines
        .into_iter()
        .take_while(|line| !line.trim().is_empty())
        .filter_map(BenchmarkHeader::parse_line)
    {
        if headers.iter().any(|h| h.name == header.name) {
            debug!(name = %header.name, "ignoring repeated benchmark header");
            continue;
        }
        headers.push(header);
    }

    debug!(count = headers.len(), "extracted benchmark headers");
    headers
}
