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

//! Timing record extraction.
//!
//! Criterion prints one block per measured function:
//!
//! ```text
//! parser/verifier/solar/parse
//!                         time:   [1.2310 ms 1.2345 ms 1.2399 ms]
//! ```
//!
//! The id is `parser/<benchmark>/<parser>/<kind>`, the bracketed triple is
//! `[lower estimate upper]`. Only the point estimate is kept. The label and
//! the bracket may sit on the same line or be split across two.

use crate::error::Result;
use crate::units::parse_time;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

static TIMING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"parser/(?P<bench>\w+)/(?P<parser>\w+)/(?P<kind>\w+)\s*time:\s*\n?\s*\[",
        r"(?P<lo>\s*[\d.]+ \w+)(?P<mid>\s*[\d.]+ \w+)(?P<hi>\s*[\d.]+ \w+)\]",
    ))
    .expect("timing pattern is valid")
});

/// The phase of work a measurement covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
    /// Tokenization only.
    Lex,
    /// Full parse to an AST.
    Parse,
    /// AST lowering after parsing.
    Lower,
    /// Any other kind id, kept verbatim.
    Other(String),
}

impl OperationKind {
    /// Maps a kind id from a benchmark name to a kind.
    pub fn from_id(id: &str) -> Self {
        match id {
            "lex" => Self::Lex,
            "parse" => Self::Parse,
            "lower" => Self::Lower,
            other => Self::Other(other.to_string()),
        }
    }

    /// The kind id as it appears in benchmark names.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lex => "lex",
            Self::Parse => "parse",
            Self::Lower => "lower",
            Self::Other(id) => id,
        }
    }

    /// Heading text: the id with its first letter upper-cased.
    pub fn title(&self) -> String {
        let id = self.as_str();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() || !id.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(format!("invalid operation kind '{s}'"));
        }
        Ok(Self::from_id(id))
    }
}

impl Serialize for OperationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One measured (benchmark, parser, kind) point estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRecord {
    /// Benchmark (input corpus) name.
    pub benchmark: String,
    /// Parser implementation name.
    pub parser: String,
    /// Measured phase.
    pub kind: OperationKind,
    /// Display text of the time; regenerated after bias correction.
    pub time_text: String,
    /// Point estimate in nanoseconds.
    pub nanoseconds: i64,
}

/// Extracts every timing record from benchmark tool output, in input order.
///
/// Text that does not match the timing block shape is ignored.
///
/// # Errors
///
/// Fails on the first matched time value whose number or unit is malformed.
///
/// # Examples
///
/// ```
/// use bench_tables::timing::{extract_timings, OperationKind};
///
/// let out = "parser/empty/solc/lex time: [1.0 ms 1.2 ms 1.4 ms]";
/// let records = extract_timings(out).unwrap();
/// assert_eq!(records[0].benchmark, "empty");
/// assert_eq!(records[0].parser, "solc");
/// assert_eq!(records[0].kind, OperationKind::Lex);
/// assert_eq!(records[0].nanoseconds, 1_200_000);
/// ```
pub fn extract_timings(text: &str) -> Result<Vec<TimingRecord>> {
    let mut records = Vec::new();

    for caps in TIMING_RE.captures_iter(text) {
        let time_text = caps["mid"].trim().to_string();
        let nanoseconds = parse_time(&time_text)?;

        records.push(TimingRecord {
            benchmark: caps["bench"].to_string(),
            parser: caps["parser"].to_string(),
            kind: OperationKind::from_id(&caps["kind"]),
            time_text,
            nanoseconds,
        });
    }

    debug!(count = records.len(), "extracted timing records");
    Ok(records)
}

/// Distinct parser names across all records, sorted.
pub fn parser_set(records: &[TimingRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.parser.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
