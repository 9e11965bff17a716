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

//! Error types for report generation.
//!
//! Only two conditions abort a run: a timing value that cannot be converted
//! to nanoseconds, and a missing baseline measurement. Everything else that
//! does not match the expected shapes is skipped, not reported.

use thiserror::Error;

/// Result type for report generation.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Fatal conditions encountered while turning benchmark output into tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A timing value carried a unit outside `s`, `ms`, `us`/`µs`, `ns`.
    #[error("Unknown unit '{unit}' in time value '{text}'")]
    UnknownUnit {
        /// The offending unit label
        unit: String,
        /// The full time value it appeared in
        text: String,
    },

    /// A timing value's numeral could not be parsed as a number.
    #[error("Invalid number '{value}' in time value '{text}'")]
    InvalidNumber {
        /// The offending numeral
        value: String,
        /// The full time value it appeared in
        text: String,
    },

    /// The reference parser has no measurement on the baseline benchmark.
    #[error("Couldn't find base {parser} time: no '{parser}' measurement on the '{benchmark}' benchmark")]
    MissingBaseline {
        /// Reference parser name
        parser: String,
        /// Baseline benchmark name
        benchmark: String,
    },
}

impl ReportError {
    /// Create an unknown unit error.
    pub fn unknown_unit(unit: impl Into<String>, text: impl Into<String>) -> Self {
        Self::UnknownUnit {
            unit: unit.into(),
            text: text.into(),
        }
    }

    /// Create an invalid number error.
    pub fn invalid_number(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self::InvalidNumber {
            value: value.into(),
            text: text.into(),
        }
    }

    /// Create a missing baseline error.
    pub fn missing_baseline(parser: impl Into<String>, benchmark: impl Into<String>) -> Self {
        Self::MissingBaseline {
            parser: parser.into(),
            benchmark: benchmark.into(),
        }
    }
}
