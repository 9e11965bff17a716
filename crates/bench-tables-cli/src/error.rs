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

//! Structured error types for the bench-tables CLI.

use bench_tables::ReportError;
use std::io;
use thiserror::Error;

/// Errors that end a CLI run.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading standard input failed, including non-UTF-8 input.
    #[error("Failed to read standard input: {0}")]
    Input(#[source] io::Error),

    /// Writing the report to standard output failed.
    #[error("Failed to write report: {0}")]
    Output(#[source] io::Error),

    /// The benchmark output could not be turned into a report.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// JSON rendering failed.
    #[error("JSON format error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_is_transparent() {
        let err = CliError::from(ReportError::missing_baseline("solc", "empty"));
        assert_eq!(
            err.to_string(),
            ReportError::missing_baseline("solc", "empty").to_string()
        );
    }

    #[test]
    fn test_input_error_display() {
        let err = CliError::Input(io::Error::new(
            io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        ));
        let msg = err.to_string();
        assert!(msg.contains("standard input"));
        assert!(msg.contains("valid UTF-8"));
    }
}
