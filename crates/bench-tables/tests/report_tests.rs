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

//! End-to-end report generation tests.
//!
//! Feeds captured-style benchmark console output through the whole pipeline
//! and checks the rendered report and the error paths.

use bench_tables::{
    generate_report, BaselineConfig, ComparisonReport, OperationKind, ReportConfig, ReportError,
};

// Shortened capture of a full comparison run.
const BENCH_OUTPUT: &str = "\
empty: 0 LoC, 0 bytes
Counter: 14 LoC, 258 bytes
verifier: 1290 LoC, 52140 bytes

Benchmarking parser/empty/solc/parse: Warming up for 3.0000 s
parser/empty/solc/parse time:   [2.0100 ms 2.0250 ms 2.0400 ms]
parser/empty/solar/lex  time:   [21.100 ns 21.300 ns 21.500 ns]
parser/empty/solar/parse
                        time:   [95.000 ns 96.000 ns 97.000 ns]
parser/Counter/solc/parse
                        time:   [2.1000 ms 2.1250 ms 2.1500 ms]
parser/Counter/solar/lex
                        time:   [1.5000 µs 1.5500 µs 1.6000 µs]
parser/Counter/solar/parse
                        time:   [4.0000 µs 4.1000 µs 4.2000 µs]
                        change: [-1.0232% +0.1285% +1.3050%] (p = 0.84 > 0.05)
                        No change in performance detected.
parser/verifier/solang/parse
                        time:   [3.9000 ms 4.0000 ms 4.1000 ms]
parser/verifier/solar/parse
                        time:   [500.00 µs 516.00 µs 530.00 µs]
";

fn markdown(input: &str) -> String {
    generate_report(input, &ReportConfig::default())
        .expect("report generation succeeds")
        .to_markdown()
}

fn section<'a>(markdown: &'a str, heading: &str) -> &'a str {
    let start = markdown.find(heading).expect("section present");
    let rest = &markdown[start + heading.len()..];
    match rest.find("\n### ") {
        Some(end) => &rest[..end],
        None => rest,
    }
}

#[test]
fn test_sections_follow_header_order() {
    let md = markdown(BENCH_OUTPUT);

    let empty = md.find("### empty (0 LoC, 0 bytes)").unwrap();
    let counter = md.find("### Counter (14 LoC, 258 bytes)").unwrap();
    let verifier = md.find("### verifier (1290 LoC, 52140 bytes)").unwrap();
    assert!(empty < counter && counter < verifier);
    assert!(md.starts_with("### empty (0 LoC, 0 bytes)\n\n#### Lex\n"));
}

#[test]
fn test_parser_rows_sorted_and_identical_in_every_table() {
    let report = generate_report(BENCH_OUTPUT, &ReportConfig::default()).unwrap();

    for section in &report.benchmarks {
        assert_eq!(section.tables.len(), 2);
        for table in &section.tables {
            let parsers: Vec<_> = table.rows.iter().map(|r| r.parser.as_str()).collect();
            assert_eq!(parsers, vec!["solang", "solar", "solc"]);
        }
    }
}

#[test]
fn test_reference_parser_overhead_removed() {
    let report = generate_report(BENCH_OUTPUT, &ReportConfig::default()).unwrap();

    // 2.025 ms baseline, 1 µs kept: 2.125 ms - 2.024 ms = 101 µs
    let counter_parse = &report.benchmarks[1].tables[1];
    assert_eq!(counter_parse.kind, OperationKind::Parse);
    let solc = &counter_parse.rows[2];
    assert_eq!(solc.parser, "solc");
    assert_eq!(solc.time, "101.00 µs");
    assert_eq!(solc.loc_per_sec, "138.61K");

    let empty_parse = &report.benchmarks[0].tables[1];
    assert_eq!(empty_parse.rows[2].time, "1.0000 µs");
}

#[test]
fn test_other_parsers_keep_raw_text() {
    let report = generate_report(BENCH_OUTPUT, &ReportConfig::default()).unwrap();

    let verifier_parse = &report.benchmarks[2].tables[1];
    assert_eq!(verifier_parse.rows[0].time, "4.0000 ms");
    assert_eq!(verifier_parse.rows[1].time, "516.00 µs");
    assert_eq!(verifier_parse.rows[1].loc_per_sec, "2.50M");
    assert_eq!(verifier_parse.rows[1].bytes_per_sec, "101.05M");
}

#[test]
fn test_empty_benchmark_has_no_throughput() {
    let md = markdown(BENCH_OUTPUT);
    let empty = section(&md, "### empty");
    assert!(empty.contains("| solar    | 21.300 ns | N/A     | N/A       |"));
}

#[test]
fn test_missing_measurements_render_not_available() {
    let md = markdown(BENCH_OUTPUT);
    let verifier = section(&md, "### verifier");

    let lex = &verifier[verifier.find("#### Lex").unwrap()..verifier.find("#### Parse").unwrap()];
    for parser in ["solang", "solar", "solc"] {
        let row = lex.lines().find(|l| l.starts_with(&format!("| {parser} "))).unwrap();
        assert_eq!(row.matches("N/A").count(), 3, "row: {row}");
    }
}

#[test]
fn test_spec_style_minimal_input() {
    let input = "\
foo: 100 LoC, 200 bytes

parser/empty/solc/lex time: [1.0 ms 1.0 ms 1.0 ms]
parser/foo/solc/lex time: [1.0 ms 1.0 ms 1.0 ms]
";
    let md = markdown(input);

    assert!(md.starts_with("### foo (100 LoC, 200 bytes)\n\n#### Lex\n"));
    let lex = &md[md.find("#### Lex").unwrap()..md.find("#### Parse").unwrap()];
    let lex_row = lex.lines().find(|l| l.starts_with("| solc")).unwrap();
    assert!(!lex_row.contains("N/A"));
    assert!(lex_row.contains("1.0000 µs"));

    let parse = &md[md.find("#### Parse").unwrap()..];
    let parse_row = parse.lines().find(|l| l.starts_with("| solc")).unwrap();
    assert_eq!(parse_row.matches("N/A").count(), 3);
}

#[test]
fn test_reference_parser_faster_than_baseline() {
    let input = "\
foo: 100 LoC, 200 bytes

parser/empty/solc/lex time: [5 ms 5 ms 5 ms]
parser/foo/solc/lex time: [3 ms 3 ms 3 ms]
";
    let report = generate_report(input, &ReportConfig::default()).unwrap();

    // 3 ms - (5 ms - 1 µs) = -1.999 ms
    let solc = &report.benchmarks[0].tables[0].rows[0];
    assert_eq!(solc.parser, "solc");
    assert_eq!(solc.time, "-19990 ns");
    assert_eq!(solc.loc_per_sec, "-50025.01");
    assert!(solc.bytes_per_sec.starts_with("-100050.0"));
}

#[test]
fn test_missing_baseline_is_fatal() {
    let input = "foo: 1 LoC, 1 bytes\n\nparser/foo/solc/lex time: [1 ms 1 ms 1 ms]\n";
    let err = generate_report(input, &ReportConfig::default()).unwrap_err();
    assert_eq!(err, ReportError::missing_baseline("solc", "empty"));
}

#[test]
fn test_missing_baseline_ignored_when_disabled() {
    let input = "foo: 1 LoC, 1 bytes\n\nparser/foo/solc/lex time: [1 ms 1 ms 1 ms]\n";
    let config = ReportConfig::default().without_baseline();
    let report = generate_report(input, &config).unwrap();
    assert_eq!(report.benchmarks[0].tables[0].rows[0].time, "1 ms");
}

#[test]
fn test_unknown_unit_is_fatal() {
    let input = "\
parser/empty/solc/lex time: [1 ms 1 ms 1 ms]
parser/foo/solar/lex time: [1 ms 2 fortnights 3 ms]
";
    assert!(matches!(
        generate_report(input, &ReportConfig::default()),
        Err(ReportError::UnknownUnit { ref unit, .. }) if unit == "fortnights"
    ));
}

#[test]
fn test_custom_baseline_and_kinds() {
    let input = "\
big: 10 LoC, 10 bytes

parser/noop/slang/lower time: [6 us 6 us 6 us]
parser/big/slang/lower time: [16 us 16 us 16 us]
parser/big/solar/lower time: [2 us 2 us 2 us]
";
    let config = ReportConfig::default()
        .with_baseline(BaselineConfig::default().with_parser("slang").with_benchmark("noop"))
        .with_kinds([OperationKind::Lower]);

    let report = generate_report(input, &config).unwrap();
    let md = report.to_markdown();

    assert!(md.contains("#### Lower\n"));
    assert!(!md.contains("#### Lex"));
    let rows = &report.benchmarks[0].tables[0].rows;
    assert_eq!(rows[0].parser, "slang");
    assert_eq!(rows[0].time, "11.000 µs");
    assert_eq!(rows[1].time, "2 us");
}

#[test]
fn test_no_headers_no_output() {
    let input = "parser/empty/solc/lex time: [1 ms 1 ms 1 ms]\n";
    let report = generate_report(input, &ReportConfig::default()).unwrap();
    assert_eq!(report, ComparisonReport::default());
    assert!(report.to_markdown().is_empty());
}

#[test]
fn test_windows_line_endings() {
    let input = "foo: 1 LoC, 2 bytes\r\n\r\nparser/empty/solc/lex time:\r\n   [1 ms 1 ms 1 ms]\r\n";
    let report = generate_report(input, &ReportConfig::default()).unwrap();
    assert_eq!(report.benchmarks.len(), 1);
    assert_eq!(report.benchmarks[0].header.bytes, 2);
}
