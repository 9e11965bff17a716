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

//! Plain text tables rendered in markdown pipe format.

use std::fmt;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Text columns.
    Left,
    /// Columns whose every cell is a number.
    Right,
}

/// Padding added to each header's width when sizing its column.
const HEADER_PADDING: usize = 2;

/// A table with one header row and any number of data rows.
///
/// # Example
///
/// ```
/// use bench_tables::table::Table;
///
/// let mut table = Table::new(["Parser", "Runs"]);
/// table.push_row(["solar", "12"]);
///
/// assert_eq!(
///     table.to_pipe(),
///     "| Parser   |   Runs |\n|:---------|-------:|\n| solar    |     12 |\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row. Missing cells render empty; extra cells are dropped.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[index].as_str())
    }

    /// Alignment of every column.
    pub fn alignments(&self) -> Vec<Alignment> {
        (0..self.headers.len())
            .map(|i| {
                let mut cells = self.column(i).peekable();
                if cells.peek().is_some() && cells.all(is_numeric) {
                    Alignment::Right
                } else {
                    Alignment::Left
                }
            })
            .collect()
    }

    /// Width of every column, in characters, measured on the rendered cells.
    pub fn widths(&self) -> Vec<usize> {
        let cells = self.display_rows(&self.alignments());
        widths_of(&self.headers, &cells)
    }

    /// Data rows as they are printed.
    ///
    /// Numeric columns are normalized: integers print as integers, other
    /// numbers in `%g` style with six significant digits (`500.00` becomes
    /// `500`), and cells are padded on the right so decimal points line up.
    fn display_rows(&self, alignments: &[Alignment]) -> Vec<Vec<String>> {
        let columns: Vec<Vec<String>> = alignments
            .iter()
            .enumerate()
            .map(|(i, alignment)| match alignment {
                Alignment::Left => self.column(i).map(str::to_string).collect(),
                Alignment::Right => numeric_column(self.column(i)),
            })
            .collect();

        (0..self.rows.len())
            .map(|r| columns.iter().map(|column| column[r].clone()).collect())
            .collect()
    }

    /// Renders the table as a markdown pipe table, one line per row.
    pub fn to_pipe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alignments = self.alignments();
        let cells = self.display_rows(&alignments);
        let widths = widths_of(&self.headers, &cells);

        write_row(f, &self.headers, &widths, &alignments)?;

        let separator: Vec<String> = widths
            .iter()
            .zip(&alignments)
            .map(|(&width, alignment)| match alignment {
                Alignment::Left => format!(":{}", "-".repeat(width + 1)),
                Alignment::Right => format!("{}:", "-".repeat(width + 1)),
            })
            .collect();
        writeln!(f, "|{}|", separator.join("|"))?;

        for row in &cells {
            write_row(f, row, &widths, &alignments)?;
        }
        Ok(())
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    cells: &[String],
    widths: &[usize],
    alignments: &[Alignment],
) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter().zip(alignments))
        .map(|(cell, (&width, alignment))| pad(cell, width, *alignment))
        .collect();
    writeln!(f, "| {} |", padded.join(" | "))
}

fn pad(cell: &str, width: usize, alignment: Alignment) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(cell)));
    match alignment {
        Alignment::Left => format!("{cell}{fill}"),
        Alignment::Right => format!("{fill}{cell}"),
    }
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn widths_of(headers: &[String], cells: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|row| display_width(&row[i]))
                .fold(display_width(header) + HEADER_PADDING, usize::max)
        })
        .collect()
}

fn is_numeric(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

/// Significant digits of `%g` formatting.
const GENERAL_PRECISION: i32 = 6;

fn numeric_column<'a>(cells: impl Iterator<Item = &'a str>) -> Vec<String> {
    let cells: Vec<&str> = cells.map(str::trim).collect();

    let formatted: Vec<String> = if cells.iter().all(|c| c.parse::<i64>().is_ok()) {
        cells
            .iter()
            .map(|c| c.parse::<i64>().map_or_else(|_| c.to_string(), |n| n.to_string()))
            .collect()
    } else {
        cells
            .iter()
            .map(|c| c.parse::<f64>().map_or_else(|_| c.to_string(), format_general))
            .collect()
    };

    let tail = formatted.iter().map(|c| decimal_tail(c)).max().unwrap_or(0);
    formatted
        .into_iter()
        .map(|c| {
            let fill = " ".repeat(tail - decimal_tail(&c));
            format!("{c}{fill}")
        })
        .collect()
}

/// Formats a number like C's `%g`: six significant digits, trailing zeros
/// removed, scientific notation for exponents below -4 or from 6 up.
fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Characters from the decimal point (or exponent marker) to the end.
fn decimal_tail(s: &str) -> usize {
    s.rfind('.')
        .or_else(|| s.rfind('e'))
        .map_or(0, |i| display_width(&s[i..]))
}
