// Copyright 2025 Irreducible Inc.

//! Text format for constraint rows already in gate form.
//!
//! Each non-blank line is one row, written either bracketed and comma separated (`[1,1,0,0,1]`)
//! or whitespace separated (`1 1 0 0 1`). Row length is not checked here; see
//! [`Program::new`](crate::program::Program::new).

use crate::{
	error::{Error, Result},
	gate::Scalar,
};

/// Parses constraint text into integer rows.
///
/// Blank lines are skipped. A line that is not a list of integers in one of the two forms fails
/// with [`Error::Parse`], carrying the 1-based line number and the trimmed line.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<Scalar>>> {
	text.lines()
		.enumerate()
		.map(|(i, line)| (i + 1, line.trim()))
		.filter(|(_, line)| !line.is_empty())
		.map(|(line_no, line)| {
			parse_row(line).ok_or_else(|| Error::Parse {
				line: line_no,
				text: line.to_owned(),
			})
		})
		.collect()
}

fn parse_row(line: &str) -> Option<Vec<Scalar>> {
	match line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
		Some(body) => body
			.split(',')
			.map(|value| value.trim().parse().ok())
			.collect(),
		None => line
			.split_whitespace()
			.map(|value| value.parse().ok())
			.collect(),
	}
}
