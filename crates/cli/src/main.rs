// Copyright 2025 Irreducible Inc.

use std::{
	fs,
	io::{self, Read},
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use plonkish_compiler::{Program, matrix::parse_rows};

mod report;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
	/// Per-constraint selector listing with the substituted LaTeX gate equation
	Text,
	/// `{"group_order": .., "constraints": [{"q_L": .., ..}, ..]}`
	Json,
}

#[derive(Parser, Debug)]
#[command(name = "plonkish")]
#[command(about = "Compile constraints into PlonK gate selectors", long_about = None)]
struct Args {
	/// File with one constraint per line. Reads stdin when omitted
	input: Option<PathBuf>,

	/// Read symbolic equations such as `c <== a * b` instead of selector rows
	#[arg(long, default_value_t = false)]
	equations: bool,

	/// Size of the evaluation domain, defaults to the number of constraints
	#[arg(short = 'g', long)]
	group_order: Option<usize>,

	/// Report format
	#[arg(long, value_enum, default_value_t = Format::Text)]
	format: Format,

	/// Write the report to this file instead of stdout
	#[arg(short, long)]
	output: Option<PathBuf>,
}

fn main() -> Result<()> {
	let args = Args::parse();
	let _tracing_guard = tracing_profile::init_tracing()?;

	let source = read_input(args.input.as_deref())?;
	let program = tracing::info_span!("Compiling", equations = args.equations)
		.in_scope(|| compile(&source, args.equations, args.group_order))?;

	let report = tracing::info_span!("Rendering report").in_scope(|| match args.format {
		Format::Text => Ok(report::Text(&program).to_string()),
		Format::Json => report::json(&program),
	})?;

	match &args.output {
		Some(path) => fs::write(path, report)
			.with_context(|| format!("failed to write report to {}", path.display()))?,
		None => print!("{report}"),
	}
	Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
	match path {
		Some(path) => fs::read_to_string(path)
			.with_context(|| format!("failed to read constraints from {}", path.display())),
		None => {
			let mut source = String::new();
			io::stdin()
				.read_to_string(&mut source)
				.context("failed to read constraints from stdin")?;
			Ok(source)
		}
	}
}

fn compile(
	source: &str,
	equations: bool,
	group_order: Option<usize>,
) -> plonkish_compiler::Result<Program> {
	if equations {
		let lines: Vec<&str> = source.lines().collect();
		let n_equations = lines.iter().filter(|line| !line.trim().is_empty()).count();
		Program::from_equations(&lines, group_order.unwrap_or(n_equations))
	} else {
		let rows = parse_rows(source)?;
		Program::new(&rows, group_order.unwrap_or(rows.len()))
	}
}

#[cfg(test)]
mod tests {
	use plonkish_compiler::Error;

	use super::*;

	#[test]
	fn test_matrix_defaults_group_order() {
		let program = compile("1 1 0 0 1\n\n[0,0,1,0,1]\n", false, None).unwrap();
		assert_eq!(program.len(), 2);
		assert_eq!(program.group_order(), 2);
	}

	#[test]
	fn test_equations_mode() {
		let program = compile("c <== a * b\nd <== c + 1\n", true, Some(8)).unwrap();
		assert_eq!(program.len(), 2);
		assert_eq!(program.group_order(), 8);
	}

	#[test]
	fn test_group_order_too_small() {
		assert!(matches!(
			compile("1 1 0 0 1\n0 0 1 0 1", false, Some(1)),
			Err(Error::DomainSize { .. })
		));
	}

	#[test]
	fn test_args() {
		let args =
			Args::try_parse_from(["plonkish", "--format", "json", "-g", "16", "rows.txt"]).unwrap();
		assert_eq!(args.format, Format::Json);
		assert_eq!(args.group_order, Some(16));
		assert_eq!(args.input.as_deref(), Some(Path::new("rows.txt")));
		assert!(!args.equations);
	}
}
