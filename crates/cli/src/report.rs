// Copyright 2025 Irreducible Inc.

use std::fmt;

use anyhow::Result;
use plonkish_compiler::{GateCoeffs, Program};
use serde::Serialize;

/// Human readable report: header, then the selectors and LaTeX gate equation of each constraint.
pub struct Text<'a>(pub &'a Program);

impl fmt::Display for Text<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let program = self.0;
		writeln!(f, "constraints: {}", program.len())?;
		writeln!(f, "group_order: {}", program.group_order())?;
		for (i, coeffs) in program.coeffs().iter().enumerate() {
			writeln!(f)?;
			writeln!(f, "Coefficient of constraint {}:", i + 1)?;
			for (selector, value) in coeffs.entries() {
				writeln!(f, "{selector}: {value}")?;
			}
			writeln!(f)?;
			writeln!(f, "LaTeX equation for constraint {}:", i + 1)?;
			writeln!(f, "{}", latex(coeffs))?;
		}
		Ok(())
	}
}

/// The gate equation with the selectors of one constraint substituted in.
pub fn latex(coeffs: &GateCoeffs) -> String {
	format!(
		"$${} \\cdot w_a + {} \\cdot w_b + {} \\cdot (w_a \\cdot w_b) + {} - {} \\cdot w_c \\overset{{?}}{{=}} 0$$",
		coeffs.q_l, coeffs.q_r, coeffs.q_m, coeffs.q_c, coeffs.q_o
	)
}

#[derive(Debug, Serialize)]
struct JsonReport {
	group_order: usize,
	constraints: Vec<GateCoeffs>,
}

pub fn json(program: &Program) -> Result<String> {
	let report = JsonReport {
		group_order: program.group_order(),
		constraints: program.coeffs(),
	};
	let mut out = serde_json::to_string_pretty(&report)?;
	out.push('\n');
	Ok(out)
}
