// Copyright 2025 Irreducible Inc.

//! Symbolic assembly equations such as `d <== a * c - 45 * a + 987`.
//!
//! An equation is `OUT <== EXPR` or `OUT === EXPR` with whitespace between all tokens. `OUT` may
//! carry a leading `-` to flip the sign of the output coefficient. `EXPR` may use at most two
//! distinct variables and at most one product of them, so it fits a single gate.

use crate::{
	assembly::{AssemblyEqn, GateWires},
	coeffs::CoeffKey,
	error::{Error, Result},
	evaluate::{SUB, evaluate},
	monomial::{MonomialKey, is_valid_variable_name},
};

pub const ASSIGN: &str = "<==";
pub const CONSTRAIN: &str = "===";

/// Parses one equation into its assembly form.
///
/// ```
/// # use plonkish_compiler::equation::parse_equation;
/// let eqn = parse_equation("b <== a * c").unwrap();
/// assert_eq!(eqn.wires.as_array(), [Some("a"), Some("c"), Some("b")]);
/// ```
pub fn parse_equation(equation: &str) -> Result<AssemblyEqn> {
	let tokens: Vec<&str> = equation.split_whitespace().collect();
	let [out, op, expr @ ..] = tokens.as_slice() else {
		return Err(Error::MalformedExpression {
			reason: format!("expected `OUT {ASSIGN} EXPR`, got {equation:?}"),
		});
	};
	if *op != ASSIGN && *op != CONSTRAIN {
		return Err(Error::UnsupportedOp { op: op.to_string() });
	}

	let mut coeffs = evaluate(expr, false)?;
	let out = match out.strip_prefix(SUB) {
		Some(name) => {
			coeffs.insert(CoeffKey::OutputCoeff, -1)?;
			name
		}
		None => *out,
	};
	if !is_valid_variable_name(out) {
		return Err(Error::InvalidOutputWire {
			name: out.to_string(),
		});
	}

	let mut variables: Vec<&str> = Vec::new();
	for token in expr {
		let name = token.trim_start_matches(SUB);
		if is_valid_variable_name(name) && !variables.contains(&name) {
			variables.push(name);
		}
	}
	let (left, right) = match variables.as_slice() {
		[] => (None, None),
		[var] => (Some(*var), Some(*var)),
		[left, right] => (Some(*left), Some(*right)),
		_ => {
			return Err(Error::TooManyVariables {
				variables: variables.iter().map(|v| v.to_string()).collect(),
			});
		}
	};

	let product = left
		.zip(right)
		.map(|(left, right)| MonomialKey::var(left).product(&MonomialKey::var(right)));
	for key in coeffs.keys() {
		let allowed = match key {
			CoeffKey::OutputCoeff => true,
			CoeffKey::Monomial(monomial) => {
				monomial.is_constant()
					|| (monomial.degree() == 1
						&& variables.contains(&monomial.factors()[0].as_str()))
					|| Some(monomial) == product.as_ref()
			}
			CoeffKey::Selector(_) => false,
		};
		if !allowed {
			return Err(Error::DisallowedMultiplication {
				key: key.to_string(),
			});
		}
	}

	let wires = GateWires::new(left.map(Into::into), right.map(Into::into), Some(out.into()));
	Ok(AssemblyEqn::new(wires, coeffs))
}
