// Copyright 2025 Irreducible Inc.

use tracing::instrument;

use crate::{
	assembly::AssemblyEqn,
	coeffs::Selector,
	equation::parse_equation,
	error::{Error, Result},
	gate::{GATE_COEFF_DOMAIN, Gate, GateCoeffs, Scalar},
};

/// An ordered list of gates placed on an evaluation domain of `group_order` points.
///
/// The constraint at index `i` occupies the `i`-th point of the domain, so the group order is
/// never smaller than the number of constraints. A program is only ever constructed whole: every
/// constructor validates all of its input before any gate is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
	constraints: Vec<Gate>,
	group_order: usize,
}

impl Program {
	/// Builds a program from rows `[q_L, q_R, q_M, q_C, q_O]` that are already in gate form.
	///
	/// Each row must have five elements, each taken from `{-1, 0, 1}`, and `group_order` must be
	/// at least the number of rows.
	#[instrument(skip_all, name = "Program::new", level = "debug")]
	pub fn new<R: AsRef<[Scalar]>>(rows: &[R], group_order: usize) -> Result<Self> {
		for (i, row) in rows.iter().enumerate() {
			let len = row.as_ref().len();
			if len != Selector::ALL.len() {
				return Err(Error::Shape { row: i, len });
			}
		}
		check_group_order(group_order, rows.len())?;
		for (i, row) in rows.iter().enumerate() {
			for (&value, column) in row.as_ref().iter().zip(Selector::ALL) {
				if !GATE_COEFF_DOMAIN.contains(&value) {
					return Err(Error::CoefficientDomain {
						row: i,
						column,
						value,
					});
				}
			}
		}

		let constraints = rows
			.iter()
			.enumerate()
			.map(|(i, row)| AssemblyEqn::from_row(i, row.as_ref())?.gate())
			.collect::<Result<Vec<_>>>()?;
		Ok(Self::finish(constraints, group_order))
	}

	/// Like [`Program::new`] with the group order set to the number of rows.
	pub fn with_default_group_order<R: AsRef<[Scalar]>>(rows: &[R]) -> Result<Self> {
		Self::new(rows, rows.len())
	}

	/// Builds a program from symbolic equations, one per line. Blank lines are skipped.
	///
	/// Coefficients are not restricted to `{-1, 0, 1}` on this path.
	#[instrument(skip_all, name = "Program::from_equations", level = "debug")]
	pub fn from_equations<S: AsRef<str>>(equations: &[S], group_order: usize) -> Result<Self> {
		let eqns = equations
			.iter()
			.map(AsRef::<str>::as_ref)
			.enumerate()
			.filter(|(_, equation)| !equation.trim().is_empty())
			.map(|(i, equation)| {
				parse_equation(equation).map_err(|err| Error::Equation {
					line: i + 1,
					source: Box::new(err),
				})
			})
			.collect::<Result<Vec<_>>>()?;
		Self::from_assembly(&eqns, group_order)
	}

	/// Builds a program from equations that are already in assembly form.
	pub fn from_assembly(eqns: &[AssemblyEqn], group_order: usize) -> Result<Self> {
		check_group_order(group_order, eqns.len())?;
		let constraints = eqns
			.iter()
			.map(AssemblyEqn::gate)
			.collect::<Result<Vec<_>>>()?;
		Ok(Self::finish(constraints, group_order))
	}

	fn finish(constraints: Vec<Gate>, group_order: usize) -> Self {
		tracing::debug!(n_constraints = constraints.len(), group_order, "compiled program");
		Self {
			constraints,
			group_order,
		}
	}

	pub fn constraints(&self) -> &[Gate] {
		&self.constraints
	}

	pub fn group_order(&self) -> usize {
		self.group_order
	}

	pub fn len(&self) -> usize {
		self.constraints.len()
	}

	pub fn is_empty(&self) -> bool {
		self.constraints.is_empty()
	}

	/// The selector record of every constraint, in input order.
	pub fn coeffs(&self) -> Vec<GateCoeffs> {
		self.constraints.iter().map(Gate::coeffs).collect()
	}
}

fn check_group_order(group_order: usize, n_constraints: usize) -> Result<()> {
	if group_order < n_constraints {
		return Err(Error::DomainSize {
			group_order,
			n_constraints,
		});
	}
	if !is_aligned_domain(group_order) {
		tracing::warn!(group_order, "group order is not a power of two");
	}
	Ok(())
}

// The empty domain of an empty program counts as aligned.
fn is_aligned_domain(group_order: usize) -> bool {
	group_order == 0 || group_order.is_power_of_two()
}
