// Copyright 2025 Irreducible Inc.

use std::fmt;

use serde::Serialize;

use crate::coeffs::Selector;

/// An integer coefficient.
pub type Scalar = i64;

/// Coefficient values accepted by the matrix encoding.
pub const GATE_COEFF_DOMAIN: [Scalar; 3] = [-1, 0, 1];

/// The five selector coefficients of one constraint.
///
/// A gate over left wire `a`, right wire `b` and output wire `out` holds when
/// `l·a + r·b + m·(a·b) + c − o·out = 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Gate {
	pub l: Scalar,
	pub r: Scalar,
	pub m: Scalar,
	pub o: Scalar,
	pub c: Scalar,
}

impl Gate {
	pub fn selector(&self, selector: Selector) -> Scalar {
		match selector {
			Selector::L => self.l,
			Selector::R => self.r,
			Selector::M => self.m,
			Selector::C => self.c,
			Selector::O => self.o,
		}
	}

	pub fn coeffs(&self) -> GateCoeffs {
		GateCoeffs {
			q_l: self.l,
			q_r: self.r,
			q_m: self.m,
			q_c: self.c,
			q_o: self.o,
		}
	}
}

/// The exported record of a gate, keyed by selector name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GateCoeffs {
	#[serde(rename = "q_L")]
	pub q_l: Scalar,
	#[serde(rename = "q_R")]
	pub q_r: Scalar,
	#[serde(rename = "q_M")]
	pub q_m: Scalar,
	#[serde(rename = "q_C")]
	pub q_c: Scalar,
	#[serde(rename = "q_O")]
	pub q_o: Scalar,
}

impl GateCoeffs {
	/// Pairs of selector and value, in row column order.
	pub fn entries(&self) -> [(Selector, Scalar); 5] {
		[
			(Selector::L, self.q_l),
			(Selector::R, self.q_r),
			(Selector::M, self.q_m),
			(Selector::C, self.q_c),
			(Selector::O, self.q_o),
		]
	}
}

impl fmt::Display for GateCoeffs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{")?;
		for (i, (selector, value)) in self.entries().into_iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{selector}: {value}")?;
		}
		write!(f, "}}")
	}
}
