// Copyright 2025 Irreducible Inc.

//! Assembly equations: a wire assignment paired with a coefficient mapping.
//!
//! This is the normalized form every front end produces before gate extraction. Symbolic
//! equations bind up to two input wires and an output wire; matrix rows bind no wires and carry
//! their five selectors under [`CoeffKey::Selector`] keys.

use crate::{
	coeffs::{CoeffKey, CoeffMap, Selector},
	error::{Error, Result},
	gate::{Gate, Scalar},
	monomial::MonomialKey,
};

/// Variable names bound to the left, right and output wires of a gate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateWires {
	pub left: Option<String>,
	pub right: Option<String>,
	pub output: Option<String>,
}

impl GateWires {
	pub fn new(left: Option<String>, right: Option<String>, output: Option<String>) -> Self {
		Self {
			left,
			right,
			output,
		}
	}

	/// No wire is bound.
	pub fn unset() -> Self {
		Self::default()
	}

	pub fn as_array(&self) -> [Option<&str>; 3] {
		[self.left.as_deref(), self.right.as_deref(), self.output.as_deref()]
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssemblyEqn {
	pub wires: GateWires,
	pub coeffs: CoeffMap,
}

impl AssemblyEqn {
	pub fn new(wires: GateWires, coeffs: CoeffMap) -> Self {
		Self { wires, coeffs }
	}

	/// Packages a row `[q_L, q_R, q_M, q_C, q_O]` that is already in gate form.
	///
	/// `row_index` only labels the error when the row does not have exactly five elements.
	pub fn from_row(row_index: usize, row: &[Scalar]) -> Result<Self> {
		let row: &[Scalar; 5] = row.try_into().map_err(|_| Error::Shape {
			row: row_index,
			len: row.len(),
		})?;
		let coeffs = CoeffMap::from_terms(Selector::ALL.into_iter().zip(row.iter().copied()))?;
		Ok(Self::new(GateWires::unset(), coeffs))
	}

	/// Extracts the gate coefficients.
	///
	/// Symbolic equations are rearranged into `... − q_O·out = 0`, so every input-side coefficient
	/// is negated while the output coefficient is taken as is. An equation carrying
	/// [`CoeffKey::Selector`] keys, as packaged by [`AssemblyEqn::from_row`], passes through
	/// unchanged; it must hold all five selectors, no other key and no bound wire.
	pub fn gate(&self) -> Result<Gate> {
		if self
			.coeffs
			.keys()
			.any(|key| matches!(key, CoeffKey::Selector(_)))
		{
			return self.selector_gate();
		}
		Ok(Gate {
			l: self.l(),
			r: self.r(),
			m: self.m(),
			o: self.o(),
			c: self.c(),
		})
	}

	fn selector_gate(&self) -> Result<Gate> {
		if let Some(wire) = self.wires.as_array().into_iter().flatten().next() {
			return Err(Error::MixedSelectorRow {
				item: format!("wire {wire:?}"),
			});
		}
		if let Some(key) = self
			.coeffs
			.keys()
			.find(|key| !matches!(key, CoeffKey::Selector(_)))
		{
			return Err(Error::MixedSelectorRow {
				item: format!("term {key}"),
			});
		}
		let get = |selector| {
			self.coeffs
				.get(&CoeffKey::Selector(selector))
				.ok_or(Error::MissingSelector { selector })
		};
		Ok(Gate {
			l: get(Selector::L)?,
			r: get(Selector::R)?,
			m: get(Selector::M)?,
			o: get(Selector::O)?,
			c: get(Selector::C)?,
		})
	}

	fn wire_coeff(&self, wire: Option<&str>) -> Scalar {
		wire.map_or(0, |name| self.coeffs.monomial(&MonomialKey::var(name)))
	}

	fn l(&self) -> Scalar {
		-self.wire_coeff(self.wires.left.as_deref())
	}

	// A single-variable equation binds the same name to both inputs; its linear term goes to L.
	fn r(&self) -> Scalar {
		if self.wires.right == self.wires.left {
			return 0;
		}
		-self.wire_coeff(self.wires.right.as_deref())
	}

	fn m(&self) -> Scalar {
		match (&self.wires.left, &self.wires.right) {
			(Some(left), Some(right)) => {
				let key = MonomialKey::var(left.as_str()).product(&MonomialKey::var(right.as_str()));
				-self.coeffs.monomial(&key)
			}
			_ => 0,
		}
	}

	fn c(&self) -> Scalar {
		-self.coeffs.monomial(&MonomialKey::constant())
	}

	fn o(&self) -> Scalar {
		self.coeffs.get(&CoeffKey::OutputCoeff).unwrap_or(1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn wires(left: Option<&str>, right: Option<&str>, output: Option<&str>) -> GateWires {
		GateWires::new(left.map(Into::into), right.map(Into::into), output.map(Into::into))
	}

	#[test]
	fn test_product_gate() {
		// b <== a * c
		let eqn = AssemblyEqn::new(
			wires(Some("a"), Some("c"), Some("b")),
			CoeffMap::from_terms([("a*c", 1)]).unwrap(),
		);
		assert_eq!(
			eqn.gate().unwrap(),
			Gate {
				l: 0,
				r: 0,
				m: -1,
				o: 1,
				c: 0
			}
		);
	}

	#[test]
	fn test_affine_gate() {
		// d <== a * c - 45 * a + 987
		let eqn = AssemblyEqn::new(
			wires(Some("a"), Some("c"), Some("d")),
			CoeffMap::from_terms([("a*c", 1), ("a", -45), ("", 987)]).unwrap(),
		);
		assert_eq!(
			eqn.gate().unwrap(),
			Gate {
				l: 45,
				r: 0,
				m: -1,
				o: 1,
				c: -987
			}
		);
	}

	#[test]
	fn test_repeated_wire_is_not_counted_twice() {
		// y <== x * x + 3 * x
		let eqn = AssemblyEqn::new(
			wires(Some("x"), Some("x"), Some("y")),
			CoeffMap::from_terms([("x*x", 1), ("x", 3)]).unwrap(),
		);
		let gate = eqn.gate().unwrap();
		assert_eq!((gate.l, gate.r, gate.m), (-3, 0, -1));
	}

	#[test]
	fn test_constant_gate_without_inputs() {
		// a === 9
		let eqn = AssemblyEqn::new(
			wires(None, None, Some("a")),
			CoeffMap::from_terms([("", 9)]).unwrap(),
		);
		assert_eq!(
			eqn.gate().unwrap(),
			Gate {
				l: 0,
				r: 0,
				m: 0,
				o: 1,
				c: -9
			}
		);
	}

	#[test]
	fn test_output_coefficient_is_not_negated() {
		let mut coeffs = CoeffMap::from_terms([("a", 1)]).unwrap();
		coeffs.insert(CoeffKey::OutputCoeff, -1).unwrap();
		let eqn = AssemblyEqn::new(wires(Some("a"), None, Some("b")), coeffs);
		let gate = eqn.gate().unwrap();
		assert_eq!((gate.l, gate.m, gate.o), (-1, 0, -1));
	}

	#[test]
	fn test_row_passes_through() {
		let eqn = AssemblyEqn::from_row(0, &[1, -1, 0, 1, -1]).unwrap();
		assert_eq!(eqn.wires.as_array(), [None, None, None]);
		assert_eq!(eqn.coeffs.get(&CoeffKey::Selector(Selector::C)), Some(1));
		assert_eq!(
			eqn.gate().unwrap(),
			Gate {
				l: 1,
				r: -1,
				m: 0,
				o: -1,
				c: 1
			}
		);
	}

	#[test]
	fn test_row_shape() {
		assert_eq!(AssemblyEqn::from_row(4, &[1, 1, 0]), Err(Error::Shape { row: 4, len: 3 }));
		assert_eq!(
			AssemblyEqn::from_row(0, &[0, 0, 0, 0, 1, 0]),
			Err(Error::Shape { row: 0, len: 6 })
		);
	}

	#[test]
	fn test_partial_selector_row_is_rejected() {
		let coeffs = CoeffMap::from_terms([
			(Selector::L, 1),
			(Selector::R, 1),
			(Selector::M, 0),
			(Selector::C, 0),
		])
		.unwrap();
		let eqn = AssemblyEqn::new(GateWires::unset(), coeffs);
		assert_eq!(
			eqn.gate(),
			Err(Error::MissingSelector {
				selector: Selector::O
			})
		);
	}

	#[test]
	fn test_selector_row_cannot_mix_terms_or_wires() {
		let mut eqn = AssemblyEqn::from_row(0, &[1, 1, 0, 0, 1]).unwrap();
		eqn.coeffs.insert("a", 2).unwrap();
		assert_eq!(
			eqn.gate(),
			Err(Error::MixedSelectorRow {
				item: "term a".into()
			})
		);

		let mut eqn = AssemblyEqn::from_row(0, &[1, 1, 0, 0, 1]).unwrap();
		eqn.wires.output = Some("c".into());
		assert!(matches!(eqn.gate(), Err(Error::MixedSelectorRow { .. })));
	}
}
