// Copyright 2025 Irreducible Inc.

//! Coefficient mappings: sparse polynomials keyed by monomial.

use std::{collections::BTreeMap, fmt};

use crate::{
	error::{Error, Result},
	gate::Scalar,
	monomial::MonomialKey,
};

/// A selector column of a gate, in the column order of a matrix row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Selector {
	L,
	R,
	M,
	C,
	O,
}

impl Selector {
	/// All selectors in matrix row order `[q_L, q_R, q_M, q_C, q_O]`.
	pub const ALL: [Selector; 5] = [Selector::L, Selector::R, Selector::M, Selector::C, Selector::O];

	pub fn name(self) -> &'static str {
		match self {
			Selector::L => "q_L",
			Selector::R => "q_R",
			Selector::M => "q_M",
			Selector::C => "q_C",
			Selector::O => "q_O",
		}
	}
}

impl fmt::Display for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Key of a [`CoeffMap`] entry.
///
/// The reserved keys are separate variants so they can never collide with a variable name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoeffKey {
	Monomial(MonomialKey),
	/// Coefficient of the output wire. Treated as 1 when absent.
	OutputCoeff,
	/// A selector of a row that is already in gate form.
	Selector(Selector),
}

impl CoeffKey {
	pub fn constant() -> Self {
		CoeffKey::Monomial(MonomialKey::constant())
	}

	pub fn var(name: impl Into<String>) -> Self {
		CoeffKey::Monomial(MonomialKey::var(name))
	}
}

impl From<MonomialKey> for CoeffKey {
	fn from(key: MonomialKey) -> Self {
		CoeffKey::Monomial(key)
	}
}

impl From<Selector> for CoeffKey {
	fn from(selector: Selector) -> Self {
		CoeffKey::Selector(selector)
	}
}

impl From<&str> for CoeffKey {
	fn from(key: &str) -> Self {
		CoeffKey::Monomial(MonomialKey::from(key))
	}
}

impl fmt::Display for CoeffKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CoeffKey::Monomial(key) => write!(f, "{key}"),
			CoeffKey::OutputCoeff => f.write_str("$output_coeff"),
			CoeffKey::Selector(selector) => write!(f, "{selector}"),
		}
	}
}

/// Mapping from [`CoeffKey`] to coefficient.
///
/// Entries with a zero coefficient are kept, so the key set records every term that appeared.
/// No stored coefficient equals [`Scalar::MIN`], which keeps negation total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoeffMap(BTreeMap<CoeffKey, Scalar>);

impl CoeffMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// A mapping with a single term.
	pub fn single(key: impl Into<CoeffKey>, value: Scalar) -> Result<Self> {
		let mut map = Self::new();
		map.insert(key, value)?;
		Ok(map)
	}

	/// Builds a mapping from `(key, value)` pairs. Later duplicates replace earlier ones.
	pub fn from_terms<K: Into<CoeffKey>>(
		terms: impl IntoIterator<Item = (K, Scalar)>,
	) -> Result<Self> {
		let mut map = Self::new();
		for (key, value) in terms {
			map.insert(key, value)?;
		}
		Ok(map)
	}

	pub fn insert(&mut self, key: impl Into<CoeffKey>, value: Scalar) -> Result<Option<Scalar>> {
		Ok(self.0.insert(key.into(), checked(Some(value))?))
	}

	pub fn get(&self, key: &CoeffKey) -> Option<Scalar> {
		self.0.get(key).copied()
	}

	/// Coefficient of a monomial, zero when absent.
	pub fn monomial(&self, key: &MonomialKey) -> Scalar {
		self.0
			.get(&CoeffKey::Monomial(key.clone()))
			.copied()
			.unwrap_or(0)
	}

	pub fn keys(&self) -> impl Iterator<Item = &CoeffKey> {
		self.0.keys()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Sums two mappings key by key. A key present on one side only keeps its value.
	pub fn merge(mut self, other: CoeffMap) -> Result<Self> {
		for (key, value) in other.0 {
			let sum = match self.0.get(&key) {
				Some(&existing) => checked(existing.checked_add(value))?,
				None => value,
			};
			self.0.insert(key, sum);
		}
		Ok(self)
	}

	/// Multiplies two mappings of monomials.
	///
	/// Every pair of terms contributes the product of their coefficients under the canonical
	/// product of their keys. Reserved keys do not take part in multiplication.
	pub fn product(&self, other: &CoeffMap) -> Result<Self> {
		let mut out = Self::new();
		for (lhs_key, &lhs) in &self.0 {
			for (rhs_key, &rhs) in &other.0 {
				let (CoeffKey::Monomial(lhs_key), CoeffKey::Monomial(rhs_key)) = (lhs_key, rhs_key)
				else {
					return Err(Error::MalformedExpression {
						reason: format!("cannot multiply {lhs_key} by {rhs_key}"),
					});
				};
				let term = checked(lhs.checked_mul(rhs))?;
				let key = CoeffKey::Monomial(lhs_key.product(rhs_key));
				let value = match out.0.get(&key) {
					Some(&existing) => checked(existing.checked_add(term))?,
					None => term,
				};
				out.0.insert(key, value);
			}
		}
		Ok(out)
	}
}

fn checked(value: Option<Scalar>) -> Result<Scalar> {
	value
		.filter(|&v| v != Scalar::MIN)
		.ok_or(Error::CoefficientOverflow)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_sums_shared_keys() {
		let lhs = CoeffMap::from_terms([("a", 2), ("", 5)]).unwrap();
		let rhs = CoeffMap::from_terms([("a", -2), ("b", 1)]).unwrap();
		let sum = lhs.merge(rhs).unwrap();
		assert_eq!(sum.len(), 3);
		assert_eq!(sum, CoeffMap::from_terms([("a", 0), ("b", 1), ("", 5)]).unwrap());
	}

	#[test]
	fn test_merge_with_empty_mapping() {
		let empty = CoeffMap::new();
		assert!(empty.is_empty());
		let single = CoeffMap::single("x", 4).unwrap();
		assert_eq!(empty.merge(single.clone()).unwrap(), single);
	}

	#[test]
	fn test_product_canonicalizes_keys() {
		let lhs = CoeffMap::from_terms([("b", 3)]).unwrap();
		let rhs = CoeffMap::from_terms([("a", -2), ("", 4)]).unwrap();
		let product = lhs.product(&rhs).unwrap();
		assert_eq!(product, CoeffMap::from_terms([("a*b", -6), ("b", 12)]).unwrap());
	}

	#[test]
	fn test_constant_times_constant_stays_constant() {
		let lhs = CoeffMap::single(CoeffKey::constant(), 6).unwrap();
		let rhs = CoeffMap::single(CoeffKey::constant(), 7).unwrap();
		assert_eq!(lhs.product(&rhs).unwrap().monomial(&MonomialKey::constant()), 42);
	}

	#[test]
	fn test_overflow_is_reported() {
		let big = CoeffMap::single("", Scalar::MAX).unwrap();
		let one = CoeffMap::single("", 1).unwrap();
		assert_eq!(big.clone().merge(one), Err(Error::CoefficientOverflow));

		let two = CoeffMap::single("", 2).unwrap();
		assert_eq!(big.product(&two), Err(Error::CoefficientOverflow));

		assert_eq!(CoeffMap::single("", Scalar::MIN), Err(Error::CoefficientOverflow));
	}

	#[test]
	fn test_reserved_keys_do_not_multiply() {
		let lhs = CoeffMap::single(CoeffKey::OutputCoeff, -1).unwrap();
		let rhs = CoeffMap::single("a", 1).unwrap();
		assert!(matches!(lhs.product(&rhs), Err(Error::MalformedExpression { .. })));
	}

	#[test]
	fn test_display_of_reserved_keys() {
		assert_eq!(CoeffKey::OutputCoeff.to_string(), "$output_coeff");
		assert_eq!(CoeffKey::Selector(Selector::C).to_string(), "q_C");
		assert_eq!(CoeffKey::from("y*x").to_string(), "x*y");
	}
}
