// Copyright 2025 Irreducible Inc.

//! Monomial keys and the canonicalization rule for their products.

use std::fmt;

use smallvec::SmallVec;

/// Separator between factors in the textual form of a [`MonomialKey`].
pub const FACTOR_SEPARATOR: char = '*';

/// Identifies a product of zero or more variables.
///
/// The factors are kept sorted lexicographically (byte order of the names), with repetition for
/// powers, so a product has exactly one representation regardless of the order its operands were
/// multiplied in. The empty product is the constant term.
///
/// The textual form joins the factors with `*`: the constant key renders as the empty string,
/// `b * a` renders as `a*b`, and `a * a` renders as `a*a`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonomialKey(SmallVec<[String; 2]>);

impl MonomialKey {
	/// The key of the constant term.
	pub fn constant() -> Self {
		Self(SmallVec::new())
	}

	/// The key of a linear term in the given variable.
	pub fn var(name: impl Into<String>) -> Self {
		let mut factors = SmallVec::new();
		factors.push(name.into());
		Self(factors)
	}

	pub fn is_constant(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of variable factors, counting repetitions.
	pub fn degree(&self) -> usize {
		self.0.len()
	}

	pub fn factors(&self) -> &[String] {
		&self.0
	}

	/// Combines two keys into the canonical key of their product.
	///
	/// Commutative and associative. The constant key is the identity.
	pub fn product(&self, other: &Self) -> Self {
		if other.is_constant() {
			return self.clone();
		}
		if self.is_constant() {
			return other.clone();
		}
		let mut factors: SmallVec<[String; 2]> = self.0.iter().chain(&other.0).cloned().collect();
		factors.sort_unstable();
		Self(factors)
	}
}

/// Parses the textual form, e.g. `"b*a"`. Empty factors are dropped and the rest are sorted.
impl From<&str> for MonomialKey {
	fn from(key: &str) -> Self {
		let mut factors: SmallVec<[String; 2]> = key
			.split(FACTOR_SEPARATOR)
			.filter(|factor| !factor.is_empty())
			.map(str::to_owned)
			.collect();
		factors.sort_unstable();
		Self(factors)
	}
}

impl fmt::Display for MonomialKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, factor) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, "{FACTOR_SEPARATOR}")?;
			}
			f.write_str(factor)?;
		}
		Ok(())
	}
}

/// A variable name is a non-empty alphanumeric string that does not start with a digit.
pub fn is_valid_variable_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_alphabetic() => chars.all(char::is_alphanumeric),
		_ => false,
	}
}
