// Copyright 2025 Irreducible Inc.

use crate::{coeffs::Selector, gate::Scalar};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("malformed expression: {reason}")]
	MalformedExpression { reason: String },
	#[error("invalid token {token:?}: expected a variable name or an integer literal")]
	InvalidToken { token: String },
	#[error("coefficient arithmetic overflowed the scalar range")]
	CoefficientOverflow,
	#[error("row {row} has {len} elements, expected exactly 5")]
	Shape { row: usize, len: usize },
	#[error("group order {group_order} cannot hold {n_constraints} constraints")]
	DomainSize {
		group_order: usize,
		n_constraints: usize,
	},
	#[error("row {row}: {column} = {value} is outside of {{-1, 0, 1}}")]
	CoefficientDomain {
		row: usize,
		column: Selector,
		value: Scalar,
	},
	#[error("invalid row format on line {line}: {text}")]
	Parse { line: usize, text: String },
	#[error("unsupported equation operator {op:?}, expected `<==` or `===`")]
	UnsupportedOp { op: String },
	#[error("invalid output wire name {name:?}")]
	InvalidOutputWire { name: String },
	#[error("at most 2 variables per equation, found {variables:?}")]
	TooManyVariables { variables: Vec<String> },
	#[error("disallowed multiplication: {key}")]
	DisallowedMultiplication { key: String },
	#[error("selector row is missing {selector}")]
	MissingSelector { selector: Selector },
	#[error("selector row cannot be combined with {item}")]
	MixedSelectorRow { item: String },
	#[error("equation {line}: {source}")]
	Equation {
		line: usize,
		#[source]
		source: Box<Error>,
	},
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let err = Error::Shape { row: 2, len: 3 };
		assert_eq!(err.to_string(), "row 2 has 3 elements, expected exactly 5");

		let err = Error::CoefficientDomain {
			row: 0,
			column: Selector::M,
			value: 2,
		};
		assert_eq!(err.to_string(), "row 0: q_M = 2 is outside of {-1, 0, 1}");

		let err = Error::Equation {
			line: 3,
			source: Box::new(Error::UnsupportedOp { op: "+=".into() }),
		};
		assert!(err.to_string().starts_with("equation 3: unsupported equation operator"));
	}
}
