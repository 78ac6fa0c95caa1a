// Copyright 2025 Irreducible Inc.

//! Recursive evaluation of arithmetic token sequences into coefficient mappings.
//!
//! A token sequence mixes variables, non-negative integer literals and the binary operators `+`,
//! `-` and `*`. A token that starts with `-` but is not the `-` operator is a unary minus applied to
//! the rest of the token. For example `["a", "+", "b", "*", "c", "*", "5"]` evaluates to
//! `{a: 1, b*c: 5}`.

use crate::{
	coeffs::{CoeffKey, CoeffMap},
	error::{Error, Result},
	gate::Scalar,
	monomial::{MonomialKey, is_valid_variable_name},
};

pub const ADD: &str = "+";
pub const SUB: &str = "-";
pub const MUL: &str = "*";

/// Evaluates `tokens` into a mapping from monomial to coefficient.
///
/// The lowest-precedence operator is split first, always at its leftmost occurrence: `+`, then
/// `-`, then `*`. `leading_negative` negates the first operand of the span. The right-hand side
/// of `-` is evaluated with the flag set, so chains such as `6000 - 700 - 80 + 9` evaluate
/// to `5229`. Both factors of `*` are evaluated under the same flag, so a product following
/// `-` negates every factor: `a - b * c` evaluates to `{a: 1, b*c: 1}`.
///
/// The evaluator does not bound the degree of products; callers reject unwanted terms.
pub fn evaluate<S: AsRef<str>>(tokens: &[S], leading_negative: bool) -> Result<CoeffMap> {
	if let Some(pos) = position(tokens, ADD) {
		let lhs = evaluate(&tokens[..pos], leading_negative)?;
		let rhs = evaluate(&tokens[pos + 1..], false)?;
		return lhs.merge(rhs);
	}
	if let Some(pos) = position(tokens, SUB) {
		let lhs = evaluate(&tokens[..pos], leading_negative)?;
		let rhs = evaluate(&tokens[pos + 1..], true)?;
		return lhs.merge(rhs);
	}
	if let Some(pos) = position(tokens, MUL) {
		let lhs = evaluate(&tokens[..pos], leading_negative)?;
		let rhs = evaluate(&tokens[pos + 1..], leading_negative)?;
		return lhs.product(&rhs);
	}
	match tokens {
		[] => Err(Error::MalformedExpression {
			reason: "expected an operand, found nothing".into(),
		}),
		[token] => evaluate_unit(token.as_ref(), leading_negative),
		[_, next, ..] => Err(Error::MalformedExpression {
			reason: format!("no operator before {:?}", next.as_ref()),
		}),
	}
}

fn evaluate_unit(token: &str, negative: bool) -> Result<CoeffMap> {
	if let Some(rest) = token.strip_prefix(SUB) {
		return evaluate_unit(rest, !negative);
	}
	let sign: Scalar = if negative { -1 } else { 1 };
	if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
		let value: Scalar = token.parse().map_err(|_| Error::CoefficientOverflow)?;
		return CoeffMap::single(CoeffKey::constant(), sign * value);
	}
	if is_valid_variable_name(token) {
		return CoeffMap::single(MonomialKey::var(token), sign);
	}
	Err(Error::InvalidToken {
		token: token.to_owned(),
	})
}

fn position<S: AsRef<str>>(tokens: &[S], op: &str) -> Option<usize> {
	tokens.iter().position(|token| token.as_ref() == op)
}
