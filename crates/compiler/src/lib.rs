// Copyright 2025 Irreducible Inc.

//! Compiler from constraint descriptions to PlonK gate selectors.
//!
//! Every constraint becomes a [`Gate`] of five coefficients satisfying
//! `q_L·a + q_R·b + q_M·(a·b) + q_C − q_O·c = 0`. There are two front ends, both producing a
//! [`Program`]:
//!
//! - matrix rows already in gate form, parsed with [`matrix::parse_rows`] and validated by
//!   [`Program::new`];
//! - symbolic equations such as `d <== a * c - 45 * a + 987`, evaluated term by term
//!   ([`evaluate()`]) into an [`AssemblyEqn`] and reduced to a gate by [`AssemblyEqn::gate`].

pub mod assembly;
pub mod coeffs;
pub mod equation;
pub mod error;
pub mod evaluate;
pub mod gate;
pub mod matrix;
pub mod monomial;
pub mod program;

pub use assembly::{AssemblyEqn, GateWires};
pub use coeffs::{CoeffKey, CoeffMap, Selector};
pub use error::{Error, Result};
pub use evaluate::evaluate;
pub use gate::{Gate, GateCoeffs, Scalar};
pub use monomial::MonomialKey;
pub use program::Program;
