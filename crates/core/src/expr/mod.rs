//! The operator tree produced by parsing an arithmetic expression.

use crate::err::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary arithmetic operators.
///
/// The serialised form is the operator symbol itself, which is also the
/// `operation` field of the wire protocol between orchestrator and agent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Operator {
	#[serde(rename = "+")]
	Add,
	#[serde(rename = "-")]
	Sub,
	#[serde(rename = "*")]
	Mul,
	#[serde(rename = "/")]
	Div,
}

impl Operator {
	/// Applies the operator to two scalar operands.
	///
	/// This is the single place arithmetic actually happens. The orchestrator
	/// never calls it on the request path; workers do, after sleeping the
	/// operator's artificial duration.
	pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, Error> {
		match self {
			Self::Add => Ok(lhs + rhs),
			Self::Sub => Ok(lhs - rhs),
			Self::Mul => Ok(lhs * rhs),
			Self::Div => {
				if rhs == 0.0 {
					return Err(Error::DivisionByZero);
				}
				Ok(lhs / rhs)
			}
		}
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Add => f.write_str("+"),
			Self::Sub => f.write_str("-"),
			Self::Mul => f.write_str("*"),
			Self::Div => f.write_str("/"),
		}
	}
}

/// A node in the operator tree.
///
/// Parenthesisation is resolved during parsing, so the tree is unambiguous.
/// Unary minus is lowered to `0 - x` by the parser and never appears here as
/// a distinct shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
	/// A numeric leaf
	Number(f64),
	/// An internal node applying an operator to two subtrees
	Binary {
		op: Operator,
		left: Box<Node>,
		right: Box<Node>,
	},
}

impl Node {
	/// Creates an internal node from an operator and two subtrees.
	pub fn binary(op: Operator, left: Node, right: Node) -> Self {
		Self::Binary {
			op,
			left: Box::new(left),
			right: Box::new(right),
		}
	}

	/// Evaluates the tree directly, without going through the task pipeline.
	///
	/// The distributed path never uses this. It exists for tests, and for the
	/// degenerate single-literal expression which plans to zero tasks.
	pub fn evaluate(&self) -> Result<f64, Error> {
		match self {
			Self::Number(v) => Ok(*v),
			Self::Binary {
				op,
				left,
				right,
			} => {
				let lhs = left.evaluate()?;
				let rhs = right.evaluate()?;
				op.apply(lhs, rhs)
			}
		}
	}
}
