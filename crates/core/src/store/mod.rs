//! Storage of expression lifecycle records.

mod mem;

pub use mem::MemoryStore;

use crate::err::Error;
use serde::{Deserialize, Serialize};

/// The lifecycle status of an expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
	Pending,
	Processing,
	Completed,
}

/// A user-submitted arithmetic expression and its lifecycle record.
///
/// `result` carries a value only once `status` is [`Status::Completed`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expression {
	pub id: String,
	#[serde(rename = "expression")]
	pub text: String,
	pub status: Status,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<f64>,
}

/// The storage interface the scheduler requires for expressions.
///
/// The in-memory implementation below is the default; a relational backend
/// is another implementation of this same trait.
pub trait ExpressionStore: Send + Sync {
	/// Records a newly submitted expression as pending.
	/// A duplicate id is an error.
	fn create(&self, id: &str, text: &str) -> Result<(), Error>;

	/// Retrieves a single expression by id.
	fn get(&self, id: &str) -> Result<Expression, Error>;

	/// Lists all expressions, sorted by id ascending.
	fn list(&self) -> Result<Vec<Expression>, Error>;

	/// Updates the status and result of an expression.
	fn update(&self, id: &str, status: Status, result: f64) -> Result<(), Error>;
}
