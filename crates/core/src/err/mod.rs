use crate::syn::SyntaxError;
use thiserror::Error;

/// The errors surfaced by the scheduling core.
///
/// Lower level failures from the task pool and the expression storage are
/// normalised into these variants before they cross a crate boundary, so the
/// transport adapters only ever translate this one taxonomy.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
	/// An expression with the submitted id has already been scheduled
	#[error("expression already exists")]
	ExpressionExists,
	/// The requested expression id is not present in storage
	#[error("expression not found")]
	ExpressionNotFound,
	/// No task currently has two numeric arguments and an idle slot
	#[error("no tasks available")]
	NoTasksAvailable,
	/// The submitted task id does not name a live task
	#[error("task not found")]
	TaskNotFound,
	/// A non-root task has no parent edge, or its parent no longer
	/// references it. This indicates a corrupted dependency graph.
	#[error("task {0} owner not found")]
	ParentNotFound(String),
	/// A worker was asked to divide by zero
	#[error("division by zero")]
	DivisionByZero,
	/// The expression text failed to parse
	#[error(transparent)]
	Syntax(#[from] SyntaxError),
}
