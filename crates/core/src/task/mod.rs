//! The task model: a parsed expression lowered to primitive binary operations.

pub(crate) mod plan;
pub(crate) mod pool;

pub use plan::plan;
pub use pool::{TaskPool, TaskStore};

use crate::expr::Operator;
use serde::{Deserialize, Serialize};

/// The opaque unique identifier of a task.
pub type TaskId = String;

/// One argument of a task.
///
/// Either an already resolved scalar, or a reference to the task which will
/// produce the value. The reference stores the child's id rather than a
/// pointer; it is resolved through the pool's task map at use time, so a
/// deleted child can never dangle.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
	Number(f64),
	TaskRef(TaskId),
}

impl Arg {
	/// Whether this argument is already a resolved scalar.
	pub fn is_number(&self) -> bool {
		matches!(self, Self::Number(_))
	}

	/// Whether this argument references the task with the given id.
	pub(crate) fn is_ref_to(&self, id: &str) -> bool {
		matches!(self, Self::TaskRef(child) if child == id)
	}
}

/// A single primitive binary operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
	/// The opaque unique id of this task
	pub id: TaskId,
	/// The id of the expression this task belongs to
	pub expr_id: String,
	/// The operator to apply
	pub op: Operator,
	/// The left argument
	pub left: Arg,
	/// The right argument
	pub right: Arg,
}

impl Task {
	/// A task is ready once both arguments are resolved scalars.
	pub fn is_ready(&self) -> bool {
		self.left.is_number() && self.right.is_number()
	}

	/// Returns both operands when the task is ready.
	pub fn operands(&self) -> Option<(f64, f64)> {
		match (&self.left, &self.right) {
			(Arg::Number(lhs), Arg::Number(rhs)) => Some((*lhs, *rhs)),
			_ => None,
		}
	}
}

/// The wire form of a task handed to an agent.
///
/// `operation_time` is the artificial latency the worker sleeps before
/// submitting its result, in milliseconds. The agent never consults its own
/// configuration for this; it echoes whatever the orchestrator says.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentTask {
	pub id: TaskId,
	pub arg1: f64,
	pub arg2: f64,
	pub operation: Operator,
	#[serde(rename = "operationTime")]
	pub operation_time: u64,
}

/// The result of a task computation, posted back by an agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
	pub id: TaskId,
	pub result: f64,
}
