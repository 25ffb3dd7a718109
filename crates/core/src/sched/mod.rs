//! The scheduler: the façade tying parser, planner, task pool and
//! expression storage together.

use crate::err::Error;
use crate::expr::Operator;
use crate::store::{Expression, ExpressionStore, Status};
use crate::syn;
use crate::task::{self, AgentTask, TaskStore};
use std::sync::Arc;
use std::time::Duration;

/// The artificial latency attached to each operator.
///
/// The orchestrator reads these from configuration and stamps them onto every
/// task it hands out; workers sleep the stamped duration before replying.
#[derive(Clone, Copy, Debug)]
pub struct OperationTimes {
	pub addition: Duration,
	pub subtraction: Duration,
	pub multiplication: Duration,
	pub division: Duration,
}

impl OperationTimes {
	/// The duration configured for the given operator.
	pub fn duration_for(&self, op: Operator) -> Duration {
		match op {
			Operator::Add => self.addition,
			Operator::Sub => self.subtraction,
			Operator::Mul => self.multiplication,
			Operator::Div => self.division,
		}
	}
}

impl Default for OperationTimes {
	fn default() -> Self {
		OperationTimes {
			addition: Duration::from_millis(100),
			subtraction: Duration::from_millis(200),
			multiplication: Duration::from_millis(300),
			division: Duration::from_millis(400),
		}
	}
}

/// Manages the execution of arithmetic expressions.
///
/// The scheduler enforces the lifecycle contract: an expression is created
/// pending, its tasks are dispatched at most once each, and completion of the
/// root task produces the one final scalar. It never evaluates arithmetic
/// itself; that happens on the workers.
pub struct Scheduler {
	expressions: Arc<dyn ExpressionStore>,
	tasks: Arc<dyn TaskStore>,
	times: OperationTimes,
}

impl Scheduler {
	/// Creates a new scheduler over the given storage backends.
	pub fn new(
		expressions: Arc<dyn ExpressionStore>,
		tasks: Arc<dyn TaskStore>,
		times: OperationTimes,
	) -> Self {
		Scheduler {
			expressions,
			tasks,
			times,
		}
	}

	/// Schedules an arithmetic expression for execution.
	///
	/// The tasks are installed in the pool before the expression record is
	/// created, so a poll interleaved with submission sees either neither or
	/// both.
	pub fn schedule(&self, id: &str, text: &str) -> Result<(), Error> {
		if self.expressions.get(id).is_ok() {
			error!("Expression with id {id} already exists");
			return Err(Error::ExpressionExists);
		}
		let tree = syn::parse(text)?;
		let tasks = task::plan(&tree, id);
		if tasks.is_empty() {
			// a bare numeric literal plans to nothing; complete it on the spot
			let value = tree.evaluate()?;
			self.expressions.create(id, text)?;
			return self.expressions.update(id, Status::Completed, value);
		}
		self.tasks.add_tasks(tasks)?;
		self.expressions.create(id, text)
	}

	/// Hands out the next ready task in its agent wire form.
	pub fn next_task(&self) -> Result<AgentTask, Error> {
		let task = self.tasks.take_ready()?;
		// take_ready only hands out tasks with two numeric arguments
		let (arg1, arg2) = task.operands().ok_or(Error::NoTasksAvailable)?;
		debug!("Dispatching task {} of expression {}", task.id, task.expr_id);
		Ok(AgentTask {
			id: task.id,
			arg1,
			arg2,
			operation: task.op,
			operation_time: self.times.duration_for(task.op).as_millis() as u64,
		})
	}

	/// Processes the result of a task computation.
	///
	/// The task is deleted once its result has been folded into its parent.
	/// If the task was its expression's root, the expression is completed
	/// with the submitted value.
	pub fn process_result(&self, id: &str, value: f64) -> Result<(), Error> {
		// resolve the owning expression before any mutation removes the task
		let expr_id = self.tasks.expression_id(id)?;
		self.tasks.apply_result(id, value)?;
		self.tasks.remove_task(id);
		if !self.tasks.is_root(id) {
			return Ok(());
		}
		self.tasks.remove_expression(id);
		info!("Expression {expr_id} completed with result {value}");
		self.expressions.update(&expr_id, Status::Completed, value)
	}

	/// Retrieves an expression record by id.
	pub fn expression(&self, id: &str) -> Result<Expression, Error> {
		self.expressions.get(id)
	}

	/// Retrieves all expression records, sorted by id ascending.
	pub fn expressions(&self) -> Result<Vec<Expression>, Error> {
		self.expressions.list()
	}
}
