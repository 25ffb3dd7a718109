use super::{Arg, Task, TaskId};
use crate::err::Error;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

/// The storage interface the scheduler requires for tasks.
///
/// Implementations must be safe to share between request handlers; the
/// scheduler holds one behind an `Arc` and calls it from every transport
/// thread concurrently.
pub trait TaskStore: Send + Sync {
	/// Atomically installs a whole expression's tasks.
	///
	/// Element 0 of the batch is the expression's root task. Every `TaskRef`
	/// argument must name another task in the same batch.
	fn add_tasks(&self, tasks: Vec<Task>) -> Result<(), Error>;

	/// Hands out a ready task, marking it dispatched.
	///
	/// A task qualifies when both arguments are numbers and it has not been
	/// dispatched before. Selection order between qualifying tasks is
	/// unspecified. This is the at-most-once dispatch point: no id is ever
	/// returned twice.
	fn take_ready(&self) -> Result<Task, Error>;

	/// Records a computed result against a task.
	///
	/// For a root task there is nothing to rewrite; the caller consumes the
	/// value. For any other task the parent's matching `TaskRef` argument is
	/// overwritten with the number, which may make the parent ready.
	fn apply_result(&self, id: &str, value: f64) -> Result<(), Error>;

	/// Removes a task and its bookkeeping entries.
	fn remove_task(&self, id: &str);

	/// Removes a completed expression's root registration.
	fn remove_expression(&self, id: &str);

	/// Whether the given task is an expression's root.
	fn is_root(&self, id: &str) -> bool;

	/// Resolves the id of the expression a task belongs to.
	fn expression_id(&self, id: &str) -> Result<String, Error>;
}

#[derive(Default)]
struct Inner {
	/// Every live task, keyed by id
	tasks: HashMap<TaskId, Task>,
	/// The inverse of the `TaskRef` edges: child id to parent id
	parents: HashMap<TaskId, TaskId>,
	/// Tasks already handed to a worker
	dispatched: HashSet<TaskId>,
	/// Root task id to expression id, for every in-flight expression
	roots: HashMap<TaskId, String>,
}

/// The in-memory task pool.
///
/// All four maps share invariants that can straddle more than one of them,
/// so a single readers-writer lock is held across each public operation.
/// Mutating operations take the write lock, including [`TaskStore::take_ready`],
/// which must observe and update the dispatched set in one critical section.
#[derive(Default)]
pub struct TaskPool {
	inner: RwLock<Inner>,
}

impl TaskPool {
	pub fn new() -> Self {
		Self::default()
	}
}

impl TaskStore for TaskPool {
	fn add_tasks(&self, tasks: Vec<Task>) -> Result<(), Error> {
		let mut inner = self.inner.write();
		let Some(root) = tasks.first() else {
			return Ok(());
		};
		inner.roots.insert(root.id.clone(), root.expr_id.clone());
		for task in tasks {
			if let Arg::TaskRef(child) = &task.left {
				inner.parents.insert(child.clone(), task.id.clone());
			}
			if let Arg::TaskRef(child) = &task.right {
				inner.parents.insert(child.clone(), task.id.clone());
			}
			inner.tasks.insert(task.id.clone(), task);
		}
		Ok(())
	}

	fn take_ready(&self) -> Result<Task, Error> {
		let mut inner = self.inner.write();
		let Inner {
			tasks,
			dispatched,
			..
		} = &mut *inner;
		let task = tasks
			.values()
			.find(|task| task.is_ready() && !dispatched.contains(&task.id))
			.cloned()
			.ok_or(Error::NoTasksAvailable)?;
		dispatched.insert(task.id.clone());
		Ok(task)
	}

	fn apply_result(&self, id: &str, value: f64) -> Result<(), Error> {
		let mut inner = self.inner.write();
		if !inner.tasks.contains_key(id) {
			return Err(Error::TaskNotFound);
		}
		if inner.roots.contains_key(id) {
			return Ok(());
		}
		let parent_id =
			inner.parents.get(id).cloned().ok_or_else(|| Error::ParentNotFound(id.to_owned()))?;
		let parent = inner
			.tasks
			.get_mut(&parent_id)
			.ok_or_else(|| Error::ParentNotFound(id.to_owned()))?;
		if parent.left.is_ref_to(id) {
			parent.left = Arg::Number(value);
		} else if parent.right.is_ref_to(id) {
			parent.right = Arg::Number(value);
		} else {
			return Err(Error::ParentNotFound(id.to_owned()));
		}
		Ok(())
	}

	fn remove_task(&self, id: &str) {
		let mut inner = self.inner.write();
		inner.dispatched.remove(id);
		inner.parents.remove(id);
		inner.tasks.remove(id);
	}

	fn remove_expression(&self, id: &str) {
		self.inner.write().roots.remove(id);
	}

	fn is_root(&self, id: &str) -> bool {
		self.inner.read().roots.contains_key(id)
	}

	fn expression_id(&self, id: &str) -> Result<String, Error> {
		self.inner
			.read()
			.tasks
			.get(id)
			.map(|task| task.expr_id.clone())
			.ok_or(Error::TaskNotFound)
	}
}
