use super::{Arg, Task, TaskId};
use crate::expr::{Node, Operator};
use uuid::Uuid;

/// Lowers an operator tree into a flat list of dependent tasks.
///
/// Tasks are emitted in post-order, so every child precedes its parent; the
/// root task is then swapped to position 0, which is where the pool expects
/// it. A tree consisting of a single numeric leaf produces an empty list,
/// since there is nothing to compute.
pub fn plan(tree: &Node, expr_id: &str) -> Vec<Task> {
	let mut tasks = Vec::new();
	if let Node::Binary {
		op,
		left,
		right,
	} = tree
	{
		plan_binary(*op, left, right, expr_id, &mut tasks);
		// root element to first
		let last = tasks.len() - 1;
		tasks.swap(0, last);
	}
	tasks
}

fn plan_binary(
	op: Operator,
	left: &Node,
	right: &Node,
	expr_id: &str,
	tasks: &mut Vec<Task>,
) -> TaskId {
	let left_arg = argument(left, expr_id, tasks);
	let right_arg = argument(right, expr_id, tasks);
	let id = Uuid::new_v4().simple().to_string();
	tasks.push(Task {
		id: id.clone(),
		expr_id: expr_id.to_owned(),
		op,
		left: left_arg,
		right: right_arg,
	});
	id
}

fn argument(child: &Node, expr_id: &str, tasks: &mut Vec<Task>) -> Arg {
	match child {
		Node::Number(value) => Arg::Number(*value),
		Node::Binary {
			op,
			left,
			right,
		} => Arg::TaskRef(plan_binary(*op, left, right, expr_id, tasks)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::syn;

	fn plan_text(text: &str) -> Vec<Task> {
		plan(&syn::parse(text).unwrap(), "expr")
	}

	#[test]
	fn leaf_plans_to_nothing() {
		assert!(plan_text("5").is_empty());
		assert!(plan_text("(((7)))").is_empty());
	}

	#[test]
	fn one_task_per_internal_node() {
		assert_eq!(plan_text("2+3").len(), 1);
		assert_eq!(plan_text("(2+3)*4").len(), 2);
		assert_eq!(plan_text("2 + 3 * (4 + 5)").len(), 3);
		assert_eq!(plan_text("1+2+3+4+5").len(), 4);
	}

	#[test]
	fn root_task_is_first() {
		// the root of `(2+3)*4` is the multiplication
		let tasks = plan_text("(2+3)*4");
		assert_eq!(tasks[0].op, Operator::Mul);
		assert_eq!(tasks[0].right, Arg::Number(4.0));
		// its left argument references the addition task
		assert_eq!(tasks[0].left, Arg::TaskRef(tasks[1].id.clone()));
	}

	#[test]
	fn numeric_leaves_become_numbers() {
		let tasks = plan_text("2+3");
		assert_eq!(tasks[0].left, Arg::Number(2.0));
		assert_eq!(tasks[0].right, Arg::Number(3.0));
		assert!(tasks[0].is_ready());
	}

	#[test]
	fn references_stay_within_the_batch() {
		let tasks = plan_text("(1+2)*(3+4)-5");
		let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
		for task in &tasks {
			for arg in [&task.left, &task.right] {
				if let Arg::TaskRef(child) = arg {
					assert!(ids.contains(&child.as_str()));
					assert_ne!(child, &task.id);
				}
			}
		}
	}

	#[test]
	fn task_ids_are_unique() {
		let tasks = plan_text("1+2+3+4+5+6+7+8");
		let mut ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), tasks.len());
	}

	#[test]
	fn every_expression_is_tagged() {
		for task in plan_text("1*2*3") {
			assert_eq!(task.expr_id, "expr");
		}
	}
}
