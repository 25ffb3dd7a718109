use super::{Expression, ExpressionStore, Status};
use crate::err::Error;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// A simple in-memory expression store.
///
/// Records live in a `BTreeMap`, so listing is id-ascending for free.
#[derive(Default)]
pub struct MemoryStore {
	expressions: RwLock<BTreeMap<String, Expression>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl ExpressionStore for MemoryStore {
	fn create(&self, id: &str, text: &str) -> Result<(), Error> {
		let mut expressions = self.expressions.write();
		if expressions.contains_key(id) {
			return Err(Error::ExpressionExists);
		}
		expressions.insert(
			id.to_owned(),
			Expression {
				id: id.to_owned(),
				text: text.to_owned(),
				status: Status::Pending,
				result: None,
			},
		);
		Ok(())
	}

	fn get(&self, id: &str) -> Result<Expression, Error> {
		self.expressions.read().get(id).cloned().ok_or(Error::ExpressionNotFound)
	}

	fn list(&self) -> Result<Vec<Expression>, Error> {
		Ok(self.expressions.read().values().cloned().collect())
	}

	fn update(&self, id: &str, status: Status, result: f64) -> Result<(), Error> {
		let mut expressions = self.expressions.write();
		let expression = expressions.get_mut(id).ok_or(Error::ExpressionNotFound)?;
		expression.status = status;
		expression.result = Some(result);
		Ok(())
	}
}
