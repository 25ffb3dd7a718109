#[macro_use]
extern crate tracing;

#[macro_use]
mod mac;

pub mod cnf;
pub mod err;
pub mod expr;
pub mod sched;
pub mod store;
pub mod syn;
pub mod task;
