mod executor;
mod fork_executor;
mod redirect;

pub use executor::{Executor, ExecStatus};
pub use fork_executor::ForkExecutor;
