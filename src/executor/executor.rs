use crate::ast::CommandNode;
use crate::error::ShellError;

/// The child's exit status is not reported back; `Ok` only means the shell
/// is still able to manage processes.
pub type ExecStatus = Result<(), ShellError>;

pub trait Executor {
    fn exec(&mut self, cmd: &CommandNode) -> ExecStatus;
}
