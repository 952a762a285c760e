use std::convert::Infallible;
use std::ffi::CString;
use nix::sys::signal::{signal, SigHandler, Signal};
use nix::sys::wait::waitpid;
use nix::unistd::{execvp, fork, ForkResult};
use crate::ast::CommandNode;
use crate::error::{LaunchError, ShellError};
use super::executor::{Executor, ExecStatus};
use super::redirect::RedirectHandler;

/// Runs each command in a forked child and waits for it in the foreground.
pub struct ForkExecutor;

impl Executor for ForkExecutor {
    fn exec(&mut self, cmd: &CommandNode) -> ExecStatus {
        // Safety: the shell is single-threaded, and the child only touches
        // file descriptors, stderr and exec before it leaves.
        match unsafe { fork() } {
            Ok(ForkResult::Child) => {
                restore_default_signals();
                let err = match exec_child(cmd) {
                    Ok(never) => match never {},
                    Err(e) => e,
                };
                eprintln!("{}", err);
                // Skip the parent's exit handlers and buffered stdout.
                unsafe { libc::_exit(1) }
            }
            Ok(ForkResult::Parent { child }) => {
                log::debug!("spawned pid {} for {:?}", child, cmd.program());
                let status = waitpid(child, None).map_err(ShellError::Wait)?;
                log::debug!("pid {} finished: {:?}", child, status);
                Ok(())
            }
            Err(e) => Err(ShellError::Fork(e)),
        }
    }
}

/// Child side: rewire stdio, then replace the process image.
/// Only returns on failure.
fn exec_child(cmd: &CommandNode) -> Result<Infallible, LaunchError> {
    for redirect in &cmd.redirects {
        RedirectHandler::apply(redirect)?;
    }

    let argv = to_c_args(&cmd.argv)?;
    let program = argv.first().ok_or(LaunchError::EmptyCommand)?;
    execvp(program, &argv).map_err(|source| LaunchError::Exec {
        program: cmd.argv[0].clone(),
        source,
    })
}

/// The Rust runtime ignores SIGPIPE in the shell; programs must start with
/// the default disposition.
fn restore_default_signals() {
    // Safety: SigDfl installs no handler code.
    if let Err(e) = unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) } {
        log::debug!("resetting SIGPIPE failed: {}", e);
    }
}

fn to_c_args(args: &[String]) -> Result<Vec<CString>, LaunchError> {
    args.iter()
        .map(|arg| CString::new(arg.as_str()).map_err(|_| LaunchError::NulByte(arg.clone())))
        .collect()
}
