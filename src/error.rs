use std::fmt;
use std::io;
use nix::errno::Errno;
use crate::ast::RedirectKind;

/// Failures that end the shell. Each one names the primitive that failed.
#[derive(Debug)]
pub enum ShellError {
    Read(io::Error),
    Fork(Errno),
    Wait(Errno),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Read(e) => write!(f, "getline: {}", e),
            ShellError::Fork(e) => write!(f, "fork: {}", e.desc()),
            ShellError::Wait(e) => write!(f, "waitpid: {}", e.desc()),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Read(e) => Some(e),
            ShellError::Fork(e) | ShellError::Wait(e) => Some(e),
        }
    }
}

/// Failures inside a forked child before the program image is replaced.
/// These are reported by the child itself and only end that child.
#[derive(Debug, PartialEq, Eq)]
pub enum LaunchError {
    MissingTarget(RedirectKind),
    Open { path: String, source: Errno },
    Dup { source: Errno },
    EmptyCommand,
    NulByte(String),
    Exec { program: String, source: Errno },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::MissingTarget(kind) => write!(f, "open: missing file after '{}'", kind),
            LaunchError::Open { path, source } => write!(f, "open: {}: {}", path, source.desc()),
            LaunchError::Dup { source } => write!(f, "dup2: {}", source.desc()),
            LaunchError::EmptyCommand => write!(f, "execvp: no command given"),
            LaunchError::NulByte(arg) => write!(f, "execvp: argument contains a NUL byte: {:?}", arg),
            LaunchError::Exec { program, source } => write!(f, "execvp: {}: {}", program, source.desc()),
        }
    }
}

impl std::error::Error for LaunchError {}
