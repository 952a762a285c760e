use std::os::unix::io::RawFd;
use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::unistd::{close, dup2};
use crate::ast::{Redirect, RedirectKind};
use crate::error::LaunchError;

pub struct RedirectHandler;

impl RedirectHandler {
    /// Open flags and the standard stream a directive rewires.
    pub fn open_flags(kind: RedirectKind) -> (OFlag, RawFd) {
        match kind {
            RedirectKind::In => (OFlag::O_RDONLY, libc::STDIN_FILENO),
            RedirectKind::Out => (
                OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC,
                libc::STDOUT_FILENO,
            ),
            RedirectKind::Append => (
                OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_APPEND,
                libc::STDOUT_FILENO,
            ),
        }
    }

    /// rw-r--r--, before umask.
    pub fn create_mode() -> Mode {
        Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IROTH
    }

    /// Open the target and install it over stdin or stdout of the calling
    /// process. Only ever called in a forked child.
    pub fn apply(redirect: &Redirect) -> Result<(), LaunchError> {
        let path = redirect
            .target
            .as_deref()
            .ok_or(LaunchError::MissingTarget(redirect.kind))?;
        let (flags, stream) = Self::open_flags(redirect.kind);

        let fd = open(path, flags, Self::create_mode()).map_err(|source| LaunchError::Open {
            path: path.to_string(),
            source,
        })?;
        if fd != stream {
            dup2(fd, stream).map_err(|source| LaunchError::Dup { source })?;
            if let Err(e) = close(fd) {
                log::debug!("close({}) after dup2 failed: {}", fd, e);
            }
        }
        Ok(())
    }
}
