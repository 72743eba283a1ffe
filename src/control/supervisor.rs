//! Supervisor restart capability
//!
//! Terminates the current process after a delay and relaunches it with the
//! same command line and working directory.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.0.0: Self-respawn supervisor with detached child process

use anyhow::{anyhow, Context, Result};
use log::{error, info};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Something able to restart the bot process
pub trait Supervisor: Send + Sync {
    /// Arrange for the process to be replaced once `delay` has elapsed
    ///
    /// Must return immediately; the restart happens in the background.
    fn schedule_restart(&self, delay: Duration);
}

/// Command line and working directory of the running process
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
    cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>, args: Vec<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Invocation {
            program: program.into(),
            args,
            cwd: cwd.into(),
        }
    }

    /// Capture how the current process was started
    ///
    /// Call this early: the working directory is read as it is right now.
    pub fn current() -> Result<Self> {
        let mut argv = std::env::args_os();
        let program = argv
            .next()
            .ok_or_else(|| anyhow!("Process started with an empty argument vector"))?;
        let cwd = std::env::current_dir().context("Failed to read current working directory")?;

        Ok(Invocation::new(program, argv.collect(), cwd))
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// The command that relaunches this invocation
    ///
    /// Stdio is inherited. On unix the child gets its own process group so
    /// signals aimed at the parent's group do not reach it. It stays in the
    /// parent's session though, so a hangup of the controlling terminal still
    /// reaches it.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        command
    }

    /// Launch the replacement process, returning its pid
    ///
    /// The child is not waited on and keeps running after this process exits.
    pub fn respawn(&self) -> Result<u32> {
        let child = self
            .command()
            .spawn()
            .with_context(|| format!("Failed to spawn {:?}", self.program))?;
        Ok(child.id())
    }
}

/// Run `action` on the runtime once `delay` has elapsed
pub fn spawn_delayed<F>(delay: Duration, action: F) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        action();
    })
}

/// Supervisor that restarts by respawning its own command line and exiting
pub struct SelfRespawn {
    invocation: Invocation,
}

impl SelfRespawn {
    pub fn new(invocation: Invocation) -> Self {
        SelfRespawn { invocation }
    }
}

impl Supervisor for SelfRespawn {
    fn schedule_restart(&self, delay: Duration) {
        let invocation = self.invocation.clone();
        info!("🔄 Process will restart in {}s", delay.as_secs());

        spawn_delayed(delay, move || {
            match invocation.respawn() {
                Ok(pid) => info!("🔄 Replacement process started (pid {pid}), exiting"),
                Err(e) => error!("Restart failed, exiting without replacement: {e:#}"),
            }
            log::logger().flush();
            std::process::exit(0);
        });
    }
}
