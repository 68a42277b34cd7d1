//! Composing the client command line and launching the VM process.
//!
//! The pipeline is linear and synchronous: resolve the VM executable,
//! assemble the classpath, plan VM flags from the manifest, compose the
//! command line, spawn. In blocking mode the splash screen is dismissed and
//! the call waits for the child to exit; otherwise the child is left running
//! and the launcher is free to exit.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};

use log::{error, info};

use crate::classpath::{assemble_classpath, Classpath};
use crate::manifest::{RuntimeManifest, VmVersion};
use crate::os::HostOs;
use crate::resolver::resolve_vm_executable;

/// Enables VM assertions in the client.
const ASSERTIONS_FLAG: &str = "-ea";

/// Classpath flag; its value is the separator-joined entry list.
const CLASSPATH_FLAG: &str = "-cp";

/// Marker telling the client it was started by this launcher.
const DEVELOPER_MODE_FLAG: &str = "--developer-mode";

/// Result type for launch operations.
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Errors that can occur while launching the client VM.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("VM home {0:?} does not exist")]
    VmHomeMissing(PathBuf),

    #[error("no VM executable found in {0:?}")]
    ExecutableNotFound(PathBuf),

    #[error("failed to spawn VM process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("wait for VM process was interrupted: {0}")]
    WaitInterrupted(#[source] std::io::Error),
}

/// Everything the caller supplies for one launch.
///
/// All fields are caller-owned and read-only here; nothing outlives the
/// launch call, and nothing is re-validated beyond what resolution and
/// directory enumeration require.
#[derive(Debug, Clone)]
pub struct LaunchRequest<'a> {
    /// Bootstrap manifest carrying the per-OS / per-version VM flag lists.
    pub manifest: &'a RuntimeManifest,
    /// VM installation to launch with, see [`crate::default_vm_home`].
    pub vm_home: &'a Path,
    /// Primary artifact repository; wins over `secondary_dir`.
    pub primary_dir: &'a Path,
    /// Secondary artifact repository.
    pub secondary_dir: &'a Path,
    /// Fully qualified entry point of the client application.
    pub entry_point: &'a str,
    /// Arguments passed through to the client, in the caller's order.
    pub client_args: &'a [String],
    /// System properties, one `-D<key>=<value>` flag each.
    pub vm_props: &'a BTreeMap<String, String>,
    /// Extra VM flags supplied by the caller, in the caller's order.
    pub vm_args: &'a [String],
}

/// Whether the launcher waits for the client to exit.
///
/// `Blocking` corresponds to running under verbose diagnostic logging: the
/// splash screen is dismissed and the calling thread parks until the child
/// exits. `Detached` returns right after spawn so the launcher can exit
/// while the client keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Detached,
    Blocking,
}

/// Receiver for the splash-screen dismissal sent on the blocking path.
///
/// The launcher UI implements this to take down its splash window before
/// the launch call parks in `wait`.
pub trait SplashHandler {
    fn dismiss(&self);
}

/// No-op handler for headless callers.
pub struct NoSplash;

impl SplashHandler for NoSplash {
    fn dismiss(&self) {}
}

/// A successful launch: a detached child, or the exit status after a
/// blocking wait.
#[derive(Debug)]
pub enum LaunchOutcome {
    Spawned(Child),
    Exited(ExitStatus),
}

/// The composed command line: VM executable plus every argument, in order.
///
/// Built once per launch and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandLine {
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Compose the full client command line.
///
/// Ordering is fixed: assertions and classpath flags, manifest tuning flags,
/// `-D` properties, caller VM flags, then the entry point, the
/// developer-mode marker, and the client arguments. Property iteration
/// follows the map's order, which is stable within a run.
pub fn compose_command(
    vm_exe: PathBuf,
    classpath: &Classpath,
    request: &LaunchRequest<'_>,
    version: VmVersion,
    os: HostOs,
) -> CommandLine {
    let mut args = Vec::new();
    args.push(ASSERTIONS_FLAG.to_string());
    args.push(CLASSPATH_FLAG.to_string());
    args.push(classpath.as_arg());

    if let Some(flags) = request.manifest.vm_args_for(version, os) {
        args.extend(flags.iter().cloned());
    }

    for (key, value) in request.vm_props {
        args.push(format!("-D{key}={value}"));
    }
    args.extend(request.vm_args.iter().cloned());

    args.push(request.entry_point.to_string());
    args.push(DEVELOPER_MODE_FLAG.to_string());
    args.extend(request.client_args.iter().cloned());

    CommandLine {
        program: vm_exe,
        args,
    }
}

/// Launch the client VM described by `request`.
///
/// Resolver failures are logged here and returned without spawning anything;
/// spawn and wait failures propagate to the caller untouched. No step is
/// retried: a launch is one shot, and retrying belongs to the caller.
///
/// The child inherits the launcher's stdin, stdout, and stderr. Once
/// spawned, the process belongs to the OS; this crate keeps no handle to it
/// beyond the returned [`LaunchOutcome`].
pub fn launch(
    request: &LaunchRequest<'_>,
    version: VmVersion,
    mode: LaunchMode,
    splash: &dyn SplashHandler,
) -> LaunchResult<LaunchOutcome> {
    let vm_exe = match resolve_vm_executable(request.vm_home) {
        Ok(path) => path,
        Err(err) => {
            error!("[launch] Unable to locate VM executable: {err}");
            return Err(err);
        }
    };

    let classpath = assemble_classpath(request.primary_dir, request.secondary_dir);
    let command = compose_command(vm_exe, &classpath, request, version, HostOs::current());

    info!("[launch] Running {command}");

    let mut child = command.to_command().spawn().map_err(LaunchError::Spawn)?;

    match mode {
        LaunchMode::Detached => Ok(LaunchOutcome::Spawned(child)),
        LaunchMode::Blocking => {
            splash.dismiss();
            let status = child.wait().map_err(LaunchError::WaitInterrupted)?;
            Ok(LaunchOutcome::Exited(status))
        }
    }
}
