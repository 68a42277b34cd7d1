//! Locating the VM executable under a configured VM home.

use std::path::{Path, PathBuf};

use crate::launch::{LaunchError, LaunchResult};

/// Executable name carrying the Windows suffix, probed first.
const WINDOWS_EXECUTABLE: &str = "java.exe";

/// Platform-generic executable name.
const GENERIC_EXECUTABLE: &str = "java";

/// The VM home configured for this process, from `JAVA_HOME`.
pub fn default_vm_home() -> Option<PathBuf> {
    std::env::var_os("JAVA_HOME").map(PathBuf::from)
}

/// Resolve the VM executable under `vm_home`.
///
/// Probes `bin/java.exe` first, then `bin/java`. Pure filesystem read;
/// resolution is idempotent while the filesystem is unchanged.
pub fn resolve_vm_executable(vm_home: &Path) -> LaunchResult<PathBuf> {
    if !vm_home.exists() {
        return Err(LaunchError::VmHomeMissing(vm_home.to_path_buf()));
    }

    let bin_dir = vm_home.join("bin");
    for name in [WINDOWS_EXECUTABLE, GENERIC_EXECUTABLE] {
        let candidate = bin_dir.join(name);
        if candidate.exists() {
            return Ok(std::path::absolute(&candidate).unwrap_or(candidate));
        }
    }

    Err(LaunchError::ExecutableNotFound(bin_dir))
}
