//! Client VM launching for the desktop launcher.
//!
//! This crate owns the final step of the launch pipeline: locating the VM
//! executable for a configured VM home, assembling the client classpath from
//! the two artifact repositories, planning VM tuning flags from the bootstrap
//! manifest, and spawning the client process. It includes:
//!
//! - VM executable resolution under `<home>/bin`
//! - Classpath merge with the legacy-artifact override rule
//! - Per-OS / per-version VM flag planning with two-level fallback
//! - Process spawn with inherited stdio and an optional blocking wait
//!
//! Bootstrap download, manifest validation, and the splash screen itself live
//! in the surrounding launcher; they reach this crate only through
//! [`RuntimeManifest`], [`LaunchRequest`], and [`SplashHandler`].
//!
//! ```ignore
//! use vm_launch::{launch, LaunchMode, LaunchRequest, NoSplash, VmVersion};
//!
//! let outcome = launch(&request, VmVersion::Java17, LaunchMode::Detached, &NoSplash)?;
//! ```

pub mod classpath;
pub mod launch;
pub mod manifest;
pub mod os;
pub mod resolver;

// Re-export commonly used items
pub use classpath::{assemble_classpath, Classpath, LEGACY_ARTIFACT_PREFIX};
pub use launch::{
    launch, CommandLine, LaunchError, LaunchMode, LaunchOutcome, LaunchRequest, LaunchResult,
    NoSplash, SplashHandler,
};
pub use manifest::{RuntimeManifest, VmVersion};
pub use os::HostOs;
pub use resolver::{default_vm_home, resolve_vm_executable};
