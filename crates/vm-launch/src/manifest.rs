//! Bootstrap manifest flag lists and VM argument planning.
//!
//! The manifest is fetched and validated by the bootstrap collaborator; this
//! crate only reads the per-OS / per-version VM flag lists out of it. Any
//! list may be absent, and planning falls back in two explicit steps:
//! OS-specific list, then the version-generic list, then nothing.

use serde::{Deserialize, Serialize};

use crate::os::HostOs;

/// Major VM versions the launcher targets.
///
/// `Java17` is the current line with per-OS flag specialization; `Java9` is
/// the legacy line, which defines generic flags only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmVersion {
    Java17,
    Java9,
}

/// VM flag lists from the bootstrap manifest.
///
/// An OS-specific list replaces the version-generic one entirely, it never
/// extends it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeManifest {
    /// Generic flags for the Java 17 line, any OS.
    pub vm17_args: Option<Vec<String>>,
    /// Windows-specific flags for the Java 17 line.
    pub vm17_windows_args: Option<Vec<String>>,
    /// macOS-specific flags for the Java 17 line.
    pub vm17_mac_args: Option<Vec<String>>,
    /// Flags for the legacy Java 9 line, any OS.
    pub vm9_args: Option<Vec<String>>,
}

impl RuntimeManifest {
    /// The Java 17 list defined specifically for `os`, if any.
    fn os_specific_vm17(&self, os: HostOs) -> Option<&[String]> {
        match os {
            HostOs::Windows => self.vm17_windows_args.as_deref(),
            HostOs::MacOs => self.vm17_mac_args.as_deref(),
            HostOs::Other => None,
        }
    }

    /// Select the VM tuning flags for the given version and host OS.
    ///
    /// Returns `None` when the manifest defines no applicable list; the
    /// command line then carries no manifest flags at all.
    pub fn vm_args_for(&self, version: VmVersion, os: HostOs) -> Option<&[String]> {
        match version {
            VmVersion::Java17 => self.os_specific_vm17(os).or(self.vm17_args.as_deref()),
            // No OS specialization exists for the legacy line.
            VmVersion::Java9 => self.vm9_args.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_os_specific_replaces_generic() {
        let manifest = RuntimeManifest {
            vm17_windows_args: flags(&["-Xflag1"]),
            vm17_args: flags(&["-Xflag2"]),
            ..Default::default()
        };

        // Windows gets exactly its own list, not the generic one appended.
        assert_eq!(
            manifest.vm_args_for(VmVersion::Java17, HostOs::Windows),
            Some(&["-Xflag1".to_string()][..])
        );
    }

    #[test]
    fn test_mac_specific_replaces_generic() {
        let manifest = RuntimeManifest {
            vm17_mac_args: flags(&["-XstartOnFirstThread"]),
            vm17_args: flags(&["-Xmx512m"]),
            ..Default::default()
        };

        assert_eq!(
            manifest.vm_args_for(VmVersion::Java17, HostOs::MacOs),
            Some(&["-XstartOnFirstThread".to_string()][..])
        );
    }

    #[test]
    fn test_fallback_to_generic_without_os_list() {
        let manifest = RuntimeManifest {
            vm17_args: flags(&["-Xmx512m", "-XX:+UseG1GC"]),
            ..Default::default()
        };

        for os in [HostOs::Windows, HostOs::MacOs, HostOs::Other] {
            assert_eq!(
                manifest.vm_args_for(VmVersion::Java17, os),
                Some(&["-Xmx512m".to_string(), "-XX:+UseG1GC".to_string()][..])
            );
        }
    }

    #[test]
    fn test_no_lists_defined() {
        let manifest = RuntimeManifest::default();
        assert_eq!(manifest.vm_args_for(VmVersion::Java17, HostOs::Windows), None);
        assert_eq!(manifest.vm_args_for(VmVersion::Java9, HostOs::Other), None);
    }

    #[test]
    fn test_legacy_version_ignores_os() {
        let manifest = RuntimeManifest {
            vm9_args: flags(&["--add-opens=java.base/java.lang=ALL-UNNAMED"]),
            vm17_windows_args: flags(&["-Xflag1"]),
            ..Default::default()
        };

        for os in [HostOs::Windows, HostOs::MacOs, HostOs::Other] {
            assert_eq!(
                manifest.vm_args_for(VmVersion::Java9, os),
                Some(&["--add-opens=java.base/java.lang=ALL-UNNAMED".to_string()][..])
            );
        }
    }

    #[test]
    fn test_manifest_from_json() {
        let manifest: RuntimeManifest = serde_json::from_str(
            r#"{
                "vm17Args": ["-Xmx768m"],
                "vm17MacArgs": ["-XstartOnFirstThread"]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.vm17_args, Some(vec!["-Xmx768m".to_string()]));
        assert_eq!(
            manifest.vm17_mac_args,
            Some(vec!["-XstartOnFirstThread".to_string()])
        );
        assert_eq!(manifest.vm17_windows_args, None);
        assert_eq!(manifest.vm9_args, None);
    }
}
