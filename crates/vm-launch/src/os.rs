//! Host operating system classification for VM flag planning.

/// Operating systems the launcher distinguishes when selecting VM flags.
///
/// Anything that is not Windows or macOS plans with the version-generic
/// flag lists only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    MacOs,
    Other,
}

impl HostOs {
    /// The OS this launcher was built for.
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        {
            HostOs::Windows
        }

        #[cfg(target_os = "macos")]
        {
            HostOs::MacOs
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            HostOs::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_stable() {
        assert_eq!(HostOs::current(), HostOs::current());
    }
}
