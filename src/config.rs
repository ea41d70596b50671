//! Configuration management for distro-base
//!
//! Settings are loaded from environment variables with sensible defaults. They
//! only affect how the host's distribution is discovered and how logging is
//! set up; parsing and comparing bases needs no configuration.
//!
//! # Environment Variables
//!
//! - `DISTRO_BASE_OS_RELEASE`: explicit os-release file to read. When set, the
//!   standard search list is skipped. An empty value counts as unset.
//! - `DISTRO_BASE_ROOT`: root directory the standard os-release paths are
//!   resolved against - default: "/"
//! - `DISTRO_BASE_LOG_LEVEL`: logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use distro_base::DistroConfig;
//!
//! let config = DistroConfig::default();
//! config.validate().expect("Invalid configuration");
//!
//! for path in config.os_release_candidates() {
//!     println!("{}", path.display());
//! }
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_ROOT: &str = "/";
const DEFAULT_LOG_LEVEL: &str = "info";

/// os-release locations relative to the root, in lookup order
pub const OS_RELEASE_PATHS: [&str; 2] = ["etc/os-release", "usr/lib/os-release"];

pub const ENV_OS_RELEASE: &str = "DISTRO_BASE_OS_RELEASE";
pub const ENV_ROOT: &str = "DISTRO_BASE_ROOT";
pub const ENV_LOG_LEVEL: &str = "DISTRO_BASE_LOG_LEVEL";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct DistroConfig {
    /// Explicit os-release file, bypassing the search list
    pub os_release_path: Option<PathBuf>,

    /// Root the standard os-release paths are resolved against
    pub root: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for DistroConfig {
    fn default() -> Self {
        let os_release_path = env::var(ENV_OS_RELEASE)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let root = env::var(ENV_ROOT)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

        let log_level = env::var(ENV_LOG_LEVEL)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            os_release_path,
            root,
            log_level,
        }
    }
}

impl DistroConfig {
    /// Configuration that reads os-release files below `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            os_release_path: None,
            root: root.into(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.os_release_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} must not be empty",
                    ENV_OS_RELEASE
                )));
            }
        }

        if !self.root.is_absolute() {
            return Err(ConfigError::ValidationFailed(format!(
                "Root must be an absolute path, got {}",
                self.root.display()
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Files to try, in order, when reading the host's os-release
    pub fn os_release_candidates(&self) -> Vec<PathBuf> {
        match self.os_release_path {
            Some(ref path) => vec![path.clone()],
            None => OS_RELEASE_PATHS
                .iter()
                .map(|relative| self.root.join(relative))
                .collect(),
        }
    }
}

impl fmt::Display for DistroConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distro Base Configuration:")?;
        match self.os_release_path {
            Some(ref path) => writeln!(f, "  os-release: {}", path.display())?,
            None => writeln!(f, "  Root: {}", self.root.display())?,
        }
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::Path;

    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = [
            EnvGuard::unset(ENV_OS_RELEASE),
            EnvGuard::unset(ENV_ROOT),
            EnvGuard::unset(ENV_LOG_LEVEL),
        ];

        let config = DistroConfig::default();

        assert!(config.os_release_path.is_none());
        assert_eq!(config.root, PathBuf::from(DEFAULT_ROOT));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = [
            EnvGuard::set(ENV_OS_RELEASE, "/tmp/os-release"),
            EnvGuard::set(ENV_ROOT, "/srv/chroot"),
            EnvGuard::set(ENV_LOG_LEVEL, "DEBUG"),
        ];

        let config = DistroConfig::default();

        assert_eq!(config.os_release_path, Some(PathBuf::from("/tmp/os-release")));
        assert_eq!(config.root, PathBuf::from("/srv/chroot"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_empty_os_release_override_is_ignored() {
        let _guards = [
            EnvGuard::set(ENV_OS_RELEASE, ""),
            EnvGuard::unset(ENV_ROOT),
        ];

        let config = DistroConfig::default();
        assert!(config.os_release_path.is_none());
        assert_eq!(config.os_release_candidates().len(), OS_RELEASE_PATHS.len());
    }

    #[test]
    #[serial]
    fn test_empty_root_falls_back_to_default() {
        let _guard = EnvGuard::set(ENV_ROOT, "");

        let config = DistroConfig::default();
        assert_eq!(config.root, PathBuf::from(DEFAULT_ROOT));
    }

    #[test]
    fn test_candidates_follow_root() {
        let config = DistroConfig::with_root("/srv/chroot");

        assert_eq!(
            config.os_release_candidates(),
            vec![
                PathBuf::from("/srv/chroot/etc/os-release"),
                PathBuf::from("/srv/chroot/usr/lib/os-release"),
            ]
        );
    }

    #[test]
    fn test_override_replaces_candidates() {
        let config = DistroConfig {
            os_release_path: Some(PathBuf::from("/custom/os-release")),
            ..DistroConfig::with_root("/")
        };

        let candidates = config.os_release_candidates();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0], Path::new("/custom/os-release"));
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let config = DistroConfig {
            log_level: "loud".to_string(),
            ..DistroConfig::with_root("/")
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("loud"));
    }

    #[test]
    fn test_validation_relative_root() {
        let config = DistroConfig::with_root("chroot");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_override() {
        let config = DistroConfig {
            os_release_path: Some(PathBuf::new()),
            ..DistroConfig::with_root("/")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_display() {
        let config = DistroConfig::with_root("/srv/chroot");
        let display = format!("{}", config);
        assert!(display.contains("Distro Base Configuration:"));
        assert!(display.contains("/srv/chroot"));
    }
}
