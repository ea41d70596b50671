//! distro-base - Linux distribution bases and version-aware comparisons
//!
//! A *base* identifies an operating system image by distribution and series,
//! written `ubuntu@24.04`. This crate parses bases, orders them within a
//! distribution using per-component numeric comparison (so `9.10 < 10.04`),
//! and inspects the host's os-release data.
//!
//! # Example
//!
//! ```
//! use distro_base::{is_ubuntu_like, DistroBase, DistroError, LinuxDistribution};
//!
//! let bionic: DistroBase = "ubuntu@18.04".parse()?;
//! let noble = DistroBase::new("ubuntu", "24.04");
//! assert!(bionic.lt(&noble)?);
//!
//! // Different distributions have no common ordering
//! let bookworm = DistroBase::new("debian", "12");
//! assert!(matches!(
//!     noble.gt(&bookworm),
//!     Err(DistroError::IncompatibleDistributions { .. })
//! ));
//!
//! let mint = LinuxDistribution::new("linuxmint", "21.3", "ubuntu debian");
//! assert!(is_ubuntu_like(Some(&mint)));
//! # Ok::<(), DistroError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`version`]: splitting a series into comparable tokens
//! - [`base`]: the [`DistroBase`] type and accepted comparison shapes
//! - [`host`]: os-release parsing and host detection
//! - [`fs`]: file system abstraction used by host detection
//! - [`config`]: environment-driven configuration
//! - [`util`]: logging setup

pub mod base;
pub mod config;
pub mod error;
pub mod fs;
pub mod host;
pub mod util;
pub mod version;

pub use base::{BaseName, BaseRef, DistroBase};
pub use config::{ConfigError, DistroConfig};
pub use error::DistroError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use host::{is_ubuntu_like, LinuxDistribution};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};
pub use version::{version_tuple, VersionToken, VersionTuple};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
