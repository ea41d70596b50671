//! Distribution bases and their comparison rules
//!
//! A [`DistroBase`] names an operating system image as a distribution plus a
//! series, e.g. `ubuntu@24.04`. Two bases are equal when both parts match
//! exactly. Ordering is only meaningful inside one distribution, so the
//! ordering methods return [`DistroError::IncompatibleDistributions`] instead
//! of a boolean when the distributions differ.
//!
//! Comparisons also accept the looser shapes older callers use for the same
//! information: anything implementing [`BaseName`] and plain
//! `(distribution, series)` pairs. All of them are normalised into a
//! [`BaseRef`] before comparing.
//!
//! # Example
//!
//! ```
//! use distro_base::DistroBase;
//!
//! let jammy: DistroBase = "ubuntu@22.04".parse().unwrap();
//! let noble = DistroBase::new("ubuntu", "24.04");
//!
//! assert!(jammy.lt(&noble).unwrap());
//! assert!(noble == ("ubuntu", "24.04"));
//! assert!(noble.lt(("debian", "12")).is_err());
//! ```

use crate::error::{DistroError, Result};
use crate::host::LinuxDistribution;
use crate::version::{version_tuple, VersionTuple};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Anything that can describe an OS base by name and version
///
/// This is the shape older tooling uses (`name`/`version` rather than
/// `distribution`/`series`). Implementors can be compared against a
/// [`DistroBase`] through [`BaseRef::named`].
pub trait BaseName {
    fn name(&self) -> &str;
    fn version(&self) -> &str;
}

/// A Linux distribution base
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DistroBase {
    pub distribution: String,
    pub series: String,
}

/// Borrowed view of any value a base can be compared with
#[derive(Clone, Copy)]
pub enum BaseRef<'a> {
    Base(&'a DistroBase),
    Named(&'a dyn BaseName),
    Pair(&'a str, &'a str),
}

impl<'a> BaseRef<'a> {
    pub fn named(base: &'a dyn BaseName) -> Self {
        BaseRef::Named(base)
    }

    pub fn distribution(&self) -> &'a str {
        match *self {
            BaseRef::Base(base) => &base.distribution,
            BaseRef::Named(named) => named.name(),
            BaseRef::Pair(distribution, _) => distribution,
        }
    }

    pub fn version(&self) -> &'a str {
        match *self {
            BaseRef::Base(base) => &base.series,
            BaseRef::Named(named) => named.version(),
            BaseRef::Pair(_, version) => version,
        }
    }
}

impl fmt::Debug for BaseRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            BaseRef::Base(_) => "Base",
            BaseRef::Named(_) => "Named",
            BaseRef::Pair(..) => "Pair",
        };
        f.debug_struct("BaseRef")
            .field("kind", &kind)
            .field("distribution", &self.distribution())
            .field("version", &self.version())
            .finish()
    }
}

impl<'a> From<&'a DistroBase> for BaseRef<'a> {
    fn from(base: &'a DistroBase) -> Self {
        BaseRef::Base(base)
    }
}

impl<'a> From<&'a dyn BaseName> for BaseRef<'a> {
    fn from(named: &'a dyn BaseName) -> Self {
        BaseRef::Named(named)
    }
}

impl<'a> From<(&'a str, &'a str)> for BaseRef<'a> {
    fn from((distribution, version): (&'a str, &'a str)) -> Self {
        BaseRef::Pair(distribution, version)
    }
}

impl<'a, S: AsRef<str>> From<&'a (S, S)> for BaseRef<'a> {
    fn from(pair: &'a (S, S)) -> Self {
        BaseRef::Pair(pair.0.as_ref(), pair.1.as_ref())
    }
}

impl DistroBase {
    pub fn new(distribution: impl Into<String>, series: impl Into<String>) -> Self {
        Self {
            distribution: distribution.into(),
            series: series.into(),
        }
    }

    /// Build a base from a host distribution descriptor's id and version
    pub fn from_linux_distribution(distribution: &LinuxDistribution) -> Self {
        Self::new(distribution.id(), distribution.version())
    }

    /// Describe the running host as a base
    pub fn from_host() -> anyhow::Result<Self> {
        let distribution = LinuxDistribution::from_host()?;
        Ok(Self::from_linux_distribution(&distribution))
    }

    pub fn version_tuple(&self) -> VersionTuple {
        version_tuple(&self.series)
    }

    /// Structural equality against any accepted shape
    pub fn matches<'a>(&self, other: impl Into<BaseRef<'a>>) -> bool {
        let other = other.into();
        self.distribution == other.distribution() && self.series == other.version()
    }

    fn ensure_comparable(&self, other: &BaseRef<'_>) -> Result<()> {
        let other_distribution = other.distribution();
        if self.distribution != other_distribution {
            debug!(
                left = %self.distribution,
                right = %other_distribution,
                "Refusing to order bases of different distributions"
            );
            return Err(DistroError::IncompatibleDistributions {
                left: self.distribution.clone(),
                right: other_distribution.to_string(),
            });
        }
        Ok(())
    }

    /// Order this base against another of the same distribution
    pub fn try_cmp<'a>(&self, other: impl Into<BaseRef<'a>>) -> Result<Ordering> {
        let other = other.into();
        self.ensure_comparable(&other)?;

        let ours = self.version_tuple();
        let theirs = version_tuple(other.version());
        let ordering = ours.cmp(&theirs);
        trace!(ours = %ours, theirs = %theirs, ?ordering, "Compared version tuples");
        Ok(ordering)
    }

    pub fn lt<'a>(&self, other: impl Into<BaseRef<'a>>) -> Result<bool> {
        Ok(self.try_cmp(other)?.is_lt())
    }

    pub fn le<'a>(&self, other: impl Into<BaseRef<'a>>) -> Result<bool> {
        Ok(self.try_cmp(other)?.is_le())
    }

    pub fn gt<'a>(&self, other: impl Into<BaseRef<'a>>) -> Result<bool> {
        Ok(self.try_cmp(other)?.is_gt())
    }

    pub fn ge<'a>(&self, other: impl Into<BaseRef<'a>>) -> Result<bool> {
        Ok(self.try_cmp(other)?.is_ge())
    }
}

impl BaseName for DistroBase {
    fn name(&self) -> &str {
        &self.distribution
    }

    fn version(&self) -> &str {
        &self.series
    }
}

impl FromStr for DistroBase {
    type Err = DistroError;

    fn from_str(base_str: &str) -> Result<Self> {
        let invalid = || DistroError::InvalidBaseString(base_str.to_string());
        let (distribution, series) = base_str.split_once('@').ok_or_else(invalid)?;
        if series.contains('@') {
            return Err(invalid());
        }
        Ok(Self::new(distribution, series))
    }
}

impl TryFrom<String> for DistroBase {
    type Error = DistroError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DistroBase> for String {
    fn from(base: DistroBase) -> Self {
        base.to_string()
    }
}

impl fmt::Display for DistroBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.distribution, self.series)
    }
}

impl<S: AsRef<str>> PartialEq<(S, S)> for DistroBase {
    fn eq(&self, other: &(S, S)) -> bool {
        self.distribution == other.0.as_ref() && self.series == other.1.as_ref()
    }
}

impl PartialEq<DistroBase> for (&str, &str) {
    fn eq(&self, other: &DistroBase) -> bool {
        other == self
    }
}

impl PartialEq<DistroBase> for (String, String) {
    fn eq(&self, other: &DistroBase) -> bool {
        other == self
    }
}

impl PartialEq<BaseRef<'_>> for DistroBase {
    fn eq(&self, other: &BaseRef<'_>) -> bool {
        self.matches(*other)
    }
}

impl PartialEq<dyn BaseName + '_> for DistroBase {
    fn eq(&self, other: &(dyn BaseName + '_)) -> bool {
        self.matches(BaseRef::Named(other))
    }
}
