//! Host distribution descriptor
//!
//! [`LinuxDistribution`] carries the identity fields of an os-release file:
//! the id, version, related ids (`ID_LIKE`) and a few display names. It can be
//! built from os-release text, loaded through a [`FileSystem`], or read from
//! the running host.

mod os_release;

pub use os_release::parse_os_release;

use crate::config::DistroConfig;
use crate::fs::{FileSystem, RealFileSystem};
use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

const UBUNTU_ID: &str = "ubuntu";

/// Ids some distributions ship that differ from the name they are known by
const NORMALIZED_IDS: [(&str, &str); 2] = [("ol", "oracle"), ("opensuse-leap", "opensuse")];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinuxDistribution {
    id: String,
    version: String,
    like: String,
    name: String,
    codename: String,
    pretty_name: String,
    values: BTreeMap<String, String>,
}

impl LinuxDistribution {
    /// Descriptor with just an id, version and `ID_LIKE` list
    pub fn new(id: impl Into<String>, version: impl Into<String>, like: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            like: like.into(),
            ..Default::default()
        }
    }

    pub fn from_os_release_str(content: &str) -> Self {
        let values = parse_os_release(content);
        let field = |key: &str| values.get(key).cloned().unwrap_or_default();

        let id = normalize_id(&field("ID"));
        let version = values
            .get("VERSION_ID")
            .filter(|v| !v.is_empty())
            .cloned()
            .or_else(|| values.get("VERSION").and_then(|v| version_from_text(v)))
            .unwrap_or_default();
        let codename = ["VERSION_CODENAME", "UBUNTU_CODENAME"]
            .iter()
            .filter_map(|key| values.get(*key))
            .find(|v| !v.is_empty())
            .cloned()
            .or_else(|| values.get("VERSION").and_then(|v| codename_from_text(v)))
            .unwrap_or_default();

        Self {
            id,
            version,
            like: field("ID_LIKE"),
            name: field("NAME"),
            codename,
            pretty_name: field("PRETTY_NAME"),
            values,
        }
    }

    /// Read the first os-release file the configuration points at
    pub fn load(fs: &dyn FileSystem, config: &DistroConfig) -> Result<Self> {
        let candidates = config.os_release_candidates();

        for path in &candidates {
            if !fs.is_file(path) {
                trace!(path = %path.display(), "os-release candidate not present");
                continue;
            }

            let content = fs
                .read_to_string(path)
                .with_context(|| format!("Failed to read os-release from {}", path.display()))?;
            let distribution = Self::from_os_release_str(&content);
            debug!(
                path = %path.display(),
                id = %distribution.id,
                version = %distribution.version,
                "Loaded distribution descriptor"
            );
            return Ok(distribution);
        }

        let tried: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
        bail!("No os-release file found (tried {})", tried.join(", "))
    }

    /// Descriptor of the running host
    pub fn from_host() -> Result<Self> {
        Self::load(&RealFileSystem::new(), &DistroConfig::default())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Space-separated ids of related distributions
    pub fn like(&self) -> &str {
        &self.like
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codename(&self) -> &str {
        &self.codename
    }

    pub fn pretty_name(&self) -> &str {
        &self.pretty_name
    }

    /// Raw os-release value, if the descriptor was parsed from one
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_ubuntu_like(&self) -> bool {
        let ubuntu_like =
            self.id == UBUNTU_ID || self.like.split_whitespace().any(|id| id == UBUNTU_ID);
        debug!(id = %self.id, like = %self.like, ubuntu_like, "Checked for Ubuntu family");
        ubuntu_like
    }
}

/// Whether the distribution is Ubuntu or declares itself Ubuntu-like
///
/// With `None` the running host is inspected. A host without a readable
/// os-release file is not Ubuntu-like.
pub fn is_ubuntu_like(distribution: Option<&LinuxDistribution>) -> bool {
    match distribution {
        Some(distribution) => distribution.is_ubuntu_like(),
        None => match LinuxDistribution::from_host() {
            Ok(host) => host.is_ubuntu_like(),
            Err(e) => {
                warn!(error = %e, "Could not determine host distribution");
                false
            }
        },
    }
}

fn normalize_id(raw: &str) -> String {
    let id = raw.to_lowercase().replace(' ', "_");
    NORMALIZED_IDS
        .iter()
        .find(|(from, _)| *from == id)
        .map(|(_, to)| to.to_string())
        .unwrap_or(id)
}

// "10 (buster)" -> "10", "22.04.4 LTS (Jammy Jellyfish)" -> "22.04.4"
fn version_from_text(text: &str) -> Option<String> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let version: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    Some(version.trim_end_matches('.').to_string())
}

fn codename_from_text(text: &str) -> Option<String> {
    let open = text.find('(')?;
    let close = text[open..].find(')')? + open;
    let codename = text[open + 1..close].trim();
    (!codename.is_empty()).then(|| codename.to_string())
}
