//! Directory scanning and kernel version extraction.
//!
//! Walks the devices tree (one level per catalog entry, non-recursive),
//! matches filenames of the form `<prefix>-<major>.<minor>-ethercat.c`,
//! and aggregates which drivers exist for which kernel versions.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::catalog::DRIVER_MAP;
use crate::error::{DrivertabError, Result};

/// Kernel release a driver source file was adapted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KernelVersion {
    pub major: u32,
    pub minor: u32,
}

impl KernelVersion {
    /// Row label with the minor component left-justified to at least
    /// two characters: `"5.4 "`, `"5.15"`.
    pub fn label(&self) -> String {
        format!("{}.{:<2}", self.major, self.minor)
    }
}

impl fmt::Display for KernelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Mapping from kernel version to the set of drivers present for it.
pub type VersionDriverMap = BTreeMap<KernelVersion, BTreeSet<&'static str>>;

/// Compile the filename pattern for one driver prefix.
///
/// The extension is fixed to `.c`; only full-name matches count.
fn version_regex(prefix: &str) -> Regex {
    let pattern = format!(r"^{}-(\d+)\.(\d+)-ethercat\.c$", regex::escape(prefix));
    Regex::new(&pattern).unwrap()
}

/// Extract the distinct kernel versions named by `files` for one prefix.
fn filter_versions(files: &[String], prefix: &str) -> BTreeSet<KernelVersion> {
    let rex = version_regex(prefix);
    let mut versions = BTreeSet::new();
    for file in files {
        let Some(caps) = rex.captures(file) else {
            continue;
        };
        // Captures are digit-only; parse can only fail on u32 overflow.
        let (Ok(major), Ok(minor)) = (caps[1].parse(), caps[2].parse()) else {
            tracing::debug!("Skipping '{}': version component out of range", file);
            continue;
        };
        versions.insert(KernelVersion { major, minor });
    }
    versions
}

/// List the immediate regular files of `dir`.
///
/// Non-UTF-8 filenames cannot match any pattern and are skipped.
fn list_files(dir: &Path) -> Result<Vec<String>> {
    let scan_err = |source| DrivertabError::Scan {
        dir: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        if !entry.file_type().map_err(scan_err)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            files.push(name.to_string());
        }
    }
    Ok(files)
}

/// Scan the devices tree and collect the drivers present per kernel version.
///
/// Each catalog entry contributes the versions found in its directory; a
/// missing or unreadable directory is fatal. A subdirectory shared by two
/// entries is listed once per entry.
pub fn scan_drivers(devices_dir: &Path) -> Result<VersionDriverMap> {
    let root_files = list_files(devices_dir)?;

    let mut map = VersionDriverMap::new();
    for entry in DRIVER_MAP {
        let versions = match entry.subdir {
            None => filter_versions(&root_files, entry.prefix),
            Some(subdir) => {
                let files = list_files(&devices_dir.join(subdir))?;
                filter_versions(&files, entry.prefix)
            }
        };
        tracing::debug!(
            "Found {} kernel version(s) for driver '{}'",
            versions.len(),
            entry.name
        );
        for version in versions {
            map.entry(version).or_default().insert(entry.name);
        }
    }
    Ok(map)
}
