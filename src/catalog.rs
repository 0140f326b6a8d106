//! Static catalog of supported network drivers.
//!
//! The catalog maps each driver to the subdirectory its patched sources
//! live in and the filename prefix of its main source file. The derived
//! sorted name set fixes the column order for the rendered matrix.

use std::collections::BTreeSet;

/// One driver family and its filename convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverEntry {
    /// Subdirectory of the devices root holding the sources, or `None`
    /// for drivers whose sources live in the root itself.
    pub subdir: Option<&'static str>,
    /// Driver name as shown in the table column.
    pub name: &'static str,
    /// Filename prefix of the driver's main source file.
    pub prefix: &'static str,
}

/// Supported drivers and where their patched sources live.
///
/// A driver may appear more than once when its main source file moved
/// between kernel releases (r8169 gained an `r8169/` subdirectory).
pub const DRIVER_MAP: &[DriverEntry] = &[
    DriverEntry {
        subdir: None,
        name: "8139too",
        prefix: "8139too",
    },
    DriverEntry {
        subdir: Some("stmmac"),
        name: "dwmac-intel",
        prefix: "dwmac-intel",
    },
    DriverEntry {
        subdir: None,
        name: "e100",
        prefix: "e100",
    },
    DriverEntry {
        subdir: Some("e1000"),
        name: "e1000",
        prefix: "e1000_main",
    },
    DriverEntry {
        subdir: Some("e1000e"),
        name: "e1000e",
        prefix: "netdev",
    },
    DriverEntry {
        subdir: Some("genet"),
        name: "bcmgenet",
        prefix: "bcmgenet",
    },
    DriverEntry {
        subdir: Some("igb"),
        name: "igb",
        prefix: "igb_main",
    },
    DriverEntry {
        subdir: Some("igc"),
        name: "igc",
        prefix: "igc_main",
    },
    DriverEntry {
        subdir: None,
        name: "r8169",
        prefix: "r8169",
    },
    DriverEntry {
        subdir: Some("r8169"),
        name: "r8169",
        prefix: "r8169_main",
    },
    DriverEntry {
        subdir: Some("stmmac"),
        name: "stmmac-pci",
        prefix: "stmmac_pci",
    },
];

/// Sorted, deduplicated driver names across the catalog.
///
/// This is the column schema of the presence matrix.
pub fn driver_names() -> Vec<&'static str> {
    let names: BTreeSet<&'static str> = DRIVER_MAP.iter().map(|e| e.name).collect();
    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_names_sorted_and_deduplicated() {
        let names = driver_names();
        assert_eq!(
            names,
            vec![
                "8139too",
                "bcmgenet",
                "dwmac-intel",
                "e100",
                "e1000",
                "e1000e",
                "igb",
                "igc",
                "r8169",
                "stmmac-pci",
            ]
        );
    }

    #[test]
    fn r8169_listed_twice_in_map() {
        let count = DRIVER_MAP.iter().filter(|e| e.name == "r8169").count();
        assert_eq!(count, 2);
    }

    #[test]
    fn root_entries_have_no_subdir() {
        for entry in DRIVER_MAP.iter().filter(|e| e.subdir.is_none()) {
            assert!(["8139too", "e100", "r8169"].contains(&entry.name));
        }
    }

    #[test]
    fn shared_subdir_entries_exist() {
        // Two stmmac drivers share one subdirectory.
        let stmmac: Vec<_> = DRIVER_MAP
            .iter()
            .filter(|e| e.subdir == Some("stmmac"))
            .map(|e| e.name)
            .collect();
        assert_eq!(stmmac, vec!["dwmac-intel", "stmmac-pci"]);
    }
}
