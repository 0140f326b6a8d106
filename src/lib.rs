//! Drivertab - kernel driver support matrix generation.
//!
//! Drivertab scans a devices directory of EtherCAT-patched network driver
//! sources, extracts the kernel versions each driver has been adapted for
//! from the source filenames, and renders the result as a markdown
//! presence matrix (kernel versions as rows, drivers as columns).
//!
//! # Modules
//!
//! - [`catalog`] - Static driver catalog and column schema
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result alias
//! - [`scan`] - Directory scanning and kernel version extraction
//! - [`table`] - Presence matrix and markdown rendering
//!
//! # Example
//!
//! ```
//! use drivertab::scan::{KernelVersion, VersionDriverMap};
//! use drivertab::table::DriverTable;
//!
//! let mut map = VersionDriverMap::new();
//! map.entry(KernelVersion { major: 6, minor: 1 })
//!     .or_default()
//!     .insert("igb");
//!
//! let table = DriverTable::build(&map);
//! assert_eq!(table.header()[0], "Kernel");
//! assert_eq!(table.rows()[0][0], "6.1 ");
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod scan;
pub mod table;

pub use error::{DrivertabError, Result};
