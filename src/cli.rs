//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// Drivertab - kernel driver support matrix generator.
#[derive(Debug, Parser)]
#[command(name = "drivertab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Devices driver source directory
    pub devices_dir: PathBuf,

    /// Write the rendered table to this markdown file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub markdown: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
