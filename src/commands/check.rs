//! Check command implementation
//!
//! Samples memory usage once and prints it.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, MemoryReport};
use crate::error::Result;
use crate::sampler::{MemorySource, SystemSource};

/// Execute the check command
pub fn run_check(format: OutputFormat) -> Result<()> {
    let mut source = SystemSource::new();
    let usage = source.sample()?;

    let report = MemoryReport::from(&usage);
    print_output(&report, format)?;

    Ok(())
}
