//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::MemoryUsage;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Memory usage report for the check command
#[derive(Debug, Clone, Serialize)]
pub struct MemoryReport {
    pub total_mib: u64,
    pub used_mib: u64,
    pub used_percent: f64,
}

impl From<&MemoryUsage> for MemoryReport {
    fn from(usage: &MemoryUsage) -> Self {
        Self {
            total_mib: usage.total_mib(),
            used_mib: usage.used_mib(),
            used_percent: usage.percent(),
        }
    }
}

impl TableDisplay for MemoryReport {
    fn to_table(&self) -> String {
        format!(
            "Memory: {} MiB / {} MiB ({:.2}%)",
            self.used_mib, self.total_mib, self.used_percent
        )
    }

    fn to_compact(&self) -> String {
        format!("{:.2}%", self.used_percent)
    }
}
