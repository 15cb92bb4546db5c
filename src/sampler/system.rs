//! Platform memory source backed by sysinfo

use crate::domain::MemoryUsage;
use crate::error::SamplerError;
use crate::sampler::MemorySource;

use sysinfo::System;

/// Memory source reading real host statistics
///
/// Reuses one `sysinfo::System` across ticks; only the memory tables are
/// refreshed on each sample.
pub struct SystemSource {
    system: System,
}

impl SystemSource {
    /// Create a new system-backed memory source
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySource for SystemSource {
    fn sample(&mut self) -> Result<MemoryUsage, SamplerError> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        let used = self.system.used_memory();

        if total == 0 {
            return Err(SamplerError::Unavailable(
                "platform reported zero total memory".to_string(),
            ));
        }

        Ok(MemoryUsage::new(total, used))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_source_samples_real_memory() {
        let mut source = SystemSource::new();
        let usage = source.sample().expect("host memory should be readable");

        assert!(usage.total_bytes() > 0);
        assert!(usage.percent() >= 0.0);
        assert!(usage.percent() <= 100.0);
    }

    #[test]
    fn test_repeated_samples() {
        let mut source = SystemSource::new();
        let first = source.sample().unwrap();
        let second = source.sample().unwrap();

        // Total memory does not change between ticks
        assert_eq!(first.total_bytes(), second.total_bytes());
    }
}
