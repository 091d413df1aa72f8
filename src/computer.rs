//! Validating fluent builder for [`Computer`].
//!
//! Setters can be called in any order and any number of times; the last
//! value wins. All checks run in [`ComputerBuilder::build`], which reports
//! the first rule that fails.
//!
//! ```rust
//! use strainer::computer::ComputerBuilder;
//! use strainer::error::BuildError;
//!
//! let gaming = ComputerBuilder::new()
//!     .cpu("Intel Core i9")
//!     .ram(32)
//!     .storage(1000)
//!     .gpu("NVIDIA RTX 4090")
//!     .os("Windows 11")
//!     .build()?;
//! assert_eq!(gaming.gpu.as_deref(), Some("NVIDIA RTX 4090"));
//!
//! let err = ComputerBuilder::new().cpu("Intel Core i5").build().unwrap_err();
//! assert_eq!(err, BuildError::NoRam);
//! # Ok::<(), BuildError>(())
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::predicate::{ensure, ensure_with, le, not_empty, positive};

/// Largest RAM size accepted, in GB.
pub const MAX_RAM_GB: u32 = 1024;

/// Largest storage size accepted, in GB (100 TB).
pub const MAX_STORAGE_GB: u32 = 100_000;

/// A validated machine description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Computer {
    /// Processor model.
    pub cpu: String,
    /// Memory in GB.
    pub ram: u32,
    /// Disk size in GB.
    pub storage: u32,
    /// Graphics card, if any.
    pub gpu: Option<String>,
    /// Operating system.
    pub os: String,
}

/// Multi-line summary. A missing GPU prints as `none` rather than an empty
/// field.
impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Computer{{")?;
        writeln!(f, "  CPU: {},", self.cpu)?;
        writeln!(f, "  RAM: {}GB,", self.ram)?;
        writeln!(f, "  Storage: {}GB,", self.storage)?;
        writeln!(f, "  GPU: {},", self.gpu.as_deref().unwrap_or("none"))?;
        writeln!(f, "  OS: {}", self.os)?;
        write!(f, "}}")
    }
}

/// Collects [`Computer`] parts and validates them on [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ComputerBuilder {
    cpu: String,
    ram: u32,
    storage: u32,
    gpu: Option<String>,
    os: String,
}

impl ComputerBuilder {
    /// Start with every part unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the processor model. Required.
    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = cpu.into();
        self
    }

    /// Set memory in GB. Required, at most [`MAX_RAM_GB`].
    pub fn ram(mut self, gb: u32) -> Self {
        self.ram = gb;
        self
    }

    /// Set disk size in GB. Required, at most [`MAX_STORAGE_GB`].
    pub fn storage(mut self, gb: u32) -> Self {
        self.storage = gb;
        self
    }

    /// Set the graphics card. Optional.
    pub fn gpu(mut self, gpu: impl Into<String>) -> Self {
        self.gpu = Some(gpu.into());
        self
    }

    /// Set the operating system. Required.
    pub fn os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    /// Validate and assemble the computer.
    ///
    /// Presence checks run before range checks, so a builder with no RAM
    /// and no OS reports [`BuildError::NoRam`].
    pub fn build(self) -> Result<Computer, BuildError> {
        let cpu = ensure(self.cpu, not_empty(), BuildError::MissingCpu)?;
        let ram = ensure(self.ram, positive(), BuildError::NoRam)?;
        let storage = ensure(self.storage, positive(), BuildError::NoStorage)?;
        let os = ensure(self.os, not_empty(), BuildError::MissingOs)?;

        let ram = ensure_with(ram, le(MAX_RAM_GB), |&requested| BuildError::RamTooLarge {
            requested,
            max: MAX_RAM_GB,
        })?;
        let storage = ensure_with(storage, le(MAX_STORAGE_GB), |&requested| {
            BuildError::StorageTooLarge {
                requested,
                max: MAX_STORAGE_GB,
            }
        })?;

        tracing::debug!(%cpu, ram, storage, %os, "computer assembled");

        Ok(Computer {
            cpu,
            ram,
            storage,
            gpu: self.gpu,
            os,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office() -> ComputerBuilder {
        ComputerBuilder::new()
            .cpu("Intel Core i5")
            .ram(16)
            .storage(512)
            .os("Windows 11")
    }

    #[test]
    fn test_build_without_gpu() {
        let pc = office().build().unwrap();
        assert_eq!(pc.cpu, "Intel Core i5");
        assert_eq!(pc.ram, 16);
        assert_eq!(pc.gpu, None);
    }

    #[test]
    fn test_last_setter_wins() {
        let pc = office().ram(8).ram(64).build().unwrap();
        assert_eq!(pc.ram, 64);
    }

    #[test]
    fn test_missing_parts_in_order() {
        assert_eq!(ComputerBuilder::new().build(), Err(BuildError::MissingCpu));
        assert_eq!(
            ComputerBuilder::new().cpu("x").build(),
            Err(BuildError::NoRam)
        );
        assert_eq!(
            ComputerBuilder::new().cpu("x").ram(1).build(),
            Err(BuildError::NoStorage)
        );
        assert_eq!(
            ComputerBuilder::new().cpu("x").ram(1).storage(1).build(),
            Err(BuildError::MissingOs)
        );
    }

    #[test]
    fn test_presence_checked_before_range() {
        let err = ComputerBuilder::new()
            .cpu("x")
            .ram(4096)
            .storage(1)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingOs);
    }

    #[test]
    fn test_upper_bounds() {
        assert_eq!(
            office().ram(MAX_RAM_GB + 1).build(),
            Err(BuildError::RamTooLarge {
                requested: 1025,
                max: 1024
            })
        );
        assert_eq!(
            office().storage(MAX_STORAGE_GB + 1).build(),
            Err(BuildError::StorageTooLarge {
                requested: 100_001,
                max: 100_000
            })
        );
        assert!(office().ram(MAX_RAM_GB).storage(MAX_STORAGE_GB).build().is_ok());
    }

    #[test]
    fn test_display_without_gpu() {
        let pc = office().build().unwrap();
        assert!(pc.to_string().contains("  GPU: none,\n"));
    }

    #[test]
    fn test_display() {
        let pc = office().gpu("RTX").build().unwrap();
        assert_eq!(
            pc.to_string(),
            "Computer{\n  CPU: Intel Core i5,\n  RAM: 16GB,\n  Storage: 512GB,\n  GPU: RTX,\n  OS: Windows 11\n}"
        );
    }
}
