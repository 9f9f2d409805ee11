//! SCSI Device Management
//!
//! Owned handle to a SCSI generic device node. Only a convenience: the shim
//! itself accepts any `AsRawFd`, so callers that already hold a descriptor
//! never need this type.

use std::fs::{File, OpenOptions};
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

use super::core::{KernelSg, ScsiShim};

/// An open `/dev/sg*` node with a pass-through shim attached.
#[derive(Debug)]
pub struct SgDevice {
    file: File,
    path: PathBuf,
    shim: ScsiShim<KernelSg>,
}

impl SgDevice {
    /// Open a device node read/write for pass-through use. The descriptor
    /// is closed when the handle is dropped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), "opening sg device");
        let file = OpenOptions::new().read(true).write(true).open(&path)?;
        Ok(Self {
            file,
            path,
            shim: ScsiShim::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, cdb: &[u8], data: Option<&[u8]>) -> Result<()> {
        self.shim.write(&self.file, cdb, data)
    }

    pub fn write_with_timeout(
        &self,
        cdb: &[u8],
        data: Option<&[u8]>,
        timeout_ms: u32,
    ) -> Result<()> {
        self.shim.write_with_timeout(&self.file, cdb, data, timeout_ms)
    }

    pub fn read_into(&self, cdb: &[u8], buf: &mut [u8]) -> Result<usize> {
        self.shim.read_into(&self.file, cdb, buf)
    }

    pub fn read_into_with_timeout(
        &self,
        cdb: &[u8],
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> Result<usize> {
        self.shim.read_into_with_timeout(&self.file, cdb, buf, timeout_ms)
    }

    pub fn read_to_vec(&self, cdb: &[u8], capacity: usize) -> Result<Vec<u8>> {
        self.shim.read_to_vec(&self.file, cdb, capacity)
    }

    pub fn read_to_vec_with_timeout(
        &self,
        cdb: &[u8],
        capacity: usize,
        timeout_ms: u32,
    ) -> Result<Vec<u8>> {
        self.shim
            .read_to_vec_with_timeout(&self.file, cdb, capacity, timeout_ms)
    }
}

impl AsRawFd for SgDevice {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}
