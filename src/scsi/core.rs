//! SCSI Core Implementation
//!
//! This module contains the ScsiShim struct: request construction, SG_IO
//! submission and status classification.

use std::io;
use std::os::unix::io::{AsRawFd, RawFd};
use std::ptr;

use libc::c_void;
use tracing::{debug, warn};

use crate::error::{Result, SgError};

use super::constants::*;
use super::ffi::SgIoHdr;

/// Submission seam for one SG_IO request.
///
/// The production implementation is [`KernelSg`]; tests substitute stubs.
/// An implementation returning `Ok` must have honoured the header's
/// pointer/length contract: at most `dxfer_len` bytes written through
/// `dxferp` and at most `mx_sb_len` through `sbp`.
pub trait SgTransport {
    fn submit(&self, fd: RawFd, hdr: &mut SgIoHdr) -> io::Result<()>;
}

/// Submits through the SG_IO ioctl of the scsi_generic driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct KernelSg;

impl SgTransport for KernelSg {
    fn submit(&self, fd: RawFd, hdr: &mut SgIoHdr) -> io::Result<()> {
        let rc = unsafe { libc::ioctl(fd, SG_IO, hdr as *mut SgIoHdr) };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// Direction and payload of one request: host-to-device or device-to-host,
/// never both.
enum DataTransfer<'a> {
    ToDevice(&'a [u8]),
    FromDevice(&'a mut [u8]),
}

/// SCSI pass-through shim over an sg descriptor.
///
/// Stateless between calls: each operation builds a fresh request header
/// and sense buffer, submits once, blocking the calling thread up to the
/// timeout, and classifies the outcome. No retries; a timeout or transport
/// failure is surfaced once, immediately.
#[derive(Debug, Default, Clone)]
pub struct ScsiShim<T: SgTransport = KernelSg> {
    transport: T,
}

impl ScsiShim<KernelSg> {
    /// Shim submitting to the kernel.
    pub fn new() -> Self {
        Self {
            transport: KernelSg,
        }
    }
}

impl<T: SgTransport> ScsiShim<T> {
    /// Shim submitting through a caller-provided transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Issue a command, optionally writing `data` to the device. Returns
    /// nothing on success: write-type commands produce no return data
    /// beyond status.
    pub fn write<F: AsRawFd>(&self, fd: &F, cdb: &[u8], data: Option<&[u8]>) -> Result<()> {
        self.write_with_timeout(fd, cdb, data, DEFAULT_TIMEOUT_MS)
    }

    pub fn write_with_timeout<F: AsRawFd>(
        &self,
        fd: &F,
        cdb: &[u8],
        data: Option<&[u8]>,
        timeout_ms: u32,
    ) -> Result<()> {
        self.execute(
            fd.as_raw_fd(),
            cdb,
            DataTransfer::ToDevice(data.unwrap_or(&[])),
            timeout_ms,
        )?;
        Ok(())
    }

    /// Issue a command and read the response into a caller-owned buffer.
    ///
    /// Returns the byte count actually transferred (buffer capacity minus
    /// the kernel-reported residual); the response occupies `buf[..count]`
    /// and bytes past the count are left untouched by the shim.
    pub fn read_into<F: AsRawFd>(&self, fd: &F, cdb: &[u8], buf: &mut [u8]) -> Result<usize> {
        self.read_into_with_timeout(fd, cdb, buf, DEFAULT_TIMEOUT_MS)
    }

    pub fn read_into_with_timeout<F: AsRawFd>(
        &self,
        fd: &F,
        cdb: &[u8],
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> Result<usize> {
        self.execute(fd.as_raw_fd(), cdb, DataTransfer::FromDevice(buf), timeout_ms)
    }

    /// Issue a command and return the response as a freshly allocated
    /// vector, trimmed to the byte count actually transferred.
    ///
    /// `capacity` must be greater than zero; the check happens before any
    /// ioctl is attempted.
    pub fn read_to_vec<F: AsRawFd>(
        &self,
        fd: &F,
        cdb: &[u8],
        capacity: usize,
    ) -> Result<Vec<u8>> {
        self.read_to_vec_with_timeout(fd, cdb, capacity, DEFAULT_TIMEOUT_MS)
    }

    pub fn read_to_vec_with_timeout<F: AsRawFd>(
        &self,
        fd: &F,
        cdb: &[u8],
        capacity: usize,
        timeout_ms: u32,
    ) -> Result<Vec<u8>> {
        if capacity == 0 {
            return Err(SgError::invalid_parameter(
                "response capacity must be greater than zero",
            ));
        }
        let mut buf = vec![0u8; capacity];
        let transferred = self.execute(
            fd.as_raw_fd(),
            cdb,
            DataTransfer::FromDevice(&mut buf),
            timeout_ms,
        )?;
        buf.truncate(transferred);
        Ok(buf)
    }

    /// Build one request header, submit it once and classify the result.
    ///
    /// Returns the bytes actually transferred, `dxfer_len - resid`.
    fn execute(
        &self,
        fd: RawFd,
        cdb: &[u8],
        xfer: DataTransfer<'_>,
        timeout_ms: u32,
    ) -> Result<usize> {
        if cdb.is_empty() {
            return Err(SgError::invalid_parameter("CDB must not be empty"));
        }
        if cdb.len() > u8::MAX as usize {
            return Err(SgError::invalid_parameter(format!(
                "CDB of {} bytes exceeds the sg header limit",
                cdb.len()
            )));
        }

        let mut sense = [0u8; SENSE_BUF_LEN];
        // The kernel only reads through dxferp on host-to-device transfers;
        // the mutable cast is for the header's field type.
        let (dxfer_direction, dxfer_len, dxferp) = match xfer {
            DataTransfer::ToDevice(data) if data.is_empty() => {
                (SG_DXFER_TO_DEV, 0, ptr::null_mut())
            }
            DataTransfer::ToDevice(data) => (
                SG_DXFER_TO_DEV,
                data.len() as u32,
                data.as_ptr() as *mut c_void,
            ),
            DataTransfer::FromDevice(buf) => (
                SG_DXFER_FROM_DEV,
                buf.len() as u32,
                buf.as_mut_ptr() as *mut c_void,
            ),
        };

        // flags, pack_id, usr_ptr and iovec_count stay zero/null: indirect
        // I/O, no pack id, no user pointer.
        let mut hdr = SgIoHdr {
            interface_id: 'S' as libc::c_int,
            dxfer_direction,
            cmd_len: cdb.len() as u8,
            mx_sb_len: SENSE_BUF_LEN as u8,
            iovec_count: 0,
            dxfer_len,
            dxferp,
            cmdp: cdb.as_ptr(),
            sbp: sense.as_mut_ptr(),
            timeout: timeout_ms,
            flags: 0,
            pack_id: 0,
            usr_ptr: ptr::null_mut(),
            status: 0,
            masked_status: 0,
            msg_status: 0,
            sb_len_wr: 0,
            host_status: 0,
            driver_status: 0,
            resid: 0,
            duration: 0,
            info: 0,
        };

        debug!(
            opcode = cdb[0],
            cmd_len = cdb.len(),
            dxfer_len,
            timeout_ms,
            "submitting SG_IO request"
        );

        self.transport.submit(fd, &mut hdr)?;

        if hdr.info & SG_INFO_OK_MASK != SG_INFO_OK {
            let sense_len = (hdr.sb_len_wr as usize).min(SENSE_BUF_LEN);
            warn!(
                masked_status = hdr.masked_status,
                host_status = hdr.host_status,
                driver_status = hdr.driver_status,
                sense_len,
                "SCSI command did not complete cleanly"
            );
            return Err(SgError::Scsi {
                masked_status: hdr.masked_status,
                host_status: hdr.host_status,
                driver_status: hdr.driver_status,
                sense: sense[..sense_len].to_vec(),
            });
        }

        let transferred = hdr.dxfer_len.saturating_sub(hdr.resid.max(0) as u32) as usize;
        debug!(transferred, resid = hdr.resid, "SG_IO request completed");
        Ok(transferred)
    }
}
