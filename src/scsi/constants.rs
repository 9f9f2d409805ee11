// SG_IO interface constants, from scsi/sg.h
use libc::{c_int, c_uint};

/// Per-request sense buffer capacity in bytes.
pub const SENSE_BUF_LEN: usize = 32;

/// Default command timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 20_000;

// ioctl request number for the v3 sg interface
#[cfg(not(target_env = "musl"))]
pub const SG_IO: libc::c_ulong = 0x2285;
#[cfg(target_env = "musl")]
pub const SG_IO: c_int = 0x2285;

// Transfer directions
pub const SG_DXFER_TO_DEV: c_int = -2;
pub const SG_DXFER_FROM_DEV: c_int = -3;

// Completion info: anything besides SG_INFO_OK under the mask means the
// command did not complete cleanly.
pub const SG_INFO_OK_MASK: c_uint = 0x1;
pub const SG_INFO_OK: c_uint = 0x0;
