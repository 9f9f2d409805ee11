//! SCSI generic (sg) pass-through.
//!
//! Request construction, SG_IO submission and the three-way status
//! classification live in [`core`]; [`ffi`] mirrors the kernel's v3
//! `sg_io_hdr`, and [`sense`] decodes the sense bytes a failed command
//! leaves behind.

pub mod constants;
pub mod ffi;

mod core;
mod device;
mod sense;

pub use constants::{DEFAULT_TIMEOUT_MS, SENSE_BUF_LEN};
pub use ffi::SgIoHdr;
pub use self::core::{KernelSg, ScsiShim, SgTransport};
pub use self::device::SgDevice;
pub use self::sense::SenseData;
