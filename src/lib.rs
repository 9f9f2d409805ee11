//! rust-sg Library
//!
//! A Rust library for issuing raw SCSI commands to devices under Linux via
//! the SG_IO ioctl of the scsi_generic driver. The device (e.g. /dev/sg0)
//! must first be opened; the descriptor is then passed to the operations of
//! this crate, which move command and response bytes without interpreting
//! them and classify each completion as success, a transport-level failure,
//! or a device-reported SCSI failure.

pub mod error;
pub mod logger;
pub mod scsi;

// Re-export key types for easier use
pub use error::{Result, SgError};
pub use scsi::{
    KernelSg, ScsiShim, SenseData, SgDevice, SgIoHdr, SgTransport, DEFAULT_TIMEOUT_MS,
    SENSE_BUF_LEN,
};
