use thiserror::Error;

pub type Result<T> = std::result::Result<T, SgError>;

#[derive(Error, Debug)]
pub enum SgError {
    /// Rejected at the call boundary, before any ioctl is attempted.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The SG_IO ioctl itself failed at the OS level.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The ioctl succeeded but the device or driver reported that the
    /// command did not complete cleanly.
    #[error("SCSI command failed: masked_status 0x{masked_status:02X}, host_status 0x{host_status:04X}, driver_status 0x{driver_status:04X}")]
    Scsi {
        masked_status: u8,
        host_status: u16,
        driver_status: u16,
        /// Sense bytes actually written by the kernel, 0 to 32.
        sense: Vec<u8>,
    },
}

impl SgError {
    pub fn invalid_parameter<T: Into<String>>(msg: T) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Decoded sense key / ASC / ASCQ when this is a SCSI-level failure
    /// carrying enough sense data to parse.
    pub fn sense_info(&self) -> Option<crate::scsi::SenseData> {
        match self {
            Self::Scsi { sense, .. } => crate::scsi::SenseData::parse(sense),
            _ => None,
        }
    }
}
