//! SCSI Sense Data Parsing
//!
//! Decodes the fixed (0x70/0x71) and descriptor (0x72/0x73) sense formats
//! into sense key, additional sense code and qualifier. The raw sense bytes
//! travel inside [`crate::SgError::Scsi`]; this is a diagnostic view of the
//! response, not command interpretation.

use std::fmt;

/// Sense key / ASC / ASCQ triple decoded from a raw sense buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenseData {
    pub sense_key: u8,
    pub asc: u8,
    pub ascq: u8,
}

impl SenseData {
    /// Decode a raw sense buffer.
    ///
    /// Returns `None` when the buffer is too short to carry a sense key or
    /// the response code is not one of the SPC formats.
    pub fn parse(sense: &[u8]) -> Option<Self> {
        let response_code = sense.first()? & 0x7F;
        match response_code {
            // Fixed format: key at byte 2, ASC/ASCQ at bytes 12/13.
            0x70 | 0x71 => {
                let sense_key = *sense.get(2)? & 0x0F;
                let asc = sense.get(12).copied().unwrap_or(0);
                let ascq = sense.get(13).copied().unwrap_or(0);
                Some(Self {
                    sense_key,
                    asc,
                    ascq,
                })
            }
            // Descriptor format: key at byte 1, ASC/ASCQ at bytes 2/3.
            0x72 | 0x73 => {
                if sense.len() < 4 {
                    return None;
                }
                Some(Self {
                    sense_key: sense[1] & 0x0F,
                    asc: sense[2],
                    ascq: sense[3],
                })
            }
            _ => None,
        }
    }

    /// SPC name of the sense key.
    pub fn sense_key_name(&self) -> &'static str {
        match self.sense_key {
            0x00 => "No Sense",
            0x01 => "Recovered Error",
            0x02 => "Not Ready",
            0x03 => "Medium Error",
            0x04 => "Hardware Error",
            0x05 => "Illegal Request",
            0x06 => "Unit Attention",
            0x07 => "Data Protect",
            0x08 => "Blank Check",
            0x09 => "Vendor Specific",
            0x0A => "Copy Aborted",
            0x0B => "Aborted Command",
            0x0D => "Volume Overflow",
            0x0E => "Miscompare",
            _ => "Reserved",
        }
    }
}

impl fmt::Display for SenseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (key 0x{:02X}, ASC/ASCQ 0x{:02X}/0x{:02X})",
            self.sense_key_name(),
            self.sense_key,
            self.asc,
            self.ascq
        )
    }
}
