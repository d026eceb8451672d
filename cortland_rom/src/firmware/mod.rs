mod error;

pub use error::Error;

use std::fs;
use std::path::Path;

pub type Result<A> = std::result::Result<A, Error>;

/// A system firmware image: the 12 KiB of ROM mapped at `0xD000..=0xFFFF`
/// holding the BASIC interpreter, the machine-language monitor and the
/// interrupt vectors.
///
/// A raw firmware dump has no header; the only structural check is that it
/// is exactly the size of the ROM aperture. Whatever the image says its
/// reset vector is, is where the machine will start — any 16-bit value is
/// legal there.
#[derive(PartialEq, Eq, Debug)]
pub struct Firmware {
    bytes: Vec<u8>,
}

impl Firmware {
    /// The ROM aperture covers `0xD000..=0xFFFF`.
    pub const SIZE: usize = 12 * 1024;

    /// Base address the image is mapped at.
    pub const BASE_ADDRESS: u16 = 0xD000;

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Firmware> {
        if bytes.len() != Firmware::SIZE {
            return Err(Error::BadRomSize(bytes.len()));
        }

        Ok(Firmware { bytes })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Firmware> {
        let bytes = fs::read(path)?;
        Firmware::from_bytes(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The address the CPU starts from after reset, stored little-endian
    /// at `0xFFFC`.
    pub fn reset_vector(&self) -> u16 {
        let offset = (0xFFFC - Firmware::BASE_ADDRESS) as usize;
        u16::from_le_bytes([self.bytes[offset], self.bytes[offset + 1]])
    }
}
