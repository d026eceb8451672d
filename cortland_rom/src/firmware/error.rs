use thiserror::Error;

use super::Firmware;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ROM image must be exactly {expected} bytes, found {0}", expected = Firmware::SIZE)]
    BadRomSize(usize),

    #[error("failed to read ROM image")]
    Io(#[from] std::io::Error),
}
