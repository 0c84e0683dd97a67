use thiserror::Error;

/// Calculates the parity byte that the QR code command expects in front of
/// the error correction level. This is the XOR of all bytes of the UTF-8
/// encoded data, so characters outside of ASCII contribute every byte they
/// are encoded with.
///
/// The empty string has no parity and is rejected.
pub fn parity_byte(data: &str) -> Result<u8, Error> {
    if data.is_empty() {
        return Err(Error::Empty);
    }
    Ok(data.bytes().fold(0, |acc, next| acc ^ next))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Can not calculate the parity byte of empty data")]
    Empty,
}
