//! Conversion between physical lengths and printer dots.
//!
//! The printer resolves 300 dpi, which is 11.811 dots per millimeter. Lengths
//! in commands are sent as two bytes, least significant first (`nL nH`).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Dots per millimeter at 300 dpi.
pub const DOTS_PER_MM: f64 = 11.811;

/// Longest length that may be sent as a dot count, about 677 mm.
pub const MAX_DOTS: i64 = 8000;

/// Converts a length in millimeters to dots, rounding to the nearest dot.
pub fn mm_to_dots(length_mm: f64) -> Result<i64> {
    if !length_mm.is_finite() || length_mm < 0.0 {
        return Err(Error::InvalidLength { mm: length_mm });
    }
    Ok((length_mm * DOTS_PER_MM).round() as i64)
}

/// Splits a dot count into the `(nL, nH)` pair, so that `dots = nL + nH * 256`.
///
/// For example, 767 dots are sent as `FF 02`.
pub fn dots_to_hex_pair(dots: i64) -> Result<(u8, u8)> {
    if !(0..=MAX_DOTS).contains(&dots) {
        return Err(Error::DotsOutOfRange { dots });
    }
    let [low, high] = (dots as u16).to_le_bytes();
    Ok((low, high))
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Only finite, non-negative lengths can be converted to dots, got {mm} mm")]
    InvalidLength { mm: f64 },
    #[error("Length of {dots} dots is outside of the addressable range 0..={max}", max = MAX_DOTS)]
    DotsOutOfRange { dots: i64 },
}
