//! Parameters of the `ESC i Q` QR code command.

use super::{Error, Result};

/// Cell sizes in dots that the printer accepts.
const CELL_SIZES: &[u8] = &[1, 3, 4, 5, 6, 8, 10, 12, 14, 16];

/// Symbols are never split with structured append, so the setting, code
/// number and partition count are always zero.
const STRUCTURED_APPEND_OFF: u8 = 0x00;
const CODE_NUMBER: u8 = 0x00;
const PARTITIONS: u8 = 0x00;
/// Let the printer choose numeric, alphanumeric or binary input.
const INPUT_AUTOMATIC: u8 = 0x00;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    Model1 = 1,
    Model2 = 2,
    Micro = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCorrection {
    L = 1,
    M = 2,
    Q = 3,
    H = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrOptions {
    pub cell_size: u8,
    pub model: Model,
    pub error_correction: ErrorCorrection,
}

impl Default for QrOptions {
    fn default() -> Self {
        QrOptions {
            cell_size: 10,
            model: Model::Model2,
            error_correction: ErrorCorrection::M,
        }
    }
}

impl QrOptions {
    /// The eight parameter bytes between command and data.
    pub(super) fn parameters(&self, parity: u8) -> Result<[u8; 8]> {
        if !CELL_SIZES.contains(&self.cell_size) {
            return Err(Error::QrCellSize {
                cell_size: self.cell_size,
            });
        }
        Ok([
            self.cell_size,
            self.model as u8,
            STRUCTURED_APPEND_OFF,
            CODE_NUMBER,
            PARTITIONS,
            parity,
            self.error_correction as u8,
            INPUT_AUTOMATIC,
        ])
    }
}
