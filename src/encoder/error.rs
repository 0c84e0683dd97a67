use thiserror::Error;

/// Coarse classification of encoder failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed argument, e.g. a negative length, empty data or unknown enum value.
    InvalidArgument,
    /// Numeric value outside of what the protocol can express.
    OutOfRange,
    /// Position outside of the label.
    OutOfBounds,
    /// Font and character size do not go together.
    UnsupportedSize,
    /// Call not allowed in the current state of the encoder.
    InvalidState,
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Units(#[from] crate::units::Error),
    #[error("Could not encode QR code: {0}")]
    Parity(#[from] crate::parity::Error),
    #[error("Orientation must be 0 (portrait) or 1 (landscape), got {orientation}")]
    Orientation { orientation: u8 },
    #[error("Label length can be set between 0 mm and 677 mm, got {length_mm} mm")]
    LabelLength { length_mm: f64 },
    #[error("Horizontal position {x_mm} mm is outside of the label, which is {length_mm} mm long")]
    HorizontalOutOfBounds { x_mm: f64, length_mm: f64 },
    #[error("Vertical position {y_mm} mm is outside of the label, which is {width_mm} mm wide")]
    VerticalOutOfBounds { y_mm: f64, width_mm: f64 },
    #[error("Font {font} does not exist, expected 0-4 (bitmap) or 9-11 (outline)")]
    UnknownFont { font: u8 },
    #[error("Character size of {size} dots is not supported by font {font}")]
    UnsupportedSize { font: u8, size: u16 },
    #[error("QR code cell size of {cell_size} dots is not supported")]
    QrCellSize { cell_size: u8 },
    #[error("Line feed must be between 1 and 254, got {value}")]
    LineFeedOutOfRange { value: i64 },
    #[error("Bold style was applied while already active")]
    BoldAlreadyActive,
    #[error("Bold style was cancelled while not active")]
    BoldNotActive,
    #[error("Label finished while bold style still active")]
    BoldLeftActive,
    #[error("Label has already been finalized, start a new one")]
    Finalized,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use crate::units::Error as UnitsError;

        match self {
            Error::Units(UnitsError::InvalidLength { .. }) => ErrorKind::InvalidArgument,
            Error::Units(UnitsError::DotsOutOfRange { .. }) => ErrorKind::OutOfRange,
            Error::Parity(_) => ErrorKind::InvalidArgument,
            Error::Orientation { .. } => ErrorKind::InvalidArgument,
            Error::LabelLength { .. } => ErrorKind::InvalidArgument,
            Error::HorizontalOutOfBounds { .. } | Error::VerticalOutOfBounds { .. } => {
                ErrorKind::OutOfBounds
            }
            Error::UnknownFont { .. } => ErrorKind::InvalidArgument,
            Error::UnsupportedSize { .. } => ErrorKind::UnsupportedSize,
            Error::QrCellSize { .. } => ErrorKind::InvalidArgument,
            Error::LineFeedOutOfRange { .. } => ErrorKind::OutOfRange,
            Error::BoldAlreadyActive
            | Error::BoldNotActive
            | Error::BoldLeftActive
            | Error::Finalized => ErrorKind::InvalidState,
        }
    }
}
