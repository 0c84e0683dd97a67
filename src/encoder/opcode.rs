//! Command bytes of the ESC/P dialect understood by the printer, named by
//! what they do. Parameters are appended by the encoder.

pub const ESC: u8 = 0x1B;

/// `ESC i a 0`, switches the printer to ESC/P command mode.
pub const SELECT_ESCP_MODE: &[u8] = &[ESC, b'i', b'a', 0x00];
/// `ESC @`, resets formatting and buffers.
pub const INITIALIZE: &[u8] = &[ESC, b'@'];
/// `ESC i L n`, n = 1 applies landscape orientation, 0 cancels it.
pub const LANDSCAPE: &[u8] = &[ESC, b'i', b'L'];
/// `ESC ( C 02 00 mL mH`, page length in dots.
pub const PAGE_LENGTH: &[u8] = &[ESC, b'(', b'C', 0x02, 0x00];
/// `ESC $ nL nH`, absolute horizontal position in dots.
pub const HORIZONTAL_POSITION: &[u8] = &[ESC, b'$'];
/// `ESC ( V 02 00 nL nH`, absolute vertical position in dots.
pub const VERTICAL_POSITION: &[u8] = &[ESC, b'(', b'V', 0x02, 0x00];
/// `ESC k n`, font number.
pub const SELECT_FONT: &[u8] = &[ESC, b'k'];
/// `ESC X 00 nL nH`, character size in dots.
pub const CHARACTER_SIZE: &[u8] = &[ESC, b'X', 0x00];
pub const BOLD_ON: &[u8] = &[ESC, b'E'];
pub const BOLD_OFF: &[u8] = &[ESC, b'F'];
/// `ESC i Q`, followed by eight parameter bytes, the data and the terminator.
pub const QR_CODE: &[u8] = &[ESC, b'i', b'Q'];
/// Ends the data of a QR code.
pub const QR_TERMINATOR: &[u8] = b"\\\\\\";
/// `ESC i C n`, n = 1 cuts after printing.
pub const CUT_AFTER_PRINT: &[u8] = &[ESC, b'i', b'C'];
/// `ESC 3 n`, minimum line feed in dots.
pub const MIN_LINE_FEED: &[u8] = &[ESC, b'3'];
/// `ESC A n`, line feed as multiple of the line feed unit.
pub const LINE_FEED: &[u8] = &[ESC, b'A'];
/// Form feed, starts printing.
pub const PRINT_START: u8 = 0x0C;
