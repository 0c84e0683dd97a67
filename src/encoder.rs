//! Builds the ESC/P command stream of a single label.
//!
//! The stream is a script: the printer executes commands in the order they
//! arrive, so e.g. selecting a font only affects text appended afterwards.
//! Every method validates its arguments before appending anything, a failed
//! call leaves the stream as it was.

use crate::{
    job::PrintJob,
    label::{Label, MAX_LENGTH_MM},
    parity::parity_byte,
    units::{dots_to_hex_pair, mm_to_dots},
};
use std::mem::take;

pub use error::{Error, ErrorKind};
pub use qr::QrOptions;

pub type Result<T> = std::result::Result<T, Error>;

mod error;
pub mod font;
mod opcode;
pub mod qr;

/// How strictly `ESC E` and `ESC F` have to be paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoldPolicy {
    /// Emit bold toggles as requested, even if they are unbalanced.
    Unchecked,
    /// Reject applying bold twice, cancelling bold that is not active and
    /// finishing a label with bold still active.
    Balanced,
}

impl Default for BoldPolicy {
    fn default() -> Self {
        BoldPolicy::Unchecked
    }
}

#[derive(Debug)]
pub struct Encoder {
    label: Label,
    bold_policy: BoldPolicy,
    bold: bool,
    finalized: bool,
    data: Vec<u8>,
}

impl Encoder {
    /// Starts a label, emitting the ESC/P mode selection and initialization.
    pub fn new(label: Label) -> Self {
        Encoder::with_bold_policy(label, BoldPolicy::default())
    }

    pub fn with_bold_policy(label: Label, bold_policy: BoldPolicy) -> Self {
        let mut encoder = Encoder {
            label,
            bold_policy,
            bold: false,
            finalized: false,
            data: Vec::with_capacity(256),
        };
        encoder.append(opcode::SELECT_ESCP_MODE, &[]);
        encoder.append(opcode::INITIALIZE, &[]);
        encoder
    }

    /// The stream built so far, without the print start byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..]
    }

    /// 1 applies landscape orientation, 0 cancels it.
    pub fn set_landscape(&mut self, orientation: u8) -> Result<&mut Self> {
        self.ensure_open()?;
        if orientation > 1 {
            return Err(Error::Orientation { orientation });
        }
        self.append(opcode::LANDSCAPE, &[orientation]);
        Ok(self)
    }

    /// Specifies the page length as the label length minus the left and right margins.
    pub fn set_page_length(&mut self) -> Result<&mut Self> {
        self.ensure_open()?;
        let length_mm = self.label.length_mm();
        if !(0.0..=MAX_LENGTH_MM).contains(&length_mm) {
            return Err(Error::LabelLength { length_mm });
        }
        let margins = mm_to_dots(self.label.lr_margin_mm())?.saturating_mul(2);
        let (low, high) = dots_to_hex_pair(mm_to_dots(length_mm)?.saturating_sub(margins))?;
        self.append(opcode::PAGE_LENGTH, &[low, high]);
        Ok(self)
    }

    /// Moves to `x_mm` from the left of the label.
    pub fn set_horizontal_position(&mut self, x_mm: f64) -> Result<&mut Self> {
        self.ensure_open()?;
        let x = self.horizontal(x_mm)?;
        self.append(opcode::HORIZONTAL_POSITION, &x);
        Ok(self)
    }

    /// Moves to `y_mm` from the top of the label.
    pub fn set_vertical_position(&mut self, y_mm: f64) -> Result<&mut Self> {
        self.ensure_open()?;
        let y = self.vertical(y_mm)?;
        self.append(opcode::VERTICAL_POSITION, &y);
        Ok(self)
    }

    /// Horizontal then vertical position, both checked before either is appended.
    pub fn set_position(&mut self, x_mm: f64, y_mm: f64) -> Result<&mut Self> {
        self.ensure_open()?;
        let x = self.horizontal(x_mm)?;
        let y = self.vertical(y_mm)?;
        self.append(opcode::HORIZONTAL_POSITION, &x);
        self.append(opcode::VERTICAL_POSITION, &y);
        Ok(self)
    }

    /// Selects font 0-4 (bitmap) or 9-11 (outline) and the character size in dots.
    ///
    /// Bitmap fonts support 24, 32 and 48 dots, outline fonts 33 to 233 dots in
    /// the steps listed in [font::Family::sizes].
    pub fn select_font(&mut self, font: u8, size_dots: u16) -> Result<&mut Self> {
        self.ensure_open()?;
        font::check(font, size_dots)?;
        self.append_font(font, size_dots);
        Ok(self)
    }

    /// Prints subsequent text in bold. Valid anywhere in a line.
    pub fn apply_bold(&mut self) -> Result<&mut Self> {
        self.ensure_open()?;
        self.check_bold_can_apply()?;
        self.append(opcode::BOLD_ON, &[]);
        self.bold = true;
        Ok(self)
    }

    pub fn cancel_bold(&mut self) -> Result<&mut Self> {
        self.ensure_open()?;
        if self.bold_policy == BoldPolicy::Balanced && !self.bold {
            return Err(Error::BoldNotActive);
        }
        self.append(opcode::BOLD_OFF, &[]);
        self.bold = false;
        Ok(self)
    }

    /// Prints `text` at the given position with the given font, optionally in bold.
    ///
    /// The text is sent as UTF-8 without escaping, it must not contain ESC.
    pub fn add_text(
        &mut self,
        x_mm: f64,
        y_mm: f64,
        font: u8,
        size_dots: u16,
        text: &str,
        bold: bool,
    ) -> Result<&mut Self> {
        self.ensure_open()?;
        let x = self.horizontal(x_mm)?;
        let y = self.vertical(y_mm)?;
        font::check(font, size_dots)?;
        if bold {
            self.check_bold_can_apply()?;
        }

        self.append(opcode::HORIZONTAL_POSITION, &x);
        self.append(opcode::VERTICAL_POSITION, &y);
        self.append_font(font, size_dots);
        if bold {
            self.append(opcode::BOLD_ON, &[]);
        }
        self.data.extend(text.as_bytes());
        if bold {
            self.append(opcode::BOLD_OFF, &[]);
            self.bold = false;
        }
        Ok(self)
    }

    /// Adds a QR code encoding `payload` with cell size 10, model 2 and error
    /// correction level M.
    pub fn add_qr_code(&mut self, payload: &str) -> Result<&mut Self> {
        self.add_qr_code_with(payload, &QrOptions::default())
    }

    pub fn add_qr_code_with(&mut self, payload: &str, options: &QrOptions) -> Result<&mut Self> {
        self.ensure_open()?;
        let parameters = options.parameters(parity_byte(payload)?)?;
        self.append(opcode::QR_CODE, &parameters);
        self.data.extend(payload.as_bytes());
        self.data.extend(opcode::QR_TERMINATOR);
        Ok(self)
    }

    pub fn set_cut_after_print(&mut self, enabled: bool) -> Result<&mut Self> {
        self.ensure_open()?;
        self.append(opcode::CUT_AFTER_PRINT, &[enabled as u8]);
        Ok(self)
    }

    /// Specifies the minimum line feed, which must round to 1 to 254 dots.
    pub fn set_min_line_feed(&mut self, line_feed_mm: f64) -> Result<&mut Self> {
        self.ensure_open()?;
        let dots = line_feed(mm_to_dots(line_feed_mm)?)?;
        self.append(opcode::MIN_LINE_FEED, &[dots]);
        Ok(self)
    }

    /// Specifies the line feed as a multiple of the line feed unit, 1 to 254.
    pub fn set_line_feed(&mut self, multiplier: u8) -> Result<&mut Self> {
        self.ensure_open()?;
        let multiplier = line_feed(i64::from(multiplier))?;
        self.append(opcode::LINE_FEED, &[multiplier]);
        Ok(self)
    }

    /// Appends the print start command and hands out the finished job.
    ///
    /// The encoder can not be used afterwards, every further call fails.
    pub fn finalize(&mut self) -> Result<PrintJob> {
        self.ensure_open()?;
        if self.bold_policy == BoldPolicy::Balanced && self.bold {
            return Err(Error::BoldLeftActive);
        }
        self.data.push(opcode::PRINT_START);
        self.finalized = true;
        Ok(PrintJob::new(take(&mut self.data)))
    }

    fn ensure_open(&self) -> Result<()> {
        if self.finalized {
            Err(Error::Finalized)
        } else {
            Ok(())
        }
    }

    fn check_bold_can_apply(&self) -> Result<()> {
        if self.bold_policy == BoldPolicy::Balanced && self.bold {
            Err(Error::BoldAlreadyActive)
        } else {
            Ok(())
        }
    }

    fn horizontal(&self, x_mm: f64) -> Result<[u8; 2]> {
        let length_mm = self.label.length_mm();
        if !(x_mm >= 0.0 && x_mm <= length_mm) {
            return Err(Error::HorizontalOutOfBounds { x_mm, length_mm });
        }
        let (low, high) = dots_to_hex_pair(mm_to_dots(x_mm)?)?;
        Ok([low, high])
    }

    fn vertical(&self, y_mm: f64) -> Result<[u8; 2]> {
        let width_mm = self.label.width_mm();
        if !(y_mm >= 0.0 && y_mm <= width_mm) {
            return Err(Error::VerticalOutOfBounds { y_mm, width_mm });
        }
        let (low, high) = dots_to_hex_pair(mm_to_dots(y_mm)?)?;
        Ok([low, high])
    }

    /// Only call after [font::check].
    fn append_font(&mut self, font: u8, size_dots: u16) {
        self.append(opcode::SELECT_FONT, &[font]);
        self.append(opcode::CHARACTER_SIZE, &size_dots.to_le_bytes());
    }

    fn append(&mut self, command: &[u8], parameters: &[u8]) {
        self.data.extend(command);
        self.data.extend(parameters);
    }
}

/// Line feeds are a single byte that must not be zero or 255.
fn line_feed(value: i64) -> Result<u8> {
    if value > 0 && value < 255 {
        Ok(value as u8)
    } else {
        Err(Error::LineFeedOutOfRange { value })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PREAMBLE: &[u8] = &[0x1B, 0x69, 0x61, 0x00, 0x1B, 0x40];

    fn encoder() -> Encoder {
        Encoder::new(Label::default())
    }

    fn strict() -> Encoder {
        Encoder::with_bold_policy(Label::default(), BoldPolicy::Balanced)
    }

    /// Bytes appended after the preamble.
    fn appended(encoder: &Encoder) -> &[u8] {
        &encoder.as_bytes()[PREAMBLE.len()..]
    }

    #[test]
    fn starts_with_preamble() {
        assert_eq!(encoder().as_bytes(), PREAMBLE);
    }

    #[test]
    fn finalize_appends_print_start() {
        let job = encoder().finalize().unwrap();
        assert_eq!(job.as_bytes(), &[0x1B, 0x69, 0x61, 0x00, 0x1B, 0x40, 0x0C]);
    }

    #[test]
    fn landscape() {
        let mut encoder = encoder();
        encoder.set_landscape(1).unwrap().set_landscape(0).unwrap();
        assert_eq!(
            appended(&encoder),
            &[0x1B, 0x69, 0x4C, 0x01, 0x1B, 0x69, 0x4C, 0x00]
        );
    }

    #[test]
    fn landscape_invalid() {
        let mut encoder = encoder();
        let err = encoder.set_landscape(2).unwrap_err();
        assert_eq!(err, Error::Orientation { orientation: 2 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(appended(&encoder).is_empty(), "Nothing should be appended on error");
    }

    #[test]
    fn page_length_subtracts_both_margins() {
        let mut encoder = encoder();
        encoder.set_page_length().unwrap();
        // 343 dots label length - 2 * 35 dots margin = 273 dots
        assert_eq!(
            appended(&encoder),
            &[0x1B, 0x28, 0x43, 0x02, 0x00, 0x11, 0x01]
        );
    }

    #[test]
    fn page_length_of_too_long_label() {
        let mut encoder = Encoder::new(Label::new(678.0, 62.0, 3.0, 1.5));
        let err = encoder.set_page_length().unwrap_err();
        assert_eq!(err, Error::LabelLength { length_mm: 678.0 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn page_length_shorter_than_margins() {
        let mut encoder = Encoder::new(Label::new(5.0, 62.0, 3.0, 1.5));
        let err = encoder.set_page_length().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(appended(&encoder).is_empty());
    }

    #[test]
    fn page_length_with_huge_margin() {
        let mut encoder = Encoder::new(Label::new(29.0, 62.0, 1e18, 1.5));
        let err = encoder.set_page_length().unwrap_err();
        assert!(matches!(
            err,
            Error::Units(crate::units::Error::DotsOutOfRange { .. })
        ));
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(appended(&encoder).is_empty());
    }

    #[test]
    fn position() {
        let mut encoder = encoder();
        encoder.set_position(25.0, 5.0).unwrap();
        // 295 dots = 27 01, 59 dots = 3B 00
        assert_eq!(
            appended(&encoder),
            &[0x1B, 0x24, 0x27, 0x01, 0x1B, 0x28, 0x56, 0x02, 0x00, 0x3B, 0x00]
        );
    }

    #[test]
    fn position_on_the_edges() {
        let mut encoder = encoder();
        encoder.set_position(0.0, 0.0).unwrap();
        encoder.set_position(29.0, 62.0).unwrap();
    }

    #[test]
    fn horizontal_out_of_bounds() {
        let mut encoder = encoder();
        let err = encoder.set_position(29.5, 0.0).unwrap_err();
        assert_eq!(
            err,
            Error::HorizontalOutOfBounds {
                x_mm: 29.5,
                length_mm: 29.0
            }
        );
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert!(appended(&encoder).is_empty());
    }

    #[test]
    fn negative_horizontal_position() {
        let err = encoder().set_horizontal_position(-1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn vertical_out_of_bounds_appends_no_horizontal_position() {
        let mut encoder = encoder();
        let err = encoder.set_position(1.0, 62.5).unwrap_err();
        assert_eq!(
            err,
            Error::VerticalOutOfBounds {
                y_mm: 62.5,
                width_mm: 62.0
            }
        );
        assert!(appended(&encoder).is_empty());
    }

    #[test]
    fn select_font() {
        let mut encoder = encoder();
        encoder.select_font(10, 33).unwrap().select_font(1, 24).unwrap();
        assert_eq!(
            appended(&encoder),
            &[
                0x1B, 0x6B, 0x0A, 0x1B, 0x58, 0x00, 0x21, 0x00, //
                0x1B, 0x6B, 0x01, 0x1B, 0x58, 0x00, 0x18, 0x00,
            ]
        );
    }

    #[test]
    fn select_unknown_font() {
        let mut encoder = encoder();
        let err = encoder.select_font(5, 24).unwrap_err();
        assert_eq!(err, Error::UnknownFont { font: 5 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(appended(&encoder).is_empty());
    }

    #[test]
    fn select_unsupported_size() {
        let mut encoder = encoder();
        let err = encoder.select_font(1, 40).unwrap_err();
        assert_eq!(err, Error::UnsupportedSize { font: 1, size: 40 });
        assert_eq!(err.kind(), ErrorKind::UnsupportedSize);
        assert!(
            appended(&encoder).is_empty(),
            "Font selection must not be appended when the size is rejected"
        );
    }

    #[test]
    fn bold_text() {
        let mut encoder = encoder();
        encoder.add_text(0.0, 0.0, 1, 24, "A", true).unwrap();
        assert_eq!(
            appended(&encoder),
            &[
                0x1B, 0x24, 0x00, 0x00, //
                0x1B, 0x28, 0x56, 0x02, 0x00, 0x00, 0x00, //
                0x1B, 0x6B, 0x01, 0x1B, 0x58, 0x00, 0x18, 0x00, //
                0x1B, 0x45, b'A', 0x1B, 0x46,
            ]
        );
    }

    #[test]
    fn text_is_utf8() {
        let mut encoder = encoder();
        encoder.add_text(0.0, 0.0, 1, 24, "Ä", false).unwrap();
        assert!(appended(&encoder).ends_with(&[0x18, 0x00, 0xC3, 0x84]));
    }

    #[test]
    fn text_with_bad_font_appends_nothing() {
        let mut encoder = encoder();
        encoder.add_text(1.0, 1.0, 10, 24, "x", false).unwrap_err();
        assert!(appended(&encoder).is_empty());
    }

    #[test]
    fn text_order_is_kept() {
        let mut first = encoder();
        first
            .add_text(1.0, 1.0, 1, 24, "a", false)
            .unwrap()
            .add_text(2.0, 2.0, 1, 24, "b", false)
            .unwrap();
        let mut second = encoder();
        second
            .add_text(2.0, 2.0, 1, 24, "b", false)
            .unwrap()
            .add_text(1.0, 1.0, 1, 24, "a", false)
            .unwrap();
        assert_ne!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn unbalanced_bold_when_unchecked() {
        let mut encoder = encoder();
        encoder
            .apply_bold()
            .unwrap()
            .apply_bold()
            .unwrap()
            .cancel_bold()
            .unwrap()
            .cancel_bold()
            .unwrap();
        assert_eq!(
            appended(&encoder),
            &[0x1B, 0x45, 0x1B, 0x45, 0x1B, 0x46, 0x1B, 0x46]
        );
        encoder.apply_bold().unwrap();
        encoder.finalize().unwrap();
    }

    #[test]
    fn balanced_bold_rejects_double_apply() {
        let mut encoder = strict();
        encoder.apply_bold().unwrap();
        let err = encoder.apply_bold().unwrap_err();
        assert_eq!(err, Error::BoldAlreadyActive);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(appended(&encoder), &[0x1B, 0x45]);
    }

    #[test]
    fn balanced_bold_rejects_bold_text_while_active() {
        let mut encoder = strict();
        encoder.apply_bold().unwrap();
        let err = encoder.add_text(0.0, 0.0, 1, 24, "x", true).unwrap_err();
        assert_eq!(err, Error::BoldAlreadyActive);
        assert_eq!(appended(&encoder), &[0x1B, 0x45]);
    }

    #[test]
    fn balanced_bold_rejects_cancel_without_apply() {
        assert_eq!(strict().cancel_bold().unwrap_err(), Error::BoldNotActive);
    }

    #[test]
    fn balanced_bold_rejects_finalize_while_active() {
        let mut encoder = strict();
        encoder.apply_bold().unwrap();
        assert_eq!(encoder.finalize().unwrap_err(), Error::BoldLeftActive);
        encoder.cancel_bold().unwrap();
        encoder.finalize().unwrap();
    }

    #[test]
    fn balanced_bold_text() {
        let mut encoder = strict();
        encoder
            .add_text(0.0, 0.0, 1, 24, "a", true)
            .unwrap()
            .add_text(0.0, 0.0, 1, 24, "b", true)
            .unwrap();
        encoder.finalize().unwrap();
    }

    #[test]
    fn qr_code() {
        let mut encoder = encoder();
        encoder.add_qr_code("3642").unwrap();
        assert_eq!(
            appended(&encoder),
            &[
                0x1B, 0x69, 0x51, 0x0A, 0x02, 0x00, 0x00, 0x00, 0x03, 0x02, 0x00, //
                b'3', b'6', b'4', b'2', b'\\', b'\\', b'\\',
            ]
        );
    }

    #[test]
    fn qr_code_empty() {
        let mut encoder = encoder();
        let err = encoder.add_qr_code("").unwrap_err();
        assert_eq!(err, Error::Parity(crate::parity::Error::Empty));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(appended(&encoder).is_empty());
    }

    #[test]
    fn cut_after_print() {
        let mut encoder = encoder();
        encoder
            .set_cut_after_print(true)
            .unwrap()
            .set_cut_after_print(false)
            .unwrap();
        assert_eq!(
            appended(&encoder),
            &[0x1B, 0x69, 0x43, 0x01, 0x1B, 0x69, 0x43, 0x00]
        );
    }

    #[test]
    fn min_line_feed() {
        let mut encoder = encoder();
        encoder.set_min_line_feed(10.0).unwrap();
        assert_eq!(appended(&encoder), &[0x1B, 0x33, 118]);
    }

    #[test]
    fn min_line_feed_out_of_range() {
        let mut encoder = encoder();
        // 21.6 mm are 255 dots
        let err = encoder.set_min_line_feed(21.6).unwrap_err();
        assert_eq!(err, Error::LineFeedOutOfRange { value: 255 });
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        let err = encoder.set_min_line_feed(0.0).unwrap_err();
        assert_eq!(err, Error::LineFeedOutOfRange { value: 0 });
        assert!(appended(&encoder).is_empty());
    }

    #[test]
    fn line_feed() {
        let mut encoder = encoder();
        encoder.set_line_feed(1).unwrap().set_line_feed(254).unwrap();
        assert_eq!(appended(&encoder), &[0x1B, 0x41, 0x01, 0x1B, 0x41, 0xFE]);
        assert_eq!(
            encoder.set_line_feed(0).unwrap_err(),
            Error::LineFeedOutOfRange { value: 0 }
        );
        assert_eq!(
            encoder.set_line_feed(255).unwrap_err(),
            Error::LineFeedOutOfRange { value: 255 }
        );
    }

    #[test]
    fn finalized_encoder_rejects_everything() {
        let mut encoder = encoder();
        encoder.finalize().unwrap();
        assert_eq!(encoder.finalize().unwrap_err(), Error::Finalized);
        assert_eq!(encoder.set_landscape(0).unwrap_err(), Error::Finalized);
        assert_eq!(encoder.add_qr_code("1").unwrap_err(), Error::Finalized);
        let err = encoder.add_text(0.0, 0.0, 1, 24, "x", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(encoder.as_bytes().is_empty());
    }
}
