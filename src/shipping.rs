//! Layout of the shipping label: a QR code with the basket number on the
//! left, captions and values on the right.
//!
//! ```text
//! +--------+ Warenkorbnummer:
//! |   QR   | 3642
//! |        | Lieferscheinnummer:
//! +--------+ LS98347778264
//! Druckdatum: 16.10.2026
//! ```

use crate::{
    encoder::{self, BoldPolicy, Encoder},
    job::PrintJob,
    label::Label,
};
use chrono::Local;

const PORTRAIT: u8 = 0;
const OUTLINE_FONT: u8 = 10;
const CAPTION_SIZE: u16 = 33;
const BITMAP_FONT: u8 = 1;
const NUMBER_SIZE: u16 = 24;

/// Day, month and year, e.g. `16.10.2026`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Today's date in the local time zone, formatted for the label.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Values printed on one shipping label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingLabel<'a> {
    /// Number of the ware basket, also encoded as QR code.
    pub basket_number: &'a str,
    pub delivery_note_number: &'a str,
    /// Already formatted, e.g. `16.10.2026`.
    pub print_date: &'a str,
}

impl<'a> ShippingLabel<'a> {
    pub fn encode(&self, label: Label, bold_policy: BoldPolicy) -> encoder::Result<PrintJob> {
        let mut encoder = Encoder::with_bold_policy(label, bold_policy);
        encoder
            .set_landscape(PORTRAIT)?
            .set_page_length()?
            .add_qr_code(self.basket_number)?
            .add_text(25.0, 0.0, OUTLINE_FONT, CAPTION_SIZE, "Warenkorbnummer:", false)?
            .add_text(25.0, 5.0, OUTLINE_FONT, CAPTION_SIZE, self.basket_number, true)?
            .add_text(25.0, 10.0, OUTLINE_FONT, CAPTION_SIZE, "Lieferscheinnummer:", false)?
            .add_text(25.0, 15.0, BITMAP_FONT, NUMBER_SIZE, self.delivery_note_number, false)?
            .add_text(2.8, 20.0, OUTLINE_FONT, CAPTION_SIZE, "Druckdatum:", false)?
            .add_text(25.0, 20.0, OUTLINE_FONT, CAPTION_SIZE, self.print_date, false)?
            .set_cut_after_print(true)?;
        encoder.finalize()
    }
}
