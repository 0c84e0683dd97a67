/// Longest label that can be addressed, in millimeters.
pub const MAX_LENGTH_MM: f64 = 677.0;

/// Geometry of a die-cut label, all in millimeters.
///
/// The length runs along the x axis, the width along the y axis. Nothing is
/// validated on construction: the encoder checks the length when the page
/// length is specified and checks coordinates against both bounds whenever a
/// position is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    length_mm: f64,
    width_mm: f64,
    lr_margin_mm: f64,
    tb_margin_mm: f64,
}

impl Label {
    pub fn new(length_mm: f64, width_mm: f64, lr_margin_mm: f64, tb_margin_mm: f64) -> Self {
        Label {
            length_mm,
            width_mm,
            lr_margin_mm,
            tb_margin_mm,
        }
    }

    pub fn length_mm(&self) -> f64 {
        self.length_mm
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Margin on the left and on the right, subtracted twice from the page length.
    pub fn lr_margin_mm(&self) -> f64 {
        self.lr_margin_mm
    }

    pub fn tb_margin_mm(&self) -> f64 {
        self.tb_margin_mm
    }
}

impl Default for Label {
    /// The 29 × 62 mm shipping label.
    fn default() -> Self {
        Label::new(29.0, 62.0, 3.0, 1.5)
    }
}
