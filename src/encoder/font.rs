use super::{Error, Result};

/// Fonts 0 to 4.
const BITMAP_FONTS: std::ops::RangeInclusive<u8> = 0..=4;
/// Fonts 9 to 11.
const OUTLINE_FONTS: std::ops::RangeInclusive<u8> = 9..=11;

const BITMAP_SIZES: &[u16] = &[24, 32, 48];
const OUTLINE_SIZES: &[u16] = &[
    33, 38, 42, 46, 50, 58, 67, 75, 83, 92, 100, 117, 133, 150, 167, 200, 233,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Bitmap,
    Outline,
}

impl Family {
    /// Finds the family of a font number, or `None` if the printer has no such font.
    pub fn of(font: u8) -> Option<Family> {
        if BITMAP_FONTS.contains(&font) {
            Some(Family::Bitmap)
        } else if OUTLINE_FONTS.contains(&font) {
            Some(Family::Outline)
        } else {
            None
        }
    }

    /// Character sizes in dots that fonts of this family can be printed with.
    pub fn sizes(self) -> &'static [u16] {
        match self {
            Family::Bitmap => BITMAP_SIZES,
            Family::Outline => OUTLINE_SIZES,
        }
    }
}

/// Checks that the font exists and supports the character size.
pub fn check(font: u8, size_dots: u16) -> Result<Family> {
    let family = Family::of(font).ok_or(Error::UnknownFont { font })?;
    if !family.sizes().contains(&size_dots) {
        return Err(Error::UnsupportedSize {
            font,
            size: size_dots,
        });
    }
    Ok(family)
}
