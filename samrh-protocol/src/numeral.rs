//! Fixed-length angle numerals
//!
//! Angles are entered as exactly three ASCII digits (`"045"`). Conversion is
//! digit-by-digit in base 10 with no sign handling and no digit check: each
//! byte contributes `byte - b'0'`, so non-digit bytes yield out-of-range or
//! negative values rather than an error. Callers bound-check the result.

/// Number of bytes in an angle numeral
pub const NUMERAL_LEN: usize = 3;

/// A converted three-byte numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Numeral {
    value: i32,
}

impl Numeral {
    /// Convert three raw bytes
    pub fn from_raw(raw: [u8; NUMERAL_LEN]) -> Self {
        let value = raw
            .iter()
            .fold(0i32, |acc, &b| acc * 10 + (i32::from(b) - i32::from(b'0')));
        Self { value }
    }

    /// Converted value
    pub fn value(&self) -> i32 {
        self.value
    }
}
