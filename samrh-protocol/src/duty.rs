//! Duty-cycle commands for the drive electronics

/// Duty byte sent after every selector, whether or not one was chosen
pub const DEFAULT_DUTY_BYTE: u8 = 0x04;

const DUTY_HALF: u8 = 0x02;
const DUTY_QUARTER: u8 = 0x04;

/// Duty-cycle divider chosen by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DutySelector {
    /// `'2'`: divide by two
    Half,
    /// `'4'`: divide by four
    Quarter,
}

impl DutySelector {
    /// Parse the operator key; anything but `'2'`/`'4'` selects nothing
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            b'2' => Some(DutySelector::Half),
            b'4' => Some(DutySelector::Quarter),
            _ => None,
        }
    }

    /// Byte written to the drive electronics
    pub fn to_byte(self) -> u8 {
        match self {
            DutySelector::Half => DUTY_HALF,
            DutySelector::Quarter => DUTY_QUARTER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(DutySelector::from_key(b'2'), Some(DutySelector::Half));
        assert_eq!(DutySelector::from_key(b'4'), Some(DutySelector::Quarter));
        assert_eq!(DutySelector::from_key(b'3'), None);
        assert_eq!(DutySelector::from_key(b'x'), None);
    }

    #[test]
    fn test_bytes() {
        assert_eq!(DutySelector::Half.to_byte(), 0x02);
        assert_eq!(DutySelector::Quarter.to_byte(), 0x04);
        assert_eq!(DutySelector::Quarter.to_byte(), DEFAULT_DUTY_BYTE);
    }
}
