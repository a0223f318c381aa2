//! Setpoint validation
//!
//! A setpoint is three angles entered one after another. Each angle is
//! checked against the upper position limit as soon as it is read.

use samrh_protocol::Numeral;

/// Setpoint axes, in entry order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    Czt,
    Zetat,
    Xit,
}

impl Axis {
    /// Axes in the order the operator is prompted for them
    pub const ALL: [Axis; 3] = [Axis::Czt, Axis::Zetat, Axis::Xit];

    /// Field label
    pub fn label(self) -> &'static str {
        match self {
            Axis::Czt => "czt",
            Axis::Zetat => "zetat",
            Axis::Xit => "xit",
        }
    }
}

/// An angle above the position limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SetpointError {
    pub axis: Axis,
    pub value: i32,
    pub limit: i32,
}

/// Check one angle against the upper limit
///
/// Only the upper bound is enforced; negative values from malformed
/// numerals pass.
pub fn check_bound(axis: Axis, numeral: Numeral, limit: i32) -> Result<i32, SetpointError> {
    let value = numeral.value();
    if value > limit {
        return Err(SetpointError { axis, value, limit });
    }
    Ok(value)
}

/// Accepted target angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Setpoint {
    pub czt: i32,
    pub zetat: i32,
    pub xit: i32,
}

impl Setpoint {
    /// Angle for one axis
    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Czt => self.czt,
            Axis::Zetat => self.zetat,
            Axis::Xit => self.xit,
        }
    }

    /// Set the angle for one axis
    pub fn set(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::Czt => self.czt = value,
            Axis::Zetat => self.zetat = value,
            Axis::Xit => self.xit = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numeral(v: u16) -> Numeral {
        Numeral::from_raw([
            b'0' + (v / 100) as u8,
            b'0' + ((v / 10) % 10) as u8,
            b'0' + (v % 10) as u8,
        ])
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert_eq!(check_bound(Axis::Czt, numeral(360), 360), Ok(360));
        assert_eq!(
            check_bound(Axis::Czt, numeral(361), 360),
            Err(SetpointError {
                axis: Axis::Czt,
                value: 361,
                limit: 360
            })
        );
    }

    #[test]
    fn test_negative_passes() {
        let n = Numeral::from_raw(*b"-01");
        assert_eq!(check_bound(Axis::Xit, n, 360), Ok(-299));
    }

    #[test]
    fn test_axis_access() {
        let mut sp = Setpoint::default();
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            sp.set(axis, i as i32 * 10);
        }
        assert_eq!(sp, Setpoint { czt: 0, zetat: 10, xit: 20 });
        assert_eq!(sp.get(Axis::Xit), 20);
    }

    proptest! {
        #[test]
        fn prop_bound(v in 0u16..1000) {
            let result = check_bound(Axis::Zetat, numeral(v), 360);
            if v > 360 {
                prop_assert!(result.is_err());
            } else {
                prop_assert_eq!(result, Ok(i32::from(v)));
            }
        }
    }
}
