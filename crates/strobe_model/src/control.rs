//! The 2-bit control field selecting the counter's operating mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A counter control code, one of the four 2-bit values.
///
/// The enumeration is closed: every possible value of the 2-bit control
/// bus maps to exactly one variant, so there is no fallback mode and
/// matches over `ControlCode` are provably exhaustive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum ControlCode {
    /// `00` — keep the current count.
    Hold = 0b00,
    /// `01` — increment, wrapping at the width's maximum.
    CountUp = 0b01,
    /// `10` — decrement, wrapping at zero.
    CountDown = 0b10,
    /// `11` — load the parallel input.
    Load = 0b11,
}

/// All four control codes in bus-value order.
pub const ALL_CODES: [ControlCode; 4] = [
    ControlCode::Hold,
    ControlCode::CountUp,
    ControlCode::CountDown,
    ControlCode::Load,
];

impl ControlCode {
    /// Converts the low two bits of `bits` to a control code.
    ///
    /// Higher bits are ignored, mirroring a 2-bit bus slice of a wider
    /// signal.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => ControlCode::Hold,
            0b01 => ControlCode::CountUp,
            0b10 => ControlCode::CountDown,
            0b11 => ControlCode::Load,
            _ => unreachable!(),
        }
    }

    /// Returns the code's 2-bit bus value.
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// Parses the 2-character binary form used in vector files.
    pub fn from_binary_str(s: &str) -> Option<Self> {
        match s {
            "00" => Some(ControlCode::Hold),
            "01" => Some(ControlCode::CountUp),
            "10" => Some(ControlCode::CountDown),
            "11" => Some(ControlCode::Load),
            _ => None,
        }
    }
}

impl fmt::Display for ControlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02b}", self.bits())
    }
}
