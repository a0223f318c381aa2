//! Single-character operator commands

/// Word that gates entry into the state machine
pub const START_WORD: &[u8; 5] = b"start";

/// Check whether a token is the start word
pub fn is_start_word(token: &[u8]) -> bool {
    token == START_WORD
}

/// Commands decoded from a single operator byte
///
/// The same key can mean different things depending on the active menu,
/// so each variant is named after what it does in the menus that accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `n`: advance to the next state / enter a new point
    Next,
    /// `m`: divert into the maintenance menu
    Maintenance,
    /// `s`: start movement (stand-by) or stop it (operation)
    StartStop,
    /// `p`: abandon the current motion and set a new point
    NewPoint,
    /// `r`: restart from the error state, or re-enter maintenance
    Restart,
    /// `e`: leave maintenance
    Exit,
    /// `0`-`9`: menu selector digit
    Digit(u8),
    /// Anything else
    Other(u8),
}

// Wire format values
const KEY_NEXT: u8 = b'n';
const KEY_MAINTENANCE: u8 = b'm';
const KEY_START_STOP: u8 = b's';
const KEY_NEW_POINT: u8 = b'p';
const KEY_RESTART: u8 = b'r';
const KEY_EXIT: u8 = b'e';

impl Command {
    /// Decode a command from its wire byte
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            KEY_NEXT => Command::Next,
            KEY_MAINTENANCE => Command::Maintenance,
            KEY_START_STOP => Command::StartStop,
            KEY_NEW_POINT => Command::NewPoint,
            KEY_RESTART => Command::Restart,
            KEY_EXIT => Command::Exit,
            b'0'..=b'9' => Command::Digit(byte - b'0'),
            other => Command::Other(other),
        }
    }

    /// Returns true if this command interrupts a running motion phase
    pub fn interrupts_motion(&self) -> bool {
        matches!(self, Command::NewPoint | Command::StartStop)
    }
}
