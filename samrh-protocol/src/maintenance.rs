//! Maintenance menu actions

/// Actions offered by the maintenance menu
///
/// Each action is acknowledged on the terminal only; none of them changes
/// controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MaintenanceAction {
    /// `1`
    SelfTest,
    /// `2`
    Homing,
    /// `3`
    ReferencePosition,
    /// `4`
    FirmwareUpdate,
    /// `5`
    ConfigUpload,
    /// `6`
    ConfigDownload,
}

impl MaintenanceAction {
    /// All actions in menu order
    pub const ALL: [MaintenanceAction; 6] = [
        MaintenanceAction::SelfTest,
        MaintenanceAction::Homing,
        MaintenanceAction::ReferencePosition,
        MaintenanceAction::FirmwareUpdate,
        MaintenanceAction::ConfigUpload,
        MaintenanceAction::ConfigDownload,
    ];

    /// Parse a menu selector key `'1'`-`'6'`
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            b'1'..=b'6' => Some(Self::ALL[usize::from(key - b'1')]),
            _ => None,
        }
    }

    /// Menu selector key
    pub fn key(self) -> u8 {
        match self {
            MaintenanceAction::SelfTest => b'1',
            MaintenanceAction::Homing => b'2',
            MaintenanceAction::ReferencePosition => b'3',
            MaintenanceAction::FirmwareUpdate => b'4',
            MaintenanceAction::ConfigUpload => b'5',
            MaintenanceAction::ConfigDownload => b'6',
        }
    }

    /// Terminal acknowledgement for a performed action
    pub fn acknowledgement(self) -> &'static str {
        match self {
            MaintenanceAction::SelfTest => "Self Test Performed\n",
            MaintenanceAction::Homing => "Homing Performed\n",
            MaintenanceAction::ReferencePosition => "Reference Position received\n",
            MaintenanceAction::FirmwareUpdate => "FWSW Updated\n",
            MaintenanceAction::ConfigUpload => "Config Uploaded\n",
            MaintenanceAction::ConfigDownload => "Config Downloaded\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        for action in MaintenanceAction::ALL {
            assert_eq!(MaintenanceAction::from_key(action.key()), Some(action));
        }
    }

    #[test]
    fn test_out_of_menu() {
        assert_eq!(MaintenanceAction::from_key(b'0'), None);
        assert_eq!(MaintenanceAction::from_key(b'7'), None);
        assert_eq!(MaintenanceAction::from_key(b'r'), None);
    }

    #[test]
    fn test_acknowledgements_are_lines() {
        for action in MaintenanceAction::ALL {
            assert!(action.acknowledgement().ends_with('\n'));
        }
    }
}
