//! Operator-facing terminal text
//!
//! Every prompt the controller prints is listed here so that the wording of
//! the serial protocol lives in one place.

/// Fixed prompts and notices printed on the operator terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Prompt {
    /// Gate before the state machine starts
    StartWord,
    /// Start-up menu
    StartUpMenu,
    /// Initialization menu
    InitializationMenu,
    /// Stand-by menu
    StandByMenu,
    /// Introduces the three setpoint fields
    SetpointIntro,
    /// Asks for the start confirmation
    StartConfirm,
    /// Start confirmed
    DriversEnabled,
    /// Start confirmation missing
    StartNotReceived,
    /// Asks for the duty-cycle divider
    DutyDivider,
    /// Operation menu
    OperationMenu,
    /// `p` received during operation
    NewPointReceived,
    /// `s` received during operation
    StopReceived,
    /// Maintenance menu
    MaintenanceMenu,
    /// Re-enter / exit choice after a maintenance action
    MaintenanceNext,
    /// Error recovery menu
    ErrorMenu,
    /// Line break
    Newline,
}

impl Prompt {
    /// Text to print
    pub fn text(self) -> &'static str {
        match self {
            Prompt::StartWord => "Enter start to begin state machine\nCommand: ",
            Prompt::StartUpMenu => {
                "Enter n to enter next state (initialization)\n\
                 Enter m to enter next maintenance\n\
                 Command: "
            }
            Prompt::InitializationMenu => {
                "Enter n to enter next state (Stand By)\n\
                 Enter m to enter next maintenance\n\
                 Command: "
            }
            Prompt::StandByMenu => {
                "Enter n to set a point and enter Operation\n\
                 Enter m to enter next maintenance\n\
                 Command: "
            }
            Prompt::SetpointIntro => "Set your czt, zetat, and xit in allowed degrees\n",
            Prompt::StartConfirm => "Enter s to enter operation and start movement: ",
            Prompt::DriversEnabled => "Enabling actuator drivers\n",
            Prompt::StartNotReceived => "Error: Start command not received\n",
            Prompt::DutyDivider => "Enter duty cycle divider (2 or 4) ",
            Prompt::OperationMenu => "Enter p to set new point\nEnter s to stop\n",
            Prompt::NewPointReceived => "\nSet new point command received\n",
            Prompt::StopReceived => "\nStopping command received\n",
            Prompt::MaintenanceMenu => {
                "Enter 1 to Perform Self-test | Enter 2 to Perform Homing | \
                 Enter 3 to go to Reference Position | Enter 4 to Update FWSW | \
                 Enter 5 to Upload Config | Enter 6 to Download Config\n\
                 Command: "
            }
            Prompt::MaintenanceNext => {
                "Press r to Re-Enter maintenance\nPress e to exit maintenance\n"
            }
            Prompt::ErrorMenu => {
                "Enter r restart\n\
                 Enter m to enter next maintenance\n\
                 Command: "
            }
            Prompt::Newline => "\n",
        }
    }
}
