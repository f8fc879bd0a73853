//! Transient operator notices
//!
//! Every printer operation ends in exactly one notice. None of them stop
//! the till; failures only mean the requested action did not happen.

use std::fmt;
use till_printer::Availability;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Connected(String),
    ConnectFailed(String),
    NotConnected,
    Printed,
    PrintFailed(String),
    Disconnected,
    BluetoothUnsupported,
    BluetoothDisabled,
    PermissionsRequired,
    NoPrinterFound,
    /// Reply to a status query
    Status {
        device: Option<String>,
        online: bool,
    },
}

impl Notice {
    /// Notice for a degraded Bluetooth stack, if any
    pub fn for_availability(availability: Availability) -> Option<Self> {
        match availability {
            Availability::Ready => None,
            Availability::Disabled => Some(Notice::BluetoothDisabled),
            Availability::Unsupported => Some(Notice::BluetoothUnsupported),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Notice::ConnectFailed(_)
                | Notice::NotConnected
                | Notice::PrintFailed(_)
                | Notice::BluetoothUnsupported
                | Notice::BluetoothDisabled
                | Notice::PermissionsRequired
                | Notice::NoPrinterFound
        )
    }

    /// Emit through tracing at a level matching the outcome
    pub fn log(&self) {
        if self.is_failure() {
            tracing::warn!(notice = %self, "Printer notice");
        } else {
            tracing::info!(notice = %self, "Printer notice");
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Connected(device) => write!(f, "Connected to printer ({})", device),
            Notice::ConnectFailed(reason) => write!(f, "Failed to connect to printer: {}", reason),
            Notice::NotConnected => write!(f, "Printer not connected"),
            Notice::Printed => write!(f, "Bill printed successfully"),
            Notice::PrintFailed(reason) => write!(f, "Failed to print bill: {}", reason),
            Notice::Disconnected => write!(f, "Printer disconnected"),
            Notice::BluetoothUnsupported => write!(f, "Bluetooth not supported"),
            Notice::BluetoothDisabled => write!(f, "Bluetooth is required for printing"),
            Notice::PermissionsRequired => {
                write!(f, "Permissions are required for Bluetooth scanning")
            }
            Notice::NoPrinterFound => write!(f, "No paired printer found"),
            Notice::Status {
                device: Some(device),
                online,
            } => write!(
                f,
                "Printer: connected to {} ({})",
                device,
                if *online { "online" } else { "offline" }
            ),
            Notice::Status { device: None, .. } => write!(f, "Printer: not connected"),
        }
    }
}
