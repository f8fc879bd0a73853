//! Paired Bluetooth devices and printer discovery

use crate::error::{PrintError, PrintResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

/// Serial Port Profile service class (00001101-0000-1000-8000-00805F9B34FB)
pub const SERIAL_PORT_PROFILE: Uuid = Uuid::from_u128(0x0000_1101_0000_1000_8000_0080_5F9B_34FB);

/// A bonded Bluetooth device with a bound RFCOMM node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedDevice {
    /// Advertised device name
    pub name: String,
    /// Bluetooth address (`AA:BB:CC:DD:EE:FF`)
    pub address: String,
    /// RFCOMM tty the device is bound to (e.g. `/dev/rfcomm0`)
    pub node: PathBuf,
}

impl PairedDevice {
    pub fn new(name: impl Into<String>, address: impl Into<String>, node: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            node: node.into(),
        }
    }
}

impl fmt::Display for PairedDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.name, self.address, self.node.display())
    }
}

fn is_valid_address(address: &str) -> bool {
    let parts: Vec<&str> = address.split(':').collect();
    parts.len() == 6
        && parts
            .iter()
            .all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Parse `name|address|node` entries separated by `;`
///
/// Empty entries are skipped.
pub fn parse_paired_devices(list: &str) -> PrintResult<Vec<PairedDevice>> {
    let mut devices = Vec::new();
    for entry in list.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let fields: Vec<&str> = entry.split('|').map(str::trim).collect();
        let [name, address, node] = fields.as_slice() else {
            return Err(PrintError::InvalidConfig(format!(
                "Expected name|address|node, got: {}",
                entry
            )));
        };
        if name.is_empty() || node.is_empty() {
            return Err(PrintError::InvalidConfig(format!(
                "Empty name or node: {}",
                entry
            )));
        }
        if !is_valid_address(address) {
            return Err(PrintError::InvalidConfig(format!(
                "Invalid Bluetooth address: {}",
                address
            )));
        }
        devices.push(PairedDevice::new(*name, address.to_uppercase(), *node));
    }
    Ok(devices)
}

/// First paired device whose name contains `pattern`
pub fn find_printer<'a>(devices: &'a [PairedDevice], pattern: &str) -> Option<&'a PairedDevice> {
    devices.iter().find(|d| d.name.contains(pattern))
}

/// Pick the device to connect to
///
/// An explicitly chosen name must match a paired device exactly; otherwise
/// the name heuristic applies.
pub fn select_device<'a>(
    devices: &'a [PairedDevice],
    chosen: Option<&str>,
    pattern: &str,
) -> PrintResult<&'a PairedDevice> {
    match chosen {
        Some(name) => devices
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| PrintError::NoDevice(name.to_string())),
        None => find_printer(devices, pattern)
            .ok_or_else(|| PrintError::NoDevice(format!("no name contains \"{}\"", pattern))),
    }
}
