//! Channel transports for sending ESC/POS data
//!
//! Supports:
//! - RFCOMM serial channels bound to a tty node (`rfcomm bind`)

use crate::device::{PairedDevice, SERIAL_PORT_PROFILE};
use crate::error::{PrintError, PrintResult};
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWrite;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Trait for opening a write channel to a paired device
pub trait Connector: Send + Sync + 'static {
    /// Stream that receives the print data
    type Stream: AsyncWrite + Unpin + Send + 'static;

    /// Open the channel
    fn connect(
        &self,
        device: &PairedDevice,
    ) -> impl Future<Output = PrintResult<Self::Stream>> + Send;

    /// Check if the device is reachable
    fn is_online(&self, device: &PairedDevice) -> impl Future<Output = bool> + Send;
}

/// RFCOMM connector for devices bound to a tty node
///
/// The kernel binds the node to the device's Serial Port Profile channel;
/// opening the node establishes the link.
#[derive(Debug, Clone)]
pub struct RfcommConnector {
    service: Uuid,
    timeout: Duration,
}

impl RfcommConnector {
    /// Create a connector for the Serial Port Profile service
    pub fn new() -> Self {
        Self {
            service: SERIAL_PORT_PROFILE,
            timeout: Duration::from_secs(5),
        }
    }

    /// Set connection timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the service class the channel is bound to
    pub fn service(&self) -> Uuid {
        self.service
    }
}

impl Default for RfcommConnector {
    fn default() -> Self {
        Self::new()
    }
}

fn map_open_error(device: &PairedDevice, e: io::Error) -> PrintError {
    match e.kind() {
        io::ErrorKind::PermissionDenied => {
            PrintError::PermissionDenied(device.node.display().to_string())
        }
        _ => PrintError::Connection(format!("{}: {}", device.name, e)),
    }
}

impl Connector for RfcommConnector {
    type Stream = File;

    #[instrument(skip(self, device), fields(device = %device.name, node = %device.node.display()))]
    async fn connect(&self, device: &PairedDevice) -> PrintResult<File> {
        info!(service = %self.service(), "Opening RFCOMM channel");

        let mut options = OpenOptions::new();
        options.write(true);
        let open = options.open(&device.node);
        let file = tokio::time::timeout(self.timeout, open)
            .await
            .map_err(|_| PrintError::Timeout(format!("Connection timeout: {}", device.name)))?
            .map_err(|e| map_open_error(device, e))?;

        info!("Connected to printer");
        Ok(file)
    }

    #[instrument(skip(self, device), fields(device = %device.name))]
    async fn is_online(&self, device: &PairedDevice) -> bool {
        let check_timeout = Duration::from_millis(500);

        match tokio::time::timeout(check_timeout, tokio::fs::metadata(&device.node)).await {
            Ok(Ok(_)) => {
                info!("Printer node present");
                true
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Printer node missing");
                false
            }
            Err(_) => {
                warn!("Printer check timeout");
                false
            }
        }
    }
}
