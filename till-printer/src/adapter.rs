//! Printer adapter
//!
//! Owns the single printer connection. Two states:
//!
//! ```text
//! Disconnected --connect ok--> Connected --print err--> Connected
//!      ^                           |
//!      +-------- disconnect -------+
//! ```
//!
//! A failed print leaves the channel open; the caller decides whether to
//! `disconnect` and connect again.

use crate::device::PairedDevice;
use crate::error::{PrintError, PrintResult};
use crate::transport::Connector;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument, warn};

/// Connection state of the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

struct Connection<S> {
    device: PairedDevice,
    stream: S,
}

/// Single-printer adapter over a [`Connector`]
pub struct PrinterAdapter<C: Connector> {
    connector: C,
    connection: Option<Connection<C::Stream>>,
}

impl<C: Connector> PrinterAdapter<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            connection: None,
        }
    }

    pub fn state(&self) -> ConnectionState {
        if self.connection.is_some() {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }

    /// Device of the open connection, if any
    pub fn device(&self) -> Option<&PairedDevice> {
        self.connection.as_ref().map(|c| &c.device)
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Open a channel to `device`, replacing any current connection
    ///
    /// On failure the adapter is left disconnected.
    #[instrument(skip(self, device), fields(device = %device.name))]
    pub async fn connect(&mut self, device: &PairedDevice) -> PrintResult<()> {
        self.disconnect().await;

        let stream = self.connector.connect(device).await?;
        self.connection = Some(Connection {
            device: device.clone(),
            stream,
        });

        info!("Printer connected");
        Ok(())
    }

    /// Send raw ESC/POS data over the open channel
    ///
    /// Nothing is written when disconnected. A write failure abandons the
    /// rest of the data; whatever already reached the printer stays printed.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub async fn print(&mut self, data: &[u8]) -> PrintResult<()> {
        let Some(conn) = self.connection.as_mut() else {
            warn!("Print requested while disconnected");
            return Err(PrintError::NotConnected);
        };

        let result = async {
            conn.stream.write_all(data).await?;
            conn.stream.flush().await
        }
        .await;

        match result {
            Ok(()) => {
                info!(device = %conn.device.name, "Print job sent");
                Ok(())
            }
            Err(e) => {
                warn!(device = %conn.device.name, error = %e, "Print failed, channel left open");
                Err(PrintError::Io(e))
            }
        }
    }

    /// Close the channel if one is open
    pub async fn disconnect(&mut self) {
        if let Some(mut conn) = self.connection.take() {
            if let Err(e) = conn.stream.shutdown().await {
                warn!(device = %conn.device.name, error = %e, "Shutdown failed");
            }
            info!(device = %conn.device.name, "Printer disconnected");
        }
    }
}
