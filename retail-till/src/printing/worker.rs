//! Print Worker
//!
//! Owns the printer adapter on a background task so the till loop never
//! blocks on Bluetooth I/O. Requests arrive over an mpsc channel and each
//! one is answered with exactly one [`Notice`].

use super::notice::Notice;
use super::renderer::ReceiptRenderer;
use crate::core::{Config, TillError, TillResult};
use shared::{Bill, StoreInfo};
use std::future::Future;
use std::time::Duration;
use till_printer::{
    Availability, ConnectionState, Connector, PairedDevice, PrintError, PrinterAdapter,
    select_device,
};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const QUEUE_DEPTH: usize = 16;

/// Requests the worker understands
#[derive(Debug, Clone)]
pub enum PrintCommand {
    /// Connect to the named device, or to the first that looks like a printer
    Connect(Option<String>),
    Print(Bill),
    Disconnect,
    Status,
}

struct PrintJob {
    command: PrintCommand,
    reply: oneshot::Sender<Notice>,
}

/// Receipt printing settings for the worker
#[derive(Debug, Clone)]
pub struct PrintSettings {
    pub store: StoreInfo,
    pub currency: String,
    pub paper_width: usize,
    pub printer_match: String,
    pub printer_name: Option<String>,
    pub timeout: Duration,
}

impl PrintSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            store: config.store.clone(),
            currency: config.currency.clone(),
            paper_width: config.paper_width,
            printer_match: config.printer_match.clone(),
            printer_name: config.printer_name.clone(),
            timeout: config.print_timeout,
        }
    }
}

/// Background printer worker
pub struct PrintWorker<C: Connector> {
    adapter: PrinterAdapter<C>,
    devices: Vec<PairedDevice>,
    settings: PrintSettings,
    availability: Availability,
}

impl<C: Connector> PrintWorker<C> {
    pub fn new(
        connector: C,
        devices: Vec<PairedDevice>,
        settings: PrintSettings,
        availability: Availability,
    ) -> Self {
        Self {
            adapter: PrinterAdapter::new(connector),
            devices,
            settings,
            availability,
        }
    }

    /// Start the worker task
    ///
    /// The task runs until `shutdown` fires or every handle is dropped,
    /// then closes any open connection.
    pub fn spawn(self, shutdown: CancellationToken) -> (PrintHandle, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
        let task = tokio::spawn(self.run(rx, shutdown));
        (PrintHandle { tx }, task)
    }

    async fn run(mut self, mut rx: mpsc::Receiver<PrintJob>, shutdown: CancellationToken) {
        tracing::info!(devices = self.devices.len(), "Print worker started");

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!("Print worker received shutdown signal");
                    break;
                }
                job = rx.recv() => {
                    let Some(job) = job else {
                        tracing::info!("Print channel closed, print worker stopping");
                        break;
                    };
                    let notice = self.handle(job.command).await;
                    notice.log();
                    // Caller may have given up waiting
                    let _ = job.reply.send(notice);
                }
            }
        }

        self.adapter.disconnect().await;
    }

    async fn handle(&mut self, command: PrintCommand) -> Notice {
        match command {
            PrintCommand::Connect(name) => self.connect(name.as_deref()).await,
            PrintCommand::Print(bill) => self.print(&bill).await,
            PrintCommand::Disconnect => {
                self.adapter.disconnect().await;
                Notice::Disconnected
            }
            PrintCommand::Status => self.status().await,
        }
    }

    async fn connect(&mut self, name: Option<&str>) -> Notice {
        if let Some(notice) = Notice::for_availability(self.availability) {
            return notice;
        }

        let chosen = name.or(self.settings.printer_name.as_deref());
        let device = match select_device(&self.devices, chosen, &self.settings.printer_match) {
            Ok(device) => device.clone(),
            Err(e) => return connect_notice(e),
        };

        let timeout = self.settings.timeout;
        match bounded(timeout, self.adapter.connect(&device)).await {
            Ok(()) => Notice::Connected(device.name),
            Err(e) => connect_notice(e),
        }
    }

    async fn print(&mut self, bill: &Bill) -> Notice {
        if self.adapter.state() == ConnectionState::Disconnected {
            return Notice::NotConnected;
        }

        let data = ReceiptRenderer::new(
            &self.settings.store,
            &self.settings.currency,
            self.settings.paper_width,
        )
        .render(bill);

        tracing::debug!(
            token = bill.token_number,
            items = bill.items.len(),
            bytes = data.len(),
            "Receipt rendered"
        );

        let timeout = self.settings.timeout;
        match bounded(timeout, self.adapter.print(&data)).await {
            Ok(()) => Notice::Printed,
            Err(PrintError::NotConnected) => Notice::NotConnected,
            Err(e) => Notice::PrintFailed(e.to_string()),
        }
    }

    async fn status(&mut self) -> Notice {
        let Some(device) = self.adapter.device().cloned() else {
            return Notice::Status {
                device: None,
                online: false,
            };
        };
        let online = self.adapter.connector().is_online(&device).await;
        Notice::Status {
            device: Some(device.name),
            online,
        }
    }
}

async fn bounded<T>(
    timeout: Duration,
    fut: impl Future<Output = Result<T, PrintError>>,
) -> Result<T, PrintError> {
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(PrintError::Timeout(format!("no answer within {:?}", timeout))),
    }
}

fn connect_notice(e: PrintError) -> Notice {
    match e {
        PrintError::PermissionDenied(_) => Notice::PermissionsRequired,
        PrintError::NoDevice(_) => Notice::NoPrinterFound,
        other => Notice::ConnectFailed(other.to_string()),
    }
}

/// Cloneable handle for sending requests to the worker
#[derive(Clone)]
pub struct PrintHandle {
    tx: mpsc::Sender<PrintJob>,
}

impl PrintHandle {
    pub async fn connect(&self, name: Option<String>) -> TillResult<Notice> {
        self.request(PrintCommand::Connect(name)).await
    }

    pub async fn print(&self, bill: Bill) -> TillResult<Notice> {
        self.request(PrintCommand::Print(bill)).await
    }

    pub async fn disconnect(&self) -> TillResult<Notice> {
        self.request(PrintCommand::Disconnect).await
    }

    pub async fn status(&self) -> TillResult<Notice> {
        self.request(PrintCommand::Status).await
    }

    async fn request(&self, command: PrintCommand) -> TillResult<Notice> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(PrintJob { command, reply })
            .await
            .map_err(|_| TillError::WorkerStopped)?;
        rx.await.map_err(|_| TillError::WorkerStopped)
    }
}
