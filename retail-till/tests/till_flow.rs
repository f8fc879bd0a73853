//! End-to-end till flow against a file standing in for the RFCOMM node

use retail_till::printing::{Notice, PrintSettings, PrintWorker};
use retail_till::repl::{Command, Outcome, Session};
use retail_till::{Config, load_catalog};
use std::sync::Arc;
use till_printer::{Availability, RfcommConnector};
use tokio_util::sync::CancellationToken;

struct Till {
    session: Session,
    shutdown: CancellationToken,
    worker: tokio::task::JoinHandle<()>,
}

async fn start(devices: &str) -> Till {
    let devices = devices.to_string();
    let config = Config::from_lookup(move |key| match key {
        "TILL_PAIRED_DEVICES" => Some(devices.clone()),
        "TILL_PRINT_TIMEOUT_MS" => Some("1000".into()),
        _ => None,
    })
    .unwrap();

    let catalog = Arc::new(load_catalog(None).await.unwrap());
    let shutdown = CancellationToken::new();
    let connector = RfcommConnector::new().with_timeout(config.print_timeout);
    let (printer, worker) = PrintWorker::new(
        connector,
        config.paired_devices.clone(),
        PrintSettings::from_config(&config),
        Availability::Ready,
    )
    .spawn(shutdown.clone());

    Till {
        session: Session::new(&config, catalog, printer),
        shutdown,
        worker,
    }
}

async fn run(till: &mut Till, input: &str) -> String {
    let cmd = Command::parse(input).unwrap().unwrap();
    match till.session.execute(cmd).await.unwrap() {
        Outcome::Output(text) => text,
        Outcome::Quit => panic!("unexpected quit"),
    }
}

#[tokio::test]
async fn test_bill_print_and_next_token() {
    let node = tempfile::NamedTempFile::new().unwrap();
    let mut till = start(&format!(
        "Headset|00:11:22:33:44:55|/dev/null;BT Printer|AA:BB:CC:DD:EE:FF|{}",
        node.path().display()
    ))
    .await;

    assert_eq!(
        run(&mut till, "connect").await,
        Notice::Connected("BT Printer".into()).to_string()
    );

    run(&mut till, "add 1 3").await;
    run(&mut till, "add 2 1").await;
    assert_eq!(till.session.state().total(), 1160);

    let text = run(&mut till, "print").await;
    assert!(text.contains("Bill No: SR1"));
    assert!(text.ends_with(&Notice::Printed.to_string()));

    let data = std::fs::read(node.path()).unwrap();
    assert!(data.starts_with(&[0x1B, 0x40]));
    assert!(data.ends_with(&[0x1D, 0x56, 0x41, 0x10]));
    let receipt = String::from_utf8_lossy(&data);
    assert!(receipt.contains("Token Number: 1\n"));
    assert!(receipt.contains("Alternagel | 3 | Rs.600\n"));
    assert!(receipt.contains("Total: Rs.1160\n"));

    let state = till.session.state();
    assert_eq!(state.token_number(), 2);
    assert!(state.bill().is_empty());
    assert_eq!(state.saved()[0].total_amount, 1160);

    till.shutdown.cancel();
    till.worker.await.unwrap();
}

#[tokio::test]
async fn test_print_while_disconnected_writes_nothing() {
    let node = tempfile::NamedTempFile::new().unwrap();
    let mut till = start(&format!(
        "BT Printer|AA:BB:CC:DD:EE:FF|{}",
        node.path().display()
    ))
    .await;

    run(&mut till, "add 3 2").await;
    let text = run(&mut till, "print").await;

    assert!(text.ends_with(&Notice::NotConnected.to_string()));
    assert!(std::fs::read(node.path()).unwrap().is_empty());
    assert_eq!(till.session.state().token_number(), 2);
}

#[tokio::test]
async fn test_missing_node_fails_connect() {
    let dir = tempfile::tempdir().unwrap();
    let mut till = start(&format!(
        "BT Printer|AA:BB:CC:DD:EE:FF|{}",
        dir.path().join("rfcomm0").display()
    ))
    .await;

    let text = run(&mut till, "connect").await;
    assert!(text.starts_with("Failed to connect to printer"));
    assert_eq!(
        run(&mut till, "status").await,
        Notice::Status {
            device: None,
            online: false
        }
        .to_string()
    );
}

#[tokio::test]
async fn test_no_matching_printer() {
    let mut till = start("Headset|00:11:22:33:44:55|/dev/null").await;
    assert_eq!(
        run(&mut till, "connect").await,
        Notice::NoPrinterFound.to_string()
    );
}
