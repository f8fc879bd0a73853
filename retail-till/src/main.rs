use retail_till::printing::{Notice, PrintSettings, PrintWorker};
use retail_till::repl::{Command, HELP, Outcome, Session};
use retail_till::{Config, init_logger_with_file, load_catalog, print_banner};
use std::io::Write;
use std::sync::Arc;
use till_printer::{RfcommConnector, SysfsProbe};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, config, logging)
    let _ = dotenv::dotenv();
    let config = Config::from_env()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!("Retail till starting...");

    // 2. Catalog
    let catalog = Arc::new(load_catalog(config.catalog_path.as_deref()).await?);

    // 3. Printer worker; billing keeps working without Bluetooth
    let availability = SysfsProbe::with_root(&config.sysfs_root).probe().await;
    if let Some(notice) = Notice::for_availability(availability) {
        notice.log();
        println!("{}", notice);
    }

    let shutdown = CancellationToken::new();
    let connector = RfcommConnector::new().with_timeout(config.print_timeout);
    let worker = PrintWorker::new(
        connector,
        config.paired_devices.clone(),
        PrintSettings::from_config(&config),
        availability,
    );
    let (printer, worker_task) = worker.spawn(shutdown.clone());

    // 4. Command loop
    let mut session = Session::new(&config, catalog, printer);
    println!("{}\n", HELP);
    if let Ok(Outcome::Output(text)) = session.execute(Command::Catalog).await {
        println!("{}", text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("till> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            break;
        };

        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match session.execute(cmd).await {
            Ok(Outcome::Output(text)) => println!("{}", text),
            Ok(Outcome::Quit) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Command failed");
                println!("{}", e);
            }
        }
    }

    // 5. Shutdown
    shutdown.cancel();
    if let Err(e) = worker_task.await {
        tracing::error!("Print worker task failed: {}", e);
    }
    tracing::info!("Retail till stopped");
    Ok(())
}
