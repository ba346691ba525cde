use anyhow::Result;
use senstation::config::Config;
use senstation::station;
use senstation::station::sensors::sim;
use senstation::station::uplink::Uplink;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::Level;
// Include these modules as part of the binary crate, not the library crate
// as this contains the actual implementation of the logging facility
mod argparse;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = argparse::parse();

    let level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let _guards = logging::init(level, cli.console, Some(cli.log_file.clone()));

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(senstation::get_config_path()));
    let config = Config::load(&config_path)?;

    let mut sensor = sim::Sensor::new();

    // Sample the sensors once and bail out
    if cli.dry_run {
        let reading = station::sample_once(&config, &mut sensor)?;
        println!("{}", serde_json::to_string(&reading)?);
        return Ok(());
    }

    let uplink = Uplink::new(&config.url, Duration::from_secs(config.timeout))?;

    let cancel = CancellationToken::new();
    let loop_cancel = cancel.clone();
    let mut worker = tokio::spawn(async move {
        station::run(&config, &mut sensor, &uplink, loop_cancel).await
    });

    tokio::select! {
        // A sensor fault ends the loop on its own
        res = &mut worker => res??,
        _ = signal::ctrl_c() => {
            cancel.cancel();
            worker.await??;
        }
    }
    Ok(())
}
