pub mod reading;
pub mod sensors;
pub mod uplink;

use crate::config::Config;
use reading::Reading;
use sensors::EnvironmentSensor;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uplink::Uplink;

/// Read the sensors once and build the reading that would go on the
/// wire, without sending anything.
pub fn sample_once<S>(config: &Config, sensor: &mut S) -> anyhow::Result<Reading>
where
    S: EnvironmentSensor,
{
    let raw = sensor.sample()?;
    Ok(Reading::new(
        &config.name,
        raw.temperature_c,
        raw.humidity_pct,
        raw.pressure_mbar,
    ))
}

/// Drive the acquire/transform/send/wait cycle until the token is
/// cancelled.
///
/// A transport failure only costs the current datapoint; the loop logs
/// it and keeps going. A sensor read failure is fatal and propagates to
/// the caller. The wait applies to both outcomes, so a dead collector
/// cannot turn this into a busy loop.
pub async fn run<S>(
    config: &Config,
    sensor: &mut S,
    uplink: &Uplink,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    S: EnvironmentSensor,
{
    let interval = Duration::from_secs(config.interval);
    info!(
        "station {} posting to {} every {}s",
        config.name, config.url, config.interval
    );
    loop {
        let reading = sample_once(config, sensor)?;
        match uplink.send(&reading).await {
            Ok(()) => info!("sent {reading:?}"),
            Err(e) => warn!("there was an error posting the reading: {e}"),
        }
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = sleep(interval) => (),
        }
    }
    info!("station {} stopped", config.name);
    Ok(())
}
