extern crate env_logger as logger;

use log::{error, info};
use serial_bridge::{config, BridgeConfig};

#[tokio::main]
pub async fn main() {
    let matches = config::command().get_matches();
    let config = BridgeConfig::from_matches(&matches);

    logger::Builder::new()
        .filter(
            None,
            if config.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .parse_default_env()
        .init();

    match serial_bridge::run(&config).await {
        Ok(summary) => {
            info!(
                "Input closed: {} lines sent, {} lines received",
                summary.lines_sent, summary.lines_received
            );
        }
        Err(e) => {
            error!("{e}");
            // tokio's stdin may still be parked in a blocking read; do not wait for it
            std::process::exit(1);
        }
    }
}
