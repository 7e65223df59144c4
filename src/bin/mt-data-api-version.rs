//! Fetch and print the version of a Data API installation
//!
//! Environment variables:
//! - `MT_DATA_API_BASE_URL` (default: `https://movabletype.net/.data-api`)
//! - `MT_DATA_API_ENDPOINT_VERSION` (default: `v3`)
//! - `RUST_LOG` for log filtering

use futures::StreamExt;
use mt_data_api::{Client, ClientConfig};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_CLI_BASE_URL: &str = "https://movabletype.net/.data-api";

fn config_from_env() -> ClientConfig {
    let mut config = ClientConfig {
        base_url: DEFAULT_CLI_BASE_URL.to_string(),
        ..ClientConfig::default()
    };
    if let Ok(base_url) = env::var("MT_DATA_API_BASE_URL") {
        config.base_url = base_url;
    }
    if let Ok(endpoint_version) = env::var("MT_DATA_API_ENDPOINT_VERSION") {
        config.endpoint_version = endpoint_version;
    }
    config
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match Client::new(config_from_env()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // Blocks until the single result and the end of the stream arrive.
    runtime.block_on(async {
        let mut stream = client.version_stream();
        let mut failed = false;
        while let Some(result) = stream.next().await {
            match result {
                Ok(version) => {
                    println!("EndpointVersion : {}", version.endpoint_version());
                    println!("ApiVersion      : {}", version.api_version());
                }
                Err(e) => {
                    eprintln!("{}", e);
                    failed = true;
                }
            }
        }
        if failed {
            return ExitCode::FAILURE;
        }
        println!("finished!!");
        ExitCode::SUCCESS
    })
}
