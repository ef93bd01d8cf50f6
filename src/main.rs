use clap::Parser;
use neuroscan::{cli, client, config, diagnose, error, intake, report};
use cli::{Cli, Commands};
use client::Client;
use config::Config;
use error::{NeuroScanError, Result};
use neuroscan_common::{RenderState, ResultView};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Diagnose { file, demo, endpoint, json } => {
            let mode = config.mode(demo);
            let endpoint = config.resolve_endpoint(endpoint.as_deref());
            let client = Client::new(endpoint, config.timeout())?;

            if !json {
                println!("🧠 NeuroScan AI - {}\n", file.display());
                if mode.is_demo() {
                    println!("Demo Mode: ON");
                } else {
                    println!("Endpoint: {}", client.endpoint());
                }
                println!("Analyzing...\n");
            }

            let session = diagnose::run(&client, &file, mode).await?;

            if json {
                if let RenderState::Result { result, .. } = session.render_state() {
                    println!("{}", serde_json::to_string_pretty(result)?);
                }
            } else {
                println!("{}", report::render_text(&session.view()));
            }

            if let ResultView::Error { message } = session.view() {
                return Err(NeuroScanError::Diagnosis(message));
            }
        }

        Commands::Preview { file, output } => {
            let selected = intake::read_image(&file)?;
            let preview = intake::preview_of(&selected);

            match output {
                Some(path) => {
                    std::fs::write(&path, preview.as_str())?;
                    println!("✔ Preview saved: {}", path.display());
                }
                None => println!("{}", preview.as_str()),
            }
        }

        Commands::Health { endpoint } => {
            let endpoint = config.resolve_endpoint(endpoint.as_deref());
            let client = Client::new(endpoint, config.timeout())?;

            let banner = client.check_health().await?;
            println!("✔ {}", banner.trim());
        }

        Commands::Config { set_endpoint, demo, timeout, show } => {
            let mut config = config;
            let changed = set_endpoint.is_some() || demo.is_some() || timeout.is_some();

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
            }
            if let Some(toggle) = demo {
                config.demo_mode = toggle.is_on();
            }
            if let Some(seconds) = timeout {
                config.timeout_seconds = (seconds > 0).then_some(seconds);
            }

            if changed {
                config.save()?;
                println!("✔ Settings saved: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Settings:");
                println!("  Endpoint:  {}", config.endpoint);
                println!("  Demo Mode: {}", if config.demo_mode { "ON" } else { "OFF" });
                match config.timeout_seconds {
                    Some(seconds) => println!("  Timeout:   {}s", seconds),
                    None => println!("  Timeout:   none"),
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
