use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use voice_relay::api::ApiServerBuilder;
use voice_relay::config::ServerOverrides;
use voice_relay::{Config, GeminiClient, Relay};

/// Voice relay - talk to a generative-text model from the browser
#[derive(Parser)]
#[command(name = "voice-relay", version, about)]
struct Cli {
    /// Host to bind
    #[arg(long, env = "VOICE_RELAY_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "VOICE_RELAY_PORT")]
    port: Option<u16>,

    /// Debug mode: log every request and relay at debug level
    #[arg(long, env = "VOICE_RELAY_DEBUG")]
    debug: bool,

    /// Config file (defaults to ~/.config/voice-relay/config.toml)
    #[arg(short, long, env = "VOICE_RELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.debug) {
        (0, false) => "info,voice_relay=info",
        (0 | 1, _) => "info,voice_relay=debug,tower_http=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = ServerOverrides {
        host: cli.host,
        port: cli.port,
        debug: cli.debug,
        config_path: cli.config,
    };

    let config = Config::load(&overrides)?;
    tracing::debug!(?config, "loaded configuration");

    tracing::info!(
        addr = %config.server.bind_addr(),
        debug = config.server.debug,
        model = %config.llm.model,
        "starting voice relay"
    );

    let relay = Relay::new(Arc::new(GeminiClient::new(&config.llm)));

    ApiServerBuilder::new(relay)
        .server_config(&config.server)
        .build()
        .run()
        .await?;

    Ok(())
}
