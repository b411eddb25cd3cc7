mod cli;

use reelhub::config;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // CLI flags win over file and environment.
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting reelhub");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    rh_server::start(config).await?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "reelhub=trace,rh_server=trace,rh_catalog=trace,rh_core=debug,tower_http=debug"
                .to_string()
        } else {
            "reelhub=info,rh_server=info,rh_catalog=info,rh_core=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("reelhub {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let mut config = config::load_config(p)?;
            config.apply_env();
            config
        }
        None => {
            println!("No config file specified, checking defaults and environment");
            config::load_config_or_default(None)?
        }
    };

    println!("✓ Configuration parsed");
    println!("  Server: {}:{}", config.server.host, config.server.port);
    println!("  Catalog: {}", config.catalog.base_url);
    println!(
        "  Credential: {}",
        if config.catalog.has_credential() {
            "configured"
        } else {
            "missing"
        }
    );
    println!(
        "  Enrichment concurrency: {}",
        config
            .enrichment
            .max_concurrency
            .filter(|n| *n > 0)
            .map_or_else(|| "unbounded".to_string(), |n| n.to_string())
    );

    let warnings = config.validate();
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &warnings {
            println!("  - {warning}");
        }
    }

    Ok(())
}
