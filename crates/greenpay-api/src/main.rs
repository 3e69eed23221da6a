//! GreenPay demo backend entry point.
//!
//! Binary name: `greenpay`
//!
//! Parses CLI arguments, sets up tracing, then either starts the HTTP server
//! or runs a one-off command.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use greenpay_infra::config::load_server_config;
use greenpay_types::config::ServerConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity (RUST_LOG takes precedence)
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,greenpay=debug",
        _ => "trace",
    };
    greenpay_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    greenpay_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "greenpay", &mut std::io::stdout());
        }

        Commands::Ask { message } => {
            cli::ask::ask(&message, cli.json)?;
        }

        Commands::Serve {
            host,
            port,
            web_dir,
        } => {
            let mut config = load_server_config(&cli.config).await;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(web_dir) = web_dir {
                config.web_dir = web_dir;
            }
            serve(config, cli.quiet).await?;
        }
    }

    Ok(())
}

/// Bind the listener and run the server until Ctrl+C or SIGTERM.
async fn serve(config: ServerConfig, quiet: bool) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    if !config.web_dir.is_dir() {
        tracing::warn!(
            path = %config.web_dir.display(),
            "static content root does not exist, only /api routes will respond"
        );
    }

    if !quiet {
        println!(
            "  {} GreenPay listening on {}",
            console::style("\u{26A1}").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }

    let router = http::router::build_router(AppState::new(config));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
