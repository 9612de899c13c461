//! Quokka QA API server binary.
//!
//! Prints `{"port": N}` to stdout once bound so a parent process can discover
//! the port when started with `--port 0`.

use clap::Parser;
use quokka_api::config::ApiConfig;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "quokka_api_server", about = "Quokka QA API server", version)]
struct Args {
    /// Host to bind. Falls back to `BIND_ADDR` when neither host nor port is given.
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Run as a managed sidecar: exit automatically when the parent process dies.
    ///
    /// When set, the server monitors stdin for EOF. The parent keeps the write
    /// end of the pipe open; if the parent exits the OS closes the pipe and the
    /// server shuts down.
    #[arg(long, default_value_t = false)]
    sidecar: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Write logs to stderr so stdout is reserved for the JSON port message.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new("info,quokka_api=debug,quokka_core=debug")
    })?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let args = Args::parse();

    let config = match (&args.host, args.port) {
        (None, None) => ApiConfig::from_env(),
        (host, port) => {
            ApiConfig::with_host_port(host.as_deref().unwrap_or("127.0.0.1"), port.unwrap_or(3100))
        }
    };
    info!(bind_addr = %config.bind_addr, "starting quokka_api_server");

    let state = quokka_api::AppState {
        config: config.clone(),
    };
    let app = quokka_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    println!("{}", serde_json::json!({"port": local_addr.port()}));

    if args.sidecar {
        info!("sidecar mode: will exit when parent pipe closes");
        tokio::spawn(async {
            use tokio::io::AsyncReadExt;
            let mut stdin = tokio::io::stdin();
            let mut buf = [0u8; 1];
            // Blocks until the parent dies and the OS closes the pipe (EOF).
            let _ = stdin.read(&mut buf).await;
            info!("parent pipe closed, shutting down");
            std::process::exit(0);
        });
    }

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
