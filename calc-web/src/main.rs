//! calc-web - Calculator web service
//!
//! Serves the calculator form page and the JSON endpoints for the basic
//! arithmetic and BMI calculators.

use anyhow::Result;
use calc_web::build_router;
use clap::Parser;
use tracing::info;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "calc-web", about = "Calculator web service")]
struct Args {
    /// Bind address (host:port); overrides WEBCALC_BIND and the config file
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting WebCalc (calc-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Bind address resolution: CLI > env > config file > compiled default
    let bind_addr = calc_common::config::resolve_bind_addr(args.bind.as_deref());

    let app = build_router();

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("calc-web listening on http://{}", bind_addr);
    info!("Health check: http://{}/health", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
