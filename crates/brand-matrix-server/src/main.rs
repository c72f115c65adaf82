use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Brand differentiation pipeline server.
#[derive(Parser)]
#[command(name = "brand-matrix", version)]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 10000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    tracing::info!("brand-matrix listening on http://{}", listener.local_addr()?);

    axum::serve(listener, brand_matrix_server::app()).await?;
    Ok(())
}
