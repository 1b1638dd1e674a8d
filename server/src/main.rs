use anyhow::Result;
use axum::Router;
use clap::Parser;
use engine::SearchEngine;
use server::{build_app, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Space-separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let engine = SearchEngine::from_stop_words_text(&args.stop_words)?;
    let admin_token = std::env::var("ADMIN_TOKEN").ok();
    let cors_origins = std::env::var("CORS_ALLOW_ORIGIN").ok();
    let app: Router = build_app(AppState::new(engine, admin_token).with_cors_origins(cors_origins));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
