use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use room_directory::{RoomStore, routes};
use tracing::info;
use tracing_subscriber::EnvFilter;
use warp::Filter;

#[derive(Parser, Debug)]
#[command(name = "room-directory")]
#[command(about = "In-memory room directory for the lobby client")]
struct Args {
    #[arg(long, env = "ROOM_DIRECTORY_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    #[arg(short, long, env = "ROOM_DIRECTORY_PORT", default_value_t = 1337)]
    port: u16,

    /// Salas criadas no startup (pode repetir a flag).
    #[arg(long = "seed", value_name = "NAME")]
    seed: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let store = Arc::new(RoomStore::with_seed(args.seed).await);
    info!(rooms = store.list().await.len(), "room store ready");

    let api = routes(store).with(warp::log("room-directory"));

    let (addr, server) = warp::serve(api).try_bind_with_graceful_shutdown(
        (args.host, args.port),
        async {
            let _ = tokio::signal::ctrl_c().await;
        },
    )
    .with_context(|| format!("failed to bind {}:{}", args.host, args.port))?;
    info!("room directory listening on http://{addr}");

    server.await;
    info!("room directory stopped");
    Ok(())
}
