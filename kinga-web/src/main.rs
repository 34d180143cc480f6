//! Card server - renders the 謹賀新年 greeting page.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kinga::io::config::{DEFAULT_CONFIG_FILE, load_config};
use kinga::io::site::SiteConfig;
use tracing::info;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "kinga-web")]
#[command(about = "Serve the 謹賀新年 greeting card")]
struct Args {
    /// Config file (missing file means defaults)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Address to bind the server to (overrides config)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Directory with favicons and images (overrides config)
    #[arg(long)]
    public_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kinga::logging::init();

    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(public_dir) = args.public_dir {
        config.public_dir = public_dir;
    }
    config.validate()?;
    info!(config = %args.config.display(), "configuration loaded");

    let site = SiteConfig::from_env(config.site_url.as_deref());
    info!(site_url = %site.url(), "site url resolved");

    let state = AppState::new(site)?;
    let app = routes::build_router(state, &config.public_dir);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("parse listen address {}", config.listen_addr()))?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
