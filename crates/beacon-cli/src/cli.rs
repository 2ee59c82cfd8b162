use std::net::SocketAddr;
use std::path::PathBuf;

use beacon_server::StoreBackend;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "beacon",
    about = "Beacon — measurement-protocol event collector",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the collection server
    Serve(ServeArgs),
    /// Validate a hit's query string without sending it anywhere
    Check(CheckArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Path the collection endpoint is mounted on
    #[arg(long)]
    pub path: Option<String>,
    /// Storage backend: memory or log
    #[arg(long)]
    pub store: Option<StoreBackend>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Query string, e.g. "v=1&tid=site1&t=event&ec=nav&ea=click"
    pub query: String,
}
