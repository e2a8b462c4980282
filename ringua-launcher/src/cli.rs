use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

/// Serves the built Ringua frontend.
#[derive(Debug, Parser)]
#[command(name = "ringua-launcher", version)]
pub struct Cli {
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,
    /// Directory holding the trunk build output
    #[arg(long, default_value = "dist")]
    pub dist_dir: PathBuf,
}
