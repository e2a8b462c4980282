use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Ringua utilities - trunk must be installed")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Build the frontend and serve it locally")]
    Launch {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    #[command(about = "Build a release bundle into Ringua/")]
    Dist { target_triple: Option<String> },
}
