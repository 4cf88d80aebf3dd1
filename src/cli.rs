use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::constants::DEFAULT_RESOURCES_DIR;

#[derive(Parser, Debug)]
#[command(name = "resmark", version, about = "Build resource marker CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_RESOURCES_DIR,
        help = "Resources directory that receives the marker file"
    )]
    pub base_dir: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Emit {
        #[arg(long, help = "Maintainer recorded in the marker file")]
        maintainer: Option<String>,
    },
    Show,
    Check {
        #[arg(long, help = "Expected maintainer; falls back to resmark.toml")]
        maintainer: Option<String>,
    },
}
