//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the ballot decoder
#[derive(Parser, Debug)]
#[command(name = "ballot-decoder")]
#[command(author, version, about = "Decode an encrypted opnVote ballot")]
#[command(long_about = r#"
Decodes an encrypted opnVote ballot with the election private key and
prints the votes it contains. When an election description CID is given,
the description is fetched from IPFS and printed alongside the votes;
a fetch failure only produces a warning, never a failed decode.

Configuration files are loaded from (in priority order):
1. OPNVOTE_* environment variables (e.g. OPNVOTE_GATEWAY)
2. --config <path>     Explicit config file
3. ./opnvote.toml      Project-level config

Example:
  ballot-decoder 0x4f2a... 0x308204...
  ballot-decoder 0x4f2a... 0x308204... --cid QmXoypiz...
  ballot-decoder 0x4f2a... 0x308204... --gateway https://dweb.link/ipfs/
"#)]
pub struct Cli {
    /// Encrypted votes (hex string)
    pub encrypted_votes: String,

    /// Election private key (hex string)
    pub private_key: String,

    /// IPFS CID of the election description
    #[arg(short, long, value_name = "CID")]
    pub cid: Option<String>,

    /// IPFS gateway base URL (overrides configuration)
    #[arg(long, value_name = "URL")]
    pub gateway: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the decorative header
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
