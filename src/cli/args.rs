//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::view::create::DEFAULT_DURATION_DAYS;
use crate::view::StatusFilter;

#[derive(Parser, Debug)]
#[command(
    name = "crowdfund",
    version,
    about = "Crowdfund client - browse, create and fund on-chain crowdfunding campaigns",
    long_about = None
)]
pub struct Cli {
    /// Node WebSocket URL (overrides config)
    #[arg(long, global = true)]
    pub node_url: Option<String>,

    /// Crowdfunding contract address (overrides config)
    #[arg(long, global = true)]
    pub contract: Option<String>,

    /// Account to act as: list index or address (default: first account)
    #[arg(short, long, global = true)]
    pub account: Option<String>,

    /// Custom configuration directory
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize or show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show chain metadata from the node
    Node,

    /// Show wallet accounts and the selected one
    Accounts,

    /// List campaigns with stats
    List {
        /// Case-insensitive search on title and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Status filter: all, active, completed, expired
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Keep refreshing on every new block until Ctrl-C
        #[arg(short, long)]
        watch: bool,
    },

    /// Show a single campaign
    Show {
        /// Campaign id
        id: u32,
    },

    /// Create a new campaign
    Create {
        /// Campaign title
        #[arg(long)]
        title: String,

        /// Campaign description
        #[arg(long)]
        description: String,

        /// Funding goal in tokens (e.g. 100.5)
        #[arg(long)]
        goal: String,

        /// Duration in days (1-365)
        #[arg(long, default_value_t = DEFAULT_DURATION_DAYS)]
        days: u32,
    },

    /// Contribute to a campaign
    Contribute {
        /// Campaign id
        id: u32,

        /// Amount in tokens (e.g. 1.5)
        #[arg(long)]
        amount: String,
    },

    /// Withdraw raised funds from a successful campaign (creator only)
    Withdraw {
        /// Campaign id
        id: u32,
    },

    /// Reclaim your contribution from a failed campaign
    Refund {
        /// Campaign id
        id: u32,
    },

    /// Stop a campaign from accepting contributions (creator only)
    Deactivate {
        /// Campaign id
        id: u32,
    },

    /// List contributors of a campaign
    Contributors {
        /// Campaign id
        id: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Print the resolved configuration
    Show,
}
