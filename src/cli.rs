use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    domain::{
        client::{ClientStatus, ScoreBand},
        client_query::SortField,
    },
    usecases::commands::ClientsRequest,
};

#[derive(Debug, Parser)]
#[command(
    name = "everly",
    about = "Terminal console for life-insurance sales agents"
)]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the interactive console
    Run,
    /// Print one page of the client directory
    Clients(ClientsArgs),
    /// Ask the assistant a question and print the answer
    Ask {
        /// Question text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClientsArgs {
    /// Case-insensitive substring of name or email
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep only these statuses (repeatable), e.g. `new-lead`
    #[arg(long = "status")]
    pub statuses: Vec<ClientStatus>,

    /// Keep only these score bands (repeatable): low, medium, high
    #[arg(long = "score")]
    pub scores: Vec<ScoreBand>,

    /// Sort column
    #[arg(long, default_value = "name")]
    pub sort: SortField,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// One-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl From<ClientsArgs> for ClientsRequest {
    fn from(args: ClientsArgs) -> Self {
        Self {
            search: args.search,
            statuses: args.statuses,
            scores: args.scores,
            sort: args.sort,
            descending: args.desc,
            page: args.page,
        }
    }
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}
