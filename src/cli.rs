//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{
    AssignCmd, BookCmd, ConfigCmd, FindCmd, ListCmd, MapCmd, ReleaseCmd, ShowCmd, WatchCmd,
    WhoamiCmd,
};

#[derive(Parser)]
#[command(name = "seats")]
#[command(about = "Seats - find and book a lunch seat on the office floor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the floor map with live seat state
    Map(MapCmd),

    /// List seats and who holds them
    List(ListCmd),

    /// Show one seat in detail
    Show(ShowCmd),

    /// Find where a colleague is sitting
    Find(FindCmd),

    /// Book a seat
    Book(BookCmd),

    /// Check out of a seat you hold
    Release(ReleaseCmd),

    /// Pick a random free seat
    Assign(AssignCmd),

    /// Follow seat changes live
    Watch(WatchCmd),

    /// Show the signed-in user
    Whoami(WhoamiCmd),

    /// Manage configuration (service URL, token, etc.)
    Config(ConfigCmd),
}

impl Command {
    pub async fn execute(&self) -> anyhow::Result<()> {
        match self {
            Command::Map(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
            Command::Show(cmd) => cmd.run().await,
            Command::Find(cmd) => cmd.run().await,
            Command::Book(cmd) => cmd.run().await,
            Command::Release(cmd) => cmd.run().await,
            Command::Assign(cmd) => cmd.run().await,
            Command::Watch(cmd) => cmd.run().await,
            Command::Whoami(cmd) => cmd.run().await,
            Command::Config(cmd) => cmd.run().await,
        }
    }
}
