//! CLI module for the user registration API

pub mod serve;

use clap::{Parser, Subcommand};

/// User registration API - register users and look them up by username
#[derive(Parser)]
#[command(name = "user-registration-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
