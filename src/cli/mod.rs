//! CLI module for the API documentation assistant
//!
//! - `serve`: HTTP chat API
//! - `check-docs`: load the OpenAPI document and print the model context

pub mod check_docs;
pub mod serve;

use clap::{Parser, Subcommand};

/// API documentation assistant - grounded answers about a REST API
#[derive(Parser)]
#[command(name = "api-doc-assistant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the chat API server
    Serve,

    /// Load the configured API documents and print the rendered context
    CheckDocs(check_docs::CheckDocsArgs),
}
