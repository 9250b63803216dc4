use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "A command-line contact book", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the contacts file (defaults to ROLO_DATA, then the
    /// platform data directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// Show a single contact
    Get {
        /// Id of the contact to look up
        id: String,
    },

    /// Add a new contact
    #[command(alias = "a")]
    Add {
        /// Name of the person
        #[arg(short, long)]
        name: String,

        /// Email address (free-form)
        #[arg(short, long, default_value = "")]
        email: String,

        /// Phone number (free-form)
        #[arg(short, long, default_value = "")]
        phone: String,
    },

    /// Remove a contact
    #[command(alias = "rm")]
    Remove {
        /// Id of the contact to remove
        id: String,
    },
}
