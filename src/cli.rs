use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renders a specification document to HTML
    Render {
        /// Markdown source document
        input: PathBuf,
        /// Configuration file
        #[clap(short, long, default_value = "specdoc.toml")]
        config: PathBuf,
        /// Output HTML file
        #[clap(short, long, default_value = "index.html")]
        output: PathBuf,
    },
    /// Runs the configured lint rules without rendering
    Lint {
        /// Markdown source document
        input: PathBuf,
        /// Configuration file
        #[clap(short, long, default_value = "specdoc.toml")]
        config: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
