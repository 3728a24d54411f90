use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wordbook")]
#[command(about = "Learn English words with AI-generated explanations", long_about = None)]
pub struct Cli {
    /// The word to learn
    pub word: Option<String>,

    /// Print the explanation without prompting or saving
    #[arg(long)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test the connection to the explanation API
    Test,

    /// Show application information and resolved paths
    Info,

    /// Interactively configure the API key, notebook path and git remote
    #[command(alias = "setup")]
    Init,

    /// Save content directly to the notebook, skipping the API
    Save {
        /// The markdown content to save
        content: String,
    },
}
