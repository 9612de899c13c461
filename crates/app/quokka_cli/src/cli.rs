use clap::{Parser, Subcommand};

/// Ask the Quokka QA assistant a question.
#[derive(Parser, Debug)]
#[command(name = "quokka", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version.
    Version,

    /// Answer a single question.
    Ask {
        /// Question text. Multiple words are joined with spaces.
        #[arg(required = true)]
        question: Vec<String>,

        /// Print which rule produced the answer.
        #[arg(long, conflicts_with = "json")]
        explain: bool,

        /// Print the answer and matched rule as a JSON object.
        #[arg(long)]
        json: bool,
    },

    /// Answer questions read line by line from stdin.
    Chat,
}
