//! CLI module for dexcard.
//!
//! Subcommands:
//! - `search`: Look up one Pokémon and print its card
//! - `names`: Build or query the localized name index

mod names;
mod output;
mod search;

use clap::{Parser, Subcommand};

pub use names::NamesCommand;
pub use output::{OutputFormat, Response};

/// dexcard - localized Pokédex cards from PokéAPI
#[derive(Parser)]
#[command(name = "dexcard")]
#[command(about = "Look up a Pokémon by Korean name, English name or dex number")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search for a Pokémon and print its card
    Search {
        /// Korean name, English name or dex number
        term: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Localized name index management
    Names {
        #[command(subcommand)]
        command: NamesCommand,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Search { ref term, format } => self.run_search(term, format).await,
            Command::Names { ref command } => command.run().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_with_format() {
        let app = App::try_parse_from(["dexcard", "search", "이상해씨", "--format", "json"]).unwrap();
        match app.command {
            Command::Search { term, format } => {
                assert_eq!(term, "이상해씨");
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_parse_names_build_defaults() {
        let app = App::try_parse_from(["dexcard", "-v", "names", "build"]).unwrap();
        assert!(app.verbose);
        match app.command {
            Command::Names {
                command:
                    NamesCommand::Build {
                        url,
                        language_id,
                        output,
                    },
            } => {
                assert!(url.is_none());
                assert!(language_id.is_none());
                assert!(output.is_none());
            }
            _ => panic!("expected names build"),
        }
    }
}
