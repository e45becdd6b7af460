//! Name index commands.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use color_eyre::Result;

use crate::api::backends::HttpFetcher;
use crate::config::Config;
use crate::names::NameIndex;

/// Name index subcommands.
#[derive(Subcommand)]
pub enum NamesCommand {
    /// Download the species-names CSV and write the JSON index
    Build {
        /// CSV source (defaults to `names.csv_url`)
        #[arg(long)]
        url: Option<String>,

        /// `local_language_id` to keep (defaults to `names.language_id`)
        #[arg(long)]
        language_id: Option<u32>,

        /// Output file (defaults to `names.path` or the data dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the dex id a localized name maps to
    Lookup {
        /// Localized name
        name: String,
    },
}

impl NamesCommand {
    /// Run the names subcommand.
    pub async fn run(&self) -> Result<()> {
        let config = Config::load()?;
        match self {
            NamesCommand::Build {
                url,
                language_id,
                output,
            } => {
                let url = url.as_deref().unwrap_or(&config.names.csv_url);
                let language_id = language_id.unwrap_or(config.names.language_id);
                let output = output
                    .clone()
                    .unwrap_or_else(|| config.names.effective_path());
                build(&config, url, language_id, &output).await
            }
            NamesCommand::Lookup { name } => lookup(&config, name).await,
        }
    }
}

async fn build(config: &Config, url: &str, language_id: u32, output: &Path) -> Result<()> {
    tracing::info!(url, language_id, "Downloading species names");
    let fetcher = HttpFetcher::new(&config.api)?;
    let csv = fetcher.fetch_text(url).await?;

    let index = NameIndex::from_csv(csv.as_bytes(), language_id)?;
    if index.is_empty() {
        color_eyre::eyre::bail!("No names found for language id {}", language_id);
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output, index.to_json_pretty()?).await?;

    tracing::info!(names = index.len(), path = %output.display(), "Name index written");
    println!("{} names -> {}", index.len(), output.display());
    Ok(())
}

async fn lookup(config: &Config, name: &str) -> Result<()> {
    let path = config.names.effective_path();
    let index = NameIndex::load(&path).await?;

    match index.lookup(name) {
        Some(id) => println!("{}", id),
        None => color_eyre::eyre::bail!("'{}' is not in {}", name.trim(), path.display()),
    }
    Ok(())
}
