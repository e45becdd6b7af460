//! Search command handler.

use color_eyre::{Result, Section};

use crate::config::Config;
use crate::context::Context;
use crate::di::FromRef;
use crate::render::render_card;
use crate::services::SearchService;

use super::{App, OutputFormat, Response};

impl App {
    /// Resolve `term` and print the card in `format`.
    pub async fn run_search(&self, term: &str, format: OutputFormat) -> Result<()> {
        let config = Config::load()?;
        let ctx = Context::from(config).await?;
        let service = SearchService::from_ref(&ctx);

        let card = match service.resolve(term).await {
            Ok(card) => card,
            Err(e) => {
                tracing::debug!(code = e.code(), "Search failed");
                let guidance = e.guidance();
                return Err(e).suggestion(guidance);
            }
        };

        match Response(&card, format).structured()? {
            Some(out) => println!("{}", out),
            None => print!("{}", render_card(&card, &ctx.labels)),
        }
        Ok(())
    }
}
