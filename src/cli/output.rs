//! Output formats for command results.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for printed results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// TOON (Token-Oriented Object Notation) - compact and line-oriented.
    Toon,
}

/// A serializable result paired with the format it should be printed in.
///
/// `Text` has no generic form; callers render text themselves and only use
/// this for the structured formats.
pub struct Response<T>(pub T, pub OutputFormat);

impl<T: Serialize> Response<T> {
    /// Serializes the inner value, or `None` for [`OutputFormat::Text`].
    pub fn structured(&self) -> color_eyre::Result<Option<String>> {
        match self.1 {
            OutputFormat::Text => Ok(None),
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(&self.0)?)),
            OutputFormat::Toon => serde_toon::to_string(&self.0)
                .map(Some)
                .map_err(|e| color_eyre::eyre::eyre!("TOON serialization error: {}", e)),
        }
    }
}
