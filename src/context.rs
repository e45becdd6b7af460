//! Application context providing dependency injection root.

use std::sync::Arc;

use crate::api::backends::HttpFetcher;
use crate::api::ResourceFetcher;
use crate::config::Config;
use crate::di::Context as ContextDerive;
use crate::error::AppError;
use crate::locale::Labels;
use crate::names::NameIndex;

/// Shared resource fetcher.
pub type AppFetcher = Arc<dyn ResourceFetcher>;
/// Shared, read-only configuration.
pub type AppConfig = Arc<Config>;
/// Shared, read-only name index.
pub type AppNames = Arc<NameIndex>;
/// Shared, read-only locale labels.
pub type AppLabels = Arc<Labels>;

/// Root application context for dependency injection.
///
/// Holds everything that lives for the whole process. `#[derive(Context)]`
/// generates a `FromRef` impl per field, so services declare what they need
/// and are built with `Service::from_ref(&ctx)`.
#[derive(ContextDerive, Clone)]
pub struct Context {
    pub fetcher: AppFetcher,
    pub config: AppConfig,
    pub names: AppNames,
    pub labels: AppLabels,
}

impl Context {
    /// Creates a context from explicit dependencies.
    pub fn new(
        fetcher: impl ResourceFetcher + 'static,
        config: Config,
        names: NameIndex,
        labels: Labels,
    ) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            config: Arc::new(config),
            names: Arc::new(names),
            labels: Arc::new(labels),
        }
    }

    /// Creates a context around `fetcher` with an empty name index and
    /// Korean labels.
    pub fn for_fetcher(fetcher: impl ResourceFetcher + 'static, config: Config) -> Self {
        Self::new(fetcher, config, NameIndex::empty(), Labels::korean())
    }

    /// Builds the production context: HTTP fetcher and the name index from
    /// the configured path.
    pub async fn from(config: Config) -> Result<Self, AppError> {
        let fetcher = HttpFetcher::new(&config.api)?;
        let names_path = config.names.effective_path();
        let names = NameIndex::load_or_empty(&names_path).await;
        tracing::info!(
            base_url = %config.api.base_url,
            names = names.len(),
            "Context ready"
        );
        Ok(Self::new(fetcher, config, names, Labels::korean()))
    }
}
