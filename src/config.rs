use std::path::PathBuf;

const DEFAULT_LOG_FILTER: &str = "villa=info,warn";

/// Server settings read from the environment (after `.env` is loaded).
/// Address and asset paths come from the Leptos configuration instead.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// JSON file replacing the built-in site content.
    pub content_path: Option<PathBuf>,
    pub log_filter: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            content_path: std::env::var_os("SITE_CONTENT_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        }
    }

    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
