//! Shared backend constructor for all platforms.
//!
//! Returns a [`store::BlogService`] backed by [`api::HttpBackend`] and resolves
//! the [`store::BlogConfig`] it is built from:
//! - **Web** (WASM): defaults, with the backend URL overridable at build time
//!   through `MYBLOG_API_URL`
//! - **Desktop** (native): `<config_dir>/myblog/myblog.toml` when present

use api::HttpBackend;
use store::{BackendError, BlogConfig, BlogService};

/// Create the service that performs every network call of the shell.
pub fn make_service(config: &BlogConfig) -> Result<BlogService<HttpBackend>, BackendError> {
    HttpBackend::new(&config.backend).map(BlogService::new)
}

/// Resolve the platform configuration, falling back to defaults.
pub fn load_config() -> BlogConfig {
    #[cfg(target_arch = "wasm32")]
    {
        match option_env!("MYBLOG_API_URL") {
            Some(url) => BlogConfig::new(url.to_string()),
            None => BlogConfig::default(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("myblog")
            .join(BlogConfig::filename());
        let Ok(text) = std::fs::read_to_string(&path) else {
            return BlogConfig::default();
        };
        match BlogConfig::from_toml(&text) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                BlogConfig::default()
            }
        }
    }
}
