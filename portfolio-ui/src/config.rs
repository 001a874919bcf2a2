use portfolio_model::config::{
    ENV_BASE_PATH, ENV_DEFAULT_DARK_MODE, ENV_DESKTOP_PAGE_SIZE, ENV_MOBILE_BREAKPOINT,
    ENV_MOBILE_PAGE_SIZE, ENV_PREFERENCE_KEY, ENV_RESIZE_DEBOUNCE_MS,
};
use portfolio_model::SiteConfig;
use std::sync::OnceLock;

/// Overrides baked in at build time (`PORTFOLIO_* = ... dx build`).
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_MOBILE_BREAKPOINT => option_env!("PORTFOLIO_MOBILE_BREAKPOINT"),
        ENV_DESKTOP_PAGE_SIZE => option_env!("PORTFOLIO_DESKTOP_PAGE_SIZE"),
        ENV_MOBILE_PAGE_SIZE => option_env!("PORTFOLIO_MOBILE_PAGE_SIZE"),
        ENV_PREFERENCE_KEY => option_env!("PORTFOLIO_PREFERENCE_KEY"),
        ENV_DEFAULT_DARK_MODE => option_env!("PORTFOLIO_DEFAULT_DARK_MODE"),
        ENV_RESIZE_DEBOUNCE_MS => option_env!("PORTFOLIO_RESIZE_DEBOUNCE_MS"),
        ENV_BASE_PATH => option_env!("PORTFOLIO_BASE_PATH"),
        _ => None,
    };
    value.map(str::to_string)
}

fn load_site_config() -> SiteConfig {
    match SiteConfig::from_lookup(build_env) {
        Ok(config) => config,
        Err(e) => {
            dioxus_logger::tracing::warn!("Invalid site configuration, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}

/// Computed at first use
static SITE_CONFIG_CACHE: OnceLock<SiteConfig> = OnceLock::new();

pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG_CACHE.get_or_init(load_site_config)
}
