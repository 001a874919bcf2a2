//! Site configuration.
//!
//! Values come from a lookup function so the front end can feed it
//! build-time `option_env!` values and tests can feed it a map.

use crate::carousel::PageSize;
use crate::toggle::DEFAULT_DARK_MODE;
use crate::viewport::MOBILE_BREAKPOINT_PX;

pub const ENV_MOBILE_BREAKPOINT: &str = "PORTFOLIO_MOBILE_BREAKPOINT";
pub const ENV_DESKTOP_PAGE_SIZE: &str = "PORTFOLIO_DESKTOP_PAGE_SIZE";
pub const ENV_MOBILE_PAGE_SIZE: &str = "PORTFOLIO_MOBILE_PAGE_SIZE";
pub const ENV_PREFERENCE_KEY: &str = "PORTFOLIO_PREFERENCE_KEY";
pub const ENV_DEFAULT_DARK_MODE: &str = "PORTFOLIO_DEFAULT_DARK_MODE";
pub const ENV_RESIZE_DEBOUNCE_MS: &str = "PORTFOLIO_RESIZE_DEBOUNCE_MS";
pub const ENV_BASE_PATH: &str = "PORTFOLIO_BASE_PATH";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse {key}={value}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Widths at or below this many CSS pixels are mobile.
    pub mobile_breakpoint_px: u32,
    pub desktop_page_size: PageSize,
    pub mobile_page_size: PageSize,
    /// localStorage key holding the dark-mode flag.
    pub preference_key: String,
    pub default_dark_mode: bool,
    /// 0 applies every resize immediately.
    pub resize_debounce_ms: u32,
    /// Path the site is served under, with leading and trailing slash.
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            desktop_page_size: PageSize::DESKTOP,
            mobile_page_size: PageSize::MOBILE,
            preference_key: "darkMode".to_string(),
            default_dark_mode: DEFAULT_DARK_MODE,
            resize_debounce_ms: 0,
            base_path: "/portfolio-website/".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let preference_key = match lookup(ENV_PREFERENCE_KEY) {
            Some(key) if key.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    key: ENV_PREFERENCE_KEY,
                })
            }
            Some(key) => key.trim().to_string(),
            None => defaults.preference_key,
        };

        Ok(Self {
            mobile_breakpoint_px: lookup_parse(
                &lookup,
                ENV_MOBILE_BREAKPOINT,
                defaults.mobile_breakpoint_px,
            )?,
            desktop_page_size: lookup_parse(
                &lookup,
                ENV_DESKTOP_PAGE_SIZE,
                defaults.desktop_page_size,
            )?,
            mobile_page_size: lookup_parse(
                &lookup,
                ENV_MOBILE_PAGE_SIZE,
                defaults.mobile_page_size,
            )?,
            preference_key,
            default_dark_mode: lookup_parse(
                &lookup,
                ENV_DEFAULT_DARK_MODE,
                defaults.default_dark_mode,
            )?,
            resize_debounce_ms: lookup_parse(
                &lookup,
                ENV_RESIZE_DEBOUNCE_MS,
                defaults.resize_debounce_ms,
            )?,
            base_path: lookup(ENV_BASE_PATH)
                .map(|path| normalize_base_path(&path))
                .unwrap_or(defaults.base_path),
        })
    }

    pub fn page_size(&self, is_mobile: bool) -> PageSize {
        if is_mobile {
            self.mobile_page_size
        } else {
            self.desktop_page_size
        }
    }
}

fn lookup_parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
