//! Site Configuration
//!
//! Resolved once at start-up. Values come from the build environment
//! (`CORP_SITE_*`, baked in at compile time) and fall back to the page origin.

use std::str::FromStr;

use crate::reorder::DropOutsidePolicy;

const DEFAULT_API_PATH: &str = "/api";
const FALLBACK_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Absolute API base, e.g. `https://example.com/api`
    pub api_base: String,
    pub log_level: log::Level,
    pub drop_outside: DropOutsidePolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: format!("{}{}", FALLBACK_ORIGIN, DEFAULT_API_PATH),
            log_level: log::Level::Info,
            drop_outside: DropOutsidePolicy::default(),
        }
    }
}

impl SiteConfig {
    /// Read the compile-time environment and the current page origin
    pub fn resolve() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::from_sources(
            option_env!("CORP_SITE_API_BASE"),
            option_env!("CORP_SITE_LOG_LEVEL"),
            option_env!("CORP_SITE_DROP_OUTSIDE"),
            origin.as_deref(),
        )
    }

    /// Unparseable values fall back to the defaults
    pub fn from_sources(
        api_base: Option<&str>,
        log_level: Option<&str>,
        drop_outside: Option<&str>,
        origin: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let api_base = match api_base.map(str::trim).filter(|s| !s.is_empty()) {
            Some(base) if base.starts_with("http://") || base.starts_with("https://") => base.to_string(),
            // relative base such as "/backend"
            Some(path) => format!("{}{}", origin.unwrap_or(FALLBACK_ORIGIN), path),
            None => match origin {
                Some(origin) => format!("{}{}", origin, DEFAULT_API_PATH),
                None => defaults.api_base,
            },
        };

        let log_level = log_level
            .and_then(|s| log::Level::from_str(s.trim()).ok())
            .unwrap_or(defaults.log_level);

        let drop_outside = drop_outside
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.drop_outside);

        Self { api_base: api_base.trim_end_matches('/').to_string(), log_level, drop_outside }
    }
}

/// Route `log` macros to the browser console
pub fn init_logging(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        // already initialised (hot reload)
        log::debug!("[APP] logger already set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_page_origin() {
        let config = SiteConfig::from_sources(None, None, None, Some("https://corp.example"));
        assert_eq!(config.api_base, "https://corp.example/api");
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.drop_outside, DropOutsidePolicy::MoveToHead);
    }

    #[test]
    fn test_no_window_falls_back_to_localhost() {
        assert_eq!(SiteConfig::from_sources(None, None, None, None), SiteConfig::default());
    }

    #[test]
    fn test_explicit_values() {
        let config = SiteConfig::from_sources(
            Some("https://api.corp.example/v1/"),
            Some("debug"),
            Some("cancel"),
            Some("https://corp.example"),
        );
        assert_eq!(config.api_base, "https://api.corp.example/v1");
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.drop_outside, DropOutsidePolicy::Cancel);
    }

    #[test]
    fn test_relative_base_and_bad_values() {
        let config = SiteConfig::from_sources(Some("/backend"), Some("loud"), Some("sideways"), Some("http://corp.example"));
        assert_eq!(config.api_base, "http://corp.example/backend");
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.drop_outside, DropOutsidePolicy::MoveToHead);
    }
}
