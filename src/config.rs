//! Client Configuration
//!
//! Build-time overrides plus environment-sensitive defaults, resolved once.

use std::sync::OnceLock;

use crate::request_state::ResponsePolicy;

/// Backend address used when the page is served from a local host
pub const LOCAL_DEV_API_BASE: &str = "http://localhost:8000";

const LOCAL_HOSTNAMES: &[&str] = &["localhost", "127.0.0.1"];

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Where the page itself is being served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHost {
    pub hostname: String,
    pub origin: String,
}

impl PageHost {
    pub fn is_local(&self) -> bool {
        LOCAL_HOSTNAMES.contains(&self.hostname.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute prefix every API request is issued against, without trailing `/`
    pub api_base: String,
    pub log_level: String,
    pub search_policy: ResponsePolicy,
}

impl ClientConfig {
    /// Build from the `BLOG_*` variables captured at compile time
    pub fn from_build_env(host: Option<&PageHost>) -> Self {
        Self {
            api_base: resolve_api_base(option_env!("BLOG_API_BASE_URL"), host),
            log_level: option_env!("BLOG_LOG_LEVEL").unwrap_or("info").to_string(),
            search_policy: parse_policy(option_env!("BLOG_DISCARD_STALE_RESPONSES")),
        }
    }
}

/// Process-wide configuration, resolved on first use
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| ClientConfig::from_build_env(current_page_host().as_ref()))
}

/// Override first, then same-origin for deployed pages, then the local dev backend.
pub fn resolve_api_base(override_base: Option<&str>, host: Option<&PageHost>) -> String {
    if let Some(base) = override_base.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    match host {
        Some(host) if !host.is_local() => host.origin.trim_end_matches('/').to_string(),
        _ => LOCAL_DEV_API_BASE.to_string(),
    }
}

fn parse_policy(flag: Option<&str>) -> ResponsePolicy {
    match flag.map(str::trim) {
        Some("1") | Some("true") => ResponsePolicy::LatestIssued,
        _ => ResponsePolicy::LastResolved,
    }
}

#[cfg(target_arch = "wasm32")]
fn current_page_host() -> Option<PageHost> {
    let location = web_sys::window()?.location();
    Some(PageHost {
        hostname: location.hostname().ok()?,
        origin: location.origin().ok()?,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn current_page_host() -> Option<PageHost> {
    None
}
