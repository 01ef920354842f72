//! HTTP client helper with native-tls support.
//!
//! This module provides a configured HTTP agent that uses native-tls
//! for TLS connections, which works better in VM environments where
//! ring/rustls may have issues.

use std::time::Duration;
use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

/// Create a new HTTP agent configured with native-tls and a global timeout.
///
/// Uses PlatformVerifier so the system's built-in root certificates apply.
pub fn agent(timeout: Duration) -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .timeout_global(Some(timeout))
        .build()
        .into()
}

/// Fetch a URL and return its body, refusing bodies larger than `max_size_bytes`.
pub fn fetch_bytes(agent: &Agent, url: &str, max_size_bytes: u64) -> anyhow::Result<Vec<u8>> {
    use anyhow::Context;

    let mut response = agent
        .get(url)
        .call()
        .with_context(|| format!("HTTP request failed for {}", url))?;

    response
        .body_mut()
        .with_config()
        .limit(max_size_bytes)
        .read_to_vec()
        .with_context(|| format!("Failed to read response body from {}", url))
}
