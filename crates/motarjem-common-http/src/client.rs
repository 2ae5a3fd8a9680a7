// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Request timeout used when the configuration does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Creates a new HTTP client builder with the standard Motarjem User-Agent header.
///
/// # Example
/// ```ignore
/// let client = motarjem_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a new HTTP client builder with a custom User-Agent header.
pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	Client::builder().user_agent(user_agent.into())
}

/// Creates a new HTTP client with a custom timeout and the standard User-Agent.
///
/// A zero timeout disables the client-side limit and leaves it to the transport.
pub fn new_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
	let mut builder = builder();
	if !timeout.is_zero() {
		builder = builder.timeout(timeout);
	}
	tracing::debug!(timeout_ms = timeout.as_millis() as u64, "building HTTP client");
	builder.build()
}

/// Returns the standard Motarjem User-Agent string.
///
/// Format: `motarjem/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"motarjem/{} ({}-{})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		assert!(ua.starts_with("motarjem/"));
		assert!(ua.contains(std::env::consts::OS));
		assert!(ua.ends_with(')'));
	}

	#[test]
	fn builder_with_custom_user_agent() {
		let client = builder_with_user_agent("my-custom-agent/1.0").build();
		assert!(client.is_ok());
	}

	#[test]
	fn client_with_timeout_builds() {
		assert!(new_client_with_timeout(Duration::from_secs(3)).is_ok());
		assert!(new_client_with_timeout(Duration::ZERO).is_ok());
	}
}
