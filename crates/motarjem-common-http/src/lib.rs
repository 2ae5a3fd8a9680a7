// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Motarjem.
//!
//! Every outbound request goes through a client built here so that the
//! User-Agent and timeout policy stay consistent.

mod client;

pub use client::{builder, builder_with_user_agent, new_client_with_timeout, user_agent, DEFAULT_TIMEOUT};
