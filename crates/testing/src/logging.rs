// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Log output for test binaries

use tracing_subscriber::{EnvFilter, fmt};

/// Install a fmt subscriber that writes through the test harness.
///
/// The filter comes from `RUST_LOG` and falls back to `warn`. Safe to call
/// from every test; only the first call installs the subscriber.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	let _ = fmt().with_env_filter(filter).with_test_writer().with_target(true).try_init();
}
