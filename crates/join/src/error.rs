// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Failures raised by the join library itself.
///
/// Selector failures are not represented here: the `try_*` joins hand the
/// selector's own error back to the caller untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid join configuration: {0}")]
	Config(#[from] serde_json::Error),

	#[error("unknown join strategy '{name}', expected one of: hash, nested_loop")]
	UnknownStrategy {
		name: String,
	},

	#[error("unknown join type '{name}', expected one of: inner, left")]
	UnknownJoinType {
		name: String,
	},
}
