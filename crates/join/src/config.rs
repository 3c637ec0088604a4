// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Join configuration and the builder for configured evaluators

use std::{
	fmt,
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, join::Join};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
	Inner,
	Left,
}

impl Default for JoinType {
	fn default() -> Self {
		JoinType::Left
	}
}

impl Display for JoinType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			JoinType::Inner => f.write_str("inner"),
			JoinType::Left => f.write_str("left"),
		}
	}
}

impl FromStr for JoinType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"inner" => Ok(JoinType::Inner),
			"left" => Ok(JoinType::Left),
			_ => Err(Error::UnknownJoinType {
				name: s.to_string(),
			}),
		}
	}
}

/// How the right side is indexed before the left side is streamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStrategy {
	/// Group right records by key in a hash lookup; one probe per left record.
	Hash,
	/// Keep right records in order and scan all of them for every left record.
	NestedLoop,
}

impl Default for JoinStrategy {
	fn default() -> Self {
		JoinStrategy::Hash
	}
}

impl Display for JoinStrategy {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			JoinStrategy::Hash => f.write_str("hash"),
			JoinStrategy::NestedLoop => f.write_str("nested_loop"),
		}
	}
}

impl FromStr for JoinStrategy {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
			"hash" => Ok(JoinStrategy::Hash),
			"nested_loop" => Ok(JoinStrategy::NestedLoop),
			_ => Err(Error::UnknownStrategy {
				name: s.to_string(),
			}),
		}
	}
}

/// Configuration for a [`Join`] evaluator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
	/// Right-side indexing strategy
	pub strategy: JoinStrategy,
	/// Expected number of right records, used to pre-size the right index.
	/// Capped at the size the right sequence reports for itself.
	pub capacity: Option<usize>,
}

impl JoinConfig {
	/// Parse a configuration document, e.g. `{"strategy": "nested_loop"}`.
	/// Missing fields take their defaults.
	pub fn from_json(json: &str) -> crate::Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn to_json(&self) -> crate::Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

/// Builder for configuring a [`Join`] evaluator
#[derive(Debug, Default)]
pub struct JoinBuilder {
	strategy: Option<JoinStrategy>,
	capacity: Option<usize>,
}

impl JoinBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the right-side indexing strategy.
	/// Defaults to [`JoinStrategy::Hash`] if not set.
	pub fn strategy(mut self, strategy: JoinStrategy) -> Self {
		self.strategy = Some(strategy);
		self
	}

	/// Pre-size the right index for `capacity` right records.
	pub fn capacity(mut self, capacity: usize) -> Self {
		self.capacity = Some(capacity);
		self
	}

	pub fn build_config(self) -> JoinConfig {
		JoinConfig {
			strategy: self.strategy.unwrap_or_default(),
			capacity: self.capacity,
		}
	}

	pub fn build(self) -> Join {
		Join::new(self.build_config())
	}
}

#[cfg(test)]
mod tests {
	mod join_type {
		use crate::{Error, JoinType};

		#[test]
		fn test_parse() {
			assert_eq!("inner".parse::<JoinType>().unwrap(), JoinType::Inner);
			assert_eq!(" LEFT ".parse::<JoinType>().unwrap(), JoinType::Left);
		}

		#[test]
		fn test_parse_unknown() {
			let err = "outer".parse::<JoinType>().unwrap_err();
			assert!(matches!(err, Error::UnknownJoinType { ref name } if name == "outer"));
		}

		#[test]
		fn test_display_round_trips() {
			for join_type in [JoinType::Inner, JoinType::Left] {
				assert_eq!(join_type.to_string().parse::<JoinType>().unwrap(), join_type);
			}
		}
	}

	mod strategy {
		use crate::{Error, JoinStrategy};

		#[test]
		fn test_default_is_hash() {
			assert_eq!(JoinStrategy::default(), JoinStrategy::Hash);
		}

		#[test]
		fn test_parse_accepts_dashes() {
			assert_eq!("nested-loop".parse::<JoinStrategy>().unwrap(), JoinStrategy::NestedLoop);
			assert_eq!("Nested_Loop".parse::<JoinStrategy>().unwrap(), JoinStrategy::NestedLoop);
		}

		#[test]
		fn test_parse_unknown() {
			let err = "merge".parse::<JoinStrategy>().unwrap_err();
			assert!(matches!(err, Error::UnknownStrategy { .. }));
			assert!(err.to_string().contains("merge"));
		}
	}

	mod config {
		use crate::{Error, Join, JoinConfig, JoinStrategy, config::JoinBuilder};

		#[test]
		fn test_from_json() {
			let config = JoinConfig::from_json(r#"{"strategy": "nested_loop", "capacity": 16}"#).unwrap();
			assert_eq!(config.strategy, JoinStrategy::NestedLoop);
			assert_eq!(config.capacity, Some(16));
		}

		#[test]
		fn test_from_json_huge_capacity_joins() {
			let config = JoinConfig::from_json(r#"{"capacity": 288230376151711743}"#).unwrap();
			let rows: Vec<_> = Join::new(config).inner_join([1, 2], [2, 2], |l| *l, |r| *r, |l, r| l + r).collect();
			assert_eq!(rows, vec![4, 4]);
		}

		#[test]
		fn test_from_json_defaults() {
			let config = JoinConfig::from_json("{}").unwrap();
			assert_eq!(config, JoinConfig::default());
		}

		#[test]
		fn test_from_json_invalid() {
			let err = JoinConfig::from_json(r#"{"strategy": "merge"}"#).unwrap_err();
			assert!(matches!(err, Error::Config(_)));
		}

		#[test]
		fn test_json_round_trip() {
			let config = JoinBuilder::new().strategy(JoinStrategy::NestedLoop).capacity(3).build_config();
			let json = config.to_json().unwrap();
			assert_eq!(JoinConfig::from_json(&json).unwrap(), config);
		}

		#[test]
		fn test_builder_defaults() {
			let config = JoinBuilder::new().build_config();
			assert_eq!(config.strategy, JoinStrategy::Hash);
			assert_eq!(config.capacity, None);
		}
	}
}
