// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Materialized right side of a join.

use std::hash::Hash;

use tracing::{debug, instrument};

use crate::{JoinConfig, JoinStrategy, lookup::Lookup};

/// The right side of a join, keyed and ready to be probed by left records.
#[derive(Debug, Clone)]
pub enum RightIndex<K, R> {
	Hash(Lookup<K, R>),
	NestedLoop(Vec<(K, R)>),
}

impl<K: Eq + Hash, R: Clone> RightIndex<K, R> {
	/// Read the whole right side, extracting the key of every record
	pub fn build<I, F>(config: &JoinConfig, right: I, mut key: F) -> Self
	where
		I: IntoIterator<Item = R>,
		F: FnMut(&R) -> K,
	{
		match Self::try_build(config, right, |r| Ok::<_, std::convert::Infallible>(key(r))) {
			Ok(index) => index,
			Err(never) => match never {},
		}
	}

	/// Like [`RightIndex::build`], returning the first key extraction error
	#[instrument(name = "join::index::build", level = "trace", skip_all, fields(strategy = %config.strategy))]
	pub fn try_build<I, F, E>(config: &JoinConfig, right: I, mut key: F) -> Result<Self, E>
	where
		I: IntoIterator<Item = R>,
		F: FnMut(&R) -> Result<K, E>,
	{
		let right = right.into_iter();
		// a hint only, never reserve past what the right side says it holds
		let (lower, upper) = right.size_hint();
		let capacity = config.capacity.map_or(0, |capacity| capacity.min(upper.unwrap_or(lower)));

		let index = match config.strategy {
			JoinStrategy::Hash => {
				// at most one distinct key per record
				let mut lookup = Lookup::with_capacity(capacity);
				for record in right {
					lookup.insert(key(&record)?, record);
				}
				RightIndex::Hash(lookup)
			}
			JoinStrategy::NestedLoop => {
				let mut rows = Vec::with_capacity(capacity);
				for record in right {
					rows.push((key(&record)?, record));
				}
				RightIndex::NestedLoop(rows)
			}
		};

		debug!(strategy = %config.strategy, rows = index.len(), keys = index.key_count(), "built right index");
		Ok(index)
	}

	/// Right records whose key equals `key`, in right sequence order
	pub fn probe(&self, key: &K) -> Vec<R> {
		match self {
			RightIndex::Hash(lookup) => lookup.get(key).to_vec(),
			RightIndex::NestedLoop(rows) => {
				rows.iter().filter(|(candidate, _)| candidate == key).map(|(_, record)| record.clone()).collect()
			}
		}
	}

	/// Number of right records held
	pub fn len(&self) -> usize {
		match self {
			RightIndex::Hash(lookup) => lookup.value_count(),
			RightIndex::NestedLoop(rows) => rows.len(),
		}
	}

	/// Number of distinct keys, known only when records are grouped by key
	pub fn key_count(&self) -> Option<usize> {
		match self {
			RightIndex::Hash(lookup) => Some(lookup.len()),
			RightIndex::NestedLoop(_) => None,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn strategy(&self) -> JoinStrategy {
		match self {
			RightIndex::Hash(_) => JoinStrategy::Hash,
			RightIndex::NestedLoop(_) => JoinStrategy::NestedLoop,
		}
	}
}
