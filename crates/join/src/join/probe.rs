// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::hash::Hash;

use tracing::trace;

use crate::{JoinConfig, RightIndex};

/// Left-side cursor shared by every join: builds the right index on first
/// use, then pairs each left record with its right matches.
pub(crate) struct Probe<LI, RI, K, LK, RK>
where
	LI: Iterator,
	RI: Iterator,
{
	config: JoinConfig,
	left: LI,
	right: Option<RI>,
	index: Option<RightIndex<K, RI::Item>>,
	left_key: LK,
	right_key: RK,
}

impl<LI, RI, K, LK, RK> Probe<LI, RI, K, LK, RK>
where
	LI: Iterator,
	RI: Iterator,
{
	pub(crate) fn new(config: JoinConfig, left: LI, right: RI, left_key: LK, right_key: RK) -> Self {
		Self {
			config,
			left,
			right: Some(right),
			index: None,
			left_key,
			right_key,
		}
	}
}

impl<LI, RI, K, LK, RK, E> Probe<LI, RI, K, LK, RK>
where
	LI: Iterator,
	RI: Iterator,
	RI::Item: Clone,
	K: Eq + Hash,
	LK: FnMut(&LI::Item) -> Result<K, E>,
	RK: FnMut(&RI::Item) -> Result<K, E>,
{
	/// Next left record with its right matches, `None` once the left side
	/// is exhausted
	pub(crate) fn next_left(&mut self) -> Result<Option<(LI::Item, Vec<RI::Item>)>, E> {
		if let Some(right) = self.right.take() {
			self.index = Some(RightIndex::try_build(&self.config, right, &mut self.right_key)?);
		}

		let Some(left) = self.left.next() else {
			return Ok(None);
		};

		let key = (self.left_key)(&left)?;
		let matches = match &self.index {
			Some(index) => index.probe(&key),
			None => Vec::new(),
		};

		trace!(matches = matches.len(), "probed left record");
		Ok(Some((left, matches)))
	}

	pub(crate) fn left_size_hint(&self) -> (usize, Option<usize>) {
		self.left.size_hint()
	}
}
