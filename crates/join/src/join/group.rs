// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{convert::Infallible, hash::Hash};

use super::{Join, infallible, probe::Probe};

/// Fallible group join, see [`crate::try_group_join`].
///
/// Yields exactly one result per left record, paired with every right
/// record sharing its key. After the first error the iterator is exhausted.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct GroupJoin<LI, RI, K, LK, RK, F>
where
	LI: Iterator,
	RI: Iterator,
{
	probe: Probe<LI, RI, K, LK, RK>,
	result: F,
	done: bool,
}

impl<LI, RI, K, LK, RK, F> GroupJoin<LI, RI, K, LK, RK, F>
where
	LI: Iterator,
	RI: Iterator,
{
	pub(crate) fn new(probe: Probe<LI, RI, K, LK, RK>, result: F) -> Self {
		Self {
			probe,
			result,
			done: false,
		}
	}
}

impl<LI, RI, K, LK, RK, F, O, E> Iterator for GroupJoin<LI, RI, K, LK, RK, F>
where
	LI: Iterator,
	RI: Iterator,
	RI::Item: Clone,
	K: Eq + Hash,
	LK: FnMut(&LI::Item) -> Result<K, E>,
	RK: FnMut(&RI::Item) -> Result<K, E>,
	F: FnMut(LI::Item, Vec<RI::Item>) -> Result<O, E>,
{
	type Item = Result<O, E>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let result = match self.probe.next_left() {
			Ok(Some((left, matches))) => (self.result)(left, matches),
			Ok(None) => {
				self.done = true;
				return None;
			}
			Err(err) => Err(err),
		};

		if result.is_err() {
			self.done = true;
		}
		Some(result)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done {
			(0, Some(0))
		} else {
			// one result per left record, unless a selector fails first
			let (_, upper) = self.probe.left_size_hint();
			(0, upper)
		}
	}
}

impl Join {
	/// Fallible group join, see [`Join::group_join`]
	pub fn try_group_join<LI, RI, K, LK, RK, F, O, E>(
		self,
		left: LI,
		right: RI,
		left_key: LK,
		right_key: RK,
		result: F,
	) -> GroupJoin<LI::IntoIter, RI::IntoIter, K, LK, RK, F>
	where
		LI: IntoIterator,
		RI: IntoIterator,
		RI::Item: Clone,
		K: Eq + Hash,
		LK: FnMut(&LI::Item) -> Result<K, E>,
		RK: FnMut(&RI::Item) -> Result<K, E>,
		F: FnMut(LI::Item, Vec<RI::Item>) -> Result<O, E>,
	{
		GroupJoin::new(Probe::new(self.config, left.into_iter(), right.into_iter(), left_key, right_key), result)
	}

	/// One result per left record, with the right records sharing its key
	/// in right order. The group is empty when nothing matches.
	pub fn group_join<LI, RI, K, LK, RK, F, O>(
		self,
		left: LI,
		right: RI,
		mut left_key: LK,
		mut right_key: RK,
		mut result: F,
	) -> impl Iterator<Item = O>
	where
		LI: IntoIterator,
		RI: IntoIterator,
		RI::Item: Clone,
		K: Eq + Hash,
		LK: FnMut(&LI::Item) -> K,
		RK: FnMut(&RI::Item) -> K,
		F: FnMut(LI::Item, Vec<RI::Item>) -> O,
	{
		self.try_group_join(
			left,
			right,
			move |l: &LI::Item| Ok::<_, Infallible>(left_key(l)),
			move |r: &RI::Item| Ok(right_key(r)),
			move |l, rs| Ok(result(l, rs)),
		)
		.map(infallible)
	}
}
